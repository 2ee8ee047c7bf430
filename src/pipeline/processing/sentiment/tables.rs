//! Static label lookup tables.
//!
//! Keys are lowercase labels. The two tables classify an overlapping but not
//! identical vocabulary: a label present in one may be missing from the
//! other, and then resolves to the default group in that mode.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub use crate::constants::DEFAULT_GROUP;

// Emotion-family groups
pub const JOY: &str = "Joy";
pub const SADNESS: &str = "Sadness";
pub const ANGER: &str = "Anger";
pub const FEAR: &str = "Fear";
pub const GUILT: &str = "Guilt";

// Polarity groups
pub const POSITIVE: &str = "Positive";
pub const NEGATIVE: &str = "Negative";

/// Label -> emotion family (Joy, Sadness, Anger, Fear, Guilt, Neutral/Other)
pub const DETAILED_ENTRIES: &[(&str, &str)] = &[
    // Joy
    ("positive", JOY),
    ("happiness", JOY),
    ("joy", JOY),
    ("love", JOY),
    ("amusement", JOY),
    ("enjoyment", JOY),
    ("admiration", JOY),
    ("affection", JOY),
    ("awe", JOY),
    ("adoration", JOY),
    ("excitement", JOY),
    ("kind", JOY),
    ("pride", JOY),
    ("elation", JOY),
    ("euphoria", JOY),
    ("contentment", JOY),
    ("serenity", JOY),
    ("gratitude", JOY),
    ("hope", JOY),
    ("empowerment", JOY),
    ("compassion", JOY),
    ("tenderness", JOY),
    ("arousal", JOY),
    ("enthusiasm", JOY),
    ("fulfillment", JOY),
    ("reverence", JOY),
    ("hopeful", JOY),
    ("proud", JOY),
    ("grateful", JOY),
    ("empathetic", JOY),
    ("compassionate", JOY),
    ("playful", JOY),
    ("free-spirited", JOY),
    ("inspired", JOY),
    ("confident", JOY),
    ("thrill", JOY),
    ("overjoyed", JOY),
    ("inspiration", JOY),
    ("motivation", JOY),
    ("satisfaction", JOY),
    ("blessed", JOY),
    ("appreciation", JOY),
    ("confidence", JOY),
    ("accomplishment", JOY),
    ("wonderment", JOY),
    ("optimism", JOY),
    ("enchantment", JOY),
    ("playfuljoy", JOY),
    ("dreamchaser", JOY),
    ("elegance", JOY),
    ("whimsy", JOY),
    ("harmony", JOY),
    ("creativity", JOY),
    ("radiance", JOY),
    ("wonder", JOY),
    ("rejuvenation", JOY),
    ("coziness", JOY),
    ("adventure", JOY),
    ("melodic", JOY),
    ("festivejoy", JOY),
    ("freedom", JOY),
    ("dazzle", JOY),
    ("adrenaline", JOY),
    ("artisticburst", JOY),
    ("culinaryodyssey", JOY),
    ("resilience", JOY),
    ("spark", JOY),
    ("marvel", JOY),
    ("positivity", JOY),
    ("kindness", JOY),
    ("friendship", JOY),
    ("success", JOY),
    ("exploration", JOY),
    ("amazement", JOY),
    ("romance", JOY),
    ("captivation", JOY),
    ("tranquility", JOY),
    ("grandeur", JOY),
    ("energy", JOY),
    ("celebration", JOY),
    ("charm", JOY),
    ("ecstasy", JOY),
    ("colorful", JOY),
    ("hypnotic", JOY),
    ("connection", JOY),
    ("iconic", JOY),
    ("engagement", JOY),
    ("touched", JOY),
    ("triumph", JOY),
    ("heartwarming", JOY),
    ("breakthrough", JOY),
    ("joy in baking", JOY),
    ("imagination", JOY),
    ("vibrancy", JOY),
    ("mesmerizing", JOY),
    ("culinary adventure", JOY),
    ("winter magic", JOY),
    ("thrilling journey", JOY),
    ("nature's beauty", JOY),
    ("celestial wonder", JOY),
    ("creative inspiration", JOY),
    ("runway creativity", JOY),
    ("ocean's freedom", JOY),
    ("relief", JOY),
    ("mischievous", JOY),
    ("happy", JOY),
    ("joyfulreunion", JOY),
    ("solace", JOY),
    ("envisioning history", JOY),

    // Sadness
    ("sadness", SADNESS),
    ("disappointed", SADNESS),
    ("despair", SADNESS),
    ("grief", SADNESS),
    ("loneliness", SADNESS),
    ("melancholy", SADNESS),
    ("yearning", SADNESS),
    ("devastated", SADNESS),
    ("heartbreak", SADNESS),
    ("betrayal", SADNESS),
    ("suffering", SADNESS),
    ("emotionalstorm", SADNESS),
    ("isolation", SADNESS),
    ("disappointment", SADNESS),
    ("lostlove", SADNESS),
    ("exhaustion", SADNESS),
    ("sorrow", SADNESS),
    ("darkness", SADNESS),
    ("desperation", SADNESS),
    ("ruins", SADNESS),
    ("desolation", SADNESS),
    ("loss", SADNESS),
    ("heartache", SADNESS),
    ("solitude", SADNESS),
    ("sympathy", SADNESS),
    ("sad", SADNESS),
    ("bittersweet", SADNESS),

    // Anger
    ("negative", ANGER),
    ("anger", ANGER),
    ("disgust", ANGER),
    ("bitter", ANGER),
    ("resentment", ANGER),
    ("frustration", ANGER),
    ("jealousy", ANGER),
    ("envy", ANGER),
    ("bitterness", ANGER),
    ("jealous", ANGER),
    ("frustrated", ANGER),
    ("envious", ANGER),
    ("dismissive", ANGER),
    ("hate", ANGER),
    ("bad", ANGER),
    ("mean-spirited", ANGER),

    // Fear
    ("fear", FEAR),
    ("boredom", FEAR),
    ("anxiety", FEAR),
    ("intimidation", FEAR),
    ("helplessness", FEAR),
    ("fearful", FEAR),
    ("apprehensive", FEAR),
    ("overwhelmed", FEAR),
    ("suspense", FEAR),
    ("pressure", FEAR),
    ("obstacle", FEAR),
    ("challenge", FEAR),

    // Guilt
    ("shame", GUILT),
    ("regret", GUILT),
    ("embarrassed", GUILT),
    ("miscalculation", GUILT),

    // Neutral/Other
    ("neutral", DEFAULT_GROUP),
    ("surprise", DEFAULT_GROUP),
    ("acceptance", DEFAULT_GROUP),
    ("anticipation", DEFAULT_GROUP),
    ("calmness", DEFAULT_GROUP),
    ("confusion", DEFAULT_GROUP),
    ("curiosity", DEFAULT_GROUP),
    ("indifference", DEFAULT_GROUP),
    ("numbness", DEFAULT_GROUP),
    ("nostalgia", DEFAULT_GROUP),
    ("ambivalence", DEFAULT_GROUP),
    ("determination", DEFAULT_GROUP),
    ("contemplation", DEFAULT_GROUP),
    ("reflection", DEFAULT_GROUP),
    ("mindfulness", DEFAULT_GROUP),
    ("pensive", DEFAULT_GROUP),
    ("innerjourney", DEFAULT_GROUP),
    ("immersion", DEFAULT_GROUP),
    ("emotion", DEFAULT_GROUP),
    ("journey", DEFAULT_GROUP),
    ("renewed effort", DEFAULT_GROUP),
    ("whispers of the past", DEFAULT_GROUP),
    ("intrigue", DEFAULT_GROUP),
];

/// Label -> polarity (Positive, Negative, Neutral/Other)
pub const POLARITY_ENTRIES: &[(&str, &str)] = &[
    // Positive
    ("positive", POSITIVE),
    ("happiness", POSITIVE),
    ("happy", POSITIVE),
    ("joy", POSITIVE),
    ("joyful", POSITIVE),
    ("love", POSITIVE),
    ("amusement", POSITIVE),
    ("enjoyment", POSITIVE),
    ("admiration", POSITIVE),
    ("affection", POSITIVE),
    ("awe", POSITIVE),
    ("adoration", POSITIVE),
    ("excitement", POSITIVE),
    ("excited", POSITIVE),
    ("kind", POSITIVE),
    ("kindness", POSITIVE),
    ("pride", POSITIVE),
    ("proud", POSITIVE),
    ("elation", POSITIVE),
    ("euphoria", POSITIVE),
    ("contentment", POSITIVE),
    ("serenity", POSITIVE),
    ("gratitude", POSITIVE),
    ("grateful", POSITIVE),
    ("hope", POSITIVE),
    ("hopeful", POSITIVE),
    ("empowerment", POSITIVE),
    ("compassion", POSITIVE),
    ("tenderness", POSITIVE),
    ("enthusiasm", POSITIVE),
    ("fulfillment", POSITIVE),
    ("playful", POSITIVE),
    ("inspired", POSITIVE),
    ("inspiration", POSITIVE),
    ("confident", POSITIVE),
    ("confidence", POSITIVE),
    ("thrill", POSITIVE),
    ("overjoyed", POSITIVE),
    ("motivation", POSITIVE),
    ("satisfaction", POSITIVE),
    ("blessed", POSITIVE),
    ("appreciation", POSITIVE),
    ("accomplishment", POSITIVE),
    ("optimism", POSITIVE),
    ("relief", POSITIVE),
    ("friendship", POSITIVE),
    ("success", POSITIVE),
    ("celebration", POSITIVE),
    ("triumph", POSITIVE),

    // Negative
    ("negative", NEGATIVE),
    ("sadness", NEGATIVE),
    ("sad", NEGATIVE),
    ("grief", NEGATIVE),
    ("loneliness", NEGATIVE),
    ("despair", NEGATIVE),
    ("disappointed", NEGATIVE),
    ("disappointment", NEGATIVE),
    ("devastated", NEGATIVE),
    ("heartbreak", NEGATIVE),
    ("betrayal", NEGATIVE),
    ("suffering", NEGATIVE),
    ("isolation", NEGATIVE),
    ("sorrow", NEGATIVE),
    ("loss", NEGATIVE),
    ("exhaustion", NEGATIVE),
    ("desperation", NEGATIVE),
    ("anger", NEGATIVE),
    ("angry", NEGATIVE),
    ("disgust", NEGATIVE),
    ("bitter", NEGATIVE),
    ("bitterness", NEGATIVE),
    ("resentment", NEGATIVE),
    ("frustration", NEGATIVE),
    ("frustrated", NEGATIVE),
    ("jealousy", NEGATIVE),
    ("jealous", NEGATIVE),
    ("envy", NEGATIVE),
    ("envious", NEGATIVE),
    ("hate", NEGATIVE),
    ("bad", NEGATIVE),
    ("fear", NEGATIVE),
    ("fearful", NEGATIVE),
    ("anxiety", NEGATIVE),
    ("apprehensive", NEGATIVE),
    ("overwhelmed", NEGATIVE),
    ("helplessness", NEGATIVE),
    ("boredom", NEGATIVE),
    ("shame", NEGATIVE),
    ("regret", NEGATIVE),
    ("embarrassed", NEGATIVE),

    // Neutral/Other
    ("neutral", DEFAULT_GROUP),
    ("mixed", DEFAULT_GROUP),
    ("surprise", DEFAULT_GROUP),
    ("acceptance", DEFAULT_GROUP),
    ("anticipation", DEFAULT_GROUP),
    ("calmness", DEFAULT_GROUP),
    ("confusion", DEFAULT_GROUP),
    ("curiosity", DEFAULT_GROUP),
    ("indifference", DEFAULT_GROUP),
    ("numbness", DEFAULT_GROUP),
    ("nostalgia", DEFAULT_GROUP),
    ("ambivalence", DEFAULT_GROUP),
    ("contemplation", DEFAULT_GROUP),
    ("reflection", DEFAULT_GROUP),
    ("pensive", DEFAULT_GROUP),
];

pub static DETAILED_GROUPS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| DETAILED_ENTRIES.iter().copied().collect());

pub static POLARITY_GROUPS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| POLARITY_ENTRIES.iter().copied().collect());
