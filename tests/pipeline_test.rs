use std::io::Write;

use anyhow::Result;
use sentiment_prep::{
    add_time_features, clean_data, load_data, map_sentiments, validate_data, write_csv,
    CleanOptions, MappingMode, PipelineConfig, PrepError, Value,
};
use tempfile::{tempdir, NamedTempFile};

const EXPORT: &str = "\
,Text,Sentiment,Timestamp,User,Platform,Hashtags,Retweets,Likes,Country,Year,Month,Day,Hour
0, Enjoying a beautiful day at the park!   , Positive  ,2023-01-15 12:30:00, User123     , Twitter  , #Nature #Park ,15,30, USA      ,2023,1,15,12
1, Traffic was terrible this morning.      , Negative  ,2023-01-15 08:45:00, CommuterX   , Twitter  , #Traffic #Morning ,5,10, Canada   ,2023,1,15,8
0, Enjoying a beautiful day at the park!   , Positive  ,2023-01-15 12:30:00, User123     , Twitter  , #Nature #Park ,15,30, USA      ,2023,1,15,12
3, Just finished an amazing workout!       , Positive  ,2023-01-15 15:45:00, FitnessFan  , Instagram , #Fitness #Workout ,20,40, USA    ,2023,1,15,15
4, Excited about the upcoming weekend getaway!, Bittersweet ,2024-03-09 15:30:00, AdventureX , Facebook , #Travel ,8,16, UK ,2024,3,9,15
";

fn write_export(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_and_clean_export() -> Result<()> {
    let file = write_export(EXPORT)?;
    let dataset = load_data(file.path(), true)?;

    assert_eq!(dataset.shape(), (5, 13));
    assert!(!dataset.columns().iter().any(|c| c.contains("Unnamed")));

    let cleaned = clean_data(&dataset, &CleanOptions::default())?;

    // one exact duplicate row
    assert_eq!(cleaned.n_rows(), 4);
    assert_eq!(cleaned.value(0, "Platform"), Some(&Value::from("Twitter")));
    assert_eq!(cleaned.value(0, "Country"), Some(&Value::from("USA")));
    assert_eq!(cleaned.value(0, "Sentiment_Clean"), Some(&Value::from("positive")));
    assert_eq!(cleaned.value(0, "Sentiment_Group"), Some(&Value::from("Joy")));
    assert_eq!(cleaned.value(1, "Sentiment_Group"), Some(&Value::from("Anger")));
    assert_eq!(cleaned.value(3, "Sentiment_Group"), Some(&Value::from("Sadness")));

    // non-categorical text is not trimmed
    assert_eq!(
        cleaned.value(0, "User"),
        Some(&Value::from(" User123     "))
    );

    // the caller's dataset is untouched
    assert_eq!(dataset.n_rows(), 5);
    Ok(())
}

#[test]
fn test_polarity_mode_with_time_features() -> Result<()> {
    let file = write_export(EXPORT)?;
    let dataset = load_data(file.path(), true)?;

    let config = PipelineConfig::from_toml_str(
        r#"
        [steps]
        add_time = true

        [mapping]
        mode = "polarity"
        "#,
    )?;
    let cleaned = clean_data(&dataset, &config.clean_options())?;

    assert_eq!(cleaned.value(0, "Sentiment_Group"), Some(&Value::from("Positive")));
    assert_eq!(cleaned.value(1, "Sentiment_Group"), Some(&Value::from("Negative")));
    // bittersweet is only in the six-group table
    assert_eq!(cleaned.value(3, "Sentiment_Group"), Some(&Value::from("Neutral/Other")));

    assert_eq!(cleaned.value(3, "year"), Some(&Value::Int(2024)));
    assert_eq!(cleaned.value(3, "day_of_week"), Some(&Value::Int(5)));
    assert_eq!(cleaned.value(3, "is_weekend"), Some(&Value::Int(1)));
    // 2023-01-15 was a Sunday
    assert_eq!(cleaned.value(0, "day_of_week"), Some(&Value::Int(6)));
    Ok(())
}

#[test]
fn test_stages_compose_in_any_order() -> Result<()> {
    let file = write_export(EXPORT)?;
    let dataset = load_data(file.path(), true)?;

    let mapped = map_sentiments(&dataset, "Sentiment", MappingMode::Detailed)?;
    // untrimmed labels fall through to the default group
    assert_eq!(mapped.value(0, "Sentiment_Group"), Some(&Value::from("Neutral/Other")));

    let featured = add_time_features(&mapped, "Timestamp")?;
    let report = validate_data(&featured);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.timestamp_valid, Some(true));
    assert_eq!(report.empty_posts, Some(0));
    Ok(())
}

#[test]
fn test_validation_without_text_column() -> Result<()> {
    let file = write_export("Platform,Sentiment\nTwitter,Joy\n,Sad\n")?;
    let dataset = load_data(file.path(), true)?;
    let report = validate_data(&dataset);

    assert_eq!(report.missing_values["Platform"], 1);
    assert!(report.empty_posts.is_none());
    let json = serde_json::to_string(&report)?;
    assert!(!json.contains("empty_posts"));
    Ok(())
}

#[test]
fn test_load_failures() -> Result<()> {
    let dir = tempdir()?;
    let missing = load_data(dir.path().join("absent.csv"), true);
    assert!(matches!(missing, Err(PrepError::FileNotFound { .. })));

    let empty = write_export("")?;
    assert!(matches!(
        load_data(empty.path(), true),
        Err(PrepError::EmptyData { .. })
    ));
    Ok(())
}

#[test]
fn test_csv_output_keeps_layout_but_not_types() -> Result<()> {
    let file = write_export(EXPORT)?;
    let dataset = load_data(file.path(), true)?;
    let options = CleanOptions {
        add_time: true,
        ..CleanOptions::default()
    };
    let cleaned = clean_data(&dataset, &options)?;

    let dir = tempdir()?;
    let out_path = dir.path().join("clean.csv");
    write_csv(&cleaned, &out_path)?;

    let reloaded = load_data(&out_path, true)?;
    assert_eq!(reloaded.shape(), cleaned.shape());
    assert_eq!(reloaded.columns(), cleaned.columns());
    assert_eq!(
        reloaded.value(2, "Sentiment_Group"),
        cleaned.value(2, "Sentiment_Group")
    );

    // derived integer features come back as text
    assert_eq!(cleaned.value(3, "year"), Some(&Value::Int(2024)));
    assert_eq!(reloaded.value(3, "year"), Some(&Value::from("2024")));
    assert_ne!(reloaded, cleaned);
    Ok(())
}

#[test]
fn test_marker_text_reloads_as_missing() -> Result<()> {
    let file = write_export("Platform,Country
Twitter,NA
")?;
    let dataset = load_data(file.path(), true)?;
    assert_eq!(dataset.value(0, "Country"), Some(&Value::Null));

    let mut written = dataset.clone();
    written.set_column("Country", vec![Value::from("NA")])?;
    let dir = tempdir()?;
    let out_path = dir.path().join("markers.csv");
    write_csv(&written, &out_path)?;

    let reloaded = load_data(&out_path, true)?;
    assert_eq!(reloaded.value(0, "Country"), Some(&Value::Null));
    Ok(())
}

#[test]
fn test_example_config_parses() -> Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/pipeline.example.toml");
    let config = PipelineConfig::from_file(path)?;
    let options = config.clean_options();

    assert!(options.add_time);
    assert_eq!(options.mapping_mode, MappingMode::Detailed);
    assert_eq!(
        options,
        CleanOptions {
            add_time: true,
            ..CleanOptions::default()
        }
    );
    Ok(())
}
