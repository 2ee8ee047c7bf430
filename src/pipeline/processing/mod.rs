// Pipeline processing: cleaning, validation, label mapping and feature extraction

pub mod cleaning;
pub mod quality_gate;
pub mod sentiment;
pub mod time_features;

pub use cleaning::{clean_categorical_columns, remove_duplicates};
pub use quality_gate::{validate_data, ValidationReport};
pub use sentiment::{map_sentiments, MappingMode};
pub use time_features::add_time_features;
