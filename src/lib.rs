pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;

pub use config::PipelineConfig;
pub use domain::{Dataset, DatasetInfo, Value};
pub use error::{PrepError, Result};
pub use pipeline::ingestion::{get_data_info, load_data, load_data_from_reader, write_csv};
pub use pipeline::processing::{
    add_time_features, clean_categorical_columns, map_sentiments, remove_duplicates,
    validate_data, MappingMode, ValidationReport,
};
pub use pipeline::{clean_data, CleanOptions};
