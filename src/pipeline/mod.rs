// Data preparation pipeline: ingestion, processing, and the orchestrator that chains them

pub mod ingestion;
pub mod orchestrator;
pub mod processing;

pub use orchestrator::{clean_data, CleanOptions};
