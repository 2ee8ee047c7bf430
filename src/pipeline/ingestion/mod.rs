// Pipeline ingestion: reading CSV exports into a Dataset and writing them back

pub mod loader;

pub use loader::{get_data_info, load_data, load_data_from_reader, write_csv};
