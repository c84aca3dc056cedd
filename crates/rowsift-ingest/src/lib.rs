pub mod error;
pub mod reader;
pub mod sample;

pub use error::IngestError;
pub use reader::read_dataset;
pub use sample::write_sample_dataset;
