pub mod export;

pub use export::{ExportPaths, export_results};
