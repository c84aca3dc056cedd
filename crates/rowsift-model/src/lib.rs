pub mod cell;
pub mod dataset;
pub mod query;
pub mod result;

pub use cell::CellValue;
pub use dataset::{Dataset, Record};
pub use query::{DEFAULT_FUZZY_THRESHOLD, MatchMode, SearchQuery};
pub use result::{MatchResult, ResultSet};
