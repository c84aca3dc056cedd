//! Bundled sample dataset for trying the tool out.

use std::path::Path;

use tracing::info;

use crate::error::IngestError;

const SAMPLE_COLUMNS: [&str; 5] = [
    "Company",
    "Representative",
    "Industry",
    "Employees",
    "Founded",
];

/// Fifteen fictional companies with near-duplicate names so that all three
/// match modes have something interesting to find.
const SAMPLE_ROWS: [[&str; 5]; 15] = [
    ["Sample Corp", "Taro Tanaka", "IT / Software", "150", "2001-04-02"],
    ["Test Trading Ltd", "Hanako Sato", "Trading", "25", "1998-09-15"],
    ["Sample Industries", "Jiro Yamada", "Manufacturing", "300", "1985-06-30"],
    ["Test Systems Inc", "Misaki Suzuki", "IT / Systems", "80", "2010-01-20"],
    ["Demo Holdings", "Kenichi Takahashi", "Consulting", "12", "2015-11-05"],
    ["Sample Technology", "Aiko Ito", "IT / AI", "200", "2012-03-14"],
    ["Test Trading Co", "Naoki Watanabe", "Wholesale", "30", "2003-07-22"],
    ["Sample Design Co", "Yumi Nakamura", "Design", "45", "2008-10-01"],
    ["Test Solutions", "Shuichi Kobayashi", "IT / Solutions", "120", "2005-05-18"],
    ["Sample Logistics", "Masako Kato", "Logistics", "180", "1992-02-09"],
    ["Apple Japan Inc", "Smith John", "IT / Hardware", "500", "1983-06-01"],
    ["Apple Sales Co", "Johnson Mary", "IT / Retail", "100", "2004-08-12"],
    ["Microsoft KK", "Williams David", "IT / Software", "800", "1986-02-17"],
    ["Microsoft Japan", "Brown Lisa", "IT / Cloud", "1000", "2011-02-01"],
    ["Google Japan", "Jones Michael", "IT / Search", "2000", "2001-08-01"],
];

/// Writes the sample company directory to `path`.
///
/// Useful seeds: exact `Apple Japan Inc`, partial `Sample`, fuzzy
/// `Mikrosoft Japn` at threshold 70.
pub fn write_sample_dataset(path: &Path) -> Result<(), IngestError> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    })?;
    writer
        .write_record(SAMPLE_COLUMNS)
        .and_then(|()| {
            SAMPLE_ROWS
                .iter()
                .try_for_each(|row| writer.write_record(row))
        })
        .map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|source| IngestError::CsvRead {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    info!(path = %path.display(), rows = SAMPLE_ROWS.len(), "sample dataset written");
    Ok(())
}
