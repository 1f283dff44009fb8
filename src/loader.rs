//! Loader
//!
//! Reads delimited text into a [`TabularDataset`]. The first record is the
//! header row and the last column is the label. Fields are kept as strings.
use crate::data::{Row, TabularDataset};
use crate::errors::TreeError;
use crate::induction::config::ConfigIO;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

fn default_delimiter() -> u8 {
    b','
}
fn default_trim() -> bool {
    false
}

/// How delimited text is split into fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Field delimiter byte.
    #[serde(default = "default_delimiter")]
    pub delimiter: u8,
    /// Whether leading and trailing whitespace is stripped from every field.
    #[serde(default = "default_trim")]
    pub trim: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            delimiter: default_delimiter(),
            trim: default_trim(),
        }
    }
}

impl LoaderConfig {
    pub fn with_delimiter(delimiter: u8) -> Self {
        LoaderConfig {
            delimiter,
            ..Default::default()
        }
    }
}

impl ConfigIO for LoaderConfig {}

/// Read every record of `reader`, the header row included.
pub fn read_records<R: Read>(reader: R, cfg: &LoaderConfig) -> Result<Vec<Row>, TreeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(cfg.delimiter)
        .trim(if cfg.trim { csv::Trim::All } else { csv::Trim::None })
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| TreeError::MalformedInput(e.to_string()))?;
        records.push(record.iter().map(|field| field.to_string()).collect());
    }
    Ok(records)
}

/// Read a dataset from any reader of delimited text.
pub fn read_dataset_from_reader<R: Read>(reader: R, cfg: &LoaderConfig) -> Result<TabularDataset, TreeError> {
    TabularDataset::from_records(read_records(reader, cfg)?)
}

/// Read a dataset from a delimited text file.
///
/// * `path` - File to read.
/// * `cfg` - Delimiter and trimming options.
pub fn read_dataset<P: AsRef<Path>>(path: P, cfg: &LoaderConfig) -> Result<TabularDataset, TreeError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TreeError::UnableToRead(format!("{}: {}", path.display(), e)))?;
    read_dataset_from_reader(BufReader::new(file), cfg)
}
