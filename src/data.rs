//! Data
//!
//! Labeled string tables: the immutable [`TabularDataset`] handed to the
//! induction engine, and the reduced [`Subset`] copies made when a table is
//! partitioned on one attribute.
use crate::errors::TreeError;
use crate::metric::{group_by_column, information_gain_by_name, label_entropy, validate_attribute_index};
use hashbrown::HashSet;
use std::fmt;

/// One record of string fields, the last of which is the class label.
pub type Row = Vec<String>;

/// Check that a table is usable for induction.
///
/// * `headers` - Column names, at least one attribute followed by the label column.
/// * `rows` - Data rows, at least one, each as wide as `headers`.
pub fn validate_table(headers: &[String], rows: &[Row]) -> Result<(), TreeError> {
    if headers.len() < 2 {
        return Err(TreeError::MalformedInput(format!(
            "expected at least one attribute and a label column, found {} column(s)",
            headers.len()
        )));
    }
    if rows.is_empty() {
        return Err(TreeError::MalformedInput(String::from("the table has no data rows")));
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != headers.len()) {
        return Err(TreeError::MalformedInput(format!(
            "data row {} has {} field(s), expected {}",
            i + 1,
            row.len(),
            headers.len()
        )));
    }
    let mut seen = HashSet::with_capacity(headers.len());
    if let Some(duplicate) = headers.iter().find(|h| !seen.insert(h.as_str())) {
        return Err(TreeError::MalformedInput(format!("duplicate column name {}", duplicate)));
    }
    Ok(())
}

/// A labeled table of string fields.
///
/// The last header names the label column. The label entropy over all rows
/// is computed once, when the dataset is built.
#[derive(Debug, Clone)]
pub struct TabularDataset {
    headers: Vec<String>,
    rows: Vec<Row>,
    entropy: f64,
}

impl TabularDataset {
    /// Create a dataset from headers and data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Result<Self, TreeError> {
        validate_table(&headers, &rows)?;
        let entropy = label_entropy(&rows)?;
        Ok(TabularDataset { headers, rows, entropy })
    }

    /// Create a dataset from raw records, the first of which is the header row.
    pub fn from_records(mut records: Vec<Row>) -> Result<Self, TreeError> {
        if records.is_empty() {
            return Err(TreeError::MalformedInput(String::from("no header row")));
        }
        let rows = records.split_off(1);
        let headers = records.pop().unwrap_or_default();
        Self::new(headers, rows)
    }

    /// Column names, the label column last.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The attribute column names, without the label column.
    pub fn attribute_names(&self) -> &[String] {
        &self.headers[..self.headers.len() - 1]
    }

    /// Name of the label column.
    pub fn label_name(&self) -> &str {
        &self.headers[self.headers.len() - 1]
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_attributes(&self) -> usize {
        self.headers.len() - 1
    }

    /// Entropy of the label column over every row.
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Information gain of splitting the whole dataset on the attribute called `name`.
    pub fn information_gain(&self, name: &str) -> Result<f64, TreeError> {
        information_gain_by_name(&self.rows, &self.headers, name)
    }
}

impl fmt::Display for TabularDataset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "There are {} attributes and {} data rows.",
            self.headers.len(),
            self.rows.len()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.headers.join(", "))?;
        for row in &self.rows {
            writeln!(f, "{}", row.join(", "))?;
        }
        Ok(())
    }
}

/// A reduced copy of a table: the rows sharing one attribute value, with that
/// attribute's column removed from the rows and from the headers.
#[derive(Debug, Clone, PartialEq)]
pub struct Subset {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Subset {
    /// Build the reduced table from the rows of one partition.
    ///
    /// * `group` - Rows that share the same value in column `attribute_index`.
    /// * `headers` - Headers of the table the rows were taken from.
    /// * `attribute_index` - Column to drop.
    pub fn from_group(group: &[&Row], headers: &[String], attribute_index: usize) -> Result<Self, TreeError> {
        if group.is_empty() {
            return Err(TreeError::EmptyPartition(format!(
                "no rows to reduce for attribute {}",
                headers.get(attribute_index).map_or("?", |h| h.as_str())
            )));
        }
        let rows = group.iter().map(|row| drop_column(row, attribute_index)).collect();
        Ok(Subset {
            headers: drop_column(headers, attribute_index),
            rows,
        })
    }
}

fn drop_column(fields: &[String], index: usize) -> Vec<String> {
    fields
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, v)| v.clone())
        .collect()
}

/// Partition `rows` on the attribute at `attribute_index`.
///
/// Returns one reduced [`Subset`] per observed value, in order of first
/// appearance. Every subset owns copies of its rows, so sibling subsets can be
/// processed independently.
pub fn partition(rows: &[Row], headers: &[String], attribute_index: usize) -> Result<Vec<(String, Subset)>, TreeError> {
    validate_attribute_index(headers, attribute_index)?;
    group_by_column(rows, attribute_index)?
        .into_iter()
        .map(|(value, group)| Ok((value.to_string(), Subset::from_group(&group, headers, attribute_index)?)))
        .collect()
}
