use super::tree::DecisionTree;
use crate::data::TabularDataset;
use crate::errors::TreeError;
use crate::node::TreeNode;
use rayon::prelude::*;

impl DecisionTree {
    /// Predict the label of a single row.
    ///
    /// * `headers` - Column names of `row`; attributes are looked up by name,
    ///   so the column order may differ from the training table.
    /// * `row` - Field values, the label column may be present or absent.
    ///
    /// Returns `Ok(None)` when the row holds a value no training row had at
    /// some split on its path.
    pub fn predict_row<'a>(&'a self, headers: &[String], row: &[String]) -> Result<Option<&'a str>, TreeError> {
        let mut node = self.root();
        loop {
            match node {
                TreeNode::Leaf { label } => return Ok(Some(label.as_str())),
                TreeNode::Split { attribute, children } => {
                    let index = headers
                        .iter()
                        .position(|h| h == attribute)
                        .ok_or_else(|| TreeError::UnknownAttribute(attribute.clone()))?;
                    let value = row.get(index).ok_or_else(|| {
                        TreeError::MalformedInput(format!(
                            "row of width {} has no value for {}",
                            row.len(),
                            attribute
                        ))
                    })?;
                    match children.get(value.as_str()) {
                        Some(child) => node = child,
                        None => return Ok(None),
                    }
                }
            }
        }
    }

    /// Predict the label of every row of `data`.
    ///
    /// * `parallel` - If `true`, rows are predicted in parallel using Rayon.
    pub fn predict<'a>(&'a self, data: &TabularDataset, parallel: bool) -> Result<Vec<Option<&'a str>>, TreeError> {
        let headers = data.headers();
        if parallel {
            data.rows()
                .par_iter()
                .map(|row| self.predict_row(headers, row))
                .collect()
        } else {
            data.rows().iter().map(|row| self.predict_row(headers, row)).collect()
        }
    }

    /// Fraction of the rows of `data` whose label the tree predicts correctly.
    /// Rows with an unseen value count as misses.
    pub fn accuracy(&self, data: &TabularDataset) -> Result<f64, TreeError> {
        let predictions = self.predict(data, false)?;
        let hits = predictions
            .iter()
            .zip(data.rows())
            .filter(|(p, row)| p.is_some() && **p == row.last().map(|l| l.as_str()))
            .count();
        Ok(hits as f64 / data.n_rows() as f64)
    }
}
