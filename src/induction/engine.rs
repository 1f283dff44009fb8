//! Induction Engine
//!
//! Recursive ID3 induction: every call either ends in a leaf or splits on the
//! attribute with the highest information gain and recurses on reduced copies
//! of the rows, one per observed value of that attribute.
use crate::data::{partition, validate_table, Row, TabularDataset};
use crate::errors::TreeError;
use crate::induction::config::InductionConfig;
use crate::metric::{information_gain, majority_label};
use crate::node::TreeNode;
use crate::tree::DecisionTree;
use log::{debug, info, warn};
use rayon::prelude::*;

/// Pick the attribute to split `rows` on.
///
/// Returns the index and gain of the attribute with the greatest information
/// gain, the first one in header order when several tie. The best gain may be
/// zero or negative. `None` only when `headers` has no attribute columns.
pub fn select_attribute(rows: &[Row], headers: &[String]) -> Result<Option<(usize, f64)>, TreeError> {
    let mut best: Option<(usize, f64)> = None;
    let mut best_gain = f64::NEG_INFINITY;
    for index in 0..headers.len().saturating_sub(1) {
        let gain = information_gain(rows, headers, index)?;
        if gain > best_gain {
            best_gain = gain;
            best = Some((index, gain));
        }
    }
    Ok(best)
}

/// Builds decision trees from labeled tables.
#[derive(Clone, Debug, Default)]
pub struct TreeInductionEngine {
    pub cfg: InductionConfig,
}

impl TreeInductionEngine {
    /// Create an engine from a configuration, checking its parameters.
    pub fn new(cfg: InductionConfig) -> Result<Self, TreeError> {
        cfg.validate()?;
        Ok(TreeInductionEngine { cfg })
    }

    /// Induce a decision tree from every row of `data`.
    pub fn fit(&self, data: &TabularDataset) -> Result<DecisionTree, TreeError> {
        info!(
            "Inducing a tree from {} rows and {} attributes, label entropy {:.4}.",
            data.n_rows(),
            data.n_attributes(),
            data.entropy()
        );
        let root = self.build(data.rows(), data.headers())?;
        let tree = DecisionTree::new(root, data.headers().to_vec());
        info!(
            "Finished induction with depth {}, {} leaves and {} nodes.",
            tree.depth(),
            tree.n_leaves(),
            tree.n_nodes()
        );
        Ok(tree)
    }

    /// Induce the subtree for `rows`.
    ///
    /// * `rows` - Data rows, the last field of each is the label.
    /// * `headers` - Column names, at least one attribute followed by the label column.
    pub fn build(&self, rows: &[Row], headers: &[String]) -> Result<TreeNode, TreeError> {
        self.cfg.validate()?;
        validate_table(headers, rows)?;
        if self.cfg.parallel {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.cfg.num_threads.unwrap_or(0))
                .build()
                .map_err(|e| {
                    TreeError::InvalidParameter(
                        String::from("num_threads"),
                        String::from("a buildable thread pool"),
                        e.to_string(),
                    )
                })?;
            pool.install(|| self.grow(rows, headers, 0))
        } else {
            self.grow(rows, headers, 0)
        }
    }

    fn grow(&self, rows: &[Row], headers: &[String], depth: usize) -> Result<TreeNode, TreeError> {
        let label_index = headers
            .len()
            .checked_sub(1)
            .ok_or_else(|| TreeError::MalformedInput(String::from("no label column")))?;
        let first = rows
            .first()
            .and_then(|row| row.get(label_index))
            .ok_or_else(|| TreeError::EmptyPartition(format!("no rows to grow at depth {}", depth)))?;

        if rows.iter().all(|row| row.get(label_index) == Some(first)) {
            return Ok(TreeNode::leaf(first.as_str()));
        }

        if label_index == 0 {
            return self.majority_leaf(rows);
        }

        let (best_index, best_gain) = match select_attribute(rows, headers)? {
            Some(best) => best,
            None => return self.majority_leaf(rows),
        };

        if let Some(max_depth) = self.cfg.max_depth {
            if depth >= max_depth {
                return Err(TreeError::DepthLimitExceeded(max_depth));
            }
        }

        let attribute = &headers[best_index];
        if best_gain <= 0.0 {
            warn!(
                "Splitting {} rows on {} with non-positive information gain {:.4}.",
                rows.len(),
                attribute,
                best_gain
            );
        } else {
            debug!(
                "Splitting {} rows on {} at depth {}, gain {:.4}.",
                rows.len(),
                attribute,
                depth,
                best_gain
            );
        }

        let subsets = partition(rows, headers, best_index)?;
        let children: Vec<(String, TreeNode)> = if self.cfg.parallel {
            subsets
                .into_par_iter()
                .map(|(value, subset)| -> Result<(String, TreeNode), TreeError> {
                    Ok((value, self.grow(&subset.rows, &subset.headers, depth + 1)?))
                })
                .collect::<Result<_, TreeError>>()?
        } else {
            subsets
                .into_iter()
                .map(|(value, subset)| -> Result<(String, TreeNode), TreeError> {
                    Ok((value, self.grow(&subset.rows, &subset.headers, depth + 1)?))
                })
                .collect::<Result<_, TreeError>>()?
        };

        Ok(TreeNode::split(attribute.as_str(), children.into_iter().collect()))
    }

    fn majority_leaf(&self, rows: &[Row]) -> Result<TreeNode, TreeError> {
        majority_label(rows)
            .map(TreeNode::leaf)
            .ok_or_else(|| TreeError::EmptyPartition(String::from("no labels to vote on")))
    }
}
