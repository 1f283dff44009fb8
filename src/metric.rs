//! Metric
//!
//! Label impurity and the information gain of splitting rows on one attribute.
//! Every aggregation walks the rows in order and keeps groups in first-encounter
//! order, so floating point sums come out the same on every run.
use crate::data::Row;
use crate::errors::TreeError;
use hashbrown::HashMap;

/// Count the labels (last field) of `rows`, in order of first appearance.
pub fn label_counts<'a, I>(rows: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for label in rows.into_iter().filter_map(|row| row.last()) {
        match slots.get(label.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(label.as_str(), counts.len());
                counts.push((label.as_str(), 1));
            }
        }
    }
    counts
}

/// The label with the highest count.
///
/// Rows are scanned in order and the winner only changes when a label's
/// running count climbs strictly above the best so far, so a tie goes to the
/// label that reached the maximum count first.
pub fn majority_label<'a, I>(rows: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut counts: HashMap<&'a str, usize> = HashMap::new();
    let mut best: Option<(&'a str, usize)> = None;
    for label in rows.into_iter().filter_map(|row| row.last()) {
        let count = counts.entry(label.as_str()).or_insert(0);
        *count += 1;
        match best {
            Some((_, c)) if *count <= c => {}
            _ => best = Some((label.as_str(), *count)),
        }
    }
    best.map(|(label, _)| label)
}

/// Shannon entropy, in bits, of a label distribution.
///
/// * `counts` - Number of rows carrying each label. Zero counts contribute nothing.
/// * `total` - Number of rows the counts were taken over, must be positive.
pub fn entropy<I>(counts: I, total: usize) -> Result<f64, TreeError>
where
    I: IntoIterator<Item = usize>,
{
    if total == 0 {
        return Err(TreeError::EmptyPartition(String::from(
            "entropy of a distribution over zero rows",
        )));
    }
    let n = total as f64;
    Ok(counts
        .into_iter()
        .filter(|&c| c > 0)
        .map(|c| {
            let p = c as f64 / n;
            -p * p.log2()
        })
        .sum())
}

/// Entropy of the labels of `rows`.
pub fn label_entropy<'a, I>(rows: I) -> Result<f64, TreeError>
where
    I: IntoIterator<Item = &'a Row>,
{
    let counts = label_counts(rows);
    let total = counts.iter().map(|(_, c)| c).sum();
    entropy(counts.into_iter().map(|(_, c)| c), total)
}

/// Group `rows` by the value in column `index`, in order of first appearance.
pub(crate) fn group_by_column<'a>(rows: &'a [Row], index: usize) -> Result<Vec<(&'a str, Vec<&'a Row>)>, TreeError> {
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, Vec<&'a Row>)> = Vec::new();
    for row in rows {
        let value = row.get(index).ok_or_else(|| {
            TreeError::MalformedInput(format!("row of width {} has no column {}", row.len(), index))
        })?;
        match slots.get(value.as_str()) {
            Some(&slot) => groups[slot].1.push(row),
            None => {
                slots.insert(value.as_str(), groups.len());
                groups.push((value.as_str(), vec![row]));
            }
        }
    }
    Ok(groups)
}

/// Check that `attribute_index` refers to a non-label column of `headers`.
pub(crate) fn validate_attribute_index(headers: &[String], attribute_index: usize) -> Result<(), TreeError> {
    let label_index = headers.len().saturating_sub(1);
    if attribute_index < label_index {
        Ok(())
    } else {
        Err(TreeError::UnknownAttribute(format!(
            "column {} is not an attribute of [{}]",
            attribute_index,
            headers.join(", ")
        )))
    }
}

/// Information gain of splitting `rows` on the attribute at `attribute_index`.
///
/// The entropy being reduced is that of `rows` themselves, not of the
/// dataset they were taken from, so this is correct on reduced subsets.
///
/// * `rows` - Rows to split, the last field of each is the label.
/// * `headers` - Column names of `rows`, the last is the label column.
/// * `attribute_index` - Column to split on, must not be the label column.
pub fn information_gain(rows: &[Row], headers: &[String], attribute_index: usize) -> Result<f64, TreeError> {
    validate_attribute_index(headers, attribute_index)?;
    if rows.is_empty() {
        return Err(TreeError::EmptyPartition(format!(
            "information gain of {} over zero rows",
            headers[attribute_index]
        )));
    }
    let n = rows.len() as f64;
    let mut gain = label_entropy(rows)?;
    for (_, group) in group_by_column(rows, attribute_index)? {
        let weight = group.len() as f64 / n;
        gain -= weight * label_entropy(group)?;
    }
    Ok(gain)
}

/// Information gain of splitting `rows` on the attribute called `name`.
pub fn information_gain_by_name(rows: &[Row], headers: &[String], name: &str) -> Result<f64, TreeError> {
    let label_index = headers.len().saturating_sub(1);
    let attribute_index = headers[..label_index]
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| TreeError::UnknownAttribute(name.to_string()))?;
    information_gain(rows, headers, attribute_index)
}
