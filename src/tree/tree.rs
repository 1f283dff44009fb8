use crate::constants::{DUMP_BRANCH, DUMP_INDENT, DUMP_PATH_SEPARATOR};
use crate::node::TreeNode;
use std::fmt::{self, Display};

/// A fitted decision tree.
///
/// Holds the root node and the headers of the table it was induced from.
/// The tree is read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    root: TreeNode,
    headers: Vec<String>,
}

impl DecisionTree {
    pub fn new(root: TreeNode, headers: Vec<String>) -> Self {
        DecisionTree { root, headers }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Headers of the training table, the label column last.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Name of the label column the tree predicts.
    pub fn label_name(&self) -> Option<&str> {
        self.headers.last().map(|h| h.as_str())
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }

    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }
}

fn write_node(f: &mut fmt::Formatter, node: &TreeNode, depth: usize, edge: Option<&str>, path: &str) -> fmt::Result {
    let full_path = match edge {
        Some(e) if path.is_empty() => e.to_string(),
        Some(e) => format!("{}{}{}", path, DUMP_PATH_SEPARATOR, e),
        None => path.to_string(),
    };
    let indent = DUMP_INDENT.repeat(depth.saturating_sub(1));

    match node {
        TreeNode::Leaf { label } => match edge {
            Some(_) => writeln!(f, "{}{}{}: Leaf = {}", indent, DUMP_BRANCH, full_path, label),
            None => writeln!(f, "Leaf = {}", label),
        },
        TreeNode::Split { attribute, .. } => {
            match edge {
                Some(e) => writeln!(f, "{}{}{}: Attribute = {}", indent, DUMP_BRANCH, e, attribute)?,
                None => writeln!(f, "Attribute = {}", attribute)?,
            }
            for (value, child) in node.children() {
                write_node(f, child, depth + 1, Some(value), &full_path)?;
            }
            Ok(())
        }
    }
}

impl Display for DecisionTree {
    /// Depth-first text dump, children in lexicographic order of edge value.
    ///
    /// Values are written verbatim, so a value holding `": "` or `" -> "` cannot
    /// be told apart from the separators by splitting a line on them. A reader
    /// recovers such an edge by stripping the parent's path from the leaf path.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_node(f, &self.root, 0, None, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Row, TabularDataset};
    use crate::induction::TreeInductionEngine;
    use hashbrown::HashMap;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sample() -> DecisionTree {
        let mut windy = HashMap::new();
        windy.insert("true".to_string(), TreeNode::leaf("No"));
        windy.insert("false".to_string(), TreeNode::leaf("Yes"));
        let mut children = HashMap::new();
        children.insert("Sunny".to_string(), TreeNode::leaf("No"));
        children.insert("Overcast".to_string(), TreeNode::leaf("Yes"));
        children.insert("Rainy".to_string(), TreeNode::split("Windy", windy));
        let headers = ["Outlook", "Windy", "Play"].iter().map(|s| s.to_string()).collect();
        DecisionTree::new(TreeNode::split("Outlook", children), headers)
    }

    /// Rebuild a tree from its text dump.
    ///
    /// Leaf lines carry the whole path, so the edge is what remains after the
    /// parent's path and a separator are stripped. This keeps values holding
    /// `": "` or `" -> "` readable.
    fn parse_dump(dump: &str) -> TreeNode {
        struct Frame {
            edge: Option<String>,
            path: String,
            attribute: Option<String>,
            children: HashMap<String, TreeNode>,
        }

        fn close(stack: &mut Vec<Frame>) {
            let frame = stack.pop().unwrap();
            let node = TreeNode::split(frame.attribute.unwrap(), frame.children);
            let parent = stack.last_mut().unwrap();
            parent.children.insert(frame.edge.unwrap(), node);
        }

        let mut stack: Vec<Frame> = vec![Frame {
            edge: None,
            path: String::new(),
            attribute: None,
            children: HashMap::new(),
        }];
        for line in dump.lines() {
            let mut rest = line;
            let mut depth = 0;
            while let Some(r) = rest.strip_prefix(DUMP_INDENT) {
                rest = r;
                depth += 1;
            }
            let Some(r) = rest.strip_prefix(DUMP_BRANCH) else {
                if let Some(attribute) = rest.strip_prefix("Attribute = ") {
                    stack.push(Frame {
                        edge: None,
                        path: String::new(),
                        attribute: Some(attribute.to_string()),
                        children: HashMap::new(),
                    });
                    continue;
                }
                return TreeNode::leaf(rest.strip_prefix("Leaf = ").unwrap());
            };
            // The sentinel frame sits at index 0, the root split at 1.
            while stack.len() > depth + 2 {
                close(&mut stack);
            }
            let parent_path = stack.last().unwrap().path.clone();
            if let Some((edge, label)) = r.rsplit_once(": Leaf = ") {
                let edge = if parent_path.is_empty() {
                    edge
                } else {
                    edge.strip_prefix(parent_path.as_str())
                        .and_then(|e| e.strip_prefix(DUMP_PATH_SEPARATOR))
                        .unwrap()
                };
                stack.last_mut().unwrap().children.insert(edge.to_string(), TreeNode::leaf(label));
            } else {
                let (edge, attribute) = r.rsplit_once(": Attribute = ").unwrap();
                let path = if parent_path.is_empty() {
                    edge.to_string()
                } else {
                    format!("{}{}{}", parent_path, DUMP_PATH_SEPARATOR, edge)
                };
                stack.push(Frame {
                    edge: Some(edge.to_string()),
                    path,
                    attribute: Some(attribute.to_string()),
                    children: HashMap::new(),
                });
            }
        }
        while stack.len() > 2 {
            close(&mut stack);
        }
        let root = stack.pop().unwrap();
        TreeNode::split(root.attribute.unwrap(), root.children)
    }

    #[test]
    fn test_tree_display() {
        let tree = sample();
        let expected = "Attribute = Outlook\n\
                        ├── Overcast: Leaf = Yes\n\
                        ├── Rainy: Attribute = Windy\n\
                        │   ├── Rainy -> false: Leaf = Yes\n\
                        │   ├── Rainy -> true: Leaf = No\n\
                        ├── Sunny: Leaf = No\n";
        assert_eq!(format!("{}", tree), expected);
    }

    #[test]
    fn test_single_leaf_display() {
        let tree = DecisionTree::new(TreeNode::leaf("Yes"), vec!["A".to_string(), "Play".to_string()]);
        assert_eq!(tree.to_string(), "Leaf = Yes\n");
        assert_eq!(parse_dump(&tree.to_string()), *tree.root());
    }

    #[test]
    fn test_display_round_trip() {
        let tree = sample();
        let parsed = parse_dump(&tree.to_string());
        assert_eq!(&parsed, tree.root());
    }

    #[test]
    fn test_display_round_trip_on_induced_trees() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..25 {
            let n_attributes = rng.gen_range(1..6);
            let n_rows = rng.gen_range(1..60);
            let mut headers: Vec<String> = (0..n_attributes).map(|i| format!("a{}", i)).collect();
            headers.push(String::from("label"));
            let rows: Vec<Row> = (0..n_rows)
                .map(|_| (0..=n_attributes).map(|_| rng.gen_range(0..3).to_string()).collect())
                .collect();
            let data = TabularDataset::new(headers, rows).unwrap();
            let tree = TreeInductionEngine::default().fit(&data).unwrap();
            assert_eq!(&parse_dump(&tree.to_string()), tree.root());
        }
    }

    #[test]
    fn test_display_with_separators_in_values() {
        let mut inner = HashMap::new();
        inner.insert("x -> y".to_string(), TreeNode::leaf("No"));
        inner.insert("z".to_string(), TreeNode::leaf("Yes: maybe"));
        let mut children = HashMap::new();
        children.insert("a: b".to_string(), TreeNode::split("Wind", inner));
        children.insert("c".to_string(), TreeNode::leaf("Yes"));
        let headers = ["Outlook", "Wind", "Play"].iter().map(|s| s.to_string()).collect();
        let tree = DecisionTree::new(TreeNode::split("Outlook", children), headers);

        let expected = "Attribute = Outlook\n\
                        ├── a: b: Attribute = Wind\n\
                        │   ├── a: b -> x -> y: Leaf = No\n\
                        │   ├── a: b -> z: Leaf = Yes: maybe\n\
                        ├── c: Leaf = Yes\n";
        assert_eq!(tree.to_string(), expected);
        assert_eq!(&parse_dump(&tree.to_string()), tree.root());
    }

    #[test]
    fn test_tree_statistics() {
        let tree = sample();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 4);
        assert_eq!(tree.n_nodes(), 6);
        assert_eq!(tree.label_name(), Some("Play"));
    }
}
