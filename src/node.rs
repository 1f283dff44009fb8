use hashbrown::HashMap;

/// A node of a decision tree.
///
/// A split owns its children outright; dropping the root drops the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Terminal node predicting a single class label.
    Leaf { label: String },
    /// Internal node testing one attribute, with a child per observed value.
    Split {
        attribute: String,
        children: HashMap<String, TreeNode>,
    },
}

impl TreeNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        TreeNode::Leaf { label: label.into() }
    }

    pub fn split(attribute: impl Into<String>, children: HashMap<String, TreeNode>) -> Self {
        TreeNode::Split {
            attribute: attribute.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// The predicted label, if this is a leaf.
    pub fn label(&self) -> Option<&str> {
        match self {
            TreeNode::Leaf { label } => Some(label.as_str()),
            TreeNode::Split { .. } => None,
        }
    }

    /// The tested attribute, if this is a split.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Split { attribute, .. } => Some(attribute.as_str()),
        }
    }

    /// Edge values and child nodes, sorted by edge value. Empty for a leaf.
    pub fn children(&self) -> Vec<(&str, &TreeNode)> {
        match self {
            TreeNode::Leaf { .. } => Vec::new(),
            TreeNode::Split { children, .. } => {
                let mut sorted: Vec<(&str, &TreeNode)> = children.iter().map(|(k, v)| (k.as_str(), v)).collect();
                sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
                sorted
            }
        }
    }

    /// Follow the edge for `value`, if this split has one.
    pub fn child(&self, value: &str) -> Option<&TreeNode> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Split { children, .. } => children.get(value),
        }
    }

    /// Length of the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Split { children, .. } => 1 + children.values().map(TreeNode::depth).max().unwrap_or(0),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Split { children, .. } => children.values().map(TreeNode::n_leaves).sum(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Split { children, .. } => 1 + children.values().map(TreeNode::n_nodes).sum::<usize>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlook() -> TreeNode {
        let mut windy = HashMap::new();
        windy.insert("true".to_string(), TreeNode::leaf("No"));
        windy.insert("false".to_string(), TreeNode::leaf("Yes"));
        let mut children = HashMap::new();
        children.insert("Sunny".to_string(), TreeNode::leaf("No"));
        children.insert("Overcast".to_string(), TreeNode::leaf("Yes"));
        children.insert("Rainy".to_string(), TreeNode::split("Windy", windy));
        TreeNode::split("Outlook", children)
    }

    #[test]
    fn test_leaf_accessors() {
        let n = TreeNode::leaf("Yes");
        assert!(n.is_leaf());
        assert_eq!(n.label(), Some("Yes"));
        assert_eq!(n.attribute(), None);
        assert!(n.children().is_empty());
        assert!(n.child("anything").is_none());
    }

    #[test]
    fn test_split_children_sorted() {
        let n = outlook();
        assert!(!n.is_leaf());
        assert_eq!(n.label(), None);
        assert_eq!(n.attribute(), Some("Outlook"));
        let edges: Vec<&str> = n.children().iter().map(|(e, _)| *e).collect();
        assert_eq!(edges, vec!["Overcast", "Rainy", "Sunny"]);
        assert_eq!(n.child("Rainy").and_then(|c| c.attribute()), Some("Windy"));
    }

    #[test]
    fn test_tree_statistics() {
        let n = outlook();
        assert_eq!(n.depth(), 2);
        assert_eq!(n.n_leaves(), 4);
        assert_eq!(n.n_nodes(), 6);
        assert_eq!(TreeNode::leaf("x").depth(), 0);
    }
}
