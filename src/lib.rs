// Modules
pub mod constants;
pub mod data;
pub mod errors;
pub mod induction;
pub mod loader;
pub mod metric;
pub mod node;
pub mod tree;

// Individual classes, and functions
pub use data::{Row, TabularDataset};
pub use errors::TreeError;
pub use induction::{InductionConfig, TreeInductionEngine};
pub use node::TreeNode;
pub use tree::DecisionTree;
