/// Branch marker used in the text dump.
pub const DUMP_BRANCH: &str = "├── ";
/// Per-level indent used in the text dump.
pub const DUMP_INDENT: &str = "│   ";
/// Separator between edge values on a leaf's path in the text dump.
pub const DUMP_PATH_SEPARATOR: &str = " -> ";
