use thiserror::Error;

/// Which sibling group a size invariant was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeGroup {
    Columns,
    Rows { column: usize },
}

impl std::fmt::Display for SizeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeGroup::Columns => write!(f, "columns"),
            SizeGroup::Rows { column } => write!(f, "rows of column {column}"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("window {0} is not in this layout")]
    WindowNotFound(String),
    #[error("window {0} is already in this layout")]
    AlreadyManaged(String),
    #[error("sizes of the {group} sum to {sum}, expected 1.0")]
    InvariantViolation { group: SizeGroup, sum: f64 },
    #[error("column {0} is empty but is not the only column")]
    EmptyColumn(usize),
    #[error("window {0} appears more than once")]
    DuplicateWindow(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
