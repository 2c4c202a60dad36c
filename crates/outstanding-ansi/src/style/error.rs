//! Style lookup errors.

use super::registry::Table;

/// Error returned when a style name cannot be resolved or text cannot be
/// composed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A symbolic name is not present in the registry table it was looked up in.
    #[error("unknown {table} style name '{name}'")]
    UnknownStyleName { table: Table, name: String },

    /// An interpolation template and its arguments disagree in count.
    #[error("template has {placeholders} placeholder(s) but {arguments} argument(s) were given")]
    PlaceholderMismatch {
        placeholders: usize,
        arguments: usize,
    },
}

/// Result alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;
