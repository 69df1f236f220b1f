//! Inventory Errors

use thiserror::Error;

/// Common result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors raised by the state container and the add-item form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Target count field left blank
    #[error("target count is empty")]
    EmptyTargetCount,
    /// Target count is not a non-negative integer
    #[error("target count `{0}` is not a non-negative integer")]
    InvalidTargetCount(String),
    /// Index does not address an item (e.g. a row removed in the meantime)
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
