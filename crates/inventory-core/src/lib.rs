//! Inventory Domain
//!
//! Contains the inventory entities and the rules that mutate them.
//! This layer has NO DOM dependencies, so everything here is testable natively.

mod error;
mod item;
mod stacks;
mod inventory;
mod adjust;
mod form;


pub use error::{InventoryError, InventoryResult};
pub use item::{Item, NewItem};
pub use stacks::{to_stacks, STACK_SIZE};
pub use inventory::{parse_target_count, Inventory};
pub use adjust::Adjustment;
pub use form::AddForm;
