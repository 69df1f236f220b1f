//! Add-Item Form State
//!
//! Visibility and draft values of the form below the table.
//! Hidden/Visible; starts Visible only when there is nothing to show yet.

use crate::error::{InventoryError, InventoryResult};
use crate::inventory::parse_target_count;
use crate::item::NewItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddForm {
    visible: bool,
    name: String,
    target_count: String,
    error: Option<InventoryError>,
}

impl AddForm {
    /// Form state for the first render of a list with `item_count` items
    pub fn initial(item_count: usize) -> Self {
        Self {
            visible: item_count == 0,
            ..Default::default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_count(&self) -> &str {
        &self.target_count
    }

    /// Why the last submit was rejected
    pub fn error(&self) -> Option<&InventoryError> {
        self.error.as_ref()
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn set_target_count(&mut self, target_count: String) {
        self.target_count = target_count;
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hide and drop the drafts
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Validate the drafts. On success the form hides and clears;
    /// on failure it stays open with the drafts and the error kept.
    pub fn submit(&mut self) -> InventoryResult<NewItem> {
        match parse_target_count(&self.target_count) {
            Ok(target_count) => {
                let name = std::mem::take(&mut self.name);
                *self = Self::default();
                Ok(NewItem { name, target_count })
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}
