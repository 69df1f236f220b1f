//! Item Entity
//!
//! One inventory entry: what to collect, how many are collected and how many are wanted.

use serde::{Deserialize, Serialize};

use crate::stacks::to_stacks;

/// An inventory entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Display name (not validated)
    pub name: String,
    /// Collected quantity, never negative
    pub count: u32,
    /// Desired quantity
    pub target_count: u32,
}

/// A validated item waiting to be appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub target_count: u32,
}

impl Item {
    /// Create a new item with nothing collected yet
    pub fn new(name: impl Into<String>, target_count: u32) -> Self {
        Self {
            name: name.into(),
            count: 0,
            target_count,
        }
    }

    /// `target_count - count`; negative once the target is exceeded
    pub fn remaining(&self) -> i64 {
        i64::from(self.target_count) - i64::from(self.count)
    }

    pub fn stacks(&self) -> f64 {
        to_stacks(i64::from(self.count))
    }

    pub fn target_stacks(&self) -> f64 {
        to_stacks(i64::from(self.target_count))
    }

    pub fn remaining_stacks(&self) -> f64 {
        to_stacks(self.remaining())
    }

    /// Add to the collected count
    pub fn increment(&mut self, by: u32) -> u32 {
        self.count = self.count.saturating_add(by);
        self.count
    }

    /// Subtract from the collected count, clamping at zero
    pub fn decrement(&mut self, by: u32) -> u32 {
        self.count = self.count.saturating_sub(by);
        self.count
    }
}

impl From<NewItem> for Item {
    fn from(new_item: NewItem) -> Self {
        Item::new(new_item.name, new_item.target_count)
    }
}
