//! Inventory Container
//!
//! Ordered item sequence with the four mutating operations the view dispatches.
//! Insertion order is display order and the index used by every operation.

use serde::{Deserialize, Serialize};

use crate::adjust::Adjustment;
use crate::error::{InventoryError, InventoryResult};
use crate::item::{Item, NewItem};

/// Ordered list of items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

/// Parse target count input as a non-negative integer (surrounding whitespace ignored)
pub fn parse_target_count(text: &str) -> InventoryResult<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::EmptyTargetCount);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| InventoryError::InvalidTargetCount(text.to_string()))
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Parse `target_count_text` and append a fresh item. Returns its index.
    pub fn add_item(&mut self, name: &str, target_count_text: &str) -> InventoryResult<usize> {
        let target_count = parse_target_count(target_count_text)?;
        Ok(self.insert(NewItem {
            name: name.to_string(),
            target_count,
        }))
    }

    /// Append an already validated item. Returns its index.
    pub fn insert(&mut self, new_item: NewItem) -> usize {
        self.items.push(Item::from(new_item));
        self.items.len() - 1
    }

    /// Remove the item at `index`, keeping the order of the rest
    pub fn remove_item(&mut self, index: usize) -> InventoryResult<Item> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Returns the new count
    pub fn increment_item_number(&mut self, index: usize, increment_by: u32) -> InventoryResult<u32> {
        Ok(self.item_mut(index)?.increment(increment_by))
    }

    /// Returns the new count, never below zero
    pub fn decrement_item_number(&mut self, index: usize, decrement_by: u32) -> InventoryResult<u32> {
        Ok(self.item_mut(index)?.decrement(decrement_by))
    }

    pub fn adjust(&mut self, index: usize, adjustment: Adjustment) -> InventoryResult<u32> {
        match adjustment {
            Adjustment::Increment(by) => self.increment_item_number(index, by),
            Adjustment::Decrement(by) => self.decrement_item_number(index, by),
        }
    }

    fn check_index(&self, index: usize) -> InventoryResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(InventoryError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    fn item_mut(&mut self, index: usize) -> InventoryResult<&mut Item> {
        self.check_index(index)?;
        Ok(&mut self.items[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_inventory(names: &[&str]) -> Inventory {
        let mut inventory = Inventory::new();
        for name in names {
            inventory.add_item(name, "64").unwrap();
        }
        inventory
    }

    fn names(inventory: &Inventory) -> Vec<&str> {
        inventory.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_add_keeps_call_order() {
        let inventory = make_inventory(&["Wood", "Stone", "Wood", "Iron"]);
        assert_eq!(inventory.len(), 4);
        assert_eq!(names(&inventory), vec!["Wood", "Stone", "Wood", "Iron"]);
        assert!(inventory.items().iter().all(|i| i.count == 0));
    }

    #[test]
    fn test_add_returns_index() {
        let mut inventory = make_inventory(&["Wood"]);
        assert_eq!(inventory.add_item("Stone", " 32 "), Ok(1));
        assert_eq!(inventory.get(1).map(|i| i.target_count), Some(32));
    }

    #[test]
    fn test_add_rejects_bad_target() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.add_item("Wood", ""), Err(InventoryError::EmptyTargetCount));
        assert_eq!(inventory.add_item("Wood", "   "), Err(InventoryError::EmptyTargetCount));
        assert_eq!(
            inventory.add_item("Wood", "abc"),
            Err(InventoryError::InvalidTargetCount("abc".to_string()))
        );
        assert_eq!(
            inventory.add_item("Wood", "-5"),
            Err(InventoryError::InvalidTargetCount("-5".to_string()))
        );
        assert_eq!(
            inventory.add_item("Wood", "1.5"),
            Err(InventoryError::InvalidTargetCount("1.5".to_string()))
        );
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut inventory = make_inventory(&["A", "B", "C", "D"]);
        let removed = inventory.remove_item(1).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(names(&inventory), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_out_of_range_leaves_sequence_untouched() {
        let mut inventory = make_inventory(&["A", "B"]);
        let before = inventory.clone();
        let expected = Err(InventoryError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(inventory.remove_item(2).map(|_| ()), expected);
        assert_eq!(inventory.increment_item_number(2, 1).map(|_| ()), expected);
        assert_eq!(inventory.decrement_item_number(2, 1).map(|_| ()), expected);
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_decrement_never_negative() {
        for start in [0u32, 1, 63, 64, 65, 1000] {
            for by in [0u32, 1, 64, 65, u32::MAX] {
                let mut inventory = make_inventory(&["A"]);
                inventory.increment_item_number(0, start).unwrap();
                let count = inventory.decrement_item_number(0, by).unwrap();
                assert_eq!(count, start.saturating_sub(by));
            }
        }
    }

    #[test]
    fn test_increment_then_decrement_restores() {
        let mut inventory = make_inventory(&["A"]);
        inventory.increment_item_number(0, 10).unwrap();
        inventory.increment_item_number(0, 64).unwrap();
        assert_eq!(inventory.decrement_item_number(0, 64), Ok(10));
    }

    #[test]
    fn test_increment_saturates() {
        let mut inventory = make_inventory(&["A"]);
        inventory.increment_item_number(0, u32::MAX).unwrap();
        assert_eq!(inventory.increment_item_number(0, 1), Ok(u32::MAX));
    }

    #[test]
    fn test_serializes_as_array() {
        let inventory = make_inventory(&["Wood"]);
        let json = serde_json::to_string(&inventory).unwrap();
        assert_eq!(json, r#"[{"name":"Wood","count":0,"targetCount":64}]"#);
        let parsed: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, inventory);
    }
}
