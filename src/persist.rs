//! Persistence
//!
//! Best-effort save/load of the inventory to browser localStorage.

use inventory_core::Inventory;
use thiserror::Error;

use crate::config::STORAGE_KEY;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Storage(String),
    #[error("stored inventory is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn local_storage() -> Result<web_sys::Storage, PersistError> {
    let window = web_sys::window().ok_or(PersistError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| PersistError::Storage(format!("{:?}", e)))?
        .ok_or(PersistError::Unavailable)
}

/// Parse stored JSON; nothing stored means an empty inventory
pub fn decode_inventory(stored: Option<&str>) -> Result<Inventory, PersistError> {
    match stored {
        Some(json) => Ok(serde_json::from_str(json)?),
        None => Ok(Inventory::default()),
    }
}

pub fn load_inventory() -> Result<Inventory, PersistError> {
    let stored = local_storage()?
        .get_item(STORAGE_KEY)
        .map_err(|e| PersistError::Storage(format!("{:?}", e)))?;
    decode_inventory(stored.as_deref())
}

/// Whether a run of the save effect reflects a change.
/// `previous_run` is `None` on the first run, which only mirrors what was loaded.
pub fn should_save(previous_run: Option<()>) -> bool {
    previous_run.is_some()
}

pub fn save_inventory(inventory: &Inventory) -> Result<(), PersistError> {
    let json = serde_json::to_string(inventory)?;
    local_storage()?
        .set_item(STORAGE_KEY, &json)
        .map_err(|e| PersistError::Storage(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_empty() {
        let inventory = decode_inventory(None).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_decodes_stored_items() {
        let stored = r#"[{"name":"Wood","count":10,"targetCount":64},{"name":"Stone","count":0,"targetCount":128}]"#;
        let inventory = decode_inventory(Some(stored)).unwrap();
        assert_eq!(inventory.len(), 2);
        let wood = inventory.get(0).unwrap();
        assert_eq!((wood.name.as_str(), wood.count, wood.target_count), ("Wood", 10, 64));
    }

    #[test]
    fn test_initial_run_does_not_save() {
        // A malformed payload falls back to an empty inventory; the mount run must not write it back
        assert!(!should_save(None));
        assert!(should_save(Some(())));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(decode_inventory(Some("{oops")), Err(PersistError::Malformed(_))));
        // Negative counts cannot be stored
        let negative = r#"[{"name":"Wood","count":-1,"targetCount":64}]"#;
        assert!(matches!(decode_inventory(Some(negative)), Err(PersistError::Malformed(_))));
    }
}
