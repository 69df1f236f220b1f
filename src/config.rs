//! Configuration
//!
//! Storage key, DOM naming and the display strings of the view.

use inventory_core::InventoryError;

/// localStorage key holding the JSON item list
pub const STORAGE_KEY: &str = "inventory.items";

/// Rows get ids `inventory-item-{index}`
pub const ROW_ID_PREFIX: &str = "inventory-item";

/// Console log level: verbose in debug builds
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Display strings
pub mod labels {
    pub const NAME_HEADER: &str = "Nazwa";
    pub const COLLECTED_HEADER: &str = "Zebrane";
    pub const REMAINING_HEADER: &str = "Zostało";

    pub const NAME_FIELD: &str = "Nazwa:";
    pub const TARGET_FIELD: &str = "Do zebrania:";

    pub const ADD: &str = "Dodaj";
    pub const CANCEL: &str = "Anuluj";
    pub const SAVE: &str = "Zapisz";
    pub const REMOVE: &str = "X";
}

/// Message shown under the add form for a rejected submit
pub fn error_message(err: &InventoryError) -> String {
    match err {
        InventoryError::EmptyTargetCount => "Podaj liczbę do zebrania.".to_string(),
        InventoryError::InvalidTargetCount(text) => {
            format!("\"{}\" nie jest nieujemną liczbą całkowitą.", text)
        }
        InventoryError::IndexOutOfRange { index, .. } => {
            format!("Pozycja {} już nie istnieje.", index + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(error_message(&InventoryError::EmptyTargetCount), "Podaj liczbę do zebrania.");
        assert!(error_message(&InventoryError::InvalidTargetCount("abc".into())).contains("\"abc\""));
        assert!(error_message(&InventoryError::IndexOutOfRange { index: 0, len: 0 }).contains('1'));
    }
}
