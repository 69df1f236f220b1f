//! Quantity Keys
//!
//! Maps the row shortcut keys to count adjustments.

use crate::stacks::STACK_SIZE;

/// A change to an item's collected count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Increment(u32),
    Decrement(u32),
}

impl Adjustment {
    /// `+`/`-` step by one, `=`/`_` (the shifted keys) step by a whole stack
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "+" => Some(Adjustment::Increment(1)),
            "-" => Some(Adjustment::Decrement(1)),
            "=" => Some(Adjustment::Increment(STACK_SIZE)),
            "_" => Some(Adjustment::Decrement(STACK_SIZE)),
            _ => None,
        }
    }

    /// Like [`Adjustment::from_key`], but leaves Ctrl/Meta combinations
    /// (browser zoom and other shortcuts) to the browser
    pub fn from_shortcut(key: &str, ctrl_or_meta: bool) -> Option<Self> {
        if ctrl_or_meta {
            return None;
        }
        Self::from_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Adjustment::from_key("+"), Some(Adjustment::Increment(1)));
        assert_eq!(Adjustment::from_key("-"), Some(Adjustment::Decrement(1)));
        assert_eq!(Adjustment::from_key("="), Some(Adjustment::Increment(64)));
        assert_eq!(Adjustment::from_key("_"), Some(Adjustment::Decrement(64)));
    }

    #[test]
    fn test_modified_keys_left_to_browser() {
        for key in ["+", "-", "=", "_"] {
            assert_eq!(Adjustment::from_shortcut(key, true), None);
        }
        assert_eq!(Adjustment::from_shortcut("=", false), Some(Adjustment::Increment(64)));
    }

    #[test]
    fn test_other_keys_ignored() {
        for key in ["a", "Enter", "ArrowDown", "ArrowUp", "Tab", " ", ""] {
            assert_eq!(Adjustment::from_key(key), None);
        }
    }
}
