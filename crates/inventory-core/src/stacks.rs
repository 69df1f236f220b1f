//! Stack Conversion
//!
//! Quantities are shown both raw and in stacks of 64.

/// Units per stack
pub const STACK_SIZE: u32 = 64;

/// Convert a quantity to stacks, rounded half-up to 2 decimal places.
/// `Display` gives the shortest form (`64 -> "1"`, `32 -> "0.5"`).
pub fn to_stacks(value: i64) -> f64 {
    let raw = value as f64 / f64::from(STACK_SIZE);
    (raw * 100.0 + 0.5).floor() / 100.0
}
