//! Property-based tests for table entries.
//!
//! Uses proptest to check the quantization invariants over the whole index
//! domain rather than a handful of sample points.

use logtable_codegen::table::{LogTable, Shift, TableEntry, TABLE_LEN};
use proptest::prelude::*;

// =============================================================================
// Range
// =============================================================================

proptest! {
    /// Every derived entry reproduces its own index and decodes below its magnitude.
    #[test]
    fn prop_entry_is_consistent(i in 1usize..TABLE_LEN) {
        let entry = TableEntry::derive(i).unwrap();
        prop_assert_eq!(entry.index, i);
        prop_assert!(entry.decoded() <= entry.raw_value);
        prop_assert!(entry.raw_value - entry.decoded() < 8);
    }

    /// Indices past the end are rejected, never wrapped.
    #[test]
    fn prop_out_of_domain_rejected(i in TABLE_LEN..10_000usize) {
        prop_assert!(TableEntry::derive(i).is_err());
    }
}

// =============================================================================
// Shift bands
// =============================================================================

proptest! {
    /// A hint is present iff the magnitude reaches the smallest threshold,
    /// and the chosen band contains the magnitude.
    #[test]
    fn prop_hint_matches_band(i in 1usize..TABLE_LEN) {
        let entry = TableEntry::derive(i).unwrap();
        match entry.shift {
            None => prop_assert!(entry.raw_value < Shift::One.threshold()),
            Some(shift) => {
                prop_assert!(entry.raw_value >= shift.threshold());
                if shift != Shift::Three {
                    prop_assert!(entry.raw_value < shift.threshold() * 2);
                }
            }
        }
    }

    /// The cascade agrees with the band boundaries for arbitrary magnitudes
    /// that fit after shifting.
    #[test]
    fn prop_cascade_fits_byte(raw in 0u32..2048) {
        let bits = Shift::for_magnitude(raw).map_or(0, Shift::bits);
        prop_assert!(raw >> bits <= u32::from(u8::MAX));
    }
}

// =============================================================================
// Monotonicity
// =============================================================================

proptest! {
    /// Raw and decoded magnitudes never increase with the index.
    #[test]
    fn prop_non_increasing(a in 1usize..TABLE_LEN, b in 1usize..TABLE_LEN) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = TableEntry::derive(lo).unwrap();
        let hi = TableEntry::derive(hi).unwrap();
        prop_assert!(lo.raw_value >= hi.raw_value);
        prop_assert!(lo.decoded() >= hi.decoded());
    }
}

#[test]
fn band_layout() {
    let table = LogTable::build().unwrap();
    for entry in &table.entries()[1..] {
        let expected = match entry.index {
            1 => Some(Shift::Three),
            2..=13 => Some(Shift::Two),
            14..=36 => Some(Shift::One),
            _ => None,
        };
        assert_eq!(entry.shift, expected, "index {}", entry.index);
    }
}
