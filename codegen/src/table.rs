//! Log table entries and the quantization cascade.
//!
//! Entry `i` (for `i` in `1..TABLE_LEN`) holds `-ln(i / 100) * 256`, truncated
//! toward zero, then right-shifted by the first band it falls in so that it
//! fits in a `uint8_t`. Entry 0 has no logarithm and is seeded with
//! [`ZERO_SEED`] instead.

use thiserror::Error;

/// Name of the emitted C array.
pub const TABLE_NAME: &str = "log_table";

/// Number of entries in the table.
pub const TABLE_LEN: usize = 100;

/// Divisor turning an index into the logarithm argument (indices are percentages).
pub const PERCENT: f64 = 100.0;

/// Fixed-point scale applied to the logarithm.
pub const SCALE: f64 = 256.0;

/// Pre-shift magnitude used for entry 0.
pub const ZERO_SEED: u32 = 2047;

/// Right shift applied to a magnitude too large for 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shift {
    /// `>> 1`, for magnitudes in `256..512`.
    One = 1,
    /// `>> 2`, for magnitudes in `512..1024`.
    Two = 2,
    /// `>> 3`, for magnitudes of 1024 and above.
    Three = 3,
}

impl Shift {
    /// Bands in the order they are tested; the first match wins.
    pub const CASCADE: [Shift; 3] = [Shift::Three, Shift::Two, Shift::One];

    /// Number of bits shifted out.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Smallest magnitude that selects this shift.
    #[must_use]
    pub const fn threshold(self) -> u32 {
        256 << (self as u32 - 1)
    }

    /// Selects the shift for a pre-shift magnitude, or `None` when it already fits.
    #[must_use]
    pub fn for_magnitude(raw: u32) -> Option<Shift> {
        Self::CASCADE.into_iter().find(|s| raw >= s.threshold())
    }

    /// Looks up a shift by its bit count.
    #[must_use]
    pub fn from_bits(bits: u32) -> Option<Shift> {
        Self::CASCADE.into_iter().find(|s| s.bits() == bits)
    }
}

/// Errors raised while deriving table entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The index lies outside `0..TABLE_LEN`.
    #[error("index {index} is outside the table domain 0..{len}")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Table length.
        len: usize,
    },
    /// The magnitude does not fit in 8 bits even after the widest shift.
    #[error("entry {index}: magnitude {raw} does not fit in 8 bits after the shift cascade")]
    Overflow {
        /// Offending index.
        index: usize,
        /// Pre-shift magnitude.
        raw: u32,
        /// Shift the cascade selected before the value still overflowed.
        shift: Option<Shift>,
    },
}

/// Computes the pre-shift magnitude for `index`.
///
/// # Errors
///
/// Returns [`TableError::IndexOutOfRange`] for indices outside `0..TABLE_LEN`.
pub fn raw_magnitude(index: usize) -> Result<u32, TableError> {
    if index >= TABLE_LEN {
        return Err(TableError::IndexOutOfRange {
            index,
            len: TABLE_LEN,
        });
    }
    if index == 0 {
        return Ok(ZERO_SEED);
    }

    // `as` truncates toward zero; the product is negative for 0 < ratio < 1.
    let scaled = ((index as f64 / PERCENT).ln() * SCALE) as i64;
    u32::try_from(-scaled).map_err(|_| TableError::Overflow {
        index,
        raw: u32::MAX,
        shift: None,
    })
}

/// One position of the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// Position in the table.
    pub index: usize,
    /// Magnitude before the shift step.
    pub raw_value: u32,
    /// Value written to the table.
    pub encoded_value: u8,
    /// Shift applied, if any.
    pub shift: Option<Shift>,
}

impl TableEntry {
    /// Derives the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IndexOutOfRange`] for indices outside the table,
    /// or [`TableError::Overflow`] if the cascade cannot bring the magnitude
    /// into 8 bits.
    pub fn derive(index: usize) -> Result<Self, TableError> {
        Self::encode(index, raw_magnitude(index)?)
    }

    /// Runs the shift cascade on a pre-shift magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Overflow`] if the selected shift leaves more
    /// than 8 bits.
    pub fn encode(index: usize, raw_value: u32) -> Result<Self, TableError> {
        let shift = Shift::for_magnitude(raw_value);
        let shifted = raw_value >> shift.map_or(0, Shift::bits);
        let encoded_value = u8::try_from(shifted).map_err(|_| TableError::Overflow {
            index,
            raw: raw_value,
            shift,
        })?;

        Ok(Self {
            index,
            raw_value,
            encoded_value,
            shift,
        })
    }

    /// The encoded value shifted back up; the raw magnitude minus the dropped bits.
    #[must_use]
    pub fn decoded(&self) -> u32 {
        u32::from(self.encoded_value) << self.shift.map_or(0, Shift::bits)
    }
}

/// The complete table, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTable {
    entries: Vec<TableEntry>,
}

impl LogTable {
    /// Derives all [`TABLE_LEN`] entries.
    ///
    /// # Errors
    ///
    /// Propagates the first [`TableError`] raised by an entry.
    pub fn build() -> Result<Self, TableError> {
        let entries = (0..TABLE_LEN)
            .map(TableEntry::derive)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// All entries in index order.
    #[must_use]
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TableEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The encoded values as the array a consumer would see.
    #[must_use]
    pub fn values(&self) -> [u8; TABLE_LEN] {
        let mut out = [0u8; TABLE_LEN];
        for (slot, entry) in out.iter_mut().zip(&self.entries) {
            *slot = entry.encoded_value;
        }
        out
    }

    /// Number of entries that received `shift`.
    #[must_use]
    pub fn shifted_count(&self, shift: Shift) -> usize {
        self.entries
            .iter()
            .filter(|e| e.shift == Some(shift))
            .count()
    }
}
