//! Capacity Formatting
//!
//! Byte counts are shown in decimal megabytes, gigabytes or terabytes using the
//! French unit labels DSM users are used to (`Mo`, `Go`, `To`).
//!
//! The tier is chosen from the number of decimal digits of the byte count, not
//! from its logarithm: more than 12 digits is `To`, more than 9 is `Go`, anything
//! else is `Mo`. `999_999_999` bytes therefore renders as `1000 Mo`.

use std::fmt;

/// Display unit for a capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityUnit {
    Mo,
    Go,
    To,
}

impl CapacityUnit {
    pub fn label(self) -> &'static str {
        match self {
            CapacityUnit::Mo => "Mo",
            CapacityUnit::Go => "Go",
            CapacityUnit::To => "To",
        }
    }

    fn divisor(self) -> f64 {
        match self {
            CapacityUnit::Mo => 1e6,
            CapacityUnit::Go => 1e9,
            CapacityUnit::To => 1e12,
        }
    }

    /// Tier for a byte count, by decimal digit count.
    pub fn for_bytes(bytes: u64) -> Self {
        let digits = bytes.to_string().len();
        if digits > 12 {
            CapacityUnit::To
        } else if digits > 9 {
            CapacityUnit::Go
        } else {
            CapacityUnit::Mo
        }
    }
}

impl fmt::Display for CapacityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scaled capacity, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacity {
    pub value: f64,
    pub unit: CapacityUnit,
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Scale `bytes` into its display tier.
pub fn render(bytes: u64) -> Capacity {
    let unit = CapacityUnit::for_bytes(bytes);
    Capacity {
        value: round2(bytes as f64 / unit.divisor()),
        unit,
    }
}

/// Round to two decimal places, ties to even (`0.125` becomes `0.12`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `used / total * 100` rounded to two decimals; `None` when `total` is zero.
pub fn used_percent(used: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(round2(used as f64 / total as f64 * 100.0))
}
