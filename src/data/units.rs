//! Human-readable formatting of byte counts and bit rates.

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, UnitTableError};

/// Scaling factor between consecutive units of a table.
const STEP: f64 = 1024.0;

/// Ordered unit labels, smallest first, each 1024x the previous.
///
/// The label used for an exact zero defaults to the first label and can be
/// overridden (for example `"Byte"` instead of `"B"`).
///
/// # Example
///
/// ```
/// use eupnea::data::{format, UnitTable};
///
/// let table = UnitTable::bytes();
/// assert_eq!(format(1536.0, &table).unwrap(), "1.50 KB");
///
/// let table = UnitTable::bytes().with_zero_label("Byte");
/// assert_eq!(format(0.0, &table).unwrap(), "0 Byte");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUnitTable", into = "RawUnitTable")]
pub struct UnitTable {
    labels: Vec<String>,
    zero_label: Option<String>,
}

/// Serialized shape of a [`UnitTable`], validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawUnitTable {
    labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    zero_label: Option<String>,
}

impl UnitTable {
    /// Build a table from labels ordered smallest first.
    pub fn new<I, S>(labels: I) -> Result<Self, UnitTableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(UnitTableError::Empty);
        }
        Ok(Self {
            labels,
            zero_label: None,
        })
    }

    /// Storage sizes: `B`, `KB`, `MB`, `GB`, `TB`.
    pub fn bytes() -> Self {
        Self::builtin(&["B", "KB", "MB", "GB", "TB"])
    }

    /// Network throughput: `Bit/s` up to `TBit/s`.
    pub fn bitrate() -> Self {
        Self::builtin(&["Bit/s", "KBit/s", "MBit/s", "GBit/s", "TBit/s"])
    }

    fn builtin(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            zero_label: None,
        }
    }

    /// Use a different label when the magnitude is exactly zero.
    pub fn with_zero_label(mut self, label: impl Into<String>) -> Self {
        self.zero_label = Some(label.into());
        self
    }

    /// All labels, smallest first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label rendered after an exact zero.
    pub fn zero_label(&self) -> &str {
        self.zero_label.as_deref().unwrap_or(self.labels[0].as_str())
    }

    /// Number of tiers in the table.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; a table holds at least one label.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Index of the largest unit not exceeding `magnitude`.
    ///
    /// This is `floor(log_1024(magnitude))` clamped into the table, computed
    /// by comparison so exact powers of 1024 land on their own tier.
    fn tier(&self, magnitude: f64) -> usize {
        let mut tier = 0;
        let mut threshold = STEP;
        while tier + 1 < self.labels.len() && magnitude >= threshold {
            tier += 1;
            threshold *= STEP;
        }
        tier
    }
}

impl TryFrom<RawUnitTable> for UnitTable {
    type Error = UnitTableError;

    fn try_from(raw: RawUnitTable) -> Result<Self, Self::Error> {
        let table = Self::new(raw.labels)?;
        Ok(match raw.zero_label {
            Some(label) => table.with_zero_label(label),
            None => table,
        })
    }
}

impl From<UnitTable> for RawUnitTable {
    fn from(table: UnitTable) -> Self {
        Self {
            labels: table.labels,
            zero_label: table.zero_label,
        }
    }
}

/// The unit tables a render pass formats with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Units {
    /// Table for byte quantities (storage, memory).
    pub storage: UnitTable,
    /// Table for throughput in bits per second.
    pub bitrate: UnitTable,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            storage: UnitTable::bytes(),
            bitrate: UnitTable::bitrate(),
        }
    }
}

/// Format a magnitude with the largest fitting unit of `table`.
///
/// Zero renders as `"0 <zero label>"`, magnitudes below the second tier as a
/// rounded integer, everything else with two decimals. Magnitudes beyond the
/// last unit stay in the last unit.
pub fn format(magnitude: f64, table: &UnitTable) -> Result<String, FormatError> {
    if !magnitude.is_finite() {
        return Err(FormatError::NonFinite(magnitude));
    }
    if magnitude < 0.0 {
        return Err(FormatError::Negative(magnitude));
    }
    if magnitude == 0.0 {
        return Ok(format!("0 {}", table.zero_label()));
    }

    let tier = table.tier(magnitude);
    let label = &table.labels[tier];
    if tier == 0 {
        Ok(format!("{} {}", magnitude.round(), label))
    } else {
        let scaled = magnitude / STEP.powi(tier as i32);
        Ok(format!("{:.2} {}", scaled, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;
    const TIB: f64 = GIB * 1024.0;

    #[test]
    fn test_zero_uses_first_label() {
        assert_eq!(format(0.0, &UnitTable::bytes()).unwrap(), "0 B");
        assert_eq!(format(0.0, &UnitTable::bitrate()).unwrap(), "0 Bit/s");
    }

    #[test]
    fn test_zero_uses_override_label() {
        let table = UnitTable::bytes().with_zero_label("Byte");
        assert_eq!(format(0.0, &table).unwrap(), "0 Byte");
        // The override only affects zero
        assert_eq!(format(12.0, &table).unwrap(), "12 B");
    }

    #[test]
    fn test_first_tier_is_rounded_integer() {
        let table = UnitTable::bytes();
        assert_eq!(format(1.0, &table).unwrap(), "1 B");
        assert_eq!(format(512.4, &table).unwrap(), "512 B");
        assert_eq!(format(1023.0, &table).unwrap(), "1023 B");
    }

    #[test]
    fn test_fractional_magnitude_below_one_stays_in_first_tier() {
        let table = UnitTable::bitrate();
        assert_eq!(format(0.4, &table).unwrap(), "0 Bit/s");
        assert_eq!(format(0.6, &table).unwrap(), "1 Bit/s");
    }

    #[test]
    fn test_higher_tiers_have_two_decimals() {
        let table = UnitTable::bytes();
        assert_eq!(format(KIB, &table).unwrap(), "1.00 KB");
        assert_eq!(format(1536.0, &table).unwrap(), "1.50 KB");
        assert_eq!(format(5.0 * GIB, &table).unwrap(), "5.00 GB");
        assert_eq!(format(3.0 * TIB, &table).unwrap(), "3.00 TB");
    }

    #[test]
    fn test_exact_powers_land_on_their_own_tier() {
        let table = UnitTable::bitrate();
        assert_eq!(format(MIB, &table).unwrap(), "1.00 MBit/s");
        assert_eq!(format(2.0 * MIB, &table).unwrap(), "2.00 MBit/s");
        assert_eq!(format(GIB, &table).unwrap(), "1.00 GBit/s");
    }

    #[test]
    fn test_beyond_last_unit_clamps_to_last_unit() {
        let table = UnitTable::bytes();
        assert_eq!(format(2048.0 * TIB, &table).unwrap(), "2048.00 TB");

        let short = UnitTable::new(["B", "KB"]).unwrap();
        assert_eq!(format(3.0 * MIB, &short).unwrap(), "3072.00 KB");
    }

    #[test]
    fn test_single_label_table_never_scales() {
        let table = UnitTable::new(["ops"]).unwrap();
        assert_eq!(format(5000.0, &table).unwrap(), "5000 ops");
    }

    #[test]
    fn test_output_ends_with_a_table_label() {
        let table = UnitTable::bitrate();
        for magnitude in [0.0, 0.3, 1.0, 999.0, 4096.0, 7.5 * MIB, 42.0 * GIB, 9.0 * TIB * KIB] {
            let formatted = format(magnitude, &table).unwrap();
            assert!(
                table.labels().iter().any(|l| formatted.ends_with(l.as_str())),
                "{formatted} does not end with a label"
            );
        }
    }

    #[test]
    fn test_monotonic_within_a_tier() {
        let table = UnitTable::bytes();
        let parse = |s: String| s.split(' ').next().unwrap().parse::<f64>().unwrap();

        let mut previous = parse(format(MIB, &table).unwrap());
        for step in 1..200 {
            let current = parse(format(MIB + step as f64 * 5000.0, &table).unwrap());
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_rejects_negative() {
        assert_eq!(
            format(-1.0, &UnitTable::bytes()),
            Err(FormatError::Negative(-1.0))
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            format(f64::NAN, &UnitTable::bytes()),
            Err(FormatError::NonFinite(_))
        ));
        assert_eq!(
            format(f64::INFINITY, &UnitTable::bitrate()),
            Err(FormatError::NonFinite(f64::INFINITY))
        );
        assert!(format(f64::NEG_INFINITY, &UnitTable::bitrate()).is_err());
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let labels: [&str; 0] = [];
        assert_eq!(UnitTable::new(labels), Err(UnitTableError::Empty));
    }

    #[test]
    fn test_deserialize_with_zero_label() {
        let json = r#"{ "labels": ["B", "KB"], "zero_label": "Byte" }"#;
        let table: UnitTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.zero_label(), "Byte");
    }

    #[test]
    fn test_deserialize_rejects_empty_labels() {
        let json = r#"{ "labels": [] }"#;
        assert!(serde_json::from_str::<UnitTable>(json).is_err());
    }
}
