//! Size reporting for encode and decode runs.
//!
//! A [`SizeReport`] holds the byte counts of one invocation and derives the
//! percentage shown in verbose mode. Encoding reports how much smaller the
//! CBOR-LD output is, decoding how much larger the JSON-LD output is. Values
//! are printed as computed, so an encode that grows the data reports a
//! negative "smaller" percentage.

use std::fmt;

use crate::utils::format_bytes;

/// Direction of a transcode run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// JSON-LD to CBOR-LD.
    Encode,
    /// CBOR-LD to JSON-LD.
    Decode,
}

/// Input and output sizes of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub direction: Direction,
    pub input_size: u64,
    pub output_size: u64,
}

impl SizeReport {
    pub fn new(direction: Direction, input_size: u64, output_size: u64) -> Self {
        Self {
            direction,
            input_size,
            output_size,
        }
    }

    /// Full-precision percentage for this run's direction.
    ///
    /// Encode: `100 - out/in * 100`. Decode: `out/in * 100 - 100`.
    /// An empty input reports 0.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.input_size == 0 {
            return 0.0;
        }
        let scaled = self.output_size as f64 * 100.0 / self.input_size as f64;
        match self.direction {
            Direction::Encode => 100.0 - scaled,
            Direction::Decode => scaled - 100.0,
        }
    }

    /// Percentage rounded to whole numbers for display.
    #[must_use]
    pub fn rounded_ratio(&self) -> i64 {
        self.ratio().round() as i64
    }

    /// One-line summary, e.g. `"60% smaller"` or `"150% larger"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let wording = match self.direction {
            Direction::Encode => "smaller",
            Direction::Decode => "larger",
        };
        format!("{}% {}", self.rounded_ratio(), wording)
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            format_bytes(self.input_size),
            format_bytes(self.output_size),
            self.summary()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ratio() {
        let report = SizeReport::new(Direction::Encode, 1000, 400);
        assert_eq!(report.ratio(), 60.0);
        assert_eq!(report.summary(), "60% smaller");
    }

    #[test]
    fn test_decode_ratio() {
        let report = SizeReport::new(Direction::Decode, 400, 1000);
        assert_eq!(report.ratio(), 150.0);
        assert_eq!(report.summary(), "150% larger");
    }

    #[test]
    fn test_encode_growth_reports_negative_smaller() {
        let report = SizeReport::new(Direction::Encode, 100, 125);
        assert_eq!(report.summary(), "-25% smaller");
    }

    #[test]
    fn test_ratio_rounds_for_display_only() {
        let report = SizeReport::new(Direction::Encode, 3, 1);
        assert!((report.ratio() - 66.666_666).abs() < 1e-3);
        assert_eq!(report.rounded_ratio(), 67);
    }

    #[test]
    fn test_empty_input_reports_zero() {
        let report = SizeReport::new(Direction::Decode, 0, 10);
        assert_eq!(report.ratio(), 0.0);
        assert_eq!(report.summary(), "0% larger");
    }

    #[test]
    fn test_display_includes_sizes() {
        let report = SizeReport::new(Direction::Encode, 2048, 512);
        assert_eq!(report.to_string(), "2.00 KiB -> 512 B (75% smaller)");
    }
}
