//! Profile/level conformance checking
//!
//! A checker runs the matching extractor over a bitstream, maps the
//! expected profile/level identifiers to the raw codes a conforming
//! stream would announce, and reports every disagreement as one
//! diagnostic line.

mod avc;
mod hevc;

pub use avc::check_avc_stream;
pub use hevc::check_hevc_stream;

/// Outcome of a conformance check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conformance {
    /// True when every extracted field matched the expected raw codes
    pub passed: bool,
    /// One line per failed check; empty on a full pass
    pub message: String,
}

impl Conformance {
    fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    fn sps_not_found() -> Self {
        Self {
            passed: false,
            message: "sps is not found in bitstream\n".to_string(),
        }
    }

    fn record_mismatch(&mut self, field: &str, actual: u8, expected: u8) {
        self.passed = false;
        self.message.push_str(&format!(
            "sps {} is {} instead of {}\n",
            field, actual, expected
        ));
    }
}
