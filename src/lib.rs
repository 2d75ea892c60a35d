//! # esverify
//!
//! Pure Rust elementary-stream walking and AVC/HEVC profile/level
//! conformance checking.
//!
//! The crate has two layers:
//!
//! - A composable [`StreamReader`] abstraction that walks a
//!   start-code delimited bitstream as a sequence of NAL units,
//!   whether the bitstream arrives as one contiguous buffer or as
//!   several buffers treated as one logical stream (for example a
//!   codec-configuration buffer followed by a payload buffer).
//! - Sequence-parameter-set field extractors for AVC and HEVC built on
//!   the reader, and conformance checkers that compare the extracted
//!   profile/level fields against expected identifiers and produce a
//!   pass/fail result with a human-readable diagnostic.
//!
//! This is not a full syntax parser: no entropy decoding and no full
//! SPS/VUI parsing, only the fixed-position field extraction needed to
//! validate profile and level.
//!
//! ## Example
//!
//! ```
//! use esverify::{check_avc_stream, AvcLevel, AvcProfile};
//!
//! let bitstream = vec![0x00, 0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1E];
//!
//! let result = check_avc_stream(AvcProfile::Baseline, AvcLevel::L3, bitstream);
//! assert!(result.passed);
//! assert!(result.message.is_empty());
//! ```

pub mod codec;
pub mod conformance;
pub mod error;
pub mod stream;
pub mod types;

pub use conformance::{check_avc_stream, check_hevc_stream, Conformance};
pub use error::VerifyError;
pub use stream::{
    create_reader, CombinedStreamReader, SingleStreamReader, Slicing, StreamReader, StreamUnit,
};
pub use types::*;

use std::fs;
use std::path::Path;

/// Check a file containing a raw AVC elementary stream against an
/// expected profile/level pair.
///
/// Reads the whole file and delegates to [`check_avc_stream`].
pub fn check_avc_file<P: AsRef<Path>>(
    path: P,
    profile: AvcProfile,
    level: AvcLevel,
) -> Result<Conformance, VerifyError> {
    Ok(check_avc_stream(profile, level, read_stream(path.as_ref())?))
}

/// Check a file containing a raw HEVC elementary stream against an
/// expected profile/level pair.
///
/// Reads the whole file and delegates to [`check_hevc_stream`].
pub fn check_hevc_file<P: AsRef<Path>>(
    path: P,
    profile: HevcProfile,
    level: HevcLevel,
) -> Result<Conformance, VerifyError> {
    Ok(check_hevc_stream(profile, level, read_stream(path.as_ref())?))
}

fn read_stream(path: &Path) -> Result<Vec<u8>, VerifyError> {
    if !path.exists() {
        return Err(VerifyError::FileNotFound(path.to_path_buf()));
    }
    Ok(fs::read(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_file_not_found() {
        let result = check_avc_file("/nonexistent/stream.h264", AvcProfile::Main, AvcLevel::L3);
        assert!(matches!(result, Err(VerifyError::FileNotFound(_))));
    }
}
