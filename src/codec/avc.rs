//! AVC (H.264) sequence-parameter-set field extraction

use crate::stream::{create_reader, Slicing};
use crate::types::StreamDescription;

/// NAL unit type code of an AVC sequence parameter set
const UNIT_TYPE_SPS: u8 = 7;

/// Fixed-position fields from an AVC sequence parameter set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvcSequenceParameterSet {
    /// profile_idc
    pub profile: u8,
    /// Constraint-set flags byte following profile_idc
    pub constraints: u8,
    /// level_idc
    pub level: u8,
}

impl AvcSequenceParameterSet {
    /// constraint_set0_flag
    pub const CONSTRAINT_SET0: u8 = 0x80;
    /// constraint_set1_flag
    pub const CONSTRAINT_SET1: u8 = 0x40;
    /// constraint_set2_flag
    pub const CONSTRAINT_SET2: u8 = 0x20;
    /// constraint_set3_flag
    pub const CONSTRAINT_SET3: u8 = 0x10;
    /// constraint_set4_flag
    pub const CONSTRAINT_SET4: u8 = 0x08;
    /// constraint_set5_flag
    pub const CONSTRAINT_SET5: u8 = 0x04;
}

/// Scan `bitstream` for the first SPS NAL unit and extract its
/// profile, constraints and level bytes.
///
/// Units too short to carry the fields are skipped and scanning
/// continues with the next unit. Returns `None` when no qualifying
/// unit exists, a normal outcome for malformed or wrong-codec input.
pub fn extract_avc_sps(bitstream: Vec<u8>) -> Option<AvcSequenceParameterSet> {
    let streams = [StreamDescription::from_data(bitstream)];
    let mut reader = create_reader(&streams)?;

    while let Some(unit) = reader.read(Slicing::NalUnit) {
        let start_code_len = unit.start_code_len as usize;
        let bytes = reader.region_contents(unit.region);
        if bytes.len() <= start_code_len {
            continue;
        }

        let nal_unit_type = bytes[start_code_len] & 0x1F;
        if nal_unit_type == UNIT_TYPE_SPS && bytes.len() > start_code_len + 3 {
            #[cfg(feature = "tracing")]
            tracing::debug!("found avc sps at offset {}", unit.region.offset);

            return Some(AvcSequenceParameterSet {
                profile: bytes[start_code_len + 1],
                constraints: bytes[start_code_len + 2],
                level: bytes[start_code_len + 3],
            });
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("no avc sps in bitstream");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_minimal_sps() {
        let bitstream = vec![0x00, 0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1E];
        let sps = extract_avc_sps(bitstream).unwrap();
        assert_eq!(sps.profile, 66);
        assert_eq!(sps.constraints, 0);
        assert_eq!(sps.level, 30);
    }

    #[test]
    fn test_non_sps_units_skipped() {
        // A slice unit (type 1), then the SPS
        let bitstream = vec![
            0x00, 0x00, 0x01, 0x41, 0x9A, 0x00, 0x00, 0x00, 0x01, 0x67, 0x64, 0x00, 0x28,
        ];
        let sps = extract_avc_sps(bitstream).unwrap();
        assert_eq!(sps.profile, 100);
        assert_eq!(sps.constraints, 0);
        assert_eq!(sps.level, 40);
    }

    #[test]
    fn test_short_sps_unit_skipped() {
        // The first SPS unit is truncated before level_idc; the later
        // complete one is still eligible
        let bitstream = vec![
            0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x00, 0x01, 0x67, 0x4D, 0x40, 0x33,
        ];
        let sps = extract_avc_sps(bitstream).unwrap();
        assert_eq!(sps.profile, 77);
        assert_eq!(sps.constraints, 0x40);
        assert_eq!(sps.level, 51);
    }

    #[test]
    fn test_no_sps_found() {
        assert!(extract_avc_sps(vec![]).is_none());
        assert!(extract_avc_sps(vec![0x12, 0x34, 0x56]).is_none());
        // Start code with a non-SPS unit only
        assert!(extract_avc_sps(vec![0x00, 0x00, 0x01, 0x41, 0x9A]).is_none());
    }
}
