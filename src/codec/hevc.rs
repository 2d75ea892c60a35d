//! HEVC (H.265) sequence-parameter-set field extraction

use crate::stream::{create_reader, Slicing};
use crate::types::StreamDescription;

/// NAL unit type code of an HEVC sequence parameter set
const UNIT_TYPE_SPS: u8 = 33;

/// Fixed-position fields from an HEVC sequence parameter set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HevcSequenceParameterSet {
    /// general_profile_idc
    pub profile: u8,
    /// Level with one implied decimal place, recovered from the
    /// 30x-scaled general_level_idc (integer division, so a raw value
    /// that is not a multiple of 3 floors)
    pub level: u8,
}

/// Scan `bitstream` for the first SPS NAL unit and extract its profile
/// and level fields.
///
/// Units too short to carry the fields are skipped and scanning
/// continues with the next unit. Returns `None` when no qualifying
/// unit exists.
pub fn extract_hevc_sps(bitstream: Vec<u8>) -> Option<HevcSequenceParameterSet> {
    let streams = [StreamDescription::from_data(bitstream)];
    let mut reader = create_reader(&streams)?;

    while let Some(unit) = reader.read(Slicing::NalUnit) {
        let start_code_len = unit.start_code_len as usize;
        let bytes = reader.region_contents(unit.region);
        if bytes.len() <= start_code_len {
            continue;
        }

        let nal_unit_type = (bytes[start_code_len] & 0x7E) >> 1;
        if nal_unit_type == UNIT_TYPE_SPS && bytes.len() > start_code_len + 17 {
            #[cfg(feature = "tracing")]
            tracing::debug!("found hevc sps at offset {}", unit.region.offset);

            let general_profile_idc = bytes[start_code_len + 2];
            return Some(HevcSequenceParameterSet {
                profile: general_profile_idc & 0x1F,
                level: bytes[start_code_len + 17] / 3,
            });
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("no hevc sps in bitstream");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// SPS NAL unit (type 33) with the given profile and level bytes
    /// at their fixed positions.
    fn sps_unit(general_profile_idc: u8, general_level_idc: u8) -> Vec<u8> {
        let mut unit = vec![0x00, 0x00, 0x00, 0x01, 0x42, 0x01];
        unit.push(general_profile_idc);
        unit.extend_from_slice(&[0x00; 14]);
        unit.push(general_level_idc);
        unit
    }

    #[test]
    fn test_extract_profile_and_level() {
        let sps = extract_hevc_sps(sps_unit(0x01, 120)).unwrap();
        assert_eq!(sps.profile, 1);
        assert_eq!(sps.level, 40);
    }

    #[test]
    fn test_profile_masked_to_low_five_bits() {
        // general_profile_space and tier bits above profile_idc are
        // dropped
        let sps = extract_hevc_sps(sps_unit(0xE2, 93)).unwrap();
        assert_eq!(sps.profile, 2);
        assert_eq!(sps.level, 31);
    }

    #[test]
    fn test_level_division_floors() {
        let sps = extract_hevc_sps(sps_unit(0x01, 91)).unwrap();
        assert_eq!(sps.level, 30);
    }

    #[test]
    fn test_short_sps_unit_skipped() {
        // 17 bytes after the start code is one short of level_idc
        let mut short = vec![0x00, 0x00, 0x00, 0x01, 0x42, 0x01];
        short.extend_from_slice(&[0x00; 15]);
        assert!(extract_hevc_sps(short).is_none());
    }

    #[test]
    fn test_no_start_code() {
        assert!(extract_hevc_sps(vec![0x42, 0x01, 0x01]).is_none());
    }

    #[test]
    fn test_non_sps_unit_skipped() {
        // An AUD (type 35) first, then the SPS
        let mut bitstream = vec![0x00, 0x00, 0x01, 0x46, 0x01, 0x10];
        bitstream.extend_from_slice(&sps_unit(0x01, 60));
        let sps = extract_hevc_sps(bitstream).unwrap();
        assert_eq!(sps.profile, 1);
        assert_eq!(sps.level, 20);
    }
}
