//! HEVC profile/level conformance checking

use super::Conformance;
use crate::codec::hevc::extract_hevc_sps;
use crate::types::{HevcLevel, HevcProfile};

/// Raw general_profile_idc announced by each supported profile.
fn profile_code(profile: HevcProfile) -> u8 {
    match profile {
        HevcProfile::Main => 1,
        HevcProfile::Main10 => 2,
    }
}

/// Expected level value (one implied decimal place) for each supported
/// level.
fn level_code(level: HevcLevel) -> u8 {
    match level {
        HevcLevel::L1 => 10,
        HevcLevel::L2 => 20,
        HevcLevel::L2_1 => 21,
        HevcLevel::L3 => 30,
        HevcLevel::L3_1 => 31,
        HevcLevel::L4 => 40,
        HevcLevel::L4_1 => 41,
        HevcLevel::L5 => 50,
        HevcLevel::L5_1 => 51,
        HevcLevel::L5_2 => 52,
        HevcLevel::L6 => 60,
        HevcLevel::L6_1 => 61,
        HevcLevel::L6_2 => 62,
    }
}

/// Check that the first SPS in `bitstream` announces the expected
/// profile and level.
pub fn check_hevc_stream(
    profile: HevcProfile,
    level: HevcLevel,
    bitstream: Vec<u8>,
) -> Conformance {
    let sps = match extract_hevc_sps(bitstream) {
        Some(sps) => sps,
        None => return Conformance::sps_not_found(),
    };

    let expected_profile = profile_code(profile);
    let expected_level = level_code(level);

    let mut result = Conformance::pass();
    if sps.profile != expected_profile {
        result.record_mismatch("profile", sps.profile, expected_profile);
    }
    if sps.level != expected_level {
        result.record_mismatch("level", sps.level, expected_level);
    }
    result
}
