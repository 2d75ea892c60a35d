//! AVC profile/level conformance checking

use super::Conformance;
use crate::codec::avc::{extract_avc_sps, AvcSequenceParameterSet};
use crate::types::{AvcLevel, AvcProfile};

/// Raw profile_idc and constraint flags announced by each supported
/// profile.
fn profile_codes(profile: AvcProfile) -> (u8, u8) {
    match profile {
        AvcProfile::Baseline => (66, 0),
        AvcProfile::ConstrainedBaseline => (66, AvcSequenceParameterSet::CONSTRAINT_SET1),
        AvcProfile::Main => (77, 0),
        AvcProfile::Extended => (88, 0),
        AvcProfile::High => (100, 0),
    }
}

/// Raw level_idc announced by each supported level.
fn level_code(level: AvcLevel) -> u8 {
    match level {
        AvcLevel::L1 => 1,
        AvcLevel::L1b => 9,
        AvcLevel::L1_1 => 11,
        AvcLevel::L1_2 => 12,
        AvcLevel::L1_3 => 13,
        AvcLevel::L2 => 20,
        AvcLevel::L2_1 => 21,
        AvcLevel::L2_2 => 22,
        AvcLevel::L3 => 30,
        AvcLevel::L3_1 => 31,
        AvcLevel::L3_2 => 32,
        AvcLevel::L4 => 40,
        AvcLevel::L4_1 => 41,
        AvcLevel::L4_2 => 42,
        AvcLevel::L5 => 50,
        AvcLevel::L5_1 => 51,
    }
}

/// Check that the first SPS in `bitstream` announces the expected
/// profile and level.
///
/// A missing SPS and every mismatched field are reported in the
/// returned [`Conformance`] message, one line each.
pub fn check_avc_stream(profile: AvcProfile, level: AvcLevel, bitstream: Vec<u8>) -> Conformance {
    let sps = match extract_avc_sps(bitstream) {
        Some(sps) => sps,
        None => return Conformance::sps_not_found(),
    };

    let (expected_profile, expected_constraints) = profile_codes(profile);
    let expected_level = level_code(level);

    let mut result = Conformance::pass();
    if sps.profile != expected_profile {
        result.record_mismatch("profile", sps.profile, expected_profile);
    }
    if sps.constraints != expected_constraints {
        result.record_mismatch("constraints", sps.constraints, expected_constraints);
    }
    if sps.level != expected_level {
        result.record_mismatch("level", sps.level, expected_level);
    }
    result
}
