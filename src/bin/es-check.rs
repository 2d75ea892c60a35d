//! Check a raw elementary stream against an expected profile/level
//!
//! Usage: es-check <avc|hevc> <profile> <level> <stream>

use std::env;
use std::process;

use esverify::{
    check_avc_file, check_hevc_file, AvcLevel, AvcProfile, Conformance, HevcLevel, HevcProfile,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 5 {
        eprintln!("Usage: {} <avc|hevc> <profile> <level> <stream>", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} avc baseline 3.0 clip.h264", args[0]);
        eprintln!("  {} hevc main 4.1 clip.h265", args[0]);
        process::exit(1);
    }

    let codec = &args[1];
    let profile = &args[2];
    let level = &args[3];
    let path = &args[4];

    let result: Conformance = match codec.as_str() {
        "avc" => check_avc_file(path, avc_profile(profile)?, avc_level(level)?)?,
        "hevc" => check_hevc_file(path, hevc_profile(profile)?, hevc_level(level)?)?,
        other => {
            eprintln!("Unknown codec: {} (expected avc or hevc)", other);
            process::exit(1);
        }
    };

    if result.passed {
        println!("{}: conformant", path);
        Ok(())
    } else {
        eprint!("{}", result.message);
        process::exit(1);
    }
}

fn avc_profile(name: &str) -> Result<AvcProfile, String> {
    match name {
        "baseline" => Ok(AvcProfile::Baseline),
        "constrained-baseline" => Ok(AvcProfile::ConstrainedBaseline),
        "main" => Ok(AvcProfile::Main),
        "extended" => Ok(AvcProfile::Extended),
        "high" => Ok(AvcProfile::High),
        _ => Err(format!("Unknown avc profile: {}", name)),
    }
}

fn avc_level(name: &str) -> Result<AvcLevel, String> {
    match name {
        "1" => Ok(AvcLevel::L1),
        "1b" => Ok(AvcLevel::L1b),
        "1.1" => Ok(AvcLevel::L1_1),
        "1.2" => Ok(AvcLevel::L1_2),
        "1.3" => Ok(AvcLevel::L1_3),
        "2" => Ok(AvcLevel::L2),
        "2.1" => Ok(AvcLevel::L2_1),
        "2.2" => Ok(AvcLevel::L2_2),
        "3" | "3.0" => Ok(AvcLevel::L3),
        "3.1" => Ok(AvcLevel::L3_1),
        "3.2" => Ok(AvcLevel::L3_2),
        "4" | "4.0" => Ok(AvcLevel::L4),
        "4.1" => Ok(AvcLevel::L4_1),
        "4.2" => Ok(AvcLevel::L4_2),
        "5" | "5.0" => Ok(AvcLevel::L5),
        "5.1" => Ok(AvcLevel::L5_1),
        _ => Err(format!("Unknown avc level: {}", name)),
    }
}

fn hevc_profile(name: &str) -> Result<HevcProfile, String> {
    match name {
        "main" => Ok(HevcProfile::Main),
        "main10" => Ok(HevcProfile::Main10),
        _ => Err(format!("Unknown hevc profile: {}", name)),
    }
}

fn hevc_level(name: &str) -> Result<HevcLevel, String> {
    match name {
        "1" => Ok(HevcLevel::L1),
        "2" => Ok(HevcLevel::L2),
        "2.1" => Ok(HevcLevel::L2_1),
        "3" | "3.0" => Ok(HevcLevel::L3),
        "3.1" => Ok(HevcLevel::L3_1),
        "4" | "4.0" => Ok(HevcLevel::L4),
        "4.1" => Ok(HevcLevel::L4_1),
        "5" | "5.0" => Ok(HevcLevel::L5),
        "5.1" => Ok(HevcLevel::L5_1),
        "5.2" => Ok(HevcLevel::L5_2),
        "6" | "6.0" => Ok(HevcLevel::L6),
        "6.1" => Ok(HevcLevel::L6_1),
        "6.2" => Ok(HevcLevel::L6_2),
        _ => Err(format!("Unknown hevc level: {}", name)),
    }
}
