//! Codec-specific sequence-parameter-set field extraction
//!
//! These extractors are not full syntax parsers. They locate the first
//! parameter-set unit with a stream reader and pull the fixed-position
//! profile/level fields out of it, which is all the conformance layer
//! needs.

pub mod avc;
pub mod hevc;

pub use avc::{extract_avc_sps, AvcSequenceParameterSet};
pub use hevc::{extract_hevc_sps, HevcSequenceParameterSet};
