//! Core types for stream description and conformance checking

/// A half-open byte range in a stream's own address space.
///
/// For a constituent stream the address space is local to that buffer;
/// for a composed stream it covers the concatenation of all
/// constituents. A region produced by a successful read always lies
/// within the total length of the stream that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    /// Byte offset of the first byte of the range
    pub offset: u64,
    /// Number of bytes in the range
    pub size: u64,
}

/// One constituent byte buffer of a logical elementary stream.
///
/// The buffer is immutable for the lifetime of any reader built over
/// it; readers borrow it and never copy or mutate it except when
/// producing extracted region contents.
#[derive(Debug, Clone, Default)]
pub struct StreamDescription {
    /// Raw coded bytes (start-code delimited elementary stream syntax)
    pub data: Vec<u8>,
    /// Out-of-band SPS region within `data`, when the container
    /// supplied one
    pub sps: Option<Region>,
    /// Out-of-band PPS region within `data`, when the container
    /// supplied one
    pub pps: Option<Region>,
}

impl StreamDescription {
    /// Wrap a raw coded buffer with no out-of-band header regions.
    pub fn from_data(data: Vec<u8>) -> Self {
        Self {
            data,
            sps: None,
            pps: None,
        }
    }

    /// Total length of the underlying buffer in bytes.
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    /// True when the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Expected AVC profile identifiers supported by the conformance
/// checker.
///
/// These stand in for the identifier values owned by the calling
/// configuration system; each maps to a fixed profile_idc and
/// constraint-flag pair in the lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvcProfile {
    /// Baseline (profile_idc 66, no constraint flags)
    Baseline,
    /// Constrained Baseline (profile_idc 66 with constraint_set1)
    ConstrainedBaseline,
    /// Main (profile_idc 77)
    Main,
    /// Extended (profile_idc 88)
    Extended,
    /// High (profile_idc 100)
    High,
}

/// Expected AVC level identifiers supported by the conformance checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvcLevel {
    /// Level 1
    L1,
    /// Level 1b
    L1b,
    /// Level 1.1
    L1_1,
    /// Level 1.2
    L1_2,
    /// Level 1.3
    L1_3,
    /// Level 2
    L2,
    /// Level 2.1
    L2_1,
    /// Level 2.2
    L2_2,
    /// Level 3
    L3,
    /// Level 3.1
    L3_1,
    /// Level 3.2
    L3_2,
    /// Level 4
    L4,
    /// Level 4.1
    L4_1,
    /// Level 4.2
    L4_2,
    /// Level 5
    L5,
    /// Level 5.1
    L5_1,
}

/// Expected HEVC profile identifiers supported by the conformance
/// checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HevcProfile {
    /// Main (general_profile_idc 1)
    Main,
    /// Main 10 (general_profile_idc 2)
    Main10,
}

/// Expected HEVC level identifiers supported by the conformance
/// checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HevcLevel {
    /// Level 1
    L1,
    /// Level 2
    L2,
    /// Level 2.1
    L2_1,
    /// Level 3
    L3,
    /// Level 3.1
    L3_1,
    /// Level 4
    L4,
    /// Level 4.1
    L4_1,
    /// Level 5
    L5,
    /// Level 5.1
    L5_1,
    /// Level 5.2
    L5_2,
    /// Level 6
    L6,
    /// Level 6.1
    L6_1,
    /// Level 6.2
    L6_2,
}
