//! Composable elementary-stream readers
//!
//! A reader walks a compressed video bitstream as a sequence of
//! discrete coding units. The same capability set covers a single
//! contiguous buffer ([`SingleStreamReader`]) and an ordered list of
//! independently supplied buffers treated as one logical stream
//! ([`CombinedStreamReader`]); [`create_reader`] picks the right
//! variant from the input cardinality so callers stay agnostic.

mod combined;
mod single;

pub use combined::CombinedStreamReader;
pub use single::SingleStreamReader;

use crate::types::{Region, StreamDescription};

/// Unit-boundary detection policy for [`StreamReader::read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slicing {
    /// Start-code delimited NAL units (Annex B syntax): a unit begins
    /// at a `00 00 01` or `00 00 00 01` start code and extends to the
    /// byte before the next start code or the end of the stream.
    NalUnit,
}

/// A unit located by [`StreamReader::read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamUnit {
    /// Unit bytes, start code included, in the reader's address space
    pub region: Region,
    /// True when this unit's start code used the 4-byte form, the
    /// signal callers use to distinguish access-unit-delimiting
    /// headers
    pub header: bool,
    /// Length of the matched start code (3 or 4)
    pub start_code_len: u64,
}

/// Capability set shared by every stream-reader variant.
///
/// Regions are expressed in the reader's own address space: local for
/// a single-buffer reader, global for a composed one. Readers own
/// their cursor state exclusively and are driven by one caller at a
/// time; the underlying buffers stay read-only for the reader's
/// lifetime.
pub trait StreamReader {
    /// Scan forward from the cursor for the next unit under `slicing`
    /// and advance the cursor past it.
    ///
    /// `None` means no further unit exists. That is the iteration
    /// termination signal, not an error, and leaves the reader state
    /// unchanged.
    fn read(&mut self, slicing: Slicing) -> Option<StreamUnit>;

    /// Treat `pos` as the next scan origin.
    ///
    /// Returns false when `pos` is beyond the addressable length.
    /// Never scans for a start code itself; the next [`read`] does
    /// that.
    ///
    /// [`read`]: StreamReader::read
    fn seek(&mut self, pos: u64) -> bool;

    /// True when the cursor is at or beyond the end of the stream.
    fn end_of_stream(&self) -> bool;

    /// Copy of the bytes in `region`, clipped to the bytes actually
    /// present.
    ///
    /// Requests running past the end truncate rather than fail:
    /// constituent-stream regions are computed elsewhere and may be
    /// intentionally partial when straddling a composite boundary.
    fn region_contents(&self, region: Region) -> Vec<u8>;
}

/// Build a reader over the given streams.
///
/// Zero streams yields no reader (nothing to read, not an error), one
/// yields a [`SingleStreamReader`], more yield a
/// [`CombinedStreamReader`].
pub fn create_reader(streams: &[StreamDescription]) -> Option<Box<dyn StreamReader + '_>> {
    match streams {
        [] => None,
        [stream] => Some(Box::new(SingleStreamReader::new(stream))),
        _ => Some(Box::new(CombinedStreamReader::new(streams))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reader_empty() {
        assert!(create_reader(&[]).is_none());
    }

    #[test]
    fn test_create_reader_dispatch() {
        let streams = vec![
            StreamDescription::from_data(vec![0x00, 0x00, 0x01, 0xAA]),
            StreamDescription::from_data(vec![0x00, 0x00, 0x01, 0xBB]),
        ];

        let mut single = create_reader(&streams[..1]).unwrap();
        let unit = single.read(Slicing::NalUnit).unwrap();
        assert_eq!(unit.region, Region { offset: 0, size: 4 });

        let mut combined = create_reader(&streams).unwrap();
        let first = combined.read(Slicing::NalUnit).unwrap();
        let second = combined.read(Slicing::NalUnit).unwrap();
        assert_eq!(first.region, Region { offset: 0, size: 4 });
        assert_eq!(second.region, Region { offset: 4, size: 4 });
        assert!(combined.read(Slicing::NalUnit).is_none());
    }
}
