//! Reader composing several constituent streams into one logical
//! stream

use super::{SingleStreamReader, Slicing, StreamReader, StreamUnit};
use crate::types::{Region, StreamDescription};

/// Global offset of the active constituent's byte zero.
///
/// All translation between a constituent's local offsets and the
/// composed stream's global offsets goes through this type, so the two
/// address spaces cannot be mixed by plain integer arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BaseOffset(u64);

impl BaseOffset {
    fn globalize(self, mut region: Region) -> Region {
        region.offset += self.0;
        region
    }

    fn advance(&mut self, len: u64) {
        self.0 += len;
    }

    fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Reader over an ordered list of constituent streams.
///
/// Exactly one constituent is active at a time. Units are never
/// synthesized across a constituent boundary: a constituent's trailing
/// bytes form whatever units its own logic produces, and the next
/// constituent starts fresh.
pub struct CombinedStreamReader<'a> {
    streams: &'a [StreamDescription],
    readers: Vec<Box<dyn StreamReader + 'a>>,
    active_stream_index: usize,
    base: BaseOffset,
}

impl<'a> CombinedStreamReader<'a> {
    /// Create a reader over `streams`, each backed by its own
    /// [`SingleStreamReader`].
    pub fn new(streams: &'a [StreamDescription]) -> Self {
        let readers = streams
            .iter()
            .map(|stream| Box::new(SingleStreamReader::new(stream)) as Box<dyn StreamReader + 'a>)
            .collect();
        Self {
            streams,
            readers,
            active_stream_index: 0,
            base: BaseOffset::default(),
        }
    }
}

impl StreamReader for CombinedStreamReader<'_> {
    fn read(&mut self, slicing: Slicing) -> Option<StreamUnit> {
        while self.active_stream_index < self.readers.len() {
            if let Some(mut unit) = self.readers[self.active_stream_index].read(slicing) {
                unit.region = self.base.globalize(unit.region);
                return Some(unit);
            }
            // Constituent exhausted, move on to the next one
            self.base.advance(self.streams[self.active_stream_index].len());
            self.active_stream_index += 1;
        }
        None
    }

    fn seek(&mut self, pos: u64) -> bool {
        let mut pos = pos;
        self.base.reset();

        for i in 0..self.streams.len() {
            let len = self.streams[i].len();
            if pos < len {
                let res = self.readers[i].seek(pos);
                if res && i != self.active_stream_index {
                    // The former active constituent starts fresh if
                    // revisited; only one cursor is in flight at a time
                    if self.active_stream_index < self.readers.len() {
                        self.readers[self.active_stream_index].seek(0);
                    }
                    self.active_stream_index = i;
                }
                return res;
            }
            self.base.advance(len);
            pos -= len;
        }

        false
    }

    fn end_of_stream(&self) -> bool {
        self.active_stream_index >= self.readers.len()
            || (self.active_stream_index == self.readers.len() - 1
                && self.readers[self.active_stream_index].end_of_stream())
    }

    fn region_contents(&self, region: Region) -> Vec<u8> {
        let mut region = region;
        let mut res = Vec::new();

        for (stream, reader) in self.streams.iter().zip(&self.readers) {
            if region.size == 0 {
                break;
            }

            let chunk = reader.region_contents(region);
            res.extend_from_slice(&chunk);

            // Shift the region into the next constituent's address
            // space
            if region.offset >= stream.len() {
                region.offset -= stream.len();
            } else {
                region.offset = 0;
                region.size -= chunk.len() as u64;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn streams(buffers: &[&[u8]]) -> Vec<StreamDescription> {
        buffers
            .iter()
            .map(|data| StreamDescription::from_data(data.to_vec()))
            .collect()
    }

    #[test]
    fn test_read_translates_offsets() {
        let streams = streams(&[
            &[0x00, 0x00, 0x01, 0xAA],
            &[0x00, 0x00, 0x00, 0x01, 0xBB, 0xBC],
        ]);
        let mut reader = CombinedStreamReader::new(&streams);

        let first = reader.read(Slicing::NalUnit).unwrap();
        assert_eq!(first.region, Region { offset: 0, size: 4 });
        assert_eq!(first.start_code_len, 3);

        let second = reader.read(Slicing::NalUnit).unwrap();
        assert_eq!(second.region, Region { offset: 4, size: 6 });
        assert_eq!(second.start_code_len, 4);
        assert!(second.header);

        assert!(reader.read(Slicing::NalUnit).is_none());
    }

    #[test]
    fn test_read_skips_unit_free_constituent() {
        let streams = streams(&[&[0x12, 0x34], &[0x00, 0x00, 0x01, 0xBB]]);
        let mut reader = CombinedStreamReader::new(&streams);

        let unit = reader.read(Slicing::NalUnit).unwrap();
        assert_eq!(unit.region, Region { offset: 2, size: 4 });
    }

    #[test]
    fn test_no_unit_across_boundary() {
        // Trailing bytes of the first constituent stay in its last
        // unit; nothing is merged with the second constituent
        let streams = streams(&[
            &[0x00, 0x00, 0x01, 0xAA, 0x00, 0x00],
            &[0x00, 0x00, 0x01, 0xBB],
        ]);
        let mut reader = CombinedStreamReader::new(&streams);

        let first = reader.read(Slicing::NalUnit).unwrap();
        assert_eq!(first.region, Region { offset: 0, size: 6 });

        let second = reader.read(Slicing::NalUnit).unwrap();
        assert_eq!(second.region, Region { offset: 6, size: 4 });
    }

    #[test]
    fn test_end_of_stream_on_non_final_constituent() {
        let streams = streams(&[&[0x00, 0x00, 0x01, 0xAA], &[0x00, 0x00, 0x01, 0xBB]]);
        let mut reader = CombinedStreamReader::new(&streams);

        assert!(!reader.end_of_stream());
        let _ = reader.read(Slicing::NalUnit).unwrap();
        // The first constituent is consumed but the reader is still
        // parked on it; the next read is expected to advance
        assert!(!reader.end_of_stream());
        let _ = reader.read(Slicing::NalUnit).unwrap();
        assert!(reader.end_of_stream());
    }

    #[test]
    fn test_seek_switches_and_resets_former_active() {
        let streams = streams(&[
            &[0x00, 0x00, 0x01, 0xAA, 0x00, 0x00, 0x01, 0xAB],
            &[0x00, 0x00, 0x01, 0xBB, 0x00, 0x00, 0x01, 0xBC],
        ]);
        let mut reader = CombinedStreamReader::new(&streams);

        // Drive the cursor into the second constituent
        for _ in 0..3 {
            let _ = reader.read(Slicing::NalUnit).unwrap();
        }

        // Seek back into the first; the second must start fresh when
        // revisited
        assert!(reader.seek(0));
        let unit = reader.read(Slicing::NalUnit).unwrap();
        assert_eq!(unit.region, Region { offset: 0, size: 4 });

        let _ = reader.read(Slicing::NalUnit).unwrap();
        let revisited = reader.read(Slicing::NalUnit).unwrap();
        assert_eq!(revisited.region, Region { offset: 8, size: 4 });
    }

    #[test]
    fn test_seek_past_total_length() {
        let streams = streams(&[&[0x00, 0x00, 0x01, 0xAA], &[0x00, 0x00, 0x01, 0xBB]]);
        let mut reader = CombinedStreamReader::new(&streams);
        assert!(!reader.seek(8));
        assert!(!reader.seek(100));
    }

    #[test]
    fn test_region_contents_straddles_boundary() {
        let streams = streams(&[&[0x00, 0x00, 0x01, 0xAA], &[0x00, 0x00, 0x01, 0xBB]]);
        let reader = CombinedStreamReader::new(&streams);

        let contents = reader.region_contents(Region { offset: 2, size: 5 });
        assert_eq!(contents, vec![0x01, 0xAA, 0x00, 0x00, 0x01]);

        let tail = reader.region_contents(Region { offset: 6, size: 10 });
        assert_eq!(tail, vec![0x01, 0xBB]);

        let empty = reader.region_contents(Region { offset: 1, size: 0 });
        assert!(empty.is_empty());
    }
}
