//! Bit-group packing utilities.
//!
//! Provides `BitGroupReader`, which slices a byte buffer into consecutive
//! fixed-width big-endian groups, and `BitGroupWriter`, which performs the
//! inverse. Both keep a small rolling accumulator instead of materializing
//! the full bit string, consuming or emitting one byte at a time.

use crate::PrimitivesError;

/// Widest group either side of the packer accepts.
pub const MAX_GROUP_WIDTH: u32 = 16;

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

/// Pending bits that have been read or written but not yet emitted.
///
/// Only the low `count` bits of `bits` are meaningful. With groups of at
/// most 16 bits and bytes of 8 bits the accumulator never holds more than
/// 23 bits, so a `u32` cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Accumulator {
    bits: u32,
    count: u32,
}

impl Accumulator {
    /// Append `width` low bits of `value` below the pending bits.
    fn push(&mut self, value: u32, width: u32) {
        self.bits = (self.bits << width) | (value & mask(width));
        self.count += width;
    }

    /// Remove and return the `width` most significant pending bits.
    fn pop(&mut self, width: u32) -> u32 {
        self.count -= width;
        let out = self.bits >> self.count;
        self.bits &= mask(self.count);
        out
    }
}

fn mask(width: u32) -> u32 {
    (1u32 << width) - 1
}

fn check_width(width: u32) -> Result<(), PrimitivesError> {
    if width == 0 || width > MAX_GROUP_WIDTH {
        return Err(PrimitivesError::InvalidBitWidth(width));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// BitGroupReader
// ---------------------------------------------------------------------------

/// An iterator over the fixed-width big-endian bit groups of a byte slice.
///
/// Groups are taken most significant bit first and may straddle byte
/// boundaries. Trailing bits that do not fill a whole group are dropped.
#[derive(Debug, Clone)]
pub struct BitGroupReader<'a> {
    data: &'a [u8],
    pos: usize,
    width: u32,
    acc: Accumulator,
}

impl<'a> BitGroupReader<'a> {
    /// Create a reader over `data` yielding groups of `width` bits.
    ///
    /// # Arguments
    /// * `data` - The bytes to slice.
    /// * `width` - Group width in bits, between 1 and `MAX_GROUP_WIDTH`.
    ///
    /// # Returns
    /// A `BitGroupReader` positioned at the first bit, or an error for an
    /// unsupported width.
    pub fn new(data: &'a [u8], width: u32) -> Result<Self, PrimitivesError> {
        check_width(width)?;
        Ok(BitGroupReader {
            data,
            pos: 0,
            width,
            acc: Accumulator::default(),
        })
    }

    /// Number of whole groups still available.
    pub fn remaining_groups(&self) -> usize {
        let bits = (self.data.len() - self.pos) * 8 + self.acc.count as usize;
        bits / self.width as usize
    }
}

impl Iterator for BitGroupReader<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        while self.acc.count < self.width {
            let byte = *self.data.get(self.pos)?;
            self.pos += 1;
            self.acc.push(u32::from(byte), 8);
        }
        Some(self.acc.pop(self.width) as u16)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining_groups();
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitGroupReader<'_> {}

// ---------------------------------------------------------------------------
// BitGroupWriter
// ---------------------------------------------------------------------------

/// A byte buffer assembled from fixed-width big-endian bit groups.
///
/// The inverse of `BitGroupReader`: each group is appended below the bits
/// already written, and whole bytes are flushed as soon as they are full.
#[derive(Debug, Clone)]
pub struct BitGroupWriter {
    buf: Vec<u8>,
    width: u32,
    acc: Accumulator,
}

impl BitGroupWriter {
    /// Create a writer accepting groups of `width` bits.
    ///
    /// # Arguments
    /// * `width` - Group width in bits, between 1 and `MAX_GROUP_WIDTH`.
    ///
    /// # Returns
    /// An empty `BitGroupWriter`, or an error for an unsupported width.
    pub fn new(width: u32) -> Result<Self, PrimitivesError> {
        Self::with_capacity(width, 0)
    }

    /// Create a writer with room for `groups` groups before reallocating.
    pub fn with_capacity(width: u32, groups: usize) -> Result<Self, PrimitivesError> {
        check_width(width)?;
        Ok(BitGroupWriter {
            buf: Vec::with_capacity((groups * width as usize).div_ceil(8)),
            width,
            acc: Accumulator::default(),
        })
    }

    /// Append one group.
    ///
    /// # Arguments
    /// * `value` - The group value; must fit in `width` bits.
    ///
    /// # Returns
    /// `Ok(())`, or `GroupOverflow` if `value` is too wide.
    pub fn write_group(&mut self, value: u16) -> Result<(), PrimitivesError> {
        let value = u32::from(value);
        if value > mask(self.width) {
            return Err(PrimitivesError::GroupOverflow {
                value,
                width: self.width,
            });
        }
        self.acc.push(value, self.width);
        while self.acc.count >= 8 {
            self.buf.push(self.acc.pop(8) as u8);
        }
        Ok(())
    }

    /// Finish writing and return the bytes.
    ///
    /// A final partial byte is padded with zero bits on the right.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.acc.count > 0 {
            let pad = 8 - self.acc.count;
            self.buf.push((self.acc.bits << pad) as u8);
        }
        self.buf
    }

    /// Return the number of whole bytes flushed so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Return true if no whole byte has been flushed yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_rejects_bad_width() {
        assert!(matches!(
            BitGroupReader::new(&[0u8; 4], 0),
            Err(PrimitivesError::InvalidBitWidth(0))
        ));
        assert!(matches!(
            BitGroupReader::new(&[0u8; 4], 17),
            Err(PrimitivesError::InvalidBitWidth(17))
        ));
        assert!(BitGroupWriter::new(0).is_err());
        assert!(BitGroupWriter::new(17).is_err());
    }

    #[test]
    fn test_reader_straddles_bytes() {
        // 11111111 111|00000 00000000 -> 2047, then 13 bits: 0 and 2 dropped bits.
        let groups: Vec<u16> = BitGroupReader::new(&[0xff, 0xe0, 0x00], 11)
            .unwrap()
            .collect();
        assert_eq!(groups, vec![2047, 0]);
    }

    #[test]
    fn test_reader_drops_trailing_bits() {
        let reader = BitGroupReader::new(&[0xff], 11).unwrap();
        assert_eq!(reader.len(), 0);
        assert_eq!(reader.count(), 0);
    }

    #[test]
    fn test_reader_mixed_pattern() {
        // 0x80 0x10 0x02 = 1000_0000 0001_0000 0000_0010
        // 11-bit groups: 10000000000 (1024), 10000000000 (1024), 10 dropped.
        let groups: Vec<u16> = BitGroupReader::new(&[0x80, 0x10, 0x02], 11)
            .unwrap()
            .collect();
        assert_eq!(groups, vec![1024, 1024]);
    }

    #[test]
    fn test_reader_exact_size() {
        let data = [0u8; 33];
        let reader = BitGroupReader::new(&data, 11).unwrap();
        assert_eq!(reader.len(), 24);
    }

    #[test]
    fn test_writer_pads_final_byte() {
        let mut w = BitGroupWriter::new(11).unwrap();
        w.write_group(2047).unwrap();
        assert_eq!(w.len(), 1);
        assert_eq!(w.into_bytes(), vec![0xff, 0xe0]);
    }

    #[test]
    fn test_writer_rejects_wide_value() {
        let mut w = BitGroupWriter::new(11).unwrap();
        assert!(matches!(
            w.write_group(2048),
            Err(PrimitivesError::GroupOverflow { value: 2048, width: 11 })
        ));
        assert!(w.is_empty());
    }

    #[test]
    fn test_writer_inverts_reader() {
        let data = [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x0f, 0xed, 0xcb];
        let mut w = BitGroupWriter::with_capacity(11, 8).unwrap();
        for g in BitGroupReader::new(&data, 11).unwrap() {
            w.write_group(g).unwrap();
        }
        // 88 bits is exactly 8 groups of 11, so nothing is dropped.
        assert_eq!(w.into_bytes(), data.to_vec());
    }

    #[test]
    fn test_byte_width_is_identity() {
        let data = [1u8, 2, 3, 250];
        let groups: Vec<u16> = BitGroupReader::new(&data, 8).unwrap().collect();
        assert_eq!(groups, vec![1, 2, 3, 250]);
    }
}
