//! Molecule binary codec.
//!
//! Molecule is the canonical serialization of the ledger chain. Only the
//! shapes the binding layer needs are implemented:
//!
//! | Shape        | Layout                                                   |
//! |--------------|----------------------------------------------------------|
//! | struct/array | fields concatenated, no header                           |
//! | fixvec<byte> | item count (u32 LE) ‖ items                              |
//! | table        | total size (u32 LE) ‖ field offsets (u32 LE each) ‖ fields |
//! | option       | empty for `None`, the inner value for `Some`             |
//!
//! All integers are little-endian.

use crate::PrimitivesError;

/// Width of every molecule header number (sizes, offsets, counts).
pub const NUMBER_SIZE: usize = 4;

// ---------------------------------------------------------------------------
// MoleculeWriter
// ---------------------------------------------------------------------------

/// A buffer-based writer for molecule structs.
///
/// Structs have no header so they are built by plain concatenation; use
/// [`pack_table`] and [`pack_fixvec`] for the dynamic shapes.
#[derive(Debug, Default)]
pub struct MoleculeWriter {
    buf: Vec<u8>,
}

impl MoleculeWriter {
    /// Create a new empty writer.
    pub fn new() -> Self {
        MoleculeWriter { buf: Vec::new() }
    }

    /// Create a new writer with a pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        MoleculeWriter { buf: Vec::with_capacity(capacity) }
    }

    /// Append raw bytes to the buffer.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append a single byte to the buffer.
    pub fn write_u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    /// Append a little-endian u32 (4 bytes) to the buffer.
    pub fn write_u32_le(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a little-endian u64 (8 bytes) to the buffer.
    pub fn write_u64_le(&mut self, val: u64) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Consume the writer and return the accumulated bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Return the current length of the buffer.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

// ---------------------------------------------------------------------------
// MoleculeReader
// ---------------------------------------------------------------------------

/// A cursor-based reader over a molecule struct.
pub struct MoleculeReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> MoleculeReader<'a> {
    /// Create a new reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        MoleculeReader { data, pos: 0 }
    }

    /// Read `n` bytes and advance the position.
    ///
    /// # Arguments
    /// * `n` - Number of bytes to read.
    ///
    /// # Returns
    /// A byte slice of length `n`, or `UnexpectedEof` if insufficient data remains.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], PrimitivesError> {
        let end = self.pos.checked_add(n).ok_or(PrimitivesError::UnexpectedEof)?;
        if end > self.data.len() {
            return Err(PrimitivesError::UnexpectedEof);
        }
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Read a fixed-size byte array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], PrimitivesError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, PrimitivesError> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read a little-endian u32.
    pub fn read_u32_le(&mut self) -> Result<u32, PrimitivesError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian u64.
    pub fn read_u64_le(&mut self) -> Result<u64, PrimitivesError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Return the number of bytes remaining.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Fail unless every byte has been consumed.
    pub fn finish(&self) -> Result<(), PrimitivesError> {
        if self.remaining() != 0 {
            return Err(PrimitivesError::InvalidLength {
                expected: self.pos,
                got: self.data.len(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dynamic shapes
// ---------------------------------------------------------------------------

/// Pack a `fixvec<byte>` (molecule `Bytes`).
pub fn pack_fixvec(items: &[u8]) -> Vec<u8> {
    let mut writer = MoleculeWriter::with_capacity(NUMBER_SIZE + items.len());
    writer.write_u32_le(items.len() as u32);
    writer.write_bytes(items);
    writer.into_bytes()
}

/// Unpack a `fixvec<byte>`, returning the item bytes.
pub fn unpack_fixvec(data: &[u8]) -> Result<&[u8], PrimitivesError> {
    let mut reader = MoleculeReader::new(data);
    let count = reader.read_u32_le()? as usize;
    if reader.remaining() != count {
        return Err(PrimitivesError::InvalidLength {
            expected: NUMBER_SIZE + count,
            got: data.len(),
        });
    }
    reader.read_bytes(count)
}

/// Pack a table from already-serialized fields.
///
/// # Arguments
/// * `fields` - Field encodings in declaration order.
///
/// # Returns
/// The table bytes: header followed by the fields.
pub fn pack_table(fields: &[&[u8]]) -> Vec<u8> {
    let header_size = NUMBER_SIZE * (fields.len() + 1);
    let total_size = header_size + fields.iter().map(|f| f.len()).sum::<usize>();

    let mut writer = MoleculeWriter::with_capacity(total_size);
    writer.write_u32_le(total_size as u32);
    let mut offset = header_size;
    for field in fields {
        writer.write_u32_le(offset as u32);
        offset += field.len();
    }
    for field in fields {
        writer.write_bytes(field);
    }
    writer.into_bytes()
}

/// Unpack a table into its raw field slices.
///
/// The header is verified strictly: declared total size must equal the
/// input length, offsets must be ascending and in range, and the table must
/// carry exactly `expected_fields` fields.
pub fn unpack_table(data: &[u8], expected_fields: usize) -> Result<Vec<&[u8]>, PrimitivesError> {
    let mut reader = MoleculeReader::new(data);
    let total_size = reader.read_u32_le()? as usize;
    if total_size != data.len() {
        return Err(PrimitivesError::InvalidHeader(format!(
            "total size {} does not match data length {}",
            total_size,
            data.len()
        )));
    }

    if total_size == NUMBER_SIZE {
        if expected_fields != 0 {
            return Err(PrimitivesError::FieldCountMismatch { expected: expected_fields, got: 0 });
        }
        return Ok(Vec::new());
    }

    let first_offset = reader.read_u32_le()? as usize;
    if first_offset % NUMBER_SIZE != 0 || first_offset < NUMBER_SIZE * 2 {
        return Err(PrimitivesError::InvalidHeader(format!(
            "invalid first offset {}",
            first_offset
        )));
    }
    if first_offset > total_size {
        return Err(PrimitivesError::InvalidHeader(format!(
            "first offset {} exceeds total size {}",
            first_offset, total_size
        )));
    }

    let field_count = first_offset / NUMBER_SIZE - 1;
    if field_count != expected_fields {
        return Err(PrimitivesError::FieldCountMismatch { expected: expected_fields, got: field_count });
    }

    let mut offsets = Vec::with_capacity(field_count + 1);
    offsets.push(first_offset);
    for _ in 1..field_count {
        offsets.push(reader.read_u32_le()? as usize);
    }
    offsets.push(total_size);

    if offsets.windows(2).any(|w| w[0] > w[1]) {
        return Err(PrimitivesError::InvalidHeader("field offsets are not ascending".to_string()));
    }

    Ok(offsets.windows(2).map(|w| &data[w[0]..w[1]]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_reader_roundtrip() {
        let mut writer = MoleculeWriter::new();
        writer.write_u8(0x42);
        writer.write_u32_le(0xDEADBEEF);
        writer.write_u64_le(0x0102030405060708);
        writer.write_bytes(b"hello");
        assert_eq!(writer.len(), 18);

        let data = writer.into_bytes();
        let mut reader = MoleculeReader::new(&data);
        assert_eq!(reader.read_u8().unwrap(), 0x42);
        assert_eq!(reader.read_u32_le().unwrap(), 0xDEADBEEF);
        assert_eq!(reader.read_u64_le().unwrap(), 0x0102030405060708);
        assert_eq!(reader.read_bytes(5).unwrap(), b"hello");
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_reader_eof() {
        let mut reader = MoleculeReader::new(&[0x01, 0x02]);
        assert!(reader.read_u32_le().is_err());
        assert!(reader.read_u8().is_ok());
        assert!(reader.finish().is_err());
    }

    #[test]
    fn test_fixvec() {
        assert_eq!(pack_fixvec(&[]), vec![0, 0, 0, 0]);
        assert_eq!(pack_fixvec(&[0xaa, 0xbb]), vec![2, 0, 0, 0, 0xaa, 0xbb]);
        assert_eq!(unpack_fixvec(&[2, 0, 0, 0, 0xaa, 0xbb]).unwrap(), &[0xaa, 0xbb]);

        // Count disagrees with payload.
        assert!(unpack_fixvec(&[3, 0, 0, 0, 0xaa, 0xbb]).is_err());
        assert!(unpack_fixvec(&[1, 0, 0, 0, 0xaa, 0xbb]).is_err());
        // Header truncated.
        assert!(unpack_fixvec(&[1, 0]).is_err());
    }

    #[test]
    fn test_table_layout() {
        let a: &[u8] = &[0x01];
        let b: &[u8] = &[0x02, 0x03];
        let table = pack_table(&[a, b]);
        assert_eq!(
            table,
            vec![
                15, 0, 0, 0, // total size
                12, 0, 0, 0, // offset of a
                13, 0, 0, 0, // offset of b
                0x01, 0x02, 0x03,
            ]
        );

        let fields = unpack_table(&table, 2).unwrap();
        assert_eq!(fields, vec![a, b]);
    }

    #[test]
    fn test_empty_table() {
        let table = pack_table(&[]);
        assert_eq!(table, vec![4, 0, 0, 0]);
        assert!(unpack_table(&table, 0).unwrap().is_empty());
        assert!(unpack_table(&table, 1).is_err());
    }

    #[test]
    fn test_table_header_violations() {
        let a: &[u8] = &[0x01];
        let table = pack_table(&[a, a, a]);

        // Wrong field count.
        assert!(matches!(
            unpack_table(&table, 2),
            Err(PrimitivesError::FieldCountMismatch { expected: 2, got: 3 })
        ));

        // Total size disagrees with length.
        let mut truncated = table.clone();
        truncated.pop();
        assert!(unpack_table(&truncated, 3).is_err());

        // Offsets out of order.
        let mut swapped = table.clone();
        swapped[8] = 20; // second offset beyond the third
        assert!(unpack_table(&swapped, 3).is_err());

        // Misaligned first offset.
        let mut misaligned = table;
        misaligned[4] = 13;
        assert!(unpack_table(&misaligned, 3).is_err());
    }
}
