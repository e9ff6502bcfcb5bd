// WSD1 binary dictionary format: header, offset table, UTF-8 payload
//
// Layout (all integers little-endian):
//
//   0..16                      header (see `RawHeader`)
//   16..16+4*(n+1)             n+1 u32 offsets into the payload
//   16+4*(n+1)..               concatenated UTF-8 words
//
// Word i occupies payload[offsets[i]..offsets[i+1]]. offsets[0] is 0 and
// offsets[n] is the payload length, so the file has no slack bytes.

use std::borrow::Cow;

use bytemuck::{Pod, Zeroable};

use crate::DictError;

/// "WSD1" read as a little-endian u32.
pub const MAGIC: u32 = 0x3144_5357;

/// The only format version written and accepted.
pub const VERSION: u16 = 1;

/// Size of the binary header in bytes.
pub const HEADER_SIZE: usize = 16;

/// On-disk header layout (16 bytes).
///
/// - `magic` (u32): [`MAGIC`]
/// - `version` (u16): [`VERSION`]
/// - `flags` (u16): reserved, written as zero
/// - `word_count` (u32): number of entries
/// - `reserved` (u32): written as zero
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct RawHeader {
    pub magic: u32,
    pub version: u16,
    pub flags: u16,
    pub word_count: u32,
    pub reserved: u32,
}

/// Parsed dictionary header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictHeader {
    pub version: u16,
    pub word_count: u32,
}

/// Whether `data` starts with the WSD1 magic number.
pub fn is_binary(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == MAGIC.to_le_bytes()
}

/// Parse and validate the 16-byte header.
pub fn parse_header(data: &[u8]) -> Result<DictHeader, DictError> {
    if data.len() < HEADER_SIZE {
        return Err(DictError::TooShort {
            expected: HEADER_SIZE,
            actual: data.len(),
        });
    }

    let raw: RawHeader = bytemuck::pod_read_unaligned(&data[..HEADER_SIZE]);
    if u32::from_le(raw.magic) != MAGIC {
        return Err(DictError::InvalidMagic);
    }
    let version = u16::from_le(raw.version);
    if version != VERSION {
        return Err(DictError::UnsupportedVersion(version));
    }

    Ok(DictHeader {
        version,
        word_count: u32::from_le(raw.word_count),
    })
}

/// Decode every entry of a WSD1 file, borrowing from `data`.
pub fn read_entries(data: &[u8]) -> Result<Vec<&str>, DictError> {
    let header = parse_header(data)?;
    let count = header.word_count as usize;

    let table_len = count
        .checked_add(1)
        .and_then(|n| n.checked_mul(size_of::<u32>()))
        .ok_or(DictError::InvalidOffsets)?;
    let table_end = HEADER_SIZE
        .checked_add(table_len)
        .ok_or(DictError::InvalidOffsets)?;
    if data.len() < table_end {
        return Err(DictError::TooShort {
            expected: table_end,
            actual: data.len(),
        });
    }

    let offsets = offset_table(&data[HEADER_SIZE..table_end]);
    let payload = &data[table_end..];
    if offsets[0] != 0 || offsets[count] as usize != payload.len() {
        return Err(DictError::InvalidOffsets);
    }

    let mut entries = Vec::with_capacity(count);
    for (index, bounds) in offsets.windows(2).enumerate() {
        let (start, end) = (bounds[0] as usize, bounds[1] as usize);
        if start > end || end > payload.len() {
            return Err(DictError::InvalidOffsets);
        }
        let word = std::str::from_utf8(&payload[start..end])
            .map_err(|_| DictError::InvalidUtf8 { index })?;
        entries.push(word);
    }
    Ok(entries)
}

/// View the raw offset table as `u32`s.
///
/// Borrowed in place when the bytes are 4-aligned on a little-endian
/// target; otherwise copied and byte-swapped as needed.
fn offset_table(bytes: &[u8]) -> Cow<'_, [u32]> {
    if cfg!(target_endian = "little") {
        if let Ok(table) = bytemuck::try_cast_slice::<u8, u32>(bytes) {
            return Cow::Borrowed(table);
        }
    }
    let mut table = vec![0u32; bytes.len() / size_of::<u32>()];
    bytemuck::cast_slice_mut::<u32, u8>(&mut table).copy_from_slice(bytes);
    for offset in table.iter_mut() {
        *offset = u32::from_le(*offset);
    }
    Cow::Owned(table)
}

/// Encode `words` (in the given order) as a WSD1 file.
pub fn write_entries(words: &[&str]) -> Result<Vec<u8>, DictError> {
    let word_count = u32::try_from(words.len()).map_err(|_| DictError::TooLarge)?;
    let payload_len: usize = words.iter().map(|w| w.len()).sum();
    u32::try_from(payload_len).map_err(|_| DictError::TooLarge)?;

    let header = RawHeader {
        magic: MAGIC.to_le(),
        version: VERSION.to_le(),
        flags: 0,
        word_count: word_count.to_le(),
        reserved: 0,
    };

    let mut out =
        Vec::with_capacity(HEADER_SIZE + (words.len() + 1) * size_of::<u32>() + payload_len);
    out.extend_from_slice(bytemuck::bytes_of(&header));

    let mut offset: u32 = 0;
    out.extend_from_slice(&offset.to_le_bytes());
    for word in words {
        // Cannot overflow: the total was checked above.
        offset += word.len() as u32;
        out.extend_from_slice(&offset.to_le_bytes());
    }
    for word in words {
        out.extend_from_slice(word.as_bytes());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_spells_wsd1() {
        assert_eq!(&MAGIC.to_le_bytes(), b"WSD1");
        assert_eq!(size_of::<RawHeader>(), HEADER_SIZE);
    }

    #[test]
    fn write_then_read() {
        let data = write_entries(&["abend", "haus", "störung"]).unwrap();
        assert!(is_binary(&data));
        let header = parse_header(&data).unwrap();
        assert_eq!(header.word_count, 3);
        assert_eq!(read_entries(&data).unwrap(), vec!["abend", "haus", "störung"]);
    }

    #[test]
    fn empty_dictionary() {
        let data = write_entries(&[]).unwrap();
        assert_eq!(data.len(), HEADER_SIZE + 4);
        assert!(read_entries(&data).unwrap().is_empty());
    }

    /// Copy `data` into a buffer whose start is 4-aligned, shifted by `skew`
    /// bytes; returns the buffer and the range holding `data`.
    fn placed(data: &[u8], skew: usize) -> (Vec<u32>, std::ops::Range<usize>) {
        let mut buf = vec![0u32; (data.len() + skew).div_ceil(4)];
        bytemuck::cast_slice_mut::<u32, u8>(&mut buf)[skew..skew + data.len()].copy_from_slice(data);
        (buf, skew..skew + data.len())
    }

    #[test]
    fn aligned_offset_table_is_borrowed() {
        let data = write_entries(&["abend", "haus", "störung"]).unwrap();
        let (buf, range) = placed(&data, 0);
        let bytes = &bytemuck::cast_slice::<u32, u8>(&buf)[range];
        let table = offset_table(&bytes[HEADER_SIZE..HEADER_SIZE + 16]);
        assert_eq!(&*table, &[0, 5, 9, 17]);
        if cfg!(target_endian = "little") {
            assert!(matches!(table, Cow::Borrowed(_)));
        }
        assert_eq!(read_entries(bytes).unwrap(), vec!["abend", "haus", "störung"]);
    }

    #[test]
    fn unaligned_offset_table_is_copied() {
        let data = write_entries(&["abend", "haus", "störung"]).unwrap();
        let (buf, range) = placed(&data, 1);
        let bytes = &bytemuck::cast_slice::<u32, u8>(&buf)[range];
        let table = offset_table(&bytes[HEADER_SIZE..HEADER_SIZE + 16]);
        assert!(matches!(table, Cow::Owned(_)));
        assert_eq!(&*table, &[0, 5, 9, 17]);
        assert_eq!(read_entries(bytes).unwrap(), vec!["abend", "haus", "störung"]);
    }

    #[test]
    fn reject_too_short() {
        let err = parse_header(&[0u8; 8]).unwrap_err();
        assert!(matches!(
            err,
            DictError::TooShort {
                expected: 16,
                actual: 8
            }
        ));
    }

    #[test]
    fn reject_invalid_magic() {
        let mut data = write_entries(&["haus"]).unwrap();
        data[0] = b'X';
        assert!(matches!(parse_header(&data), Err(DictError::InvalidMagic)));
        assert!(!is_binary(&data));
    }

    #[test]
    fn reject_unknown_version() {
        let mut data = write_entries(&["haus"]).unwrap();
        data[4] = 9;
        assert!(matches!(
            parse_header(&data),
            Err(DictError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn reject_truncated_offset_table() {
        let data = write_entries(&["haus", "abend"]).unwrap();
        let err = read_entries(&data[..HEADER_SIZE + 4]).unwrap_err();
        assert!(matches!(err, DictError::TooShort { .. }));
    }

    #[test]
    fn reject_payload_length_mismatch() {
        let mut data = write_entries(&["haus"]).unwrap();
        data.push(b'x');
        assert!(matches!(read_entries(&data), Err(DictError::InvalidOffsets)));
    }

    #[test]
    fn reject_decreasing_offsets() {
        let mut data = write_entries(&["ab", "cd"]).unwrap();
        // offsets are [0, 2, 4]; make the middle one point past the end
        data[HEADER_SIZE + 4..HEADER_SIZE + 8].copy_from_slice(&5u32.to_le_bytes());
        assert!(matches!(read_entries(&data), Err(DictError::InvalidOffsets)));
    }

    #[test]
    fn reject_invalid_utf8() {
        let mut data = write_entries(&["ab", "ö"]).unwrap();
        let last = data.len() - 1;
        data[last] = 0xFF;
        assert!(matches!(
            read_entries(&data),
            Err(DictError::InvalidUtf8 { index: 1 })
        ));
    }
}
