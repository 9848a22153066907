//! Binary encode/decode for saved planes.
//!
//! All integers are little-endian. The payload is the plane's own byte
//! layout, copied verbatim: no compression, no alignment padding.
//!
//! ```text
//! offset  size  field
//! 0       4     magic b"TLIF"
//! 4       1     version
//! 5       4     rows       u32 LE
//! 9       4     cols       u32 LE
//! 13      4     row_bytes  u32 LE
//! 17      n     plane bytes, n = rows * row_bytes
//! ```

use std::io::{Read, Write};

use tilelife_core::{BitPlane, GridError};

use crate::error::SlotError;
use crate::{FORMAT_VERSION, MAGIC};

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 17;

// ── Primitive readers ──────────────────────────────────────────────

/// Fill `buf`, reporting a short read as [`SlotError::Truncated`].
///
/// `offset` is how many bytes precede `buf` in the stream; it only feeds
/// the error report.
fn read_full(r: &mut dyn Read, buf: &mut [u8], offset: usize) -> Result<(), SlotError> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(SlotError::Truncated {
                    expected: offset + buf.len(),
                    found: offset + filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(SlotError::Io(e)),
        }
    }
    Ok(())
}

// ── Plane encode/decode ────────────────────────────────────────────

fn header(plane: &BitPlane) -> [u8; HEADER_LEN] {
    let mut h = [0u8; HEADER_LEN];
    h[0..4].copy_from_slice(&MAGIC);
    h[4] = FORMAT_VERSION;
    h[5..9].copy_from_slice(&plane.rows().to_le_bytes());
    h[9..13].copy_from_slice(&plane.cols().to_le_bytes());
    h[13..17].copy_from_slice(&(plane.row_bytes() as u32).to_le_bytes());
    h
}

/// Write `plane` with its header.
pub fn encode_plane(w: &mut dyn Write, plane: &BitPlane) -> Result<(), SlotError> {
    w.write_all(&header(plane))?;
    w.write_all(plane.as_bytes())?;
    Ok(())
}

/// Read and validate one plane.
///
/// # Errors
///
/// - [`SlotError::InvalidMagic`] or [`SlotError::UnsupportedVersion`] for a
///   foreign or newer file.
/// - [`SlotError::Truncated`] if the stream ends early.
/// - [`SlotError::Grid`] if the geometry or padding bits are invalid.
pub fn decode_plane(r: &mut dyn Read) -> Result<BitPlane, SlotError> {
    let mut header = [0u8; HEADER_LEN];
    read_full(r, &mut header, 0)?;

    if header[0..4] != MAGIC {
        return Err(SlotError::InvalidMagic);
    }
    let version = header[4];
    if version != FORMAT_VERSION {
        return Err(SlotError::UnsupportedVersion { found: version });
    }
    let field = |at: usize| {
        u32::from_le_bytes([header[at], header[at + 1], header[at + 2], header[at + 3]])
    };
    let rows = field(5);
    let cols = field(9);
    let row_bytes = field(13) as usize;

    let expected_stride = BitPlane::validate_dims(rows, cols)?;
    if row_bytes != expected_stride {
        return Err(GridError::RowStrideMismatch {
            expected: expected_stride,
            found: row_bytes,
        }
        .into());
    }
    let len = row_bytes
        .checked_mul(rows as usize)
        .ok_or_else(|| SlotError::Malformed {
            detail: format!("{rows} rows of {row_bytes} bytes overflows"),
        })?;

    let mut payload = Vec::new();
    let read = r.take(len as u64).read_to_end(&mut payload)?;
    if read < len {
        return Err(SlotError::Truncated {
            expected: HEADER_LEN + len,
            found: HEADER_LEN + read,
        });
    }
    Ok(BitPlane::from_bytes(rows, cols, payload)?)
}

/// Encode into a fresh buffer.
pub fn to_bytes(plane: &BitPlane) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + plane.as_bytes().len());
    buf.extend_from_slice(&header(plane));
    buf.extend_from_slice(plane.as_bytes());
    buf
}

/// Decode from a byte slice. Trailing bytes are rejected.
pub fn from_bytes(mut data: &[u8]) -> Result<BitPlane, SlotError> {
    let plane = decode_plane(&mut data)?;
    if !data.is_empty() {
        return Err(SlotError::Malformed {
            detail: format!("{} trailing bytes after plane", data.len()),
        });
    }
    Ok(plane)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tilelife_test_utils::fixtures::{glider, random_soup, seeded};

    #[test]
    fn header_layout_is_fixed() {
        let plane = seeded(3, 10, &glider(), 0, 0);
        let bytes = to_bytes(&plane);
        assert_eq!(&bytes[0..4], b"TLIF");
        assert_eq!(bytes[4], FORMAT_VERSION);
        assert_eq!(&bytes[5..9], &3u32.to_le_bytes());
        assert_eq!(&bytes[9..13], &10u32.to_le_bytes());
        assert_eq!(&bytes[13..17], &2u32.to_le_bytes());
        assert_eq!(&bytes[17..], plane.as_bytes());
        assert_eq!(bytes.len(), HEADER_LEN + 6);
    }

    #[test]
    fn device_plane_survives_exactly() {
        let plane = random_soup(64, 96, 0.3, 1);
        let decoded = from_bytes(&to_bytes(&plane)).unwrap();
        assert_eq!(decoded.as_bytes(), plane.as_bytes());
        assert_eq!(decoded, plane);
    }

    #[test]
    fn bad_magic_is_rejected() {
        let mut bytes = to_bytes(&random_soup(4, 4, 0.5, 2));
        bytes[0] = b'X';
        assert!(matches!(from_bytes(&bytes), Err(SlotError::InvalidMagic)));
    }

    #[test]
    fn future_version_is_rejected() {
        let mut bytes = to_bytes(&random_soup(4, 4, 0.5, 2));
        bytes[4] = FORMAT_VERSION + 1;
        assert!(matches!(
            from_bytes(&bytes),
            Err(SlotError::UnsupportedVersion { found }) if found == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn short_header_is_truncated() {
        let bytes = to_bytes(&random_soup(4, 4, 0.5, 2));
        match from_bytes(&bytes[..10]) {
            Err(SlotError::Truncated { expected, found }) => {
                assert_eq!((expected, found), (HEADER_LEN, 10));
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn short_payload_is_truncated() {
        let bytes = to_bytes(&random_soup(8, 16, 0.5, 3));
        match from_bytes(&bytes[..bytes.len() - 3]) {
            Err(SlotError::Truncated { expected, found }) => {
                assert_eq!(expected, HEADER_LEN + 16);
                assert_eq!(found, HEADER_LEN + 13);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn wrong_stride_is_rejected() {
        let mut bytes = to_bytes(&random_soup(2, 9, 0.5, 4));
        bytes[13..17].copy_from_slice(&1u32.to_le_bytes());
        assert!(matches!(
            from_bytes(&bytes),
            Err(SlotError::Grid(GridError::RowStrideMismatch { expected: 2, found: 1 }))
        ));
    }

    #[test]
    fn dirty_padding_is_rejected() {
        let mut bytes = to_bytes(&BitPlane::new(1, 4).unwrap());
        bytes[HEADER_LEN] = 0x01;
        assert!(matches!(
            from_bytes(&bytes),
            Err(SlotError::Grid(GridError::DirtyPadding { row: 0 }))
        ));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let mut bytes = to_bytes(&random_soup(2, 2, 0.5, 5));
        bytes[5..9].copy_from_slice(&0u32.to_le_bytes());
        assert!(matches!(from_bytes(&bytes), Err(SlotError::Grid(GridError::EmptyGrid))));
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut bytes = to_bytes(&random_soup(2, 2, 0.5, 5));
        bytes.push(0);
        assert!(matches!(from_bytes(&bytes), Err(SlotError::Malformed { .. })));
    }

    proptest! {
        #[test]
        fn any_plane_decodes_to_itself(
            rows in 1u32..40,
            cols in 1u32..40,
            seed in any::<u64>(),
        ) {
            let plane = random_soup(rows, cols, 0.5, seed);
            prop_assert_eq!(from_bytes(&to_bytes(&plane)).unwrap(), plane);
        }

        #[test]
        fn arbitrary_bytes_never_panic(data in proptest::collection::vec(any::<u8>(), 0..64)) {
            let _ = from_bytes(&data);
        }
    }
}
