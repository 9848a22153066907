//! Plane fingerprints.
//!
//! FNV-1a over the geometry and the raw plane bytes. Not cryptographic;
//! used to tell saved planes apart in logs and listings.

use tilelife_core::BitPlane;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Fingerprint of a plane's dimensions and contents.
pub fn plane_hash(plane: &BitPlane) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_bytes(hash, &plane.rows().to_le_bytes());
    hash = fnv1a_bytes(hash, &plane.cols().to_le_bytes());
    fnv1a_bytes(hash, plane.as_bytes())
}
