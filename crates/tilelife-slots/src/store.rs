//! Named slot stores.
//!
//! A slot is one saved plane under a short ASCII name. [`MemorySlots`]
//! keeps encoded planes in an insertion-ordered map; [`DirSlots`] keeps one
//! `<name>.tlif` file per slot in a directory.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tilelife_core::BitPlane;

use crate::codec::{decode_plane, encode_plane, from_bytes, to_bytes};
use crate::error::SlotError;
use crate::hash::plane_hash;

/// Longest accepted slot name.
pub const MAX_NAME_LEN: usize = 64;

/// File extension used by [`DirSlots`].
pub const SLOT_EXTENSION: &str = "tlif";

/// Reject names that are empty, too long, or not `[A-Za-z0-9_-]`.
pub fn validate_name(name: &str) -> Result<(), SlotError> {
    let ok = !name.is_empty()
        && name.len() <= MAX_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if ok {
        Ok(())
    } else {
        Err(SlotError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// Storage for named planes.
pub trait SlotStore {
    /// Save `plane` under `name`, replacing any previous slot of that name.
    fn save(&mut self, name: &str, plane: &BitPlane) -> Result<(), SlotError>;

    /// Load the plane saved under `name`.
    fn load(&self, name: &str) -> Result<BitPlane, SlotError>;

    /// Names of all slots.
    fn list(&self) -> Result<Vec<String>, SlotError>;

    /// Delete a slot. Returns whether it existed.
    fn remove(&mut self, name: &str) -> Result<bool, SlotError>;
}

// ── MemorySlots ────────────────────────────────────────────────────

/// In-memory slots, listed in first-save order.
///
/// Planes are held in their encoded form, so loading exercises the same
/// validation as reading a file.
#[derive(Clone, Debug, Default)]
pub struct MemorySlots {
    slots: IndexMap<String, Vec<u8>>,
}

impl MemorySlots {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SlotStore for MemorySlots {
    fn save(&mut self, name: &str, plane: &BitPlane) -> Result<(), SlotError> {
        validate_name(name)?;
        self.slots.insert(name.to_string(), to_bytes(plane));
        tracing::debug!(slot = name, hash = plane_hash(plane), "saved slot in memory");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<BitPlane, SlotError> {
        validate_name(name)?;
        let bytes = self.slots.get(name).ok_or_else(|| SlotError::NotFound {
            name: name.to_string(),
        })?;
        from_bytes(bytes)
    }

    fn list(&self) -> Result<Vec<String>, SlotError> {
        Ok(self.slots.keys().cloned().collect())
    }

    fn remove(&mut self, name: &str) -> Result<bool, SlotError> {
        validate_name(name)?;
        Ok(self.slots.shift_remove(name).is_some())
    }
}

// ── DirSlots ───────────────────────────────────────────────────────

/// One file per slot in a directory, listed by name.
///
/// Saves go to a temporary file that is renamed into place, so a crash
/// mid-save leaves the previous slot intact.
#[derive(Clone, Debug)]
pub struct DirSlots {
    root: PathBuf,
}

impl DirSlots {
    /// Use `root`, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, SlotError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        tracing::info!(root = %root.display(), "opened slot directory");
        Ok(Self { root })
    }

    /// The backing directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `name`.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, SlotError> {
        validate_name(name)?;
        Ok(self.root.join(format!("{name}.{SLOT_EXTENSION}")))
    }
}

fn not_found(name: &str, e: io::Error) -> SlotError {
    if e.kind() == io::ErrorKind::NotFound {
        SlotError::NotFound {
            name: name.to_string(),
        }
    } else {
        SlotError::Io(e)
    }
}

impl SlotStore for DirSlots {
    fn save(&mut self, name: &str, plane: &BitPlane) -> Result<(), SlotError> {
        let path = self.path_for(name)?;
        let tmp = path.with_extension(format!("{SLOT_EXTENSION}.tmp"));
        let written = (|| -> Result<(), SlotError> {
            let mut out = BufWriter::new(File::create(&tmp)?);
            encode_plane(&mut out, plane)?;
            out.flush()?;
            drop(out);
            fs::rename(&tmp, &path)?;
            Ok(())
        })();
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                if cleanup.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %tmp.display(),
                        error = %cleanup,
                        "could not remove temp slot file"
                    );
                }
            }
            return Err(e);
        }
        tracing::debug!(
            slot = name,
            path = %path.display(),
            hash = plane_hash(plane),
            "saved slot"
        );
        Ok(())
    }

    fn load(&self, name: &str) -> Result<BitPlane, SlotError> {
        let path = self.path_for(name)?;
        let file = File::open(&path).map_err(|e| not_found(name, e))?;
        let mut input = BufReader::new(file);
        let plane = decode_plane(&mut input)?;
        let mut probe = [0u8; 1];
        if io::Read::read(&mut input, &mut probe)? != 0 {
            return Err(SlotError::Malformed {
                detail: format!("trailing bytes after plane in {}", path.display()),
            });
        }
        Ok(plane)
    }

    fn list(&self) -> Result<Vec<String>, SlotError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SLOT_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if validate_name(stem).is_ok() {
                names.push(stem.to_string());
            } else {
                tracing::warn!(path = %path.display(), "ignoring file with invalid slot name");
            }
        }
        names.sort();
        Ok(names)
    }

    fn remove(&mut self, name: &str) -> Result<bool, SlotError> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
