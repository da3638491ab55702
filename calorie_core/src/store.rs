//! Ledger persistence.
//!
//! The ledger lives in a single tab-indented JSON file that is rewritten in
//! full on every save. Reads take a shared lock and writes go through a temp
//! file that is renamed over the original. Nothing spans load-modify-save, so
//! two concurrent invocations can still lose an update (last writer wins).

use crate::{Error, Ledger, Result};
use fs2::FileExt;
use serde::Serialize;
use std::fs::{File, Permissions};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

impl Ledger {
    /// Load the ledger from `path`
    ///
    /// A missing file yields an empty ledger. A file that exists but cannot
    /// be read or parsed is an error: saving over it would discard its data.
    pub fn load(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No ledger at {:?}, starting empty", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        file.lock_shared()?;

        let mut contents = String::new();
        let read = std::io::BufReader::new(&file).read_to_string(&mut contents);
        file.unlock()?;
        read?;

        if contents.trim().is_empty() {
            tracing::warn!("Ledger file {:?} is empty, starting empty", path);
            return Ok(Self::default());
        }

        let ledger: Ledger = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded ledger with {} days from {:?}", ledger.days.len(), path);
        Ok(ledger)
    }

    /// Save the whole ledger to `path`
    ///
    /// Atomically writes the ledger by:
    /// 1. Writing to a temp file in the same directory
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    ///
    /// The replaced file keeps its permissions; a new ledger gets the usual
    /// 0644 rather than the temp file's private mode.
    pub fn save(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let temp = NamedTempFile::new_in(dir)?;
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            writer.write_all(&self.to_pretty_json()?)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        if let Some(permissions) = ledger_permissions(path)? {
            temp.as_file().set_permissions(permissions)?;
        }

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved ledger with {} days to {:?}", self.days.len(), path);
        Ok(())
    }

    /// Load the ledger, modify it, and save it back
    pub fn update<F, T>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce(&mut Ledger) -> T,
    {
        let mut ledger = Self::load(path)?;
        let out = f(&mut ledger);
        ledger.save(path)?;
        Ok(out)
    }

    /// Serialize with one tab per indentation level
    pub fn to_pretty_json(&self) -> Result<Vec<u8>> {
        to_tab_indented(self)
    }
}

/// Permissions the saved ledger should carry
fn ledger_permissions(path: &Path) -> Result<Option<Permissions>> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

/// Render any serializable value as tab-indented JSON
pub fn to_tab_indented<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
