// src/file.rs

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::config::WriteMode;

/// How a finished table buffer reaches disk. The caller owns the
/// append-or-create decision; a strategy only replaces the file's bytes.
pub trait WriteStrategy {
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Truncate/overwrite in place.
pub struct Overwrite;

impl WriteStrategy for Overwrite {
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut f = File::create(path)?;
        f.write_all(contents)?;
        f.flush()
    }
}

/// Write `.<name>.tmp` next to the target, fsync, then rename over it.
/// Readers see either the old table or the new one, never half of one.
pub struct AtomicRename;

impl WriteStrategy for AtomicRename {
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let tmp = temp_sibling(path)?;

        let written = File::create(&tmp).and_then(|mut f| {
            f.write_all(contents)?;
            f.sync_all()
        });
        if let Err(e) = written.and_then(|_| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> io::Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"))?;
    let tmp_name = format!(".{}.tmp", name.to_string_lossy());
    Ok(match path.parent() {
        Some(dir) => dir.join(tmp_name),
        None => PathBuf::from(tmp_name),
    })
}

pub fn strategy_for(mode: WriteMode) -> Box<dyn WriteStrategy> {
    match mode {
        WriteMode::Overwrite => Box::new(Overwrite),
        WriteMode::AtomicRename => Box::new(AtomicRename),
    }
}

/// Resolve a user `-o` value: a trailing separator or an existing directory
/// means "put the default file name in there".
pub fn resolve_out_path(user_o: &str, default_filename: &str) -> PathBuf {
    if user_o.is_empty() { return PathBuf::from(default_filename); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        p.join(default_filename)
    } else {
        p
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn looks_like_dir_hint(p: &str) -> bool {
    p.ends_with('/') || p.ends_with('\\')
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Create the parent of `path` if it has a non-empty one.
pub fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}
