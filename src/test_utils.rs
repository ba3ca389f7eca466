use std::fs;
use std::fs::File;
use std::fs::create_dir_all;
use std::path::Path as StdPath;
use std::time::Duration;
use std::time::SystemTime;

use tempdir::TempDir;

use crate::Error;

// Relative paths and contents created in the temporary test root. Directories
// are implied by the paths.
pub(crate) static TEMP_FILES: &[(&str, &[u8])] = &[
    (TestRoot::CONFIG_NAME, b"{}"),
    ("project/ftp-sync.json", b"{}"),
    ("project/src/lib.rs", b"pub fn f() {}\n"),
    ("project/src/nested/ftp-sync.json", b"{}"),
    ("project/src/nested/file.rs", b"\n"),
    ("notes.txt", b"plain notes\n"),
    ("image.png", b"\x89PNG\r\n\x1a\n"),
    ("plain.dat", b"no mark here"),
    ("empty.dat", b""),
    ("bom_utf8.dat", b"\xEF\xBB\xBFhello"),
    ("bom_utf16le.dat", b"\xFF\xFEh\x00i\x00"),
    ("bom_utf7.dat", b"+/v8+/v9+/v++/v/hello"),
];

/// Utility structure for managing a temporary test directory and its files.
#[derive(Debug)]
pub struct TestRoot {
    /// Root of the temporary test directory.
    pub root: TempDir,
}

impl TestRoot {
    /// Name of the config marker files placed in the tree.
    pub const CONFIG_NAME: &'static str = "ftp-sync.json";
    /// Contents of `pinned.txt`.
    pub const PINNED_CONTENTS: &'static str = "pinned contents";
    /// Modification time of `pinned.txt`, seconds since epoch.
    pub const PINNED_MTIME: u64 = 1_600_000_000;

    /// Creates a new `TestRoot` with the files from `TEMP_FILES` and a
    /// `pinned.txt` whose mtime is `PINNED_MTIME`.
    pub fn new() -> Result<Self, Error> {
        let root = TempDir::new("syncfiles").map_err(|e| Error::Read {
            what: "temporary directory".into(),
            how: e.to_string(),
        })?;
        let ret = Self { root };
        for (relative_path, contents) in TEMP_FILES {
            ret.create_file(relative_path, contents)?;
        }
        ret.create_file("pinned.txt", Self::PINNED_CONTENTS.as_bytes())?;
        ret.set_mtime(
            "pinned.txt",
            SystemTime::UNIX_EPOCH + Duration::from_secs(Self::PINNED_MTIME),
        )?;
        Ok(ret)
    }

    /// Path of the temporary root.
    pub fn path(&self) -> &StdPath {
        self.root.path()
    }

    /// Creates a file, and its parent directories, relative to the root.
    pub fn create_file(&self, relative_path: &str, contents: &[u8]) -> Result<(), Error> {
        let full_path = self.path().join(relative_path);
        let to_error = |e: std::io::Error| Error::Read {
            what: full_path.display().to_string(),
            how: e.to_string(),
        };
        if let Some(parent) = full_path.parent() {
            create_dir_all(parent).map_err(to_error)?;
        }
        fs::write(&full_path, contents).map_err(to_error)
    }

    /// Sets the modification time of a file relative to the root.
    pub fn set_mtime(&self, relative_path: &str, mtime: SystemTime) -> Result<(), Error> {
        let full_path = self.path().join(relative_path);
        File::options()
            .write(true)
            .open(&full_path)
            .and_then(|f| f.set_modified(mtime))
            .map_err(|e| Error::Read {
                what: full_path.display().to_string(),
                how: e.to_string(),
            })
    }
}
