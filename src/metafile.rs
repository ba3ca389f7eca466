use std::fs;
use std::path::Path;

#[cfg(feature = "poem")]
use poem_openapi::Object;
#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

use crate::errors::Error;
use crate::utils::format_timestamp;
use crate::utils::system_time_secs;

/// Represents the metadata of one remote file or directory, as reported by a
/// remote directory listing.
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[cfg_attr(feature = "poem", derive(Object))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metafile {
    name: String,
    is_directory: bool,
    /// Seconds since epoch.
    last_modified: f64,
    /// Size in bytes.
    filesize: f64,
}

/// Primitive numbers accepted by [`Metafile::new`].
///
/// Integers above 2^53 are rounded to the nearest representable `f64`.
pub trait ToFloat {
    /// Converts to `f64`.
    fn to_float(self) -> f64;
}

macro_rules! impl_to_float {
    ($($t:ty),*) => {
        $(
            impl ToFloat for $t {
                fn to_float(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_to_float!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl Metafile {
    /// Creates a `Metafile` from already typed values.
    pub fn new(
        name: impl Into<String>,
        is_directory: bool,
        last_modified: impl ToFloat,
        filesize: impl ToFloat,
    ) -> Self {
        Self {
            name: name.into(),
            is_directory,
            last_modified: last_modified.to_float(),
            filesize: filesize.to_float(),
        }
    }

    /// Name of the file or directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this entry is a directory.
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Last modification time in seconds since epoch.
    pub fn last_modified(&self) -> f64 {
        self.last_modified
    }

    /// Last modification time rendered with strftime `format`, see
    /// [`DEFAULT_TIME_FORMAT`](crate::utils::DEFAULT_TIME_FORMAT).
    pub fn last_modified_formatted(&self, format: &str) -> Result<String, Error> {
        format_timestamp(self.last_modified, format)
    }

    /// Size in bytes.
    pub fn filesize(&self) -> f64 {
        self.filesize
    }

    /// Returns true if `local_path` is missing or older than this file.
    ///
    /// The comparison is strict and applies no tolerance: equal timestamps
    /// are not newer. See [`Metafile::is_newer_than_within`].
    pub fn is_newer_than<P: AsRef<Path>>(&self, local_path: P) -> Result<bool, Error> {
        match local_mtime(local_path.as_ref())? {
            None => Ok(true),
            Some(mtime) => Ok(self.last_modified > mtime),
        }
    }

    /// Like [`Metafile::is_newer_than`] but only reports newer when this file
    /// is ahead of the local one by more than `tolerance` seconds.
    pub fn is_newer_than_within<P: AsRef<Path>>(
        &self,
        local_path: P,
        tolerance: f64,
    ) -> Result<bool, Error> {
        match local_mtime(local_path.as_ref())? {
            None => Ok(true),
            Some(mtime) => Ok(self.last_modified - mtime > tolerance),
        }
    }

    /// Returns true if `local_path` is missing or its size differs from this
    /// file's size.
    pub fn is_different_size_than<P: AsRef<Path>>(&self, local_path: P) -> Result<bool, Error> {
        let path = local_path.as_ref();
        if !path.exists() {
            return Ok(true);
        }
        let metadata = fs::metadata(path).map_err(|e| Error::Read {
            what: format!("metadata of {}", path.display()),
            how: e.to_string(),
        })?;
        Ok(self.filesize != metadata.len() as f64)
    }
}

fn local_mtime(path: &Path) -> Result<Option<f64>, Error> {
    if !path.exists() {
        return Ok(None);
    }
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| Error::Read {
            what: format!("mtime of {}", path.display()),
            how: e.to_string(),
        })?;
    Ok(Some(system_time_secs(modified)))
}

/// A loosely typed number as found in remote listings: either a JSON number
/// or a numeric string.
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Numeric {
    /// Already a number.
    Number(f64),
    /// A string holding a number, e.g. "1024" or "1700000000.5".
    Text(String),
}

impl Numeric {
    /// Converts to `f64`, failing for strings that are not numbers.
    pub fn to_f64(&self, what: &str) -> Result<f64, Error> {
        match self {
            Numeric::Number(n) => Ok(*n),
            Numeric::Text(s) => s.trim().parse::<f64>().map_err(|e| Error::Parse {
                what: format!("{what} \"{s}\""),
                how: e.to_string(),
            }),
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_owned())
    }
}

/// A loosely typed flag: `false`, `0`, `NaN` and `""` are falsy, anything
/// else is truthy.
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Flag {
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    Text(String),
}

impl Flag {
    /// Truthiness of the flag.
    pub fn is_set(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Number(n) => *n != 0.0 && !n.is_nan(),
            Flag::Text(s) => !s.is_empty(),
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag::Bool(value)
    }
}

/// One raw entry of a remote directory listing, before type coercion.
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingEntry {
    /// Name of the file or directory.
    pub name: String,
    /// Directory flag.
    pub is_dir: Flag,
    /// Modification time, seconds since epoch.
    pub last_modified: Numeric,
    /// Size in bytes.
    pub filesize: Numeric,
}

impl TryFrom<&ListingEntry> for Metafile {
    type Error = Error;
    fn try_from(entry: &ListingEntry) -> Result<Self, Error> {
        Ok(Metafile {
            name: entry.name.clone(),
            is_directory: entry.is_dir.is_set(),
            last_modified: entry.last_modified.to_f64("last modified")?,
            filesize: entry.filesize.to_f64("filesize")?,
        })
    }
}
