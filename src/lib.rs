//! Helpers for a file synchronization tool: remote file metadata, per-folder
//! config lookup and a text/binary guess.
//!
//! A typical use is a sync engine deciding whether a remote file has to be
//! downloaded, and which config applies to it.
//!
//! ```rust
//! # use std::path::Path;
//! # use syncfiles::{ListingEntry, Metafile, Settings, TextCache, TextSniffer};
//! let entry: ListingEntry = serde_json::from_str(
//!     r#"{"name": "index.html", "is_dir": 0, "last_modified": "1700000000", "filesize": 512}"#,
//! )
//! .unwrap();
//! let remote = Metafile::try_from(&entry).unwrap();
//!
//! // A local file that does not exist is always outdated.
//! let local = Path::new("/nonexistent/site/index.html");
//! assert!(remote.is_newer_than(local).unwrap());
//! assert!(remote.is_different_size_than(local).unwrap());
//!
//! // Candidate config folders, nearest first.
//! let folders = syncfiles::folders(local.parent());
//! assert_eq!(folders.len(), 2);
//! assert_eq!(syncfiles::find_file(Some(folders.as_slice()), "ftp-sync.json"), None);
//!
//! // Content sniffing is off unless switched on in settings.
//! let sniffer = TextSniffer::from(&Settings::default());
//! let mut cache = TextCache::new();
//! assert!(!sniffer.is_text_file(&mut cache, local).unwrap());
//! ```

mod cache;
mod errors;
mod locate;
mod metafile;
mod path;
mod settings;
pub mod text;
pub mod utils;

pub use cache::CacheStats;
pub use cache::TextCache;
pub use errors::Error;
pub use locate::find_config;
pub use locate::find_file;
pub use locate::pair_with;
pub use metafile::Flag;
pub use metafile::ListingEntry;
pub use metafile::Metafile;
pub use metafile::Numeric;
pub use metafile::ToFloat;
pub use path::NESTING_LIMIT;
pub use path::folders;
pub use path::folders_with_limit;
pub use settings::Settings;
pub use settings::TIME_DIFFERENCE_TOLERANCE;
pub use text::TextSniffer;

#[cfg(any(test, feature = "test_utils"))]
pub(crate) mod test_utils;
#[cfg(any(test, feature = "test_utils"))]
pub use test_utils::TestRoot;
