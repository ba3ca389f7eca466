//! Lookups of per-directory config files.
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use log::debug;

use crate::path::folders_with_limit;
use crate::settings::Settings;

/// Returns the first folder in `folders` that contains `file_name`, or `None`
/// if no folder does or `folders` is absent. Every call checks the
/// filesystem again.
pub fn find_file<P: AsRef<Path>>(folders: Option<&[P]>, file_name: &str) -> Option<PathBuf> {
    let folders = folders?;
    let found = folders
        .iter()
        .map(|f| f.as_ref())
        .find(|f| f.join(file_name).exists())?;
    debug!("found {} in {}", file_name, found.display());
    Some(found.to_path_buf())
}

/// Returns the nearest folder, starting at `path` itself and walking up at
/// most `settings.nesting_limit` levels, that contains `file_name`.
pub fn find_config(path: &Path, file_name: &str, settings: &Settings) -> Option<PathBuf> {
    let folders = folders_with_limit(Some(path), settings.nesting_limit);
    find_file(Some(folders.as_slice()), file_name)
}

/// Pairs each distinct path in `paths` with `lookup(path)`, keeping the order
/// of first occurrence. `lookup` runs once per distinct path.
pub fn pair_with<P, T, F>(paths: Option<&[P]>, mut lookup: F) -> Vec<(PathBuf, T)>
where
    P: AsRef<Path>,
    F: FnMut(&Path) -> T,
{
    let Some(paths) = paths else {
        return vec![];
    };

    let mut seen: HashSet<&Path> = HashSet::new();
    let mut ret = Vec::new();
    for target in paths.iter().map(|p| p.as_ref()) {
        if seen.insert(target) {
            ret.push((target.to_path_buf(), lookup(target)));
        }
    }
    ret
}
