use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use std::path::is_separator;

/// Maximum number of ancestors visited when looking for config files.
pub const NESTING_LIMIT: usize = 30;

/// Returns `path` followed by each of its ancestors, nearest first, visiting
/// at most [`NESTING_LIMIT`] ancestors.
///
/// Ascending stops at a path with an empty basename: one ending in a
/// separator, the filesystem root, or the empty prefix of a relative path.
/// Neither the root nor the empty prefix is included. `..` counts as a
/// basename and is not resolved. No filesystem access happens here.
///
/// ```
/// # use std::path::{Path, PathBuf};
/// let folders = syncfiles::folders(Some(Path::new("/a/b/c")));
/// assert_eq!(
///     folders,
///     vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b"), PathBuf::from("/a")]
/// );
/// assert!(syncfiles::folders(None).is_empty());
/// ```
pub fn folders(path: Option<&Path>) -> Vec<PathBuf> {
    folders_with_limit(path, NESTING_LIMIT)
}

/// Same as [`folders`] with an explicit nesting limit.
pub fn folders_with_limit(path: Option<&Path>, limit: usize) -> Vec<PathBuf> {
    let Some(path) = path else {
        return vec![];
    };

    let mut ret = vec![path.to_path_buf()];
    let mut current = path;
    for _ in 0..limit {
        if !has_basename(current) {
            break;
        }
        let Some(parent) = current.parent() else {
            break;
        };
        if !has_basename(parent) {
            break;
        }
        ret.push(parent.to_path_buf());
        current = parent;
    }
    ret
}

fn has_basename(path: &Path) -> bool {
    // `components()` drops a trailing separator, the raw string keeps it.
    let trailing_separator = path
        .as_os_str()
        .to_string_lossy()
        .ends_with(is_separator);
    !trailing_separator
        && matches!(
            path.components().next_back(),
            Some(Component::Normal(_) | Component::ParentDir | Component::CurDir)
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(folders: &[PathBuf]) -> Vec<String> {
        folders
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn absolute_path_stops_before_root() {
        assert_eq!(
            strs(&folders(Some(Path::new("/a/b/c")))),
            vec!["/a/b/c", "/a/b", "/a"]
        );
    }

    #[test]
    fn relative_path_stops_before_empty_prefix() {
        assert_eq!(strs(&folders(Some(Path::new("a/b")))), vec!["a/b", "a"]);
    }

    #[test]
    fn single_component_and_root() {
        assert_eq!(strs(&folders(Some(Path::new("a")))), vec!["a"]);
        assert_eq!(strs(&folders(Some(Path::new("/a")))), vec!["/a"]);
        assert_eq!(strs(&folders(Some(Path::new("/")))), vec!["/"]);
    }

    #[test]
    fn parent_dir_counts_as_a_basename() {
        assert_eq!(
            strs(&folders(Some(Path::new("/a/b/..")))),
            vec!["/a/b/..", "/a/b", "/a"]
        );
        assert_eq!(strs(&folders(Some(Path::new("../x")))), vec!["../x", ".."]);
    }

    #[test]
    fn trailing_separator_stops_the_walk() {
        assert_eq!(strs(&folders(Some(Path::new("/a/b/")))), vec!["/a/b/"]);
        assert_eq!(strs(&folders(Some(Path::new("a/")))), vec!["a/"]);
    }

    #[test]
    fn none_is_empty() {
        assert!(folders(None).is_empty());
        assert!(folders_with_limit(None, 5).is_empty());
    }

    #[test]
    fn depth_is_bounded() {
        let deep: PathBuf = std::iter::once("/".to_string())
            .chain((0..100).map(|i| format!("d{i}")))
            .collect();
        let ret = folders(Some(&deep));
        assert_eq!(ret.len(), NESTING_LIMIT + 1);
        assert_eq!(ret[0], deep);
        assert_eq!(ret[1], deep.parent().unwrap());

        assert_eq!(folders_with_limit(Some(&deep), 0), vec![deep.clone()]);
        assert_eq!(folders_with_limit(Some(&deep), 3).len(), 4);
    }

    #[test]
    fn every_entry_is_an_ancestor_of_the_input() {
        let input = Path::new("/srv/www/site/public/index.html");
        let ret = folders(Some(input));
        assert_eq!(ret.len(), 5);
        for (i, folder) in ret.iter().enumerate() {
            assert!(input.starts_with(folder));
            if i > 0 {
                assert_eq!(ret[i - 1].parent(), Some(folder.as_path()));
            }
        }
    }
}
