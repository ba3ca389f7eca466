use derivative::Derivative;
#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

use crate::path::NESTING_LIMIT;

/// Difference in seconds between local and remote modification times that
/// is still considered equal.
pub const TIME_DIFFERENCE_TOLERANCE: f64 = 1.0;

/// Tunables shared by the lookup, comparison and sniffing helpers.
///
/// Missing fields take their defaults when deserialized.
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, Derivative, PartialEq)]
#[derivative(Default)]
#[serde(default)]
pub struct Settings {
    /// Seconds a remote file must be ahead of the local one to be
    /// considered newer by [`Metafile::is_newer_than_within`].
    ///
    /// [`Metafile::is_newer_than_within`]: crate::Metafile::is_newer_than_within
    #[derivative(Default(value = "TIME_DIFFERENCE_TOLERANCE"))]
    pub time_difference_tolerance: f64,

    /// Maximum number of ancestors visited when looking for config files.
    #[derivative(Default(value = "NESTING_LIMIT"))]
    pub nesting_limit: usize,

    /// Whether [`TextSniffer`](crate::TextSniffer) looks at extensions and
    /// file contents at all. When off every file is reported as binary.
    pub enable_content_sniffing: bool,

    /// Extensions (without the dot) that are always textual.
    pub ascii_whitelist: Option<Vec<String>>,

    /// Extensions (without the dot) that are always binary.
    pub binary_whitelist: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.time_difference_tolerance, 1.0);
        assert_eq!(s.nesting_limit, 30);
        assert!(!s.enable_content_sniffing);
        assert_eq!(s.ascii_whitelist, None);
        assert_eq!(s.binary_whitelist, None);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s: Settings = serde_json::from_str(
            r#"{"enable_content_sniffing": true, "ascii_whitelist": ["txt", "md"]}"#,
        )
        .unwrap();
        assert!(s.enable_content_sniffing);
        assert_eq!(
            s.ascii_whitelist,
            Some(vec!["txt".to_string(), "md".to_string()])
        );
        assert_eq!(s.nesting_limit, NESTING_LIMIT);
        assert_eq!(s.time_difference_tolerance, TIME_DIFFERENCE_TOLERANCE);
    }
}
