//! Guessing whether a file is textual from its extension and byte-order mark.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use log::trace;

use crate::cache::TextCache;
use crate::errors::Error;
use crate::settings::Settings;

/// Known byte-order marks by encoding name. Longer marks sharing a prefix
/// with shorter ones come first.
pub static BOM_MARKS: &[(&str, &[u8])] = &[
    ("utf8", &[0xEF, 0xBB, 0xBF]),
    ("utf32be", &[0x00, 0x00, 0xFE, 0xFF]),
    ("utf32le", &[0xFF, 0xFE, 0x00, 0x00]),
    ("utf16be", &[0xFE, 0xFF]),
    ("utf16le", &[0xFF, 0xFE]),
    ("utf7", b"+/v8+/v9+/v++/v/"),
    ("utf1", &[0xF7, 0x64, 0x4C]),
    ("utfebcdic", &[0xDD, 0x73, 0x66, 0x73]),
    ("scsu", &[0x0E, 0xFE, 0xFF]),
    ("bocu-1", &[0xFB, 0xEE, 0x28]),
    ("gb18030", &[0x84, 0x31, 0x95, 0x33]),
];

/// Number of leading bytes read when looking for a byte-order mark.
pub const BOM_MAX_LENGTH: usize = 16;

/// Returns the encoding whose byte-order mark `bytes` starts with.
pub fn detect_bom(bytes: &[u8]) -> Option<&'static str> {
    BOM_MARKS
        .iter()
        .find(|(_, mark)| bytes.starts_with(mark))
        .map(|(name, _)| *name)
}

/// Classifies files as textual or binary.
#[derive(Debug, Clone, Default)]
pub struct TextSniffer {
    enabled: bool,
    ascii_whitelist: Option<Vec<String>>,
    binary_whitelist: Option<Vec<String>>,
}

impl TextSniffer {
    /// Creates a sniffer without extension whitelists. When `enabled` is
    /// false every file is reported as binary.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Sets extensions, without the dot, that are always textual and always
    /// binary. The textual list wins when an extension is in both.
    pub fn with_whitelists(
        mut self,
        ascii_whitelist: Option<Vec<String>>,
        binary_whitelist: Option<Vec<String>>,
    ) -> Self {
        self.ascii_whitelist = ascii_whitelist;
        self.binary_whitelist = binary_whitelist;
        self
    }

    /// Whether content sniffing is switched on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Guesses whether `path` is textual.
    ///
    /// Verdicts are memoized in `cache` by path and are not recomputed when
    /// the file changes.
    pub fn is_text_file(&self, cache: &mut TextCache, path: &Path) -> Result<bool, Error> {
        if !self.enabled {
            return Ok(false);
        }

        if let Some(verdict) = cache.get(path) {
            trace!("cached verdict for {}: {}", path.display(), verdict);
            return Ok(verdict);
        }

        let verdict = match self.by_extension(path) {
            Some(verdict) => verdict,
            None => Self::by_bom(path)?,
        };
        debug!("{} is textual: {}", path.display(), verdict);
        cache.put(path.to_path_buf(), verdict);
        Ok(verdict)
    }

    fn by_extension(&self, path: &Path) -> Option<bool> {
        let ext = path.extension()?.to_str()?;
        if listed(&self.ascii_whitelist, ext) {
            Some(true)
        } else if listed(&self.binary_whitelist, ext) {
            Some(false)
        } else {
            None
        }
    }

    fn by_bom(path: &Path) -> Result<bool, Error> {
        let mut beginning = Vec::with_capacity(BOM_MAX_LENGTH);
        File::open(path)
            .and_then(|f| f.take(BOM_MAX_LENGTH as u64).read_to_end(&mut beginning))
            .map_err(|e| Error::Read {
                what: path.display().to_string(),
                how: e.to_string(),
            })?;
        match detect_bom(&beginning) {
            Some(encoding) => {
                trace!("{} starts with {} mark", path.display(), encoding);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn listed(list: &Option<Vec<String>>, ext: &str) -> bool {
    list.as_ref().is_some_and(|l| l.iter().any(|e| e == ext))
}

impl From<&Settings> for TextSniffer {
    fn from(settings: &Settings) -> Self {
        TextSniffer::new(settings.enable_content_sniffing).with_whitelists(
            settings.ascii_whitelist.clone(),
            settings.binary_whitelist.clone(),
        )
    }
}
