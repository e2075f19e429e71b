use crate::config::{Config, DEFAULT_ASCII_ART_FILE};
use crate::error::ArtError;
use crate::ui::notice;
use std::io::Write;
use std::path::Path;

/// The logo shown in the left column. An empty block means no art could be
/// loaded and nothing should be printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtBlock {
    pub text: String,
    pub width: usize,
}

impl ArtBlock {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_text(text: String) -> Self {
        let width = art_width(&text);
        Self { text, width }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }
}

/// Longest line plus one column of breathing room. Zero lines count as zero.
pub fn art_width(text: &str) -> usize {
    text.lines().map(|l| l.chars().count()).max().unwrap_or(0) + 1
}

fn read_art(path: &Path) -> Result<String, ArtError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ArtError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ArtError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

pub fn load_ascii_art<W: Write>(config: &Config, notices: &mut W) -> ArtBlock {
    load_ascii_art_from(
        Path::new(config.ascii_art_file()),
        Path::new(DEFAULT_ASCII_ART_FILE),
        config.ascii_not_found_errors(),
        notices,
    )
}

/// Reads the art at `path`. When it is missing the default art is only probed
/// so the user hears whether it exists; the result stays empty either way.
pub fn load_ascii_art_from<W: Write>(
    path: &Path,
    default_path: &Path,
    report: bool,
    notices: &mut W,
) -> ArtBlock {
    match read_art(path) {
        Ok(text) => {
            let art = ArtBlock::from_text(text);
            tracing::debug!(path = %path.display(), width = art.width, "loaded ascii art");
            return art;
        }
        Err(ArtError::NotFound { .. }) => {
            tracing::debug!(path = %path.display(), "ascii art missing");
        }
        Err(e) => {
            tracing::warn!(error = %e, "ascii art unreadable");
            return ArtBlock::empty();
        }
    }

    if report {
        notice(
            notices,
            &format!(
                "Error: The ASCII art file '{}' was not found. Trying to use the default ASCII art file.",
                path.display()
            ),
        );
        if path != default_path {
            match read_art(default_path) {
                Ok(_) => {
                    tracing::debug!(path = %default_path.display(), "default art exists but is not used")
                }
                Err(ArtError::NotFound { .. }) => {
                    notice(notices, "Error: Default ASCII art file not found.")
                }
                Err(e) => tracing::warn!(error = %e, "default ascii art unreadable"),
            }
        }
    }

    ArtBlock::empty()
}
