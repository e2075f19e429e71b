use crate::config::Config;
use crate::template::{substitute, Bindings};

/// Right-hand column text. Lines come from the `info_text` setting, where a
/// literal `\n` starts a new line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoBlock {
    lines: Vec<String>,
}

impl InfoBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self::new(text.split("\\n").map(str::to_string).collect())
    }

    pub fn from_config(config: &Config, bindings: &Bindings) -> Self {
        Self::from_text(config.info_text()).styled(bindings)
    }

    /// Substitutes placeholders in every line.
    pub fn styled(self, bindings: &Bindings) -> Self {
        Self::new(self.lines.iter().map(|l| substitute(l, bindings)).collect())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
