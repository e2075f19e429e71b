use crate::error::ConfigError;
use crate::ui::notice;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "config/aboutme.conf";
pub const DEFAULT_ASCII_ART_FILE: &str = "assets/ascii/aboutme.txt";
pub const DEFAULT_INFO_TEXT: &str = "elo";

/// Banner settings. Absent keys stay `None` so `get` can fall back to the
/// caller's default the same way for every key.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ascii_art_file: Option<String>,
    #[serde(default)]
    pub info_text: Option<String>,
    #[serde(default, deserialize_with = "on_flag")]
    pub enable_pywal_not_found_error: Option<bool>,
    #[serde(default, deserialize_with = "on_flag")]
    pub enable_json_decode_error: Option<bool>,
    #[serde(default, deserialize_with = "on_flag")]
    pub enable_ascii_not_found_error: Option<bool>,
    /// Keys this program doesn't know about, kept for `get`.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

// "on" turns a flag on, any other value turns it off.
fn on_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.map(|v| v == "on"))
}

impl Config {
    /// Reads a config file. `.json` files are parsed as a JSON object,
    /// everything else as `key = value` lines.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Io(e),
        })?;
        let content = String::from_utf8(bytes).map_err(|_| ConfigError::Decode {
            path: path.to_path_buf(),
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
        } else {
            Ok(Self::from_pairs(parse_key_values(&content)))
        }
    }

    /// Loads the config, writing the same notices the banner always has to
    /// `notices` and falling back to defaults on any failure.
    pub fn load_or_default<W: Write>(path: &Path, notices: &mut W) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(ConfigError::NotFound { .. }) => {
                notice(
                    notices,
                    &format!(
                        "Config file '{}' not found. Using default settings.",
                        path.display()
                    ),
                );
                Self::default()
            }
            Err(ConfigError::Decode { .. }) => {
                notice(
                    notices,
                    &format!(
                        "Error decoding the config file '{}'. Please check the file encoding.",
                        path.display()
                    ),
                );
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default settings");
                Self::default()
            }
        }
    }

    pub fn from_pairs(pairs: BTreeMap<String, String>) -> Self {
        let mut config = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "ascii_art_file" => config.ascii_art_file = Some(value),
                "info_text" => config.info_text = Some(value),
                "enable_pywal_not_found_error" => {
                    config.enable_pywal_not_found_error = Some(value == "on")
                }
                "enable_json_decode_error" => config.enable_json_decode_error = Some(value == "on"),
                "enable_ascii_not_found_error" => {
                    config.enable_ascii_not_found_error = Some(value == "on")
                }
                _ => {
                    config.extra.insert(key, serde_json::Value::String(value));
                }
            }
        }
        config
    }

    /// String view over the recognized keys. Flags read back as `"on"`/`"off"`.
    pub fn get(&self, key: &str, default: &str) -> String {
        let flag = |v: Option<bool>| v.map(|on| if on { "on" } else { "off" }.to_string());
        let value = match key {
            "ascii_art_file" => self.ascii_art_file.clone(),
            "info_text" => self.info_text.clone(),
            "enable_pywal_not_found_error" => flag(self.enable_pywal_not_found_error),
            "enable_json_decode_error" => flag(self.enable_json_decode_error),
            "enable_ascii_not_found_error" => flag(self.enable_ascii_not_found_error),
            other => self.extra.get(other).map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                v => v.to_string(),
            }),
        };
        value.unwrap_or_else(|| default.to_string())
    }

    pub fn ascii_art_file(&self) -> &str {
        self.ascii_art_file.as_deref().unwrap_or(DEFAULT_ASCII_ART_FILE)
    }

    pub fn info_text(&self) -> &str {
        self.info_text.as_deref().unwrap_or(DEFAULT_INFO_TEXT)
    }

    pub fn pywal_not_found_errors(&self) -> bool {
        self.enable_pywal_not_found_error.unwrap_or(false)
    }

    pub fn json_decode_errors(&self) -> bool {
        self.enable_json_decode_error.unwrap_or(false)
    }

    pub fn ascii_not_found_errors(&self) -> bool {
        self.enable_ascii_not_found_error.unwrap_or(false)
    }
}

/// Parses `key = value` lines. Blank lines and `#` comments are skipped,
/// trailing comments are cut and values lose surrounding quotes.
pub fn parse_key_values(content: &str) -> BTreeMap<String, String> {
    let mut pairs = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let value = value
                .split('#')
                .next()
                .unwrap_or_default()
                .trim()
                .trim_matches('"');
            pairs.insert(key.trim().to_string(), value.to_string());
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn key_values_skip_comments_and_strip_quotes() {
        let pairs = parse_key_values(
            "# banner\n\nascii_art_file = \"art/logo.txt\" # mine\nenable_json_decode_error=on\nnot a pair\n",
        );
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs["ascii_art_file"], "art/logo.txt");
        assert_eq!(pairs["enable_json_decode_error"], "on");
    }

    #[test]
    fn value_keeps_everything_after_first_equals() {
        let pairs = parse_key_values("info_text = a=b\n");
        assert_eq!(pairs["info_text"], "a=b");
    }

    #[test]
    fn get_falls_back_to_default_for_absent_keys() {
        let config = Config::default();
        assert_eq!(config.get("ascii_art_file", DEFAULT_ASCII_ART_FILE), DEFAULT_ASCII_ART_FILE);
        assert_eq!(config.get("enable_json_decode_error", "off"), "off");
        assert_eq!(config.get("whatever", "x"), "x");
    }

    #[test]
    fn flags_are_on_only_for_literal_on() {
        let mut pairs = BTreeMap::new();
        pairs.insert("enable_pywal_not_found_error".to_string(), "on".to_string());
        pairs.insert("enable_json_decode_error".to_string(), "yes".to_string());
        pairs.insert("test".to_string(), "value".to_string());
        let config = Config::from_pairs(pairs);

        assert!(config.pywal_not_found_errors());
        assert!(!config.json_decode_errors());
        assert!(!config.ascii_not_found_errors());
        assert_eq!(config.get("enable_pywal_not_found_error", ""), "on");
        assert_eq!(config.get("enable_json_decode_error", ""), "off");
        assert_eq!(config.get("test", ""), "value");
    }

    #[test]
    fn reads_json_config() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"ascii_art_file": "logo.txt", "enable_ascii_not_found_error": "on", "theme": "dark"}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.ascii_art_file(), "logo.txt");
        assert!(config.ascii_not_found_errors());
        assert!(!config.pywal_not_found_errors());
        assert_eq!(config.get("theme", ""), "dark");
    }

    #[test]
    fn reads_key_value_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "info_text = hello\\nworld").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.info_text(), "hello\\nworld");
        assert_eq!(config.ascii_art_file(), DEFAULT_ASCII_ART_FILE);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("nope.conf")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn non_utf8_file_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x61, 0x3d, 0xff, 0xfe]).unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Decode { .. }));
    }

    #[test]
    fn json_extra_keys_may_be_any_value() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"info_text": "hi", "theme": 1, "compact": true, "tags": ["a"]}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.info_text(), "hi");
        assert_eq!(config.get("theme", ""), "1");
        assert_eq!(config.get("compact", ""), "true");
        assert_eq!(config.get("tags", ""), r#"["a"]"#);
    }

    #[test]
    fn missing_config_notice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.conf");
        let mut out = Vec::new();
        let config = Config::load_or_default(&path, &mut out);
        assert_eq!(config, Config::default());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Config file '{}' not found. Using default settings.\n", path.display())
        );
    }

    #[test]
    fn undecodable_config_notice() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe]).unwrap();
        let mut out = Vec::new();
        let config = Config::load_or_default(file.path(), &mut out);
        assert_eq!(config, Config::default());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "Error decoding the config file '{}'. Please check the file encoding.\n",
                file.path().display()
            )
        );
    }
}
