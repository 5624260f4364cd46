//! User configuration (`config.toml`) and its merge with command-line flags.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

pub const DEFAULT_REFRESH_MINUTES: u64 = 15;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Schedule URL or path.
    pub source: Option<String>,
    /// Minutes between automatic refreshes; 0 disables them.
    pub refresh_minutes: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub keymap: Option<String>,
}

/// Read the config file. Problems become warnings and the defaults are used.
pub fn load_config(explicit: Option<&Path>) -> (ConfigFile, Vec<String>) {
    let mut warnings = Vec::new();
    let Some(path) = explicit.map(Path::to_path_buf).or_else(user_config_path) else {
        return (ConfigFile::default(), warnings);
    };

    if !path.exists() {
        if explicit.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (ConfigFile::default(), warnings);
    }

    let config = match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<ConfigFile>(&content) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                err
            ));
            None
        }
    };
    (config.unwrap_or_default(), warnings)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "shiftboard")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub source: Option<String>,
    pub refresh_minutes: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub keymap: Option<String>,
}

/// Effective settings after merging flags, config file and defaults.
#[derive(Debug, PartialEq, Eq)]
pub struct Settings {
    pub source: Option<String>,
    pub refresh: Option<Duration>,
    pub timeout: Duration,
    pub keymap: Option<String>,
}

impl Settings {
    pub fn resolve(cli: Overrides, file: ConfigFile) -> Self {
        let minutes = cli
            .refresh_minutes
            .or(file.refresh_minutes)
            .unwrap_or(DEFAULT_REFRESH_MINUTES);
        let timeout = cli
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Settings {
            source: cli.source.or(file.source),
            refresh: (minutes > 0).then(|| Duration::from_secs(minutes.saturating_mul(60))),
            timeout: Duration::from_secs(timeout.max(1)),
            keymap: cli.keymap.or(file.keymap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = write_config(
            r#"
source = "https://ops.example.org/api/schedule/"
refresh_minutes = 5
keymap = "arrows"
"#,
        );
        let (config, warnings) = load_config(Some(file.path()));
        assert!(warnings.is_empty());
        assert_eq!(
            config.source.as_deref(),
            Some("https://ops.example.org/api/schedule/")
        );
        assert_eq!(config.refresh_minutes, Some(5));
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.keymap.as_deref(), Some("arrows"));
    }

    #[test]
    fn test_unknown_key_is_a_warning() {
        let file = write_config("refresh_minuts = 5\n");
        let (config, warnings) = load_config(Some(file.path()));
        assert_eq!(config, ConfigFile::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to parse"));
    }

    #[test]
    fn test_missing_explicit_config_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(Some(&dir.path().join("nope.toml")));
        assert_eq!(config, ConfigFile::default());
        assert!(warnings[0].starts_with("Config file not found"));
    }

    #[test]
    fn test_flags_override_config() {
        let file = ConfigFile {
            source: Some("roster.json".to_string()),
            refresh_minutes: Some(5),
            timeout_secs: Some(30),
            keymap: Some("arrows".to_string()),
        };
        let cli = Overrides {
            refresh_minutes: Some(0),
            keymap: Some("vim".to_string()),
            ..Overrides::default()
        };
        let settings = Settings::resolve(cli, file);
        assert_eq!(settings.source.as_deref(), Some("roster.json"));
        assert_eq!(settings.refresh, None);
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.keymap.as_deref(), Some("vim"));
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(Overrides::default(), ConfigFile::default());
        assert_eq!(settings.source, None);
        assert_eq!(settings.refresh, Some(Duration::from_secs(15 * 60)));
        assert_eq!(settings.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_huge_refresh_interval_saturates() {
        let settings = Settings::resolve(
            Overrides {
                refresh_minutes: Some(u64::MAX),
                ..Overrides::default()
            },
            ConfigFile::default(),
        );
        assert_eq!(settings.refresh, Some(Duration::from_secs(u64::MAX)));
    }
}
