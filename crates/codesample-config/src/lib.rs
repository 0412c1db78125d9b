use codesample_engine::{LanguageOption, Settings, default_languages};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid include pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Line-numbers value offered when inserting a new sample
    pub line_numbers_default: bool,
    /// Where documents live; commands fall back to it when given no path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_root: Option<PathBuf>,
    /// Glob patterns, relative to the content root, selecting documents
    pub include: Vec<String>,
    /// Replaces the built-in language list when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<LanguageOption>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_numbers_default: true,
            content_root: None,
            include: vec!["**/*.html".to_string(), "**/*.htm".to_string()],
            languages: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the content root
        config.content_root = config
            .content_root
            .map(|root| Self::expand_path(&root).unwrap_or(root));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/codesample");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Editor settings for this configuration.
    pub fn settings(&self) -> Settings {
        Settings {
            languages: self.languages.clone(),
            line_numbers_default: self.line_numbers_default,
        }
    }

    /// The language list the edit form will offer.
    pub fn effective_languages(&self) -> Vec<LanguageOption> {
        self.languages.clone().unwrap_or_else(default_languages)
    }

    /// Files under `root` matching any include pattern, sorted and without
    /// duplicates.
    pub fn matching_files(&self, root: &Path) -> Result<Vec<PathBuf>, ConfigError> {
        let mut files = Vec::new();
        for pattern in &self.include {
            let full = root.join(pattern);
            let paths = glob::glob(&full.to_string_lossy()).map_err(|source| {
                ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                }
            })?;
            for entry in paths {
                match entry {
                    Ok(path) if path.is_file() => files.push(path),
                    Ok(_) => {}
                    Err(e) => log::warn!("skipping unreadable path: {e}"),
                }
            }
        }
        files.sort();
        files.dedup();
        Ok(files)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/codesample/config.toml"));
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert!(config.line_numbers_default);
        assert_eq!(config.effective_languages().len(), 10);
    }

    #[test]
    fn test_config_with_custom_languages() {
        let config_content = r#"
line_numbers_default = false

[[languages]]
text = "Rust"
value = "rust"

[[languages]]
text = "Go"
value = "go"
"#;

        let config: Config = toml::from_str(config_content).unwrap();
        let settings = config.settings();

        assert!(!settings.line_numbers_default);
        assert_eq!(
            settings.languages,
            Some(vec![
                LanguageOption::new("Rust", "rust"),
                LanguageOption::new("Go", "go"),
            ])
        );
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            content_root: Some(PathBuf::from("/tmp/site")),
            languages: Some(vec![LanguageOption::new("Rust", "rust")]),
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(Config::expand_path(&path).unwrap(), path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "line_numbers_default = \"maybe\"").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            content_root: Some(PathBuf::from("/tmp/site")),
            line_numbers_default: false,
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_content_root_with_env_var_is_expanded_on_load() {
        unsafe {
            env::set_var("CODESAMPLE_SITE", "/custom/site");
        }
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "content_root = \"$CODESAMPLE_SITE/pages\"").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.content_root, Some(PathBuf::from("/custom/site/pages")));
        unsafe {
            env::remove_var("CODESAMPLE_SITE");
        }
    }

    #[test]
    fn test_matching_files_uses_include_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("posts")).unwrap();
        std::fs::write(root.join("index.html"), "<p>a</p>").unwrap();
        std::fs::write(root.join("posts").join("one.htm"), "<p>b</p>").unwrap();
        std::fs::write(root.join("notes.md"), "# c").unwrap();

        let files = Config::default().matching_files(root).unwrap();

        assert_eq!(files, vec![root.join("index.html"), root.join("posts").join("one.htm")]);
    }

    #[test]
    fn test_invalid_include_pattern() {
        let config = Config {
            include: vec!["[".to_string()],
            ..Config::default()
        };
        let temp_dir = TempDir::new().unwrap();

        let result = config.matching_files(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }
}
