//! Configuration management for papyr.
//!
//! Parses `papyr.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `build.posts_dir`
//! - `build.output_dir`
//!
//! Path values may also start with `~`, expanded to the home directory.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override posts source directory.
    pub posts_dir: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "papyr.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Build configuration (paths are relative strings from TOML).
    build: BuildConfigRaw,

    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, used in generated page shells.
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_owned(),
        }
    }
}

/// Raw build configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    posts_dir: Option<String>,
    output_dir: Option<String>,
}

/// Resolved build configuration with absolute paths.
#[derive(Debug, Default, Clone)]
pub struct BuildConfig {
    /// Source directory for post markdown files.
    pub posts_dir: PathBuf,
    /// Output directory for generated pages.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.title`").
        field: String,
        /// Error message (e.g., "${`SITE_TITLE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `papyr.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(posts_dir) = &settings.posts_dir {
            self.build_resolved.posts_dir.clone_from(posts_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_config_from(&std::env::current_dir().ok()?)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            build: BuildConfigRaw::default(),
            build_resolved: BuildConfig {
                posts_dir: base.join("posts"),
                output_dir: base.join("public"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;

        if let Some(ref posts_dir) = self.build.posts_dir {
            self.build.posts_dir = Some(expand::expand_env(posts_dir, "build.posts_dir")?);
        }
        if let Some(ref output_dir) = self.build.output_dir {
            self.build.output_dir = Some(expand::expand_env(output_dir, "build.output_dir")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// A leading `~` expands to the home directory; other relative paths are
    /// joined onto the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| {
            let raw = path.unwrap_or(default);
            let expanded = shellexpand::tilde(raw);
            config_dir.join(expanded.as_ref())
        };

        self.build_resolved = BuildConfig {
            posts_dir: resolve(self.build.posts_dir.as_deref(), "posts"),
            output_dir: resolve(self.build.output_dir.as_deref(), "public"),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.title, "Blog");
        assert_eq!(config.build_resolved.posts_dir, PathBuf::from("/test/posts"));
        assert_eq!(
            config.build_resolved.output_dir,
            PathBuf::from("/test/public")
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.title, "Blog");
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
title = "My Corner"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "My Corner");
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[build]
posts_dir = "content/posts"
output_dir = "dist"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.build_resolved.posts_dir,
            PathBuf::from("/project/content/posts")
        );
        assert_eq!(
            config.build_resolved.output_dir,
            PathBuf::from("/project/dist")
        );
    }

    #[test]
    fn test_resolve_paths_defaults() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.build_resolved.posts_dir,
            PathBuf::from("/project/posts")
        );
        assert_eq!(
            config.build_resolved.output_dir,
            PathBuf::from("/project/public")
        );
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            posts_dir: Some(PathBuf::from("/custom/posts")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.build_resolved.posts_dir,
            PathBuf::from("/custom/posts")
        );
        assert_eq!(
            config.build_resolved.output_dir,
            PathBuf::from("/test/public") // Unchanged
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(
            config.build_resolved.posts_dir,
            before.build_resolved.posts_dir
        );
    }

    #[test]
    fn test_expand_env_vars_title() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("PAPYR_TEST_TITLE", "Env Title");
        }

        let toml = r#"
[site]
title = "${PAPYR_TEST_TITLE}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.site.title, "Env Title");

        unsafe {
            std::env::remove_var("PAPYR_TEST_TITLE");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PAPYR_MISSING_VAR_TEST");
        }

        let toml = r#"
[build]
posts_dir = "${PAPYR_MISSING_VAR_TEST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let result = config.expand_env_vars();

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("PAPYR_MISSING_VAR_TEST"));
        assert!(err.to_string().contains("build.posts_dir"));
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.title = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn test_load_explicit_missing_file_is_not_found() {
        let err = Config::load(Some(Path::new("/no/such/papyr.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("papyr.toml");
        std::fs::write(
            &config_path,
            "[site]\ntitle = \"T\"\n\n[build]\nposts_dir = \"content\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        assert_eq!(config.site.title, "T");
        assert_eq!(config.build_resolved.posts_dir, dir.path().join("content"));
        assert_eq!(config.config_path, Some(config_path));
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("papyr.toml");
        std::fs::write(&config_path, "").unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = Config::discover_config_from(&nested);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_discover_config_none() {
        let dir = tempfile::tempdir().unwrap();
        // A bare temp dir has no papyr.toml anywhere up the tree in practice,
        // but the root always terminates the walk
        let found = Config::discover_config_from(dir.path());
        assert!(found.is_none() || found.is_some_and(|p| p.ends_with(CONFIG_FILENAME)));
    }
}
