use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILENAME;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[linefix]` section.
    pub linefix: LinefixConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for linefix. Every key is optional; command-line
/// flags take precedence.
pub struct LinefixConfig {
    /// Directory that catalog paths are relative to.
    pub root: Option<PathBuf>,
    /// Catalog file to run.
    pub catalog: Option<PathBuf>,
    /// Report what would change without writing files.
    pub dry_run: Option<bool>,
    /// Print per-entry diagnostics to stderr.
    pub verbose: Option<bool>,
    /// Parameter renamed by `unused_param` entries without a detail.
    pub param_name: Option<String>,
}

impl Config {
    /// Loads configuration from the current directory or its ancestors.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// A file that exists but does not parse is skipped, and the search
    /// carries on upwards.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }
        if let Ok(absolute) = current.canonicalize() {
            current = absolute;
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }

    /// Resolves a path from the config file against the file's directory.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match self.config_file_path.as_deref().and_then(Path::parent) {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Configured root, resolved against the config file.
    #[must_use]
    pub fn root(&self) -> Option<PathBuf> {
        self.linefix.root.as_deref().map(|p| self.resolve(p))
    }

    /// Configured catalog, resolved against the config file.
    #[must_use]
    pub fn catalog(&self) -> Option<PathBuf> {
        self.linefix.catalog.as_deref().map(|p| self.resolve(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_path_no_config() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(dir.path());
        assert!(config.linefix.catalog.is_none());
        assert!(config.linefix.dry_run.is_none());
    }

    #[test]
    fn test_load_from_path_linefix_toml() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(".linefix.toml")).unwrap();
        writeln!(
            file,
            r#"[linefix]
catalog = "fixes.toml"
dry_run = true
param_name = "req"
"#
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(config.linefix.dry_run, Some(true));
        assert_eq!(config.linefix.param_name.as_deref(), Some("req"));
        assert!(config.config_file_path.is_some());
    }

    #[test]
    fn test_load_from_path_traverses_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src").join("app");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join(".linefix.toml"),
            "[linefix]\nverbose = true\n",
        )
        .unwrap();

        let config = Config::load_from_path(&nested);
        assert_eq!(config.linefix.verbose, Some(true));
    }

    #[test]
    fn test_load_from_file_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".linefix.toml"), "[linefix]\nroot = \"web\"\n").unwrap();
        let catalog = dir.path().join("fixes.toml");
        std::fs::write(&catalog, "").unwrap();

        let config = Config::load_from_path(&catalog);
        assert_eq!(config.linefix.root.as_deref(), Some(Path::new("web")));
    }

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".linefix.toml"),
            "[linefix]\nroot = \"web\"\ncatalog = \"/abs/fixes.json\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        let base = dir.path().canonicalize().unwrap();
        assert_eq!(config.root(), Some(base.join("web")));
        assert_eq!(config.catalog(), Some(PathBuf::from("/abs/fixes.json")));
    }

    #[test]
    fn test_invalid_config_is_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".linefix.toml"), "[linefix]\ndry_run = \"yes\"\n").unwrap();

        let config = Config::load_from_path(dir.path());
        assert!(config.config_file_path.is_none() || config.linefix.dry_run.is_none());
    }
}
