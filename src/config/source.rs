//! Key/value configuration sources.
//!
//! The service reads its settings through the [`ConfigSource`] trait, so any
//! lookup table can feed it. [`FileConfigSource`] layers JSON files with
//! `figment`, later files overriding earlier ones.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use figment::providers::{Format, Json};
use figment::Figment;

use crate::error::ConfigError;

/// Global defaults, lowest priority.
pub const GLOBAL_CONFIG_FILE: &str = "env/default.json";

/// Per-user overrides, highest priority. The file holds JSON despite its name.
pub const USER_CONFIG_FILE: &str = ".env";

/// A key/value configuration lookup.
pub trait ConfigSource {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// Configuration loaded from one or more JSON files.
///
/// Files that do not exist are skipped. Scalar values are exposed as
/// strings; nested objects and arrays are not addressable.
///
/// # Example
///
/// ```rust,ignore
/// use gorest_client::{ConfigSource, FileConfigSource};
///
/// let source = FileConfigSource::standard()?;
/// let url = source.get("url");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FileConfigSource {
    values: BTreeMap<String, serde_json::Value>,
    files: Vec<PathBuf>,
}

impl FileConfigSource {
    /// Loads `env/default.json` overlaid with `.env`, relative to the
    /// working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if either file exists but is not valid JSON.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::load([GLOBAL_CONFIG_FILE, USER_CONFIG_FILE])
    }

    /// Loads the given files in order; keys in later files win.
    ///
    /// Relative paths resolve against the working directory only; parent
    /// directories are never searched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if any existing file cannot be parsed.
    pub fn load<I, P>(paths: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut figment = Figment::new();
        let mut files = Vec::new();

        for path in paths {
            let path = path.as_ref();
            if path.exists() {
                tracing::debug!("Loading configuration from: {}", path.display());
                files.push(path.to_path_buf());
            }
            figment = figment.merge(Json::file_exact(path));
        }

        let values = figment
            .extract::<BTreeMap<String, serde_json::Value>>()
            .map_err(|e| ConfigError::Load {
                reason: e.to_string(),
            })?;

        Ok(Self { values, files })
    }

    /// Returns the files that were found and merged, lowest priority first.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl ConfigSource for FileConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_json(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_hash_map_source_returns_values() {
        let mut map = HashMap::new();
        map.insert("url".to_string(), "https://gorest.co.in".to_string());

        assert_eq!(
            ConfigSource::get(&map, "url"),
            Some("https://gorest.co.in".to_string())
        );
        assert_eq!(ConfigSource::get(&map, "accessToken"), None);
    }

    #[test]
    fn test_later_files_override_earlier_ones() {
        let dir = tempfile::tempdir().unwrap();
        let global = write_json(
            &dir,
            "default.json",
            r#"{"url": "https://global.example.com", "accessToken": "global-token"}"#,
        );
        let user = write_json(&dir, "user.json", r#"{"accessToken": "user-token"}"#);

        let source = FileConfigSource::load([&global, &user]).unwrap();

        assert_eq!(source.get("url"), Some("https://global.example.com".to_string()));
        assert_eq!(source.get("accessToken"), Some("user-token".to_string()));
        assert_eq!(source.files().len(), 2);
    }

    #[test]
    fn test_missing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");

        let source = FileConfigSource::load([&missing]).unwrap();

        assert!(source.files().is_empty());
        assert_eq!(source.get("url"), None);
    }

    #[test]
    fn test_malformed_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let broken = write_json(&dir, "broken.json", "{ not json");

        let result = FileConfigSource::load([&broken]);

        assert!(matches!(result, Err(ConfigError::Load { .. })));
    }

    #[test]
    fn test_scalar_values_are_stringified() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(
            &dir,
            "values.json",
            r#"{"perPage": 25, "strict": true, "nested": {"a": 1}}"#,
        );

        let source = FileConfigSource::load([&path]).unwrap();

        assert_eq!(source.get("perPage"), Some("25".to_string()));
        assert_eq!(source.get("strict"), Some("true".to_string()));
        assert_eq!(source.get("nested"), None);
    }
}
