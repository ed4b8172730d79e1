use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::preferences::{PreferenceError, PreferenceStore};

/// Environment variable that overrides where preferences are stored.
pub const PREFERENCES_PATH_ENV: &str = "PURPLE_JURIDICO_PREFERENCES";

const APP_DIR_NAME: &str = "purple_juridico";
const FILE_NAME: &str = "preferences.json";

/// Stores preferences as a flat JSON object on disk.
///
/// ```json
/// { "theme_variant": "social" }
/// ```
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$PURPLE_JURIDICO_PREFERENCES` if set, otherwise
    /// `<config dir>/purple_juridico/preferences.json`.
    pub fn default_location() -> Result<Self, PreferenceError> {
        if let Some(path) = std::env::var_os(PREFERENCES_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(Self::new(path));
        }

        let config_dir = dirs::config_dir().ok_or(PreferenceError::NoConfigDir)?;
        Ok(Self::new(config_dir.join(APP_DIR_NAME).join(FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, PreferenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| PreferenceError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let values = self.load()?;

        Ok(match values.get(key) {
            Some(Value::String(value)) => Some(value.clone()),
            Some(other) => {
                log::warn!(
                    "ignoring non-string preference {key:?} = {other} in {}",
                    self.path.display()
                );
                None
            }
            None => None,
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = match self.load() {
            Ok(values) => values,
            Err(err @ PreferenceError::Malformed { .. }) => {
                log::warn!("{err}; rewriting the file from scratch");
                Map::new()
            }
            Err(err) => return Err(err),
        };

        values.insert(key.to_owned(), Value::String(value.to_owned()));

        let contents =
            serde_json::to_vec_pretty(&values).map_err(|source| PreferenceError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        replace_file(&self.temp_path(), &self.path, &contents)
            .map_err(|err| self.io_error(err))?;

        log::debug!("saved preference {key:?} to {}", self.path.display());
        Ok(())
    }
}

/// Writes beside `target` and renames over it, so readers never see a partial
/// file. The temp file is removed again if either step fails.
fn replace_file(temp_path: &Path, target: &Path, contents: &[u8]) -> io::Result<()> {
    let result = fs::write(temp_path, contents).and_then(|()| fs::rename(temp_path, target));

    if result.is_err() {
        match fs::remove_file(temp_path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => log::warn!("could not remove {}: {err}", temp_path.display()),
        }
    }

    result
}
