//! Runtime settings, read from the environment after loading `.env`.

use std::path::Path;

use log::LevelFilter;

use crate::api::err::CustomError;

pub const LOG_LEVEL_KEY: &str = "STUDENT_MANAGER_LOG_LEVEL";
pub const TITLE_KEY: &str = "STUDENT_MANAGER_TITLE";

const DEFAULT_TITLE: &str = "Student Management System";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            window_title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// load `.env` from the working directory if there is one, then read the process environment
    pub fn load() -> Result<Self, CustomError> {
        // a missing .env file is fine
        dotenv::dotenv().ok();
        Self::from_pairs(std::env::vars())
    }

    /// read settings from a specific dotenv file without touching the process environment
    pub fn from_file(path: &Path) -> Result<Self, CustomError> {
        // from_path would write the values into the process environment
        #[allow(deprecated)]
        let pairs = dotenv::from_path_iter(path)
            .map_err(|e| CustomError::Config(format!("{}: {}", path.display(), e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CustomError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_pairs(pairs)
    }

    /// Later pairs win over earlier ones; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, CustomError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                LOG_LEVEL_KEY => {
                    let value = value.into();
                    config.log_level = value.trim().parse().map_err(|_| {
                        CustomError::Config(format!("{} has unknown log level '{}'", LOG_LEVEL_KEY, value))
                    })?;
                }
                TITLE_KEY => config.window_title = value.into(),
                _ => {}
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs::File, io::Write};
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_pairs(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.window_title, "Student Management System");
    }

    #[test]
    fn test_from_pairs() {
        let config = AppConfig::from_pairs([
            ("PATH", "/usr/bin"),
            (LOG_LEVEL_KEY, "Debug"),
            (TITLE_KEY, "Roll Call"),
            (LOG_LEVEL_KEY, "trace"),
        ])
        .unwrap();
        assert_eq!(config.log_level, LevelFilter::Trace);
        assert_eq!(config.window_title, "Roll Call");
    }

    #[test]
    fn test_bad_log_level() {
        let result = AppConfig::from_pairs([(LOG_LEVEL_KEY, "loud")]);
        assert!(matches!(result, Err(CustomError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join(".env");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "# settings for the student manager").unwrap();
        writeln!(file, "STUDENT_MANAGER_LOG_LEVEL=warn").unwrap();
        writeln!(file, "STUDENT_MANAGER_TITLE=\"Class Register\"").unwrap();

        let config = AppConfig::from_file(&file_path).unwrap();
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.window_title, "Class Register");
    }

    #[test]
    fn test_from_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = AppConfig::from_file(&temp_dir.path().join("absent.env"));
        assert!(matches!(result, Err(CustomError::Config(_))));
    }
}
