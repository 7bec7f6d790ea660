//! 설정 파일
//!
//! `<config dir>/filesift/config.toml` (환경변수 `FILESIFT_CONFIG`로 경로 변경).
//! 파일이 없거나 읽을 수 없으면 기본값으로 시작한다.

use crate::system::DeleteMode;
use crate::utils::error::{FileSiftError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "FILESIFT_CONFIG";
const APP_DIR: &str = "filesift";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    pub delete_mode: DeleteMode,
    pub log_level: String,
    /// 시작 시 바로 여는 폴더
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routines_dir: Option<PathBuf>,
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::VERSION,
            delete_mode: DeleteMode::default(),
            log_level: "info".to_string(),
            start_dir: None,
            routines_dir: None,
            theme: "dark".to_string(),
        }
    }
}

impl Config {
    const VERSION: u32 = 1;

    /// 설정 파일 경로
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(CONFIG_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// 파일에서 읽기 (없거나 잘못되었으면 기본값)
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => config,
            Err(FileSiftError::PathNotFound { .. }) => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default config");
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| FileSiftError::from_io(e, path))?;
        let config: Config = toml::from_str(&data)
            .map_err(|e| FileSiftError::Config(format!("{}: {e}", path.display())))?;
        if config.version != Self::VERSION {
            return Err(FileSiftError::Config(format!(
                "unsupported config version {}",
                config.version
            )));
        }
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| FileSiftError::from_io(e, parent))?;
        }
        let data = toml::to_string_pretty(self)
            .map_err(|e| FileSiftError::Config(format!("cannot encode config: {e}")))?;
        fs::write(path, data).map_err(|e| FileSiftError::from_io(e, path))
    }

    /// 루틴 저장 디렉토리
    pub fn routines_dir(&self) -> PathBuf {
        self.routines_dir.clone().unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(env::temp_dir)
                .join(APP_DIR)
                .join("routines")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_or_default(Some(&temp.path().join("none.toml")));
        assert_eq!(config, Config::default());
        assert_eq!(Config::load_or_default(None), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");
        let config = Config {
            delete_mode: DeleteMode::Trash,
            start_dir: Some(PathBuf::from("/srv/docs")),
            theme: "light".to_string(),
            ..Default::default()
        };

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "theme = \"light\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.version, 1);
    }

    #[test]
    fn test_invalid_or_wrong_version_falls_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        fs::write(&path, "version = 7\n").unwrap();
        assert!(matches!(Config::load(&path), Err(FileSiftError::Config(_))));
        assert_eq!(Config::load_or_default(Some(&path)), Config::default());

        fs::write(&path, "theme = [").unwrap();
        assert_eq!(Config::load_or_default(Some(&path)), Config::default());
    }
}
