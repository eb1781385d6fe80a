use crate::error::{GuideError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カタログパスを上書きする環境変数
pub const CATALOG_ENV: &str = "XTM_TEMPLATES_PATH";

/// 同梱カタログ（リポジトリ直下から実行した場合）
pub const DEFAULT_CATALOG: &str = "data/Filter Templates.json";
pub const DEFAULT_EXPORT_STEM: &str = "filter_templates";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// テンプレートJSONのパス
    pub catalog_path: PathBuf,
    /// エクスポートファイル名（拡張子なし）
    pub export_stem: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            export_stem: DEFAULT_EXPORT_STEM.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("config loaded from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GuideError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("xtm-template-guide").join("config.json"))
    }

    /// カタログパスの決定（CLI引数 > 環境変数 > 設定ファイル）
    pub fn catalog_path(&self, cli_override: Option<&Path>) -> PathBuf {
        self.catalog_path_with_env(cli_override, std::env::var_os(CATALOG_ENV).map(PathBuf::from))
    }

    fn catalog_path_with_env(&self, cli_override: Option<&Path>, env: Option<PathBuf>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        if let Some(path) = env.filter(|p| !p.as_os_str().is_empty()) {
            return path;
        }
        self.catalog_path.clone()
    }

    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = path;
        self.save()
    }
}
