//! 設定モジュール
//!
//! ライブラリ本体は設定ファイルを読まない。ここは `applog` コマンド専用。

use app_logger::{Format, Level};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 設定エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML解析エラー: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("設定値が不正です: {0}")]
    ValidationError(String),
}

/// ロガー設定値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// 全てのログに付与するアプリケーション名
    pub app_name: String,
    /// しきい値
    pub level: Level,
    /// 出力フォーマット
    pub format: Format,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "applog".to_string(),
            level: Level::Info,
            format: Format::Text,
        }
    }
}

/// TOML設定ファイル用構造体
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    app_name: Option<String>,
    level: Option<Level>,
    format: Option<Format>,
}

/// CLI引数
#[derive(Debug, Default)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub app_name: Option<String>,
    pub level: Option<Level>,
    pub format: Option<Format>,
}

/// 既定の設定ファイルのパス
pub fn default_config_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".applog").join("config.toml")
}

impl Settings {
    /// 設定を読み込む
    ///
    /// 優先順位: CLI引数 > 設定ファイル > デフォルト値
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let config_path = cli_args
            .config
            .clone()
            .unwrap_or_else(default_config_path);
        Self::load_from(&config_path, cli_args)
    }

    /// 指定した設定ファイルから読み込む（存在しなければデフォルト値）
    pub fn load_from(config_path: &Path, cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if config_path.exists() {
            let content = fs::read_to_string(config_path)?;
            let file_config: FileConfig = toml::from_str(&content)?;
            settings.merge_file_config(&file_config);
        }

        settings.merge_cli_args(cli_args);
        settings.validate()?;

        Ok(settings)
    }

    /// ファイル設定をマージ
    fn merge_file_config(&mut self, file_config: &FileConfig) {
        if let Some(ref name) = file_config.app_name {
            self.app_name = name.clone();
        }
        if let Some(level) = file_config.level {
            self.level = level;
        }
        if let Some(format) = file_config.format {
            self.format = format;
        }
    }

    /// CLI引数をマージ
    fn merge_cli_args(&mut self, cli_args: &CliArgs) {
        if let Some(ref name) = cli_args.app_name {
            self.app_name = name.clone();
        }
        if let Some(level) = cli_args.level {
            self.level = level;
        }
        if let Some(format) = cli_args.format {
            self.format = format;
        }
    }

    /// 設定値をバリデート
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "app_name は空にできません".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.app_name, "applog");
        assert_eq!(settings.level, Level::Info);
        assert_eq!(settings.format, Format::Text);
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path();
        assert!(path.ends_with(".applog/config.toml"));
    }

    #[test]
    fn test_cli_args_override() {
        let mut settings = Settings::default();
        let cli_args = CliArgs {
            app_name: Some("svc1".to_string()),
            level: Some(Level::Debug),
            format: Some(Format::Json),
            ..Default::default()
        };
        settings.merge_cli_args(&cli_args);
        assert_eq!(settings.app_name, "svc1");
        assert_eq!(settings.level, Level::Debug);
        assert_eq!(settings.format, Format::Json);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "app_name = \"svc1\"\nlevel = \"warning\"\nformat = \"json\"\n").unwrap();

        let settings = Settings::load_from(&path, &CliArgs::default()).unwrap();
        assert_eq!(settings.app_name, "svc1");
        assert_eq!(settings.level, Level::Warn);
        assert_eq!(settings.format, Format::Json);
    }

    #[test]
    fn test_file_accepts_warn_alias() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "level = \"warn\"\n").unwrap();

        let settings = Settings::load_from(&path, &CliArgs::default()).unwrap();
        assert_eq!(settings.level, Level::Warn);
        assert_eq!(settings.app_name, "applog");
    }

    #[test]
    fn test_cli_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "app_name = \"from-file\"\nlevel = \"debug\"\n").unwrap();

        let cli_args = CliArgs {
            app_name: Some("from-cli".to_string()),
            ..Default::default()
        };
        let settings = Settings::load_from(&path, &cli_args).unwrap();

        // CLIが優先
        assert_eq!(settings.app_name, "from-cli");
        // ファイル設定が維持
        assert_eq!(settings.level, Level::Debug);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let settings = Settings::load_from(&path, &CliArgs::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_level_in_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "level = \"verbose\"\n").unwrap();

        let result = Settings::load_from(&path, &CliArgs::default());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validate_empty_app_name() {
        let mut settings = Settings::default();
        settings.app_name = "  ".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::IoError(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        assert!(err.to_string().contains("IOエラー"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::ValidationError("app_name は空にできません".to_string());
        assert!(err.to_string().contains("設定値が不正です"));
    }
}
