//! ログレベルモジュール
//!
//! 判別値の並びは一般的な重要度と逆向き（Panic が最小、Debug が最大）。
//! `tracing` のレベルとは数値で比較できないため、変換は必ず表示名を経由する。

use crate::engine::{self, Threshold};
use crate::error::ParseLevelError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum Level {
    Panic = 0,
    Fatal = 1,
    Error = 2,
    #[serde(rename = "warning", alias = "warn")]
    Warn = 3,
    Info = 4,
    Debug = 5,
}

impl Level {
    /// 全レベル（判別値の昇順）
    pub const ALL: [Level; 6] = [
        Level::Panic,
        Level::Fatal,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
    ];

    /// 表示名を取得
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Panic => "panic",
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warn => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// 判別値からレベルを取得
    pub fn from_u32(value: u32) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// 判別値から表示名を取得
    ///
    /// 範囲外の値には `"unknown"` を返す。
    pub fn name_of(value: u32) -> &'static str {
        Self::from_u32(value).map_or("unknown", Level::as_str)
    }

    /// `tracing` 側のしきい値へ変換
    pub fn to_native(self) -> Result<Threshold, ParseLevelError> {
        engine::parse_level(self.as_str())
    }

    /// プロセスを終了させるレベルかどうか
    pub fn terminates(self) -> bool {
        matches!(self, Level::Panic | Level::Fatal)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "panic" => Ok(Level::Panic),
            "fatal" => Ok(Level::Fatal),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_display_names() {
        assert_eq!(Level::Panic.to_string(), "panic");
        assert_eq!(Level::Fatal.to_string(), "fatal");
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Warn.to_string(), "warning");
        assert_eq!(Level::Info.to_string(), "info");
        assert_eq!(Level::Debug.to_string(), "debug");
    }

    #[test]
    fn test_discriminants_are_reversed() {
        assert!(Level::Panic < Level::Debug);
        assert_eq!(Level::Panic as u32, 0);
        assert_eq!(Level::Debug as u32, 5);
    }

    #[test]
    fn test_every_level_resolves_to_native() {
        for level in Level::ALL {
            assert_ne!(level.as_str(), "unknown");
            let native = level.to_native();
            assert!(native.is_ok(), "{} が解決できない", level);
        }
    }

    #[test]
    fn test_native_mapping_by_name() {
        assert_eq!(Level::Panic.to_native().unwrap(), Threshold::Panic);
        assert_eq!(Level::Fatal.to_native().unwrap(), Threshold::Fatal);
        assert_eq!(Level::Error.to_native().unwrap(), Threshold::Level(LevelFilter::ERROR));
        assert_eq!(Level::Warn.to_native().unwrap(), Threshold::Level(LevelFilter::WARN));
        assert_eq!(Level::Info.to_native().unwrap(), Threshold::Level(LevelFilter::INFO));
        assert_eq!(Level::Debug.to_native().unwrap(), Threshold::Level(LevelFilter::DEBUG));
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        assert_eq!(Level::name_of(6), "unknown");
        assert_eq!(Level::name_of(u32::MAX), "unknown");
        assert_eq!(Level::from_u32(42), None);
        assert_eq!(Level::name_of(3), "warning");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_terminates() {
        assert!(Level::Panic.terminates());
        assert!(Level::Fatal.terminates());
        assert!(!Level::Error.terminates());
    }
}
