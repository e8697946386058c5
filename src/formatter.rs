//! 出力フォーマット選択モジュール

use crate::error::ParseFormatError;
use chrono::Local;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// タイムスタンプ書式（`2006-01-02 15:04:05.000-0700` 相当）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f%z";

/// 出力フォーマットの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// 人が読むためのテキスト
    #[default]
    Text,
    /// 機械処理向けのJSON
    Json,
}

impl Format {
    /// 対応するフォーマッタ設定を取得
    pub fn formatter(self) -> &'static FormatterConfig {
        match self {
            Format::Text => configure_text(),
            Format::Json => configure_json(),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => f.write_str("text"),
            Format::Json => f.write_str("json"),
        }
    }
}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// フォーマッタ設定
///
/// 種類ごとにプロセスで1つだけ存在し、全てのログ呼び出しで共有される。
/// 出力に反映されるのは `kind`、`timestamp_format`、`disable_colors` の3つ。
/// `disable_sorting` と `full_timestamp` は出力の性質を表すだけの値。
#[derive(Debug, PartialEq, Eq)]
pub struct FormatterConfig {
    pub kind: Format,
    /// chrono 形式のタイムスタンプ書式
    pub timestamp_format: &'static str,
    /// フィールドは常にキー順（appName, file, line）で記録される
    pub disable_sorting: bool,
    /// タイムスタンプは常に `timestamp_format` の完全な日時
    pub full_timestamp: bool,
    pub disable_colors: bool,
}

impl FormatterConfig {
    const fn text() -> Self {
        Self {
            kind: Format::Text,
            timestamp_format: TIMESTAMP_FORMAT,
            disable_sorting: false,
            full_timestamp: true,
            disable_colors: true,
        }
    }

    const fn json() -> Self {
        Self {
            kind: Format::Json,
            timestamp_format: TIMESTAMP_FORMAT,
            disable_sorting: false,
            full_timestamp: true,
            disable_colors: true,
        }
    }

    /// このフォーマッタ用のタイマーを作成
    pub(crate) fn timer(&self) -> Timestamp {
        Timestamp {
            format: self.timestamp_format,
        }
    }
}

/// テキストフォーマッタ
pub static TEXT_FORMATTER: FormatterConfig = FormatterConfig::text();

/// JSONフォーマッタ
pub static JSON_FORMATTER: FormatterConfig = FormatterConfig::json();

/// テキストフォーマッタを選択
pub fn configure_text() -> &'static FormatterConfig {
    &TEXT_FORMATTER
}

/// JSONフォーマッタを選択
pub fn configure_json() -> &'static FormatterConfig {
    &JSON_FORMATTER
}

/// ローカル時刻でタイムスタンプを書き出すタイマー
pub(crate) struct Timestamp {
    format: &'static str,
}

impl FormatTime for Timestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(self.format))
    }
}
