//! ログエンジン接続モジュール
//!
//! 実際の整形と書き込みは `tracing` / `tracing-subscriber` に任せる。
//! このモジュールはそのための窓口（レベル名の解釈、出力先・しきい値・
//! フォーマッタの組み立て、1件の記録）だけを持つ。

use crate::entry::Entry;
use crate::error::ParseLevelError;
use crate::formatter::{Format, FormatterConfig};
use crate::level::Level;
use std::fmt;
use tracing::Dispatch;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

/// 通常のログのターゲット
pub const RECORD_TARGET: &str = "app_logger";
/// Fatal ログのターゲット
pub const FATAL_TARGET: &str = "app_logger::fatal";
/// Panic ログのターゲット
pub const PANIC_TARGET: &str = "app_logger::panic";

/// `tracing` 側のしきい値
///
/// `tracing` には fatal / panic のレベルが無い。どちらも ERROR で記録し、
/// 専用ターゲットで区別することで Error より上のしきい値を表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// 指定レベル以上を全て通す
    Level(LevelFilter),
    /// Fatal と Panic だけを通す
    Fatal,
    /// Panic だけを通す
    Panic,
}

impl Threshold {
    /// 対応する `tracing` のレベル
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Threshold::Level(filter) => filter,
            Threshold::Fatal | Threshold::Panic => LevelFilter::ERROR,
        }
    }

    /// サブスクライバに渡すフィルタ
    pub fn targets(self) -> Targets {
        match self {
            Threshold::Level(filter) => Targets::new().with_default(filter),
            Threshold::Fatal => Targets::new()
                .with_target(FATAL_TARGET, LevelFilter::ERROR)
                .with_target(PANIC_TARGET, LevelFilter::ERROR),
            Threshold::Panic => Targets::new().with_target(PANIC_TARGET, LevelFilter::ERROR),
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Level(filter) => write!(f, "{}", filter),
            Threshold::Fatal => f.write_str("fatal"),
            Threshold::Panic => f.write_str("panic"),
        }
    }
}

/// レベル名が解決できない場合のしきい値
pub const DEFAULT_THRESHOLD: Threshold = Threshold::Level(LevelFilter::INFO);

/// レベル名を `tracing` 側のしきい値に変換
pub fn parse_level(name: &str) -> Result<Threshold, ParseLevelError> {
    match name.to_ascii_lowercase().as_str() {
        "panic" => Ok(Threshold::Panic),
        "fatal" => Ok(Threshold::Fatal),
        "error" => Ok(Threshold::Level(LevelFilter::ERROR)),
        "warn" | "warning" => Ok(Threshold::Level(LevelFilter::WARN)),
        "info" => Ok(Threshold::Level(LevelFilter::INFO)),
        "debug" => Ok(Threshold::Level(LevelFilter::DEBUG)),
        "trace" => Ok(Threshold::Level(LevelFilter::TRACE)),
        _ => Err(ParseLevelError(name.to_string())),
    }
}

/// 記録時に使う `tracing` のレベル
pub fn native_level(level: Level) -> tracing::Level {
    parse_level(level.as_str())
        .unwrap_or(DEFAULT_THRESHOLD)
        .level_filter()
        .into_level()
        .unwrap_or(tracing::Level::INFO)
}

/// 出力先・しきい値・フォーマッタを束ねたディスパッチャを作成
pub fn build_dispatch<W>(threshold: Threshold, formatter: &FormatterConfig, writer: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(threshold.targets());
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!formatter.disable_colors)
        .with_timer(formatter.timer())
        .with_writer(writer);

    match formatter.kind {
        Format::Text => Dispatch::new(registry.with(layer)),
        Format::Json => Dispatch::new(
            registry.with(
                layer
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_span_list(false),
            ),
        ),
    }
}

macro_rules! record {
    ($target:expr, $level:expr, $entry:ident, $severity:ident, $message:ident) => {
        tracing::event!(
            target: $target,
            $level,
            appName = $entry.app_name(),
            file = $entry.file(),
            line = $entry.line(),
            severity = $severity,
            "{}",
            $message
        )
    };
}

/// 1件のログを指定ディスパッチャで記録
pub fn emit(dispatch: &Dispatch, level: Level, entry: &Entry<'_>, message: &dyn fmt::Display) {
    let severity = level.terminates().then(|| level.as_str());

    tracing::dispatcher::with_default(dispatch, || match level {
        Level::Panic => record!(PANIC_TARGET, tracing::Level::ERROR, entry, severity, message),
        Level::Fatal => record!(FATAL_TARGET, tracing::Level::ERROR, entry, severity, message),
        _ => match native_level(level) {
            tracing::Level::ERROR => {
                record!(RECORD_TARGET, tracing::Level::ERROR, entry, severity, message)
            }
            tracing::Level::WARN => {
                record!(RECORD_TARGET, tracing::Level::WARN, entry, severity, message)
            }
            tracing::Level::INFO => {
                record!(RECORD_TARGET, tracing::Level::INFO, entry, severity, message)
            }
            tracing::Level::DEBUG => {
                record!(RECORD_TARGET, tracing::Level::DEBUG, entry, severity, message)
            }
            _ => record!(RECORD_TARGET, tracing::Level::TRACE, entry, severity, message),
        },
    });
}
