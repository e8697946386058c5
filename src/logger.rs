//! ロガー初期化モジュール
//!
//! プロセスで1つだけのロガーを `OnceLock` で保持する。最初の `init` 呼び出し
//! の引数だけが有効で、以降の呼び出しは何もせずに戻る。

use crate::engine::{self, Threshold};
use crate::entry::Entry;
use crate::formatter::Format;
use crate::level::Level;
use std::io;
use std::sync::OnceLock;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;

static INSTANCE: OnceLock<Logger> = OnceLock::new();

/// 初期化前の呼び出しで使うロガー（`INSTANCE` には入れない）
static FALLBACK: OnceLock<Logger> = OnceLock::new();

/// ロガー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    app_name: String,
    threshold: Threshold,
    format: Format,
}

impl LoggerConfig {
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// `tracing` 側のしきい値
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

/// 設定と出力先を束ねたロガー
pub struct Logger {
    config: LoggerConfig,
    dispatch: Dispatch,
}

impl Logger {
    /// 任意の出力先でロガーを作成
    ///
    /// レベル名が解決できない場合は `engine::DEFAULT_THRESHOLD` を使う。
    pub(crate) fn with_writer<W>(app_name: &str, level: Level, format: Format, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let threshold = level.to_native().unwrap_or(engine::DEFAULT_THRESHOLD);
        let dispatch = engine::build_dispatch(threshold, format.formatter(), writer);

        Self {
            config: LoggerConfig {
                app_name: app_name.to_string(),
                threshold,
                format,
            },
            dispatch,
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub(crate) fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// 呼び出し位置付きのエントリを作成
    #[track_caller]
    pub fn entry(&self) -> Entry<'_> {
        Entry::capture(self)
    }
}

/// ロガーを初期化（標準出力へ出力）
///
/// 複数スレッドから同時に呼ばれても、設定が反映されるのは1回だけ。
pub fn init(app_name: &str, level: Level, format: Format) {
    install(|| Logger::with_writer(app_name, level, format, io::stdout));
}

/// 初期化済みならその設定を取得
pub fn config() -> Option<&'static LoggerConfig> {
    INSTANCE.get().map(Logger::config)
}

/// 初期化済みかどうか
pub fn is_initialized() -> bool {
    INSTANCE.get().is_some()
}

/// 現在のロガーを取得
///
/// 未初期化の場合は既定値（app名は空、Info、Text、標準出力）のロガーを返す。
pub fn current() -> &'static Logger {
    INSTANCE.get().unwrap_or_else(|| {
        FALLBACK.get_or_init(|| Logger::with_writer("", Level::Info, Format::Text, io::stdout))
    })
}

/// 勝った呼び出しの場合だけ `build` を実行して登録する
fn install(build: impl FnOnce() -> Logger) -> bool {
    let mut installed = false;
    INSTANCE.get_or_init(|| {
        installed = true;
        let logger = build();
        if tracing::dispatcher::set_global_default(logger.dispatch.clone()).is_err() {
            tracing::debug!("グローバルなsubscriberが既に設定されているため、専用ディスパッチャのみを使用します");
        }
        logger
    });
    installed
}

#[cfg(test)]
pub(crate) fn init_with_writer<W>(app_name: &str, level: Level, format: Format, writer: W) -> bool
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    install(|| Logger::with_writer(app_name, level, format, writer))
}
