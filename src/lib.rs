//! App Logger - プロセス全体で1つだけ持つ構造化ログのファサード
//!
//! 起動時に一度だけ [`init`] を呼び、あとはどこからでもレベル別の関数や
//! マクロでログを出す。全てのログに `appName` と呼び出し元の `file` / `line`
//! が付与される。
//!
//! ```no_run
//! use app_logger::{Format, Level};
//!
//! app_logger::init("svc1", Level::Info, Format::Json);
//! app_logger::infoln!("started", "on", 8080);
//! app_logger::warnf!("retry {}/{}", 1, 3);
//! ```

pub mod dispatch;
pub mod engine;
pub mod entry;
pub mod error;
pub mod formatter;
pub mod level;
pub mod logger;
mod macros;

#[cfg(test)]
mod test_support;

pub use dispatch::*;
pub use entry::{CallSite, Entry, Termination};
pub use formatter::{Format, FormatterConfig};
pub use level::Level;
pub use logger::{config, current, init, is_initialized, Logger, LoggerConfig};
