//! 呼び出し元情報の付与モジュール
//!
//! 呼び出し元の特定は `#[track_caller]` で行う。公開APIからここまでの
//! 全ての関数に `#[track_caller]` が付いている限り、`Location::caller()`
//! はアプリケーション側の呼び出し位置を指す。途中に属性の無い関数を
//! 挟むと、その関数の位置が記録されてしまう。

use crate::engine;
use crate::level::Level;
use crate::logger::Logger;
use std::collections::BTreeMap;
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// 呼び出し位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// ディレクトリを除いたファイル名
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// 呼び出し元の位置を取得
    #[track_caller]
    pub fn capture() -> Option<Self> {
        Self::from_location(Location::caller())
    }

    /// `Location` から作成
    ///
    /// ファイル名が取り出せない場合は `None`。
    pub fn from_location(location: &Location<'static>) -> Option<Self> {
        let file = Path::new(location.file()).file_name()?.to_str()?;
        Some(Self {
            file,
            line: location.line(),
        })
    }
}

/// 1回のログ呼び出し分のエントリ
///
/// `appName` は常に持ち、呼び出し位置が取れた場合は `file` と `line` も持つ。
#[derive(Clone, Copy)]
pub struct Entry<'a> {
    logger: &'a Logger,
    call_site: Option<CallSite>,
}

impl<'a> Entry<'a> {
    /// 呼び出し位置を付けたエントリを作成
    #[track_caller]
    pub fn capture(logger: &'a Logger) -> Self {
        Self {
            logger,
            call_site: CallSite::capture(),
        }
    }

    /// `appName` だけを持つエントリを作成
    pub fn bare(logger: &'a Logger) -> Self {
        Self {
            logger,
            call_site: None,
        }
    }

    pub fn app_name(&self) -> &'a str {
        self.logger.config().app_name()
    }

    pub fn file(&self) -> Option<&'static str> {
        self.call_site.map(|site| site.file)
    }

    pub fn line(&self) -> Option<u32> {
        self.call_site.map(|site| site.line)
    }

    pub fn call_site(&self) -> Option<CallSite> {
        self.call_site
    }

    /// 付与されるフィールドの一覧
    pub fn fields(&self) -> BTreeMap<&'static str, String> {
        let mut fields = BTreeMap::new();
        fields.insert("appName", self.app_name().to_string());
        if let Some(site) = self.call_site {
            fields.insert("file", site.file.to_string());
            fields.insert("line", site.line.to_string());
        }
        fields
    }

    /// 指定レベルで記録（終了処理は行わない）
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        engine::emit(self.logger.dispatch(), level, self, &message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    /// Info と同じ
    pub fn print(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::Warn, message);
    }

    /// Warn と同じ
    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    /// 記録してからプロセスを終了する
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.terminate(Level::Fatal, message)
    }

    /// 記録してからパニックする
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        self.terminate(Level::Panic, message)
    }

    /// 記録してからレベルに対応する終了処理を行う
    #[track_caller]
    fn terminate(&self, level: Level, message: impl fmt::Display) -> ! {
        self.log(level, &message);
        Termination::for_level(level)
            .unwrap_or(Termination::Unwind)
            .execute(message.to_string())
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields()).finish()
    }
}

/// Fatal / Panic の記録後に行う終了処理
///
/// しきい値で記録が捨てられた場合でも実行される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// 指定の終了コードでプロセスを終了
    Exit(i32),
    /// メッセージをペイロードにしてパニック
    Unwind,
}

impl Termination {
    /// レベルに対応する終了処理
    pub fn for_level(level: Level) -> Option<Self> {
        match level {
            Level::Fatal => Some(Termination::Exit(1)),
            Level::Panic => Some(Termination::Unwind),
            _ => None,
        }
    }

    #[track_caller]
    pub fn execute(self, message: String) -> ! {
        match self {
            Termination::Exit(code) => std::process::exit(code),
            Termination::Unwind => std::panic::panic_any(message),
        }
    }
}
