//! レベル別ログ出力API
//!
//! レベルごとに3つの呼び出し形を持つ。
//! - `info(&[..])`: 引数をそのまま連結
//! - `infof(format_args!(..))`: 書式指定
//! - `infoln(&[..])`: 引数を空白区切りで連結
//!
//! どの関数も `#[track_caller]` を付けたまま `Entry::capture` まで呼び出す。

use crate::entry::Entry;
use crate::logger;
use std::fmt;

/// 引数を区切り無しで連結して表示
pub struct Concat<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in self.0 {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// 引数を空白区切りで連結して表示
pub struct Spaced<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

#[track_caller]
fn entry() -> Entry<'static> {
    logger::current().entry()
}

macro_rules! leveled {
    ($method:ident, $plain:ident, $formatted:ident, $line:ident) => {
        #[track_caller]
        pub fn $plain(parts: &[&dyn fmt::Display]) {
            entry().$method(Concat(parts));
        }

        #[track_caller]
        pub fn $formatted(args: fmt::Arguments<'_>) {
            entry().$method(args);
        }

        #[track_caller]
        pub fn $line(parts: &[&dyn fmt::Display]) {
            entry().$method(Spaced(parts));
        }
    };
}

leveled!(debug, debug, debugf, debugln);
leveled!(info, info, infof, infoln);
leveled!(print, print, printf, println);
leveled!(warn, warn, warnf, warnln);
leveled!(warning, warning, warningf, warningln);
leveled!(error, error, errorf, errorln);

/// Fatal で記録して終了コード1でプロセスを終了
#[track_caller]
pub fn fatal(parts: &[&dyn fmt::Display]) -> ! {
    entry().fatal(Concat(parts))
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    entry().fatal(args)
}

#[track_caller]
pub fn fatalln(parts: &[&dyn fmt::Display]) -> ! {
    entry().fatal(Spaced(parts))
}

/// Panic で記録してからパニック
#[track_caller]
pub fn panic(parts: &[&dyn fmt::Display]) -> ! {
    entry().panic(Concat(parts))
}

#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    entry().panic(args)
}

#[track_caller]
pub fn panicln(parts: &[&dyn fmt::Display]) -> ! {
    entry().panic(Spaced(parts))
}
