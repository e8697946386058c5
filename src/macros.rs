//! 可変長引数のログマクロ
//!
//! `print` / `println` / `panic` は標準マクロと重なるため `log_` を付ける。

/// Debug で引数を連結して記録
#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::debug(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Debug で書式指定して記録
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::dispatch::debugf(::core::format_args!($($arg)+))
    };
}

/// Debug で引数を空白区切りで記録
#[macro_export]
macro_rules! debugln {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::debugln(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::info(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::dispatch::infof(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infoln {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::infoln(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_print {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::print(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_printf {
    ($($arg:tt)+) => {
        $crate::dispatch::printf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_println {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::println(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::warn(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::dispatch::warnf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnln {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::warnln(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::warning(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! warningf {
    ($($arg:tt)+) => {
        $crate::dispatch::warningf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warningln {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::warningln(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::error(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::dispatch::errorf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorln {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::errorln(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Fatal で記録してプロセスを終了
#[macro_export]
macro_rules! fatal {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::fatal(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Fatal で書式指定して記録
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::dispatch::fatalf(::core::format_args!($($arg)+))
    };
}

/// Fatal で引数を空白区切りで記録
#[macro_export]
macro_rules! fatalln {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::fatalln(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Panic で引数を連結して記録
#[macro_export]
macro_rules! log_panic {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::panic(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Panic で書式指定して記録
#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => {
        $crate::dispatch::panicf(::core::format_args!($($arg)+))
    };
}

/// Panic で引数を空白区切りで記録
#[macro_export]
macro_rules! panicln {
    ($($arg:expr),* $(,)?) => {
        $crate::dispatch::panicln(&[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}
