//! CLIモジュール

use crate::config::{CliArgs, Settings};
use anyhow::Result;
use app_logger::{Format, Level};
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Display;
use std::path::PathBuf;

/// applog - 構造化ログのファサードを試すツール
#[derive(Parser, Debug)]
#[command(name = "applog")]
#[command(about = "構造化ログのファサードを試すツール", long_about = None)]
pub struct Cli {
    /// 設定ファイルのパス
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// ログに付与するアプリケーション名
    #[arg(long, global = true)]
    pub app_name: Option<String>,

    /// しきい値（panic, fatal, error, warning, info, debug）
    #[arg(short, long, global = true)]
    pub level: Option<Level>,

    /// 出力フォーマット（text, json）
    #[arg(short, long, global = true)]
    pub format: Option<Format>,

    #[command(subcommand)]
    pub command: Commands,
}

/// サブコマンド
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// ロガーを初期化して1行出力
    Emit {
        /// 出力するレベル
        #[arg(long, default_value = "info")]
        at: Level,

        /// 呼び出す関数の形（plain: 連結, f: 書式付き, ln: 空白区切り）
        #[arg(long, value_enum, default_value_t = Shape::Ln)]
        shape: Shape,

        /// 出力する語
        words: Vec<String>,
    },
    /// レベル名と対応するしきい値を表示
    Levels,
}

/// レベル別関数の呼び出し形
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// `info` など（区切りなしで連結）
    Plain,
    /// `infof` など
    F,
    /// `infoln` など（空白区切り）
    Ln,
}

/// CLIエントリポイント
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Emit {
            at,
            shape,
            ref words,
        } => {
            let cli_args = CliArgs {
                config: cli.config.clone(),
                app_name: cli.app_name.clone(),
                level: cli.level,
                format: cli.format,
            };
            let settings = Settings::load(&cli_args)?;
            app_logger::init(&settings.app_name, settings.level, settings.format);

            emit(at, shape, words);
        }
        Commands::Levels => {
            for level in Level::ALL {
                let native = level
                    .to_native()
                    .map(|threshold| threshold.to_string())
                    .unwrap_or_else(|e| e.to_string());
                println!("{} {:<8} {}", level as u32, level, native);
            }
        }
    }

    Ok(())
}

/// 指定レベル・指定の形で出力
fn emit(level: Level, shape: Shape, words: &[String]) {
    let parts: Vec<&dyn Display> = words.iter().map(|w| w as &dyn Display).collect();
    let joined = words.join(" ");

    match (level, shape) {
        (Level::Debug, Shape::Plain) => app_logger::debug(&parts),
        (Level::Debug, Shape::F) => app_logger::debugf(format_args!("{}", joined)),
        (Level::Debug, Shape::Ln) => app_logger::debugln(&parts),
        (Level::Info, Shape::Plain) => app_logger::info(&parts),
        (Level::Info, Shape::F) => app_logger::infof(format_args!("{}", joined)),
        (Level::Info, Shape::Ln) => app_logger::infoln(&parts),
        (Level::Warn, Shape::Plain) => app_logger::warn(&parts),
        (Level::Warn, Shape::F) => app_logger::warnf(format_args!("{}", joined)),
        (Level::Warn, Shape::Ln) => app_logger::warnln(&parts),
        (Level::Error, Shape::Plain) => app_logger::error(&parts),
        (Level::Error, Shape::F) => app_logger::errorf(format_args!("{}", joined)),
        (Level::Error, Shape::Ln) => app_logger::errorln(&parts),
        (Level::Fatal, Shape::Plain) => app_logger::fatal(&parts),
        (Level::Fatal, Shape::F) => app_logger::fatalf(format_args!("{}", joined)),
        (Level::Fatal, Shape::Ln) => app_logger::fatalln(&parts),
        (Level::Panic, Shape::Plain) => app_logger::panic(&parts),
        (Level::Panic, Shape::F) => app_logger::panicf(format_args!("{}", joined)),
        (Level::Panic, Shape::Ln) => app_logger::panicln(&parts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_command_defaults() {
        let cli = Cli::try_parse_from(["applog", "emit", "hello", "world"]);
        assert!(cli.is_ok());

        if let Commands::Emit { at, shape, words } = cli.unwrap().command {
            assert_eq!(at, Level::Info);
            assert_eq!(shape, Shape::Ln);
            assert_eq!(words, ["hello", "world"]);
        } else {
            panic!("Expected Emit command");
        }
    }

    #[test]
    fn test_emit_command_with_level() {
        let cli = Cli::try_parse_from(["applog", "emit", "--at", "warning", "x"]).unwrap();
        assert!(matches!(cli.command, Commands::Emit { at: Level::Warn, .. }));
    }

    #[test]
    fn test_emit_command_with_shape() {
        for (name, expected) in [("plain", Shape::Plain), ("f", Shape::F), ("ln", Shape::Ln)] {
            let cli = Cli::try_parse_from(["applog", "emit", "--shape", name, "x"]).unwrap();
            assert!(
                matches!(cli.command, Commands::Emit { shape, .. } if shape == expected),
                "{} が解釈できない",
                name
            );
        }
    }

    #[test]
    fn test_invalid_shape_is_rejected() {
        let cli = Cli::try_parse_from(["applog", "emit", "--shape", "fmt", "x"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from([
            "applog",
            "--app-name",
            "svc1",
            "--level",
            "debug",
            "--format",
            "json",
            "levels",
        ])
        .unwrap();
        assert_eq!(cli.app_name, Some("svc1".to_string()));
        assert_eq!(cli.level, Some(Level::Debug));
        assert_eq!(cli.format, Some(Format::Json));
        assert!(matches!(cli.command, Commands::Levels));
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let cli = Cli::try_parse_from(["applog", "--level", "verbose", "levels"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let cli = Cli::try_parse_from(["applog", "--format", "xml", "levels"]);
        assert!(cli.is_err());
    }
}
