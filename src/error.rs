//! エラー型定義モジュール
//!
//! ログ出力API自体はエラーを返さない。ここにあるのは名前の解釈のエラーだけ。

use thiserror::Error;

/// ログレベル名の解釈エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("不明なログレベル: {0}")]
pub struct ParseLevelError(pub String);

/// 出力フォーマット名の解釈エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("不明な出力フォーマット: {0}")]
pub struct ParseFormatError(pub String);
