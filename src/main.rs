//! applog - 構造化ログのファサードを試すツール

mod cli;
mod config;

use anyhow::Result;

fn main() -> Result<()> {
    cli::run()
}
