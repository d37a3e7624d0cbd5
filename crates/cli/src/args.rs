// crates/cli/src/args.rs
use clap::Parser;

use crate::options::{LiveOutput, OutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "text_stats",
    version = crate::VERSION,
    about = "テキストの単語数/文字数/文数/段落数/読了時間の集計ツール",
    long_about = "Count words, characters, sentences and paragraphs, and estimate reading time.\n\n\
                  Text is taken from the TEXT arguments, or from stdin when none are given."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 集計するテキスト（省略時は標準入力）
    #[arg(value_name = "TEXT", conflicts_with = "live")]
    pub text: Vec<String>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// 1 分あたりの読了語数
    #[arg(long, default_value_t = 200, help_heading = "集計")]
    pub wpm: usize,

    /// 表示上の文字数上限（集計には影響しない）
    #[arg(long, default_value_t = 5000, help_heading = "集計")]
    pub limit: usize,

    /// 上限超過時の警告を抑制
    #[arg(long, help_heading = "集計")]
    pub quiet_limit: bool,

    /// 標準入力を 1 行ずつ読み、行ごとに再集計して表示
    #[arg(long, help_heading = "ライブ")]
    pub live: bool,

    /// ライブ時の描画方法
    #[arg(long, value_enum, default_value = "full", help_heading = "ライブ")]
    pub live_output: LiveOutput,
}
