// src/options.rs
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// タスクログを1行ずつ出力
    #[default]
    Text,
    /// 実行結果をまとめて JSON で出力
    Json,
}
