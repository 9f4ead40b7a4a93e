// src/args.rs
use std::fs;
use std::path::PathBuf;

use age_prune_engine::TaskParams;
use age_prune_engine::params::{DAYS, DEBUG, DELETE_SUBDIRECTORIES, DIRECTORY};
use age_prune_engine::resolver::DELETE_DIRECTORIES_FLAG;
use clap::{Parser, ValueHint};

use crate::error::{AppError, Result};
use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "age_prune",
    version = crate::VERSION,
    about = "指定日数より古いファイル/ディレクトリを削除するツール",
    long_about = "DIRECTORY 直下のエントリのうち、最終更新から DAYS 日以上経過したものを削除します。\n\
                  ディレクトリは --delete-directories 指定時のみ対象となり、中身ごと削除されます。"
)]
pub struct Args {
    /// 対象ディレクトリ（直下のエントリのみが削除候補）
    #[arg(value_hint = ValueHint::DirPath)]
    pub directory: Option<String>,

    /// 削除対象とする経過日数（この日数以上で削除）
    pub days: Option<String>,

    /// ディレクトリも削除対象に含める（中身ごと削除）
    #[arg(long)]
    pub delete_directories: bool,

    /// デバッグモード（スキップした項目もログに出力）
    #[arg(long)]
    pub debug: bool,

    /// パラメータを JSON オブジェクトから読み込む（コマンドライン引数が優先）
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub params: Option<PathBuf>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl Args {
    /// Build the parameter bag: `--params` file first, explicit arguments on top.
    ///
    /// # Errors
    /// Fails if the parameter file cannot be read or is not a flat JSON object.
    pub fn task_params(&self) -> Result<TaskParams> {
        let mut params = match &self.params {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| AppError::ParamsRead {
                    path: path.clone(),
                    source,
                })?;
                TaskParams::from_json_str(&text).map_err(|source| AppError::ParamsInvalid {
                    path: path.clone(),
                    source,
                })?
            }
            None => TaskParams::new(),
        };

        params.merge(self.cli_params());
        Ok(params)
    }

    fn cli_params(&self) -> TaskParams {
        let mut params = TaskParams::new();
        if let Some(directory) = &self.directory {
            params.insert(DIRECTORY, directory.as_str());
        }
        if let Some(days) = &self.days {
            params.insert(DAYS, days.as_str());
        }
        if self.delete_directories {
            params.insert(DELETE_SUBDIRECTORIES, DELETE_DIRECTORIES_FLAG);
        }
        if self.debug {
            params.insert(DEBUG, "1");
        }
        params
    }
}
