use std::path::PathBuf;
use thiserror::Error;

// フォルダパスに関するエラー型を定義
#[derive(Debug, Error)]
pub enum PathError {
    #[error("無効なパスです: {0}")]
    InvalidPath(String),

    #[error("フォルダ名を決定できません: {}", .0.display())]
    NoFolderName(PathBuf),

    #[error("I/Oエラー: {0}")]
    Io(#[from] std::io::Error),
}
