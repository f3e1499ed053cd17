use crate::domain::folder::path_error::PathError;
use crate::domain::scale_decision::TargetError;
use thiserror::Error;

/// 処理全体を中断させるエラー。ファイル単位の失敗はここには含めない。
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました: {0}")]
    Io(#[from] std::io::Error),

    #[error("フォルダ関連のエラー: {0}")]
    Path(#[from] PathError),

    #[error("目標メガピクセル数のエラー: {0}")]
    Target(#[from] TargetError),
}
