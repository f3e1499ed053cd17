use super::directory_path::DirectoryPath;
use super::path_error::PathError;
use std::fs;
use std::path::{Path, PathBuf};

/// 出力フォルダ名に付けるサフィックス。
pub const PROCESSED_SUFFIX: &str = "_processed";

/// 拡大済み画像の保存先フォルダ。
///
/// 入力フォルダと同じ親の下に `<入力フォルダ名>_processed` として配置されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFolder(PathBuf);

impl OutputFolder {
    /// 入力フォルダから兄弟の出力フォルダのパスを決定する。
    ///
    /// `.` のように末尾に名前を持たないパスは正規化してから名前を取り出す。
    /// ファイルシステムには触れないため、フォルダはまだ作成されない。
    pub fn sibling_of(input: &DirectoryPath) -> Result<Self, PathError> {
        let input_path = input.as_path();
        let resolved = match input_path.file_name() {
            Some(_) => input_path.to_path_buf(),
            None => fs::canonicalize(input_path)?,
        };

        let folder_name = resolved
            .file_name()
            .ok_or_else(|| PathError::NoFolderName(input_path.to_path_buf()))?;

        let mut output_name = folder_name.to_os_string();
        output_name.push(PROCESSED_SUFFIX);
        Ok(Self(resolved.with_file_name(output_name)))
    }

    /// フォルダが無ければ作成する。既に存在する場合は何もしない。
    pub fn ensure_exists(&self) -> Result<(), PathError> {
        fs::create_dir_all(&self.0)?;
        Ok(())
    }

    /// 入力ファイルと同じ名前の保存先パスを返す。
    pub fn destination_for(&self, source: &Path) -> Option<PathBuf> {
        source.file_name().map(|name| self.0.join(name))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}
