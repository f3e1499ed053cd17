use super::path_error::PathError;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 処理対象として検証済みの入力フォルダ。
///
/// `new` が成功した時点で、パスが存在するディレクトリであることが保証されます。
#[derive(Debug)]
pub struct DirectoryPath {
    path: PathBuf,
}

impl DirectoryPath {
    /// 存在しないパスやファイルのパスは `PathError::InvalidPath` になる。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "フォルダ '{}' が見つかりません。",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "'{}' はフォルダではなくファイルです。",
                path.display()
            )));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// フォルダ直下のエントリをファイル名順で返します。
    ///
    /// サブディレクトリには降りません。サブディレクトリ自体はエントリとして返すため、
    /// 呼び出し側では画像として開けないエントリとして扱われます。
    pub fn entries(&self) -> Result<Vec<PathBuf>, PathError> {
        WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| {
                entry
                    .map(walkdir::DirEntry::into_path)
                    .map_err(|e| PathError::Io(e.into()))
            })
            .collect()
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
