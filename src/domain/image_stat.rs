//! 画像1枚の寸法とメガピクセル数。
//!
//! 寸法はヘッダーだけを読んで取得し、画素データはデコードしません。

use image::ImageReader;
use std::path::Path;
use thiserror::Error;

/// 1メガピクセルあたりの画素数。
pub const PIXELS_PER_MEGAPIXEL: f64 = 1_000_000.0;

// --- 構造体定義 ---

/// デコードに成功した画像1枚の寸法。
///
/// `new` を通じてのみ作成でき、幅・高さがどちらも1以上であることが保証されます。
/// 1ファイルの処理の間だけ存在し、永続化はされません。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageStat {
    width: u32,
    height: u32,
}

// --- エラー定義 ---

/// 画像として開けなかったファイルを表すエラー。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// ファイルが存在しない、画像でない、または壊れている場合。
    #[error("{message}")]
    Open { message: String },

    /// 幅か高さが0の画像。
    #[error("画像の寸法が不正です: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

impl From<image::ImageError> for DecodeError {
    fn from(e: image::ImageError) -> Self {
        DecodeError::Open {
            message: e.to_string(),
        }
    }
}

impl From<std::io::Error> for DecodeError {
    fn from(e: std::io::Error) -> Self {
        DecodeError::Open {
            message: e.to_string(),
        }
    }
}

// --- 実装ブロック ---

impl ImageStat {
    pub fn new(width: u32, height: u32) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// ファイルのヘッダーだけを読み、画像の寸法を取得します。
    ///
    /// フォーマットは拡張子ではなくファイルの中身から判定します。
    pub fn from_path(path: &Path) -> Result<Self, DecodeError> {
        let (width, height) = ImageReader::open(path)?
            .with_guessed_format()?
            .into_dimensions()?;
        Self::new(width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// `width * height / 1_000_000`
    pub fn megapixels(&self) -> f64 {
        (self.width as f64 * self.height as f64) / PIXELS_PER_MEGAPIXEL
    }

    /// インスペクタが1ファイルごとに出力するレポート（3行）。
    pub fn report(&self, file_name: &str) -> String {
        format!(
            "File: {}\n - Dimensions: {}x{}\n - Megapixels: {:.2} MP",
            file_name,
            self.width,
            self.height,
            self.megapixels()
        )
    }
}

// --- テストモジュール ---
