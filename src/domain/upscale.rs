use super::image_stat::{DecodeError, ImageStat};
use super::scale_decision::{ScaleDecision, TargetMegapixels, TooLargeError};
use image::imageops::FilterType;
use image::ImageReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 拡大に使うリサンプリングフィルタ。
pub const RESAMPLING_FILTER: FilterType = FilterType::Lanczos3;

/// 1ファイルの拡大処理で発生するエラー。どちらもバッチ全体は止めない。
#[derive(Debug, Error)]
pub enum UpscaleError {
    #[error("画像を開けません: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    TooLarge(#[from] TooLargeError),

    #[error("'{}' に保存できません: {message}", .path.display())]
    Write { path: PathBuf, message: String },
}

/// `source` の画像が目標に満たなければ拡大して `destination` に保存します。
///
/// 判定はヘッダーから読んだ寸法だけで行い、拡大が必要な場合にのみ画像全体をデコードします。
/// 保存形式は `destination` の拡張子から決まります。
pub fn upscale_file(
    source: &Path,
    destination: &Path,
    target: TargetMegapixels,
) -> Result<ScaleDecision, UpscaleError> {
    let stat = ImageStat::from_path(source)?;
    let decision = ScaleDecision::decide(&stat, target)?;

    if let ScaleDecision::Upscale {
        new_width,
        new_height,
        ..
    } = decision
    {
        let image = ImageReader::open(source)
            .map_err(DecodeError::from)?
            .with_guessed_format()
            .map_err(DecodeError::from)?
            .decode()
            .map_err(DecodeError::from)?;

        image
            .resize_exact(new_width, new_height, RESAMPLING_FILTER)
            .save(destination)
            .map_err(|e| UpscaleError::Write {
                path: destination.to_path_buf(),
                message: e.to_string(),
            })?;
    }

    Ok(decision)
}
