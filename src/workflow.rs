//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! フォルダ内の画像を1枚ずつ調べる／拡大する処理フローを実装します。
//! 1ファイルの失敗はメッセージを出して次のファイルへ進み、
//! フォルダ自体が不正な場合だけ `AppError` で処理全体を中断します。

use crate::domain::folder::{DirectoryPath, OutputFolder};
use crate::domain::image_stat::ImageStat;
use crate::domain::scale_decision::{ScaleDecision, SkipReason, TargetMegapixels};
use crate::domain::upscale::upscale_file;
use crate::error::AppError;
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

/// インスペクタの集計結果。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InspectSummary {
    pub inspected: usize,
    pub skipped: usize,
}

/// アップスケーラの集計結果。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpscaleSummary {
    pub upscaled: usize,
    pub already_sufficient: usize,
    pub failed: usize,
}

// --- public な関数 ---

/// フォルダ内の各エントリを画像として開き、寸法とメガピクセル数を `out` に書き出します。
///
/// # 戻り値
/// * `Ok(InspectSummary)`: 最後まで走査できた場合（画像でないファイルがあっても成功）。
/// * `Err(AppError)`: フォルダが存在しない、または読み込めない場合。
pub fn run_inspect<W: Write>(folder: &Path, out: &mut W) -> Result<InspectSummary, AppError> {
    // 1. 入力フォルダの検証
    let input_dir = DirectoryPath::new(folder)?;
    writeln!(out, "Checking image details in folder: {}\n", input_dir)?;

    // 2. 各エントリを調べる
    let mut summary = InspectSummary::default();
    for path in input_dir.entries()? {
        let name = display_name(&path);
        match ImageStat::from_path(&path) {
            Ok(stat) => {
                writeln!(out, "{}\n", stat.report(&name))?;
                summary.inspected += 1;
            }
            Err(e) => {
                writeln!(
                    out,
                    "Skipping file: {} (not a valid image). Error: {}\n",
                    name, e
                )?;
                summary.skipped += 1;
            }
        }
    }

    writeln!(
        out,
        "Done: {} image(s) inspected, {} entr{} skipped.",
        summary.inspected,
        summary.skipped,
        if summary.skipped == 1 { "y" } else { "ies" }
    )?;
    Ok(summary)
}

/// 目標メガピクセル数に満たない画像を拡大し、兄弟フォルダ `<フォルダ名>_processed` に保存します。
///
/// 進捗は `out` に、ファイル単位のエラーは `err` に書き出します。
/// 出力フォルダは、処理対象が1つも無くても作成されます。
pub fn run_upscale<W: Write, E: Write>(
    folder: &Path,
    target: TargetMegapixels,
    out: &mut W,
    err: &mut E,
) -> Result<UpscaleSummary, AppError> {
    // 1. 入力フォルダの検証（不正なら出力フォルダも作らない）
    let input_dir = DirectoryPath::new(folder)?;

    // 2. 出力フォルダの決定と作成
    let output_dir = OutputFolder::sibling_of(&input_dir)?;
    output_dir.ensure_exists()?;
    writeln!(out, "Saving upscaled images to: {}", output_dir.as_path().display())?;

    // 3. 各エントリを処理する
    let mut summary = UpscaleSummary::default();
    for path in input_dir.entries()? {
        let name = display_name(&path);
        let Some(destination) = output_dir.destination_for(&path) else {
            writeln!(err, "Error processing {}: ファイル名がありません", name)?;
            summary.failed += 1;
            continue;
        };

        match upscale_file(&path, &destination, target) {
            Ok(decision) => match decision {
                ScaleDecision::Upscale {
                    new_width,
                    new_height,
                    ..
                } => {
                    writeln!(
                        out,
                        "Upscaled {} to {}x{} ({} MP) and saved to {}",
                        path.display(),
                        new_width,
                        new_height,
                        target,
                        destination.display()
                    )?;
                    summary.upscaled += 1;
                }
                ScaleDecision::Skip {
                    current_mp,
                    reason: SkipReason::MeetsTarget,
                } => {
                    writeln!(
                        out,
                        "Image already meets requirements: {} ({:.2} MP)",
                        path.display(),
                        current_mp
                    )?;
                    summary.already_sufficient += 1;
                }
                ScaleDecision::Skip {
                    current_mp,
                    reason: SkipReason::NoGrowth,
                } => {
                    writeln!(
                        out,
                        "Image is already as close to {} MP as whole pixels allow: {} ({:.2} MP)",
                        target,
                        path.display(),
                        current_mp
                    )?;
                    summary.already_sufficient += 1;
                }
            },
            Err(e) => {
                // 1ファイルの失敗では止めずに次へ進む
                writeln!(err, "Error processing {}: {}", name, e)?;
                summary.failed += 1;
            }
        }
    }

    writeln!(
        out,
        "Done: {} upscaled, {} already sufficient, {} failed.",
        summary.upscaled, summary.already_sufficient, summary.failed
    )?;
    Ok(summary)
}

// --- private なヘルパー関数 ---

/// ログ用のファイル名。名前が無ければパス全体を使う。
fn display_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => Cow::Owned(path.display().to_string()),
    }
}
