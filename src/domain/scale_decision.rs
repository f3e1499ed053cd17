//! 拡大するかどうかの判定と、拡大後の寸法の計算。
//!
//! 拡大率は `sqrt(目標MP / 現在MP)` で、縦横に同じ倍率を掛けるためアスペクト比は保たれます。
//! 新しい寸法は四捨五入ではなく切り捨てで求めるため、拡大後のメガピクセル数は
//! 常に目標以下になります。

use super::image_stat::{ImageStat, PIXELS_PER_MEGAPIXEL};
use std::fmt;
use thiserror::Error;

/// 既定の目標メガピクセル数。
pub const DEFAULT_TARGET_MEGAPIXELS: f64 = 4.0;

/// 拡大後の画像に許す最大のメガピクセル数。これを超える寸法は確保前に拒否する。
pub const MAX_OUTPUT_MEGAPIXELS: f64 = 500.0;

// --- 構造体定義 ---

/// 検証済みの目標メガピクセル数。有限かつ正の値であることが保証されます。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetMegapixels(f64);

#[derive(Debug, Error, PartialEq)]
pub enum TargetError {
    #[error("目標メガピクセル数は正の数で指定してください: {0}")]
    NotPositive(f64),
}

/// 拡大後の寸法が扱える範囲を超えている。
#[derive(Debug, Error, PartialEq)]
#[error(
    "拡大後の寸法が大きすぎます: {width:.0}x{height:.0} (上限 {} MP)",
    MAX_OUTPUT_MEGAPIXELS
)]
pub struct TooLargeError {
    pub width: f64,
    pub height: f64,
}

/// 拡大しない理由。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 既に目標以上のメガピクセル数がある。
    MeetsTarget,
    /// 目標未満だが、切り捨て後の寸法が現在と変わらない。
    NoGrowth,
}

/// 1枚の画像に対する判定結果。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleDecision {
    Skip {
        current_mp: f64,
        reason: SkipReason,
    },
    Upscale {
        current_mp: f64,
        scale_factor: f64,
        new_width: u32,
        new_height: u32,
    },
}

// --- 実装ブロック ---

impl TargetMegapixels {
    pub fn new(value: f64) -> Result<Self, TargetError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(TargetError::NotPositive(value));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for TargetMegapixels {
    fn default() -> Self {
        Self(DEFAULT_TARGET_MEGAPIXELS)
    }
}

impl fmt::Display for TargetMegapixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ScaleDecision {
    /// 画像の寸法と目標から、拡大するかどうかと拡大後の寸法を決める。
    ///
    /// 拡大後の寸法が `u32` に収まらない、または `MAX_OUTPUT_MEGAPIXELS` を超える場合は
    /// `TooLargeError` を返す。
    pub fn decide(stat: &ImageStat, target: TargetMegapixels) -> Result<Self, TooLargeError> {
        let current_mp = stat.megapixels();
        if current_mp >= target.get() {
            return Ok(ScaleDecision::Skip {
                current_mp,
                reason: SkipReason::MeetsTarget,
            });
        }

        let scale_factor = (target.get() / current_mp).sqrt();
        // 四捨五入ではなく切り捨て
        let width = (stat.width() as f64 * scale_factor).floor();
        let height = (stat.height() as f64 * scale_factor).floor();

        // `as u32` は飽和するため、変換前に f64 のまま範囲を確認する
        let max_side = u32::MAX as f64;
        if width > max_side
            || height > max_side
            || (width * height) / PIXELS_PER_MEGAPIXEL > MAX_OUTPUT_MEGAPIXELS
        {
            return Err(TooLargeError { width, height });
        }
        let (new_width, new_height) = (width as u32, height as u32);

        if (new_width, new_height) == stat.dimensions() {
            return Ok(ScaleDecision::Skip {
                current_mp,
                reason: SkipReason::NoGrowth,
            });
        }

        Ok(ScaleDecision::Upscale {
            current_mp,
            scale_factor,
            new_width,
            new_height,
        })
    }

    /// 判定後の寸法。Skip の場合は入力の寸法をそのまま返す。
    pub fn output_dimensions(&self, stat: &ImageStat) -> (u32, u32) {
        match *self {
            ScaleDecision::Skip { .. } => stat.dimensions(),
            ScaleDecision::Upscale {
                new_width,
                new_height,
                ..
            } => (new_width, new_height),
        }
    }
}

// --- テストモジュール ---

#[cfg(test)]
mod tests {
    use super::*;

    fn target(mp: f64) -> TargetMegapixels {
        TargetMegapixels::new(mp).unwrap()
    }

    fn stat(width: u32, height: u32) -> ImageStat {
        ImageStat::new(width, height).unwrap()
    }

    #[test]
    fn upscales_two_megapixel_image_to_four() {
        let decision = ScaleDecision::decide(&stat(1000, 2000), target(4.0)).unwrap();
        match decision {
            ScaleDecision::Upscale {
                current_mp,
                scale_factor,
                new_width,
                new_height,
            } => {
                assert_eq!(current_mp, 2.0);
                assert!((scale_factor - 1.41421356).abs() < 1e-8);
                assert_eq!((new_width, new_height), (1414, 2828));
            }
            other => panic!("拡大されるはずです: {:?}", other),
        }
    }

    #[test]
    fn skips_image_above_target() {
        let s = stat(3000, 3000);
        let decision = ScaleDecision::decide(&s, target(4.0)).unwrap();
        assert_eq!(
            decision,
            ScaleDecision::Skip {
                current_mp: 9.0,
                reason: SkipReason::MeetsTarget
            }
        );
        assert_eq!(decision.output_dimensions(&s), (3000, 3000));
    }

    /// ちょうど目標と同じ場合も拡大しない
    #[test]
    fn skips_image_exactly_at_target() {
        let decision = ScaleDecision::decide(&stat(2000, 2000), target(4.0)).unwrap();
        assert!(matches!(
            decision,
            ScaleDecision::Skip {
                reason: SkipReason::MeetsTarget,
                ..
            }
        ));
    }

    /// 自分の出力をもう一度処理しても、切り捨て1回分を超えて拡大し直さない
    #[test]
    fn second_pass_over_own_output_does_not_upscale_again() {
        let t = target(4.0);
        let first = ScaleDecision::decide(&stat(1000, 2000), t).unwrap();
        let (w, h) = first.output_dimensions(&stat(1000, 2000));
        assert!((w as f64 * h as f64) / 1e6 < 4.0, "切り捨てにより目標をわずかに下回る");

        let second = ScaleDecision::decide(&stat(w, h), t).unwrap();
        assert_eq!(
            second,
            ScaleDecision::Skip {
                current_mp: 3.998792,
                reason: SkipReason::NoGrowth
            }
        );
    }

    #[test]
    fn upscaled_dimensions_keep_aspect_ratio_and_stay_under_target() {
        let t = target(4.0);
        let samples = [
            (640, 480),
            (1000, 2000),
            (7, 13),
            (1, 1),
            (1920, 1),
            (123, 4567),
            (1999, 1999),
        ];
        for (w, h) in samples {
            let s = stat(w, h);
            let (new_w, new_h) = match ScaleDecision::decide(&s, t).unwrap() {
                ScaleDecision::Upscale {
                    new_width,
                    new_height,
                    ..
                } => (new_width, new_height),
                other => panic!("{}x{} は拡大されるはずです: {:?}", w, h, other),
            };

            let ratio_w = new_w as f64 / w as f64;
            let ratio_h = new_h as f64 / h as f64;
            let bound = (1.0 / w as f64).max(1.0 / h as f64);
            assert!(
                (ratio_w - ratio_h).abs() <= bound,
                "{}x{} -> {}x{} のアスペクト比が崩れています",
                w,
                h,
                new_w,
                new_h
            );
            assert!(new_w >= w && new_h >= h);
            assert!((new_w as f64 * new_h as f64) / 1e6 <= t.get());
        }
    }

    /// 切り捨てで失われるのは高々1行と1列分の画素
    #[test]
    fn truncation_loses_at_most_one_row_and_column() {
        let t = target(4.0);
        for (w, h) in [(3, 4), (1, 3), (1501, 1999), (1234, 2345), (640, 480)] {
            let s = stat(w, h);
            let (nw, nh) = ScaleDecision::decide(&s, t).unwrap().output_dimensions(&s);
            let shortfall = t.get() - (nw as f64 * nh as f64) / 1e6;
            assert!(shortfall >= 0.0);
            assert!(
                shortfall <= (nw as f64 + nh as f64 + 1.0) / 1e6,
                "{}x{} -> {}x{}: 不足分 {}",
                w,
                h,
                nw,
                nh,
                shortfall
            );
        }
    }

    /// 巨大な目標でも u32::MAX に張り付いた寸法を返さず、エラーにする
    #[test]
    fn oversized_result_is_rejected_before_conversion() {
        let err = ScaleDecision::decide(&stat(1, 1), target(1e14)).unwrap_err();
        assert_eq!(
            err,
            TooLargeError {
                width: 1e10,
                height: 1e10
            }
        );

        // u32 には収まるが上限を超える場合も拒否する
        let err = ScaleDecision::decide(&stat(1000, 1000), target(MAX_OUTPUT_MEGAPIXELS * 2.0))
            .unwrap_err();
        assert!(err.width < u32::MAX as f64);

        // 上限ちょうどは許す
        assert!(matches!(
            ScaleDecision::decide(&stat(1, 1), target(MAX_OUTPUT_MEGAPIXELS)),
            Ok(ScaleDecision::Upscale { .. })
        ));
    }

    #[test]
    fn target_must_be_positive_and_finite() {
        assert_eq!(TargetMegapixels::new(0.0), Err(TargetError::NotPositive(0.0)));
        assert_eq!(
            TargetMegapixels::new(-1.5),
            Err(TargetError::NotPositive(-1.5))
        );
        assert!(TargetMegapixels::new(f64::NAN).is_err());
        assert!(TargetMegapixels::new(f64::INFINITY).is_err());
        assert_eq!(TargetMegapixels::default().get(), 4.0);
    }

    #[test]
    fn target_displays_like_a_plain_number() {
        assert_eq!(TargetMegapixels::default().to_string(), "4");
        assert_eq!(target(2.5).to_string(), "2.5");
    }
}
