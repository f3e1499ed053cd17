//! フォルダ内の画像の解像度を調べ、目標メガピクセル数に満たない画像を拡大するツール群。

pub mod cli;
pub mod domain;
pub mod error;
pub mod workflow;
