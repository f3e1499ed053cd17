use crate::domain::scale_decision::DEFAULT_TARGET_MEGAPIXELS;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// フォルダのパスを尋ねるときのプロンプト。
pub const FOLDER_PROMPT: &str = "Enter the path to the folder containing images: ";

/// フォルダ内の各画像の解像度とメガピクセル数を表示します
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct InspectArgs {
    /// 画像が入っているフォルダのパス (省略した場合は標準入力で尋ねる)
    pub folder: Option<PathBuf>,
}

/// 目標メガピクセル数に満たない画像を拡大し、`<フォルダ名>_processed` に保存します
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct UpscaleArgs {
    /// 画像が入っているフォルダのパス (省略した場合は標準入力で尋ねる)
    pub folder: Option<PathBuf>,

    /// 目標メガピクセル数。これ未満の画像だけが拡大される
    #[arg(short, long, default_value_t = DEFAULT_TARGET_MEGAPIXELS)]
    pub target_mp: f64,
}

/// 入力された文字列から前後の空白を取り除く。
///
/// `strip_quotes` が真なら、エクスプローラーの「パスのコピー」で付く `"` も取り除く。
pub fn normalize_folder_input(raw: &str, strip_quotes: bool) -> String {
    let trimmed = raw.trim();
    if strip_quotes {
        trimmed.trim_matches('"').to_string()
    } else {
        trimmed.to_string()
    }
}

/// プロンプトを表示し、1行読み込んでフォルダのパスとして返す。
///
/// 入力が空でもここではエラーにしない（後続のフォルダ検証で弾かれる）。
pub fn prompt_folder<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    strip_quotes: bool,
) -> io::Result<PathBuf> {
    write!(output, "{}", FOLDER_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(normalize_folder_input(&line, strip_quotes)))
}
