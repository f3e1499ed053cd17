use clap::Parser;
use image_mp_tools::cli::{self, UpscaleArgs};
use image_mp_tools::domain::scale_decision::TargetMegapixels;
use image_mp_tools::error::AppError;
use image_mp_tools::workflow;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = UpscaleArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラー: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: UpscaleArgs) -> Result<(), AppError> {
    let target = TargetMegapixels::new(args.target_mp)?;

    // エクスプローラーからコピーしたパスは引用符付きのことがあるので取り除く
    let folder = match args.folder {
        Some(folder) => folder,
        None => cli::prompt_folder(&mut io::stdin().lock(), &mut io::stdout(), true)?,
    };

    workflow::run_upscale(
        &folder,
        target,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(())
}
