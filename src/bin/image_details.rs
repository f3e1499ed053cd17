use clap::Parser;
use image_mp_tools::cli::{self, InspectArgs};
use image_mp_tools::error::AppError;
use image_mp_tools::workflow;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = InspectArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラー: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: InspectArgs) -> Result<(), AppError> {
    // フォルダが引数で渡されなければ標準入力で尋ねる
    let folder = match args.folder {
        Some(folder) => folder,
        None => cli::prompt_folder(&mut io::stdin().lock(), &mut io::stdout(), false)?,
    };

    workflow::run_inspect(&folder, &mut io::stdout().lock())?;
    Ok(())
}
