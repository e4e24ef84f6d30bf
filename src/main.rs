use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ls8_core::loader;

/// Runs an LS-8 program and prints its PRN output to stdout.
#[derive(Parser, Debug)]
struct Args {
    /// Program file, one base-2 byte per line
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::builder()
        .format(|buf, record| {
            writeln!(buf, "{}: {}", record.level(), record.args())
        })
        .init();
    log::info!("env logger initialized");

    let mut ls8 = match loader::boot_file(&args.file) {
        Ok(ls8) => ls8,
        Err(err) => {
            log::error!("{}: {}", args.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match ls8.run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = out.flush();
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
