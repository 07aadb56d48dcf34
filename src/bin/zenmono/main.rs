use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info, warn};
use zenmono::{BmpError, CArray, DecodeOutput, Orientation};

mod args;

fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        eprintln!("{}", args::create_cmd_args().render_usage());
        return ExitCode::SUCCESS;
    }

    let matches = args::create_cmd_args().get_matches();
    args::setup_logger(&matches);
    let options = args::parse_options(&matches);

    match decode_with_retry(options.input, options.orientation) {
        Ok(out) => {
            print!("{}", CArray::new(&options.name, &out));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Could not convert image, reason: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Decode `path`; while the file is rejected and a user is at the terminal,
/// ask for another one.
fn decode_with_retry(mut path: PathBuf, orientation: Orientation) -> Result<DecodeOutput, BmpError> {
    let stdin = io::stdin();
    loop {
        info!("Decoding {}", path.display());
        match zenmono::decode_file(&path, orientation) {
            Ok(out) => return Ok(out),
            Err(e) if is_retryable(&e) && stdin.is_terminal() => {
                warn!("{}: {e}", path.display());
                eprint!("Please, provide a valid 1-bit BMP file: ");
                io::stderr().flush()?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    return Err(e);
                }
                path = PathBuf::from(line.trim());
            }
            Err(e) => return Err(e),
        }
    }
}

fn is_retryable(e: &BmpError) -> bool {
    matches!(e, BmpError::Io(_)) || e.is_rejected_source()
}
