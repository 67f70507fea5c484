use clap::Parser;
use dirwatch::args::Args;
use dirwatch::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => return usage_error(),
    };

    logging::init();

    match dirwatch::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dirwatch: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Any parse failure is a wrong argument count: there are no flags to misuse.
fn usage_error() -> ExitCode {
    let program = std::env::args_os()
        .next()
        .map_or_else(|| "dirwatch".to_owned(), |p| p.to_string_lossy().into_owned());
    eprintln!("Usage: {program} <directory>");
    ExitCode::FAILURE
}
