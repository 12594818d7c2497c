use std::process::ExitCode;

mod cli;
mod config;
mod error;
mod library;
mod naming;
mod relocate;
mod runtime;
mod tags;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(report) => {
            eprintln!("movmusic: finished with errors: {report}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("movmusic: {e}");
            ExitCode::FAILURE
        }
    }
}
