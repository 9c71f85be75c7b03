//! Reword command-line entry point
//!
//! This is the only place that turns an error into an exit status.

use clap::{error::ErrorKind, Parser};
use reword_cli::ProcessArgs;
use std::process;

fn main() {
    let args = match ProcessArgs::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                process::exit(1);
            }
        },
    };

    if let Err(err) = args.execute() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
