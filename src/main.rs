// src/main.rs
use std::process::ExitCode;

use age_prune::args::Args;
use age_prune::logging;
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.debug);

    match age_prune::run(&args, std::io::stdout().lock()) {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
