use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use codebundle::{expand_args, run, Cli, Error};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match expand_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            println!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let cli = Cli::parse_from(args);

    let dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            println!("Error: {}", Error::CurrentDir(err));
            return ExitCode::SUCCESS;
        }
    };

    match run(cli, &dir, &mut io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
