// src/main.rs
use clap::Parser;
use std::process::ExitCode;

use wordfreq::{Args, MissingFile, run};

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is::<MissingFile>() {
                println!("{err}");
            } else {
                eprintln!("{err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
