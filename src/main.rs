use bdd_calculator::{run, CliArgs};
use clap::Parser;
use std::process;

const EXIT_ERROR: i32 = 1;

fn main() {
    let args = CliArgs::parse();

    if let Err(error) = run(args) {
        eprintln!("Error: {error}");
        process::exit(EXIT_ERROR);
    }
}
