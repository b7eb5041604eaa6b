use clap::Parser;
use csv2geojson::cli::{args::Args, commands};
use std::process;

fn main() {
    // Usage errors exit with 1 like every other fatal condition
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let code = if error.use_stderr() { 1 } else { 0 };
            let _ = error.print();
            process::exit(code);
        }
    };

    match commands::run(args) {
        Ok(_stats) => {
            // Success - summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
