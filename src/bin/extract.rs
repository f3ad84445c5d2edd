extern crate sena_tools;
use std::env;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use env_logger::Env;
use sena_tools::{load_circles, write_c_arrays};

const USAGE_EXIT: u8 = 1;
const FAILURE_EXIT: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <svg_file> <identifier>", args.first().map(String::as_str).unwrap_or("extract"));
        return ExitCode::from(USAGE_EXIT);
    }
    let number = match args[2].trim().parse::<i64>() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("identifier {:?} is not an integer: {}", args[2], e);
            return ExitCode::from(USAGE_EXIT);
        }
    };
    let coords = match load_circles(Path::new(&args[1])) {
        Ok(coords) => coords,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(FAILURE_EXIT);
        }
    };
    if let Err(e) = write_c_arrays(&mut io::stdout().lock(), &coords, number) {
        eprintln!("error: failed to write output: {}", e);
        return ExitCode::from(FAILURE_EXIT);
    }
    ExitCode::SUCCESS
}
