extern crate sena_tools;
use std::process::ExitCode;
use env_logger::Env;
use sena_tools::SenaParams;
use sena_tools::sena::{X, clamped, ramp};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let params = SenaParams::default();

    println!("Generating C++ code for Sena function...");
    let g = ramp();
    println!("g(x) = {}", g);
    println!("g(x) as C: {}", g.ccode());

    let big_g = match g.integrate(X) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("G(x) = {}", big_g);
    println!("G(x) as C: {}", big_g.ccode());
    println!("G(x) with {}: {}", params, params.bind(&big_g));

    let l = clamped();
    println!("l(x) = {}", l);
    println!("l(x) as C: {}", l.ccode());
    println!("C++ code generation complete.");
    ExitCode::SUCCESS
}
