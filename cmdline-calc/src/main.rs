//! Simple calculator driven by the declarative command line engine.
//!
//! ```text
//! simplecalc -l 10 --right 2 -o mul
//! ```

mod calc;
mod params;

use std::process::ExitCode;

use anyhow::Result;
use cmdline_core::Engine;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::calc::calc;
use crate::params::Params;

const BASE_COMMAND: &str = "simplecalc ";

fn main() -> Result<ExitCode> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut params = Params::default();
    let mut engine = Engine::new(&mut params, BASE_COMMAND)?;

    if !engine.parse_command_line(&args)? {
        print_lines(engine.output());
        return Ok(ExitCode::FAILURE);
    }

    debug!(?params, "Parsed parameters");

    match calc(&params) {
        Ok(calculation) => {
            println!("{}", calculation);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cmdline_core=warn,simplecalc=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
