//! Roman Calc CLI
//!
//! Reads `Input.txt` from the working directory, writes word results to
//! `Output.txt` and a processing trace to `Process.txt`.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity
//!
//! An optional `roman-calc.toml` in the working directory overrides the file
//! names and the maximum line length.

use roman_calc::{CalcError, Config, LineProcessor, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    match run() {
        Ok(config) => println!(
            "Processing completed! Check {} for results.",
            config.output_path.display()
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<Config> {
    let config = Config::load(Path::new("."))?;

    let input = File::open(&config.input_path).map_err(open_error(&config.input_path))?;
    let output = File::create(&config.output_path).map_err(open_error(&config.output_path))?;
    let log = File::create(&config.log_path).map_err(open_error(&config.log_path))?;

    let processor = LineProcessor::from_config(&config);
    processor.process(
        BufReader::new(input),
        BufWriter::new(output),
        BufWriter::new(log),
    )?;

    Ok(config)
}

fn open_error(path: &Path) -> impl FnOnce(std::io::Error) -> CalcError + '_ {
    move |source| CalcError::ResourceOpen {
        path: path.to_path_buf(),
        source,
    }
}
