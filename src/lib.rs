//! # Roman Calc
//!
//! A batch processor that evaluates lines of Roman numeral arithmetic such as
//! `MCMXCIV - XLII` and writes each result as English words.
//!
//! ## Design Principles
//!
//! - **Permissive decoding**: any run of `IVXLCDM` letters decodes with
//!   subtractive notation; well-formedness is not enforced
//! - **Tagged failures**: numeral, format and operation errors are typed,
//!   never reserved integers
//! - **One line in, one line out**: every input line yields exactly one output
//!   line and one log trace, in input order
//! - **Injected streams**: the pipeline works on any `BufRead`/`Write`
//!
//! ## Example
//!
//! ```
//! use roman_calc::LineProcessor;
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! LineProcessor::default()
//!     .process(Cursor::new("X + V\n"), &mut output, std::io::sink())
//!     .unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "Fifteen\n");
//! ```

pub mod config;
pub mod error;
pub mod numeral;
pub mod processor;
pub mod record;
pub mod words;

pub use config::Config;
pub use error::{CalcError, LineError, NumeralError, Result};
pub use processor::{clean_line, LineProcessor, Summary};
pub use record::{DecodedRecord, InputRecord, Operation};
pub use words::to_words;
