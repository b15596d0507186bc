//! Line-by-line processing pipeline.
//!
//! Each input line produces exactly one output line and a short trace in the
//! process log. Per-line failures are reported to both streams and never stop
//! the run; only I/O errors on the streams themselves do.

use crate::config::Config;
use crate::error::{LineError, Result};
use crate::record::InputRecord;
use crate::words::to_words;
use log::{debug, info, warn};
use std::io::{self, BufRead, Read, Write};

/// Counts collected over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of input lines read
    pub lines: usize,

    /// Lines that produced a word result
    pub succeeded: usize,

    /// Lines that produced a diagnostic
    pub failed: usize,
}

/// Evaluates Roman numeral arithmetic records.
///
/// Holds no per-line state; every line is handled independently and in
/// input order.
pub struct LineProcessor {
    max_line_len: usize,
}

impl LineProcessor {
    /// Creates a processor with the given maximum record length.
    pub fn new(max_line_len: usize) -> Self {
        LineProcessor { max_line_len }
    }

    /// Creates a processor using the limits from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_line_len)
    }

    /// Processes every line of `input`, writing results to `output` and a
    /// trace to `log`.
    ///
    /// At most `max_line_len` bytes of a record are buffered; the rest of an
    /// overlong line is skipped and the line is reported as too long.
    pub fn process<R, W, L>(&self, mut input: R, mut output: W, mut log: L) -> Result<Summary>
    where
        R: BufRead,
        W: Write,
        L: Write,
    {
        let mut summary = Summary::default();
        let mut buf = Vec::new();

        while let Some(len) = read_record(&mut input, &mut buf, self.max_line_len)? {
            summary.lines += 1;
            let line_num = summary.lines;

            let too_long = len > self.max_line_len;
            if too_long {
                buf.truncate(self.max_line_len);
            }
            let line = clean_line(&buf);

            writeln!(log, "Processing line: {}", line)?;
            let outcome = if too_long {
                Err(LineError::LineTooLong {
                    len,
                    max: self.max_line_len,
                })
            } else {
                self.process_line(line, &mut log)?
            };

            match outcome {
                Ok(result) => {
                    writeln!(output, "{}", to_words(result))?;
                    writeln!(log, "Result: {}", result)?;
                    debug!("Line {}: {:?} = {}", line_num, line, result);
                    summary.succeeded += 1;
                }
                Err(e) => {
                    writeln!(output, "{} in line: {}", e, line)?;
                    writeln!(log, "Error: {}", e.log_note())?;
                    warn!("Line {}: {}", line_num, e.log_note());
                    summary.failed += 1;
                }
            }
        }

        output.flush()?;
        log.flush()?;

        info!(
            "Processed {} lines ({} succeeded, {} failed)",
            summary.lines, summary.succeeded, summary.failed
        );
        Ok(summary)
    }

    /// Runs one line through parsing, decoding and arithmetic.
    ///
    /// The conversion trace is logged as soon as both numerals decode, so it
    /// appears even when the operator is then rejected. The outer `Result`
    /// carries log write failures only.
    fn process_line<L: Write>(
        &self,
        line: &str,
        log: &mut L,
    ) -> Result<std::result::Result<i64, LineError>> {
        let decoded = match InputRecord::parse(line).and_then(|record| record.decode()) {
            Ok(decoded) => decoded,
            Err(e) => return Ok(Err(e)),
        };

        writeln!(
            log,
            "Converted: {} -> {}, {} -> {}",
            decoded.record.left, decoded.left, decoded.record.right, decoded.right
        )?;
        debug!(
            "Converted {} -> {}, {} -> {}",
            decoded.record.left, decoded.left, decoded.record.right, decoded.right
        );

        Ok(decoded.compute())
    }
}

impl Default for LineProcessor {
    fn default() -> Self {
        Self::new(Config::DEFAULT_MAX_LINE_LEN)
    }
}

/// Reads one record into `buf`, keeping at most `limit` bytes plus a `\r\n`
/// terminator. Anything past that is consumed up to the next newline without
/// being stored.
///
/// Returns the length of the record without its terminator, or `None` at end
/// of input.
fn read_record<R: BufRead>(
    input: &mut R,
    buf: &mut Vec<u8>,
    limit: usize,
) -> io::Result<Option<usize>> {
    buf.clear();
    let cap = limit as u64 + 2;
    let read = input.by_ref().take(cap).read_until(b'\n', buf)?;
    if read == 0 {
        return Ok(None);
    }

    if buf.ends_with(b"\n") || (read as u64) < cap {
        return Ok(Some(strip_terminator(buf).len()));
    }

    let mut len = buf.len();
    loop {
        let available = input.fill_buf()?;
        if available.is_empty() {
            break;
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(idx) => {
                len += idx;
                input.consume(idx + 1);
                break;
            }
            None => {
                let skipped = available.len();
                len += skipped;
                input.consume(skipped);
            }
        }
    }

    Ok(Some(len))
}

fn strip_terminator(raw: &[u8]) -> &[u8] {
    match raw.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => raw,
    }
}

/// Strips the line terminator and truncates at the first byte that is
/// neither printable ASCII nor ASCII whitespace.
///
/// Non-ASCII bytes end the line too, so the result is always ASCII.
pub fn clean_line(raw: &[u8]) -> &str {
    let line = strip_terminator(raw);
    let end = line
        .iter()
        .position(|&b| !(b.is_ascii_graphic() || b.is_ascii_whitespace() || b == 0x0B))
        .unwrap_or(line.len());

    // The kept prefix is ASCII.
    std::str::from_utf8(&line[..end]).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn run(input: &str) -> (String, String, Summary) {
        let processor = LineProcessor::default();
        let mut output = Vec::new();
        let mut log = Vec::new();
        let summary = processor
            .process(Cursor::new(input), &mut output, &mut log)
            .unwrap();

        (
            String::from_utf8(output).unwrap(),
            String::from_utf8(log).unwrap(),
            summary,
        )
    }

    #[test]
    fn test_simple_addition() {
        let (output, log, summary) = run("X + V\n");
        assert_eq!(output, "Fifteen\n");
        assert_eq!(
            log,
            "Processing line: X + V\nConverted: X -> 10, V -> 5\nResult: 15\n"
        );
        assert_eq!(
            summary,
            Summary {
                lines: 1,
                succeeded: 1,
                failed: 0
            }
        );
    }

    #[test]
    fn test_each_failure_kind() {
        let (output, _, summary) = run("X / N\nX ^ V\nbanana\n");
        assert_eq!(
            output,
            "Invalid Roman numeral in line: X / N\n\
             Invalid operation in line: X ^ V\n\
             Invalid input format in line: banana\n"
        );
        assert_eq!(summary.failed, 3);
    }

    #[test]
    fn test_operator_failure_logs_conversion() {
        let (_, log, _) = run("X ^ V\n");
        assert_eq!(
            log,
            "Processing line: X ^ V\nConverted: X -> 10, V -> 5\nError: Invalid operation '^'.\n"
        );
    }

    #[test]
    fn test_numeral_failure_skips_conversion() {
        let (_, log, _) = run("X / N\n");
        assert!(log.starts_with("Processing line: X / N\nError: Invalid Roman numeral"));
        assert!(!log.contains("Converted"));
    }

    #[test]
    fn test_minus_one_is_a_result() {
        let (output, _, _) = run("I - II\n");
        assert_eq!(output, "Negative One\n");
    }

    #[test]
    fn test_last_line_without_newline() {
        let (output, _, summary) = run("X + V\nXII * XII");
        assert_eq!(output, "Fifteen\nOne Hundred Forty Four\n");
        assert_eq!(summary.lines, 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let (output, _, _) = run("X + V\r\nV - X\r\n");
        assert_eq!(output, "Fifteen\nNegative Five\n");
    }

    #[test]
    fn test_line_too_long() {
        let processor = LineProcessor::new(8);
        let mut output = Vec::new();
        processor
            .process(Cursor::new("MMMM + MMMM\nX + V\n"), &mut output, io::sink())
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Invalid input format in line: MMMM + M\nFifteen\n"
        );
    }

    #[test]
    fn test_line_at_limit_is_accepted() {
        let processor = LineProcessor::new(5);
        let mut output = Vec::new();
        processor
            .process(Cursor::new("X + V\r\nX + VI\nX + V"), &mut output, io::sink())
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Fifteen\nInvalid input format in line: X + V\nFifteen\n"
        );
    }

    #[test]
    fn test_overlong_record_is_not_buffered() {
        let mut input = "M".repeat(10_000);
        input.push_str("\nX + V\n");
        let mut reader = Cursor::new(input);
        let mut buf = Vec::new();

        let len = read_record(&mut reader, &mut buf, 8).unwrap();
        assert_eq!(len, Some(10_000));
        assert!(buf.len() <= 10);

        let len = read_record(&mut reader, &mut buf, 8).unwrap();
        assert_eq!(len, Some(5));
        assert_eq!(buf, b"X + V\n");

        assert_eq!(read_record(&mut reader, &mut buf, 8).unwrap(), None);
    }

    #[test]
    fn test_overlong_last_line_without_newline() {
        let mut reader = Cursor::new("MMMMMMMMMMMM");
        let mut buf = Vec::new();

        assert_eq!(read_record(&mut reader, &mut buf, 4).unwrap(), Some(12));
        assert_eq!(read_record(&mut reader, &mut buf, 4).unwrap(), None);
    }

    #[test]
    fn test_invalid_byte_truncates_line() {
        let processor = LineProcessor::default();
        let mut output = Vec::new();
        let input: &[u8] = b"X + V\xff junk\nX \xff V\nX + V\n";
        processor.process(input, &mut output, io::sink()).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Fifteen\nInvalid input format in line: X \nFifteen\n"
        );
    }

    #[test]
    fn test_non_ascii_letter_truncates_line() {
        let (output, log, _) = run("X + V\u{e9}\n");
        assert_eq!(output, "Fifteen\n");
        assert!(log.starts_with("Processing line: X + V\n"));
    }

    #[test]
    fn test_process_line_outcomes() {
        let processor = LineProcessor::default();
        let mut log = Vec::new();

        assert_eq!(processor.process_line("MCMXCIV - XLII", &mut log).unwrap(), Ok(1952));
        assert_eq!(processor.process_line("C / III", &mut log).unwrap(), Ok(33));
        assert_eq!(
            processor.process_line("X ++ V", &mut log).unwrap(),
            Err(LineError::InvalidFormat)
        );
        assert_eq!(
            String::from_utf8(log).unwrap(),
            "Converted: MCMXCIV -> 1994, XLII -> 42\nConverted: C -> 100, III -> 3\n"
        );
    }

    #[test]
    fn test_clean_line() {
        assert_eq!(clean_line(b"X + V\n"), "X + V");
        assert_eq!(clean_line(b"X + V\r\n"), "X + V");
        assert_eq!(clean_line(b"X + V\x07junk"), "X + V");
        assert_eq!(clean_line(b"X\x01I + V"), "X");
        assert_eq!(clean_line(b"X\t+ V"), "X\t+ V");
        assert_eq!(clean_line(b"X + V\x0b"), "X + V\x0b");
        assert_eq!(clean_line("X + V\u{e9}I".as_bytes()), "X + V");
        assert_eq!(clean_line(b"X\xff"), "X");
        assert_eq!(clean_line(b""), "");
    }
}
