//! The immutable set of candidate lines read from the input pipe.

use std::io::{self, BufRead, Read};

use log::{debug, info};

use crate::error::StartupError;

/// Maximum number of records read from the input.
pub const DEFAULT_MAX_LINES: usize = 10_000;
/// Maximum length of a single record, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4_095;

/// Bytes kept past the length limit: a partially cut UTF-8 sequence plus a
/// CRLF ending.
const RECORD_SLACK: usize = 6;

/// Caps applied while loading the line store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub max_lines: usize,
    pub max_line_length: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

/// Ordered, read-only collection of input lines. A line is identified by its
/// position in the original input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<String>,
}

impl LineStore {
    /// Read newline-separated records from `reader`.
    ///
    /// Records longer than the limit are truncated and reading stops once the
    /// record cap is reached; neither is an error. Invalid UTF-8 is replaced
    /// rather than rejected. An input with no records at all is rejected.
    ///
    /// At most a few bytes past the length limit of any record are held in
    /// memory; the rest of an over-long record is skipped up to its newline.
    pub fn from_reader<R: BufRead>(
        mut reader: R,
        limits: InputLimits,
    ) -> Result<Self, StartupError> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        let mut truncated = 0usize;
        let record_cap = limits.max_line_length.saturating_add(RECORD_SLACK);

        while lines.len() < limits.max_lines {
            buf.clear();
            let read =
                read_record(&mut reader, &mut buf, record_cap).map_err(StartupError::ReadInput)?;
            if read == 0 {
                break;
            }

            let record = strip_line_ending(&buf);
            let mut line = String::from_utf8_lossy(record).into_owned();
            if truncate_on_char_boundary(&mut line, limits.max_line_length) {
                truncated += 1;
            }
            lines.push(line);
        }

        if truncated > 0 {
            debug!(
                "truncated {truncated} line(s) to {} bytes",
                limits.max_line_length
            );
        }
        if lines.len() == limits.max_lines
            && reader
                .fill_buf()
                .map(|rest| !rest.is_empty())
                .unwrap_or(false)
        {
            info!("input capped at {} lines", limits.max_lines);
        }

        if lines.is_empty() {
            return Err(StartupError::EmptyInput);
        }

        debug!("loaded {} input line(s)", lines.len());
        Ok(Self { lines })
    }

    /// Build a store from already separated lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }
}

/// Read one record into `buf`, keeping at most `cap` bytes of it. Returns the
/// number of bytes kept.
fn read_record<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>, cap: usize) -> io::Result<usize> {
    let limit = u64::try_from(cap).unwrap_or(u64::MAX);
    let kept = reader.by_ref().take(limit).read_until(b'\n', buf)?;
    if kept == cap && buf.last() != Some(&b'\n') {
        skip_past_newline(reader)?;
    }
    Ok(kept)
}

fn skip_past_newline<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|&byte| byte == b'\n') {
            Some(newline) => {
                reader.consume(newline + 1);
                return Ok(());
            }
            None => {
                let skipped = available.len();
                reader.consume(skipped);
            }
        }
    }
}

fn strip_line_ending(record: &[u8]) -> &[u8] {
    let record = record.strip_suffix(b"\n").unwrap_or(record);
    record.strip_suffix(b"\r").unwrap_or(record)
}

/// Shorten `line` to at most `max_bytes`, backing off to the previous char
/// boundary. Returns whether anything was removed.
fn truncate_on_char_boundary(line: &mut String, max_bytes: usize) -> bool {
    if line.len() <= max_bytes {
        return false;
    }
    let mut end = max_bytes;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line.truncate(end);
    true
}
