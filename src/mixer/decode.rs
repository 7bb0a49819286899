//! Parser for `tinymix -t -a` dumps
//!
//! Layout of a Google dump:
//!
//! ```text
//! Mixer name: 'sm8250-mtp-snd-card'        <- device header, discarded
//! Number of controls: 572                  <- Google only, discarded
//! ctl	type	num	name	value            <- column header
//! 0	BOOL	1	Speaker Mute	ON
//! 1	ENUM	3	RX Route	ZERO	>AIF1	AIF2
//! ```
//!
//! Data rows are positional: index, type tag, value count, name, then the values.

use std::str::{FromStr, Lines};

use crate::mixer::control::{ControlRecord, BOOL_FALSE, BOOL_TRUE};
use crate::mixer::dialect::Dialect;
use crate::mixer::error::DecodeError;
use crate::mixer::value_type::ValueType;

/// Size of the line buffer; a line that does not fit is rejected
pub const LINE_BUFFER_SIZE: usize = 4096;

/// Columns before the first value: index, type, count, name
const FIXED_COLUMNS: usize = 4;

/// Marks the active choice of an enum control
const SELECTED_MARKER: char = '>';

/// Decode a whole dump into records ordered by control index
pub fn decode(raw: &str, dialect: Dialect) -> Result<Vec<ControlRecord>, DecodeError> {
    let mut reader = DumpReader::new(raw);

    // TODO: extract the device name from the first line
    reader.header("first")?;
    if dialect.has_secondary_header() {
        reader.header("second")?;
    }
    let columns: Vec<&str> = reader.header("column header")?.split('\t').collect();
    tracing::trace!(?columns, "Dump column header");

    if !dialect.is_supported() {
        return Err(DecodeError::UnsupportedDialect(dialect));
    }

    let mut records = Vec::new();
    while let Some(line) = reader.next_line()? {
        if line.is_empty() {
            continue;
        }
        let record = decode_row(line, records.len())?;
        records.push(record);
    }

    Ok(records)
}

/// Line iterator enforcing the buffer size
struct DumpReader<'a> {
    lines: Lines<'a>,
}

impl<'a> DumpReader<'a> {
    fn new(raw: &'a str) -> Self {
        Self { lines: raw.lines() }
    }

    fn next_line(&mut self) -> Result<Option<&'a str>, DecodeError> {
        match self.lines.next() {
            Some(line) if line.len() >= LINE_BUFFER_SIZE => Err(DecodeError::LineTooLong {
                prefix: truncate_at_char_boundary(line, LINE_BUFFER_SIZE).to_string(),
            }),
            other => Ok(other),
        }
    }

    fn header(&mut self, which: &'static str) -> Result<&'a str, DecodeError> {
        self.next_line()?
            .ok_or(DecodeError::MissingHeader { which })
    }
}

fn truncate_at_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Decode one non-empty data row; `expected_index` is the number of rows already decoded
fn decode_row(line: &str, expected_index: usize) -> Result<ControlRecord, DecodeError> {
    let words: Vec<&str> = line.split('\t').collect();

    if words.len() <= FIXED_COLUMNS {
        return Err(DecodeError::NotEnoughColumns {
            line: line.to_string(),
            received: words.len(),
        });
    }

    let index: u64 = parse_unsigned(words[0]).ok_or_else(|| DecodeError::InvalidIndex {
        token: words[0].to_string(),
        line: line.to_string(),
    })?;
    if usize::try_from(index).ok() != Some(expected_index) {
        return Err(DecodeError::IndexMismatch {
            found: index,
            expected: expected_index,
            line: line.to_string(),
        });
    }

    let value_type =
        ValueType::parse(words[1]).map_err(|_| DecodeError::UnknownValueType {
            token: words[1].to_string(),
            line: line.to_string(),
        })?;

    let num: usize = parse_unsigned(words[2]).ok_or_else(|| DecodeError::InvalidCount {
        token: words[2].to_string(),
        line: line.to_string(),
    })?;

    let name = words[3].to_string();

    let available = words.len() - FIXED_COLUMNS;
    if available < num {
        return Err(DecodeError::MissingValue {
            position: available,
            line: line.to_string(),
        });
    }

    let mut selected = None;
    let mut values = Vec::with_capacity(num);
    for (position, word) in words[FIXED_COLUMNS..FIXED_COLUMNS + num].iter().enumerate() {
        let value = match value_type {
            ValueType::Byte => decode_integer(word, 16, line)?,
            ValueType::Int => decode_integer(word, 10, line)?,
            ValueType::Bool => decode_bool(word, line)?,
            ValueType::Enum => match word.strip_prefix(SELECTED_MARKER) {
                Some(choice) => {
                    if let Some(previous) = selected {
                        tracing::warn!(
                            control = %name,
                            previous,
                            position,
                            "Enum control has more than one selected value, keeping the last"
                        );
                    }
                    selected = Some(position);
                    choice.to_string()
                }
                None => word.to_string(),
            },
        };
        values.push(value);
    }

    Ok(ControlRecord {
        index: expected_index,
        value_type,
        num,
        name,
        values,
        selected,
    })
}

/// Plain decimal digits only; `str::parse` alone would also take a leading `+`
fn parse_unsigned<T: FromStr>(token: &str) -> Option<T> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Parse a signed integer in `radix` and re-render it in decimal
fn decode_integer(word: &str, radix: u32, line: &str) -> Result<String, DecodeError> {
    i64::from_str_radix(word.trim(), radix)
        .map(|v| v.to_string())
        .map_err(|source| DecodeError::InvalidNumber {
            token: word.to_string(),
            line: line.to_string(),
            source,
        })
}

/// `tinymix` reports a switch that is *off* as `ON`; the stored form keeps that polarity
fn decode_bool(word: &str, line: &str) -> Result<String, DecodeError> {
    match word
        .to_uppercase()
        .trim_matches([' ', '\t', '\r', '\n'])
    {
        "OFF" => Ok(BOOL_TRUE.to_string()),
        "ON" => Ok(BOOL_FALSE.to_string()),
        _ => Err(DecodeError::InvalidBoolean {
            token: word.to_string(),
            line: line.to_string(),
        }),
    }
}
