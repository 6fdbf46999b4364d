//! Build-tool style date patterns
//!
//! Timestamp formats in build configurations are written as letter patterns
//! such as `dd-MMM-yyyy HH:mm` rather than `strftime` strings. This module
//! compiles such a pattern once into a token list and renders any
//! `chrono::DateTime` with it.
//!
//! Supported letters:
//!
//! | Letter | Meaning | Examples |
//! |---|---|---|
//! | `G` | era | `AD` |
//! | `y` | year (`yy` is two digits) | `2023`, `23` |
//! | `Y` | ISO week-based year | `2023` |
//! | `M`, `L` | month (`MMM` abbreviated, `MMMM` full name) | `7`, `07`, `Jul`, `July` |
//! | `w` | ISO week of year | `46` |
//! | `D` | day of year | `318` |
//! | `d` | day of month | `14` |
//! | `F` | day-of-week occurrence in month | `2` |
//! | `E` | weekday name (`EEEE` full) | `Tue`, `Tuesday` |
//! | `u` | weekday number, Monday = 1 | `2` |
//! | `a` | AM/PM marker | `PM` |
//! | `H` / `k` | hour 0-23 / 1-24 | `0` / `24` |
//! | `K` / `h` | hour 0-11 / 1-12 | `0` / `12` |
//! | `m`, `s` | minute, second | `05` |
//! | `S` | millisecond | `007` |
//! | `z` | zone abbreviation, or the `+hh:mm` offset when the zone has none (local time) | `UTC`, `+01:00` |
//! | `Z` | RFC 822 offset | `+0100` |
//! | `X` | ISO 8601 offset (`X`, `XX`, `XXX`) | `Z`, `+01`, `+0100`, `+01:00` |
//!
//! Text inside single quotes is copied verbatim, `''` produces a single
//! quote, and any other non-letter character is a literal. A pattern that
//! contains `%` is taken to be a native `strftime` string.
//!
//! `Y` and `w` follow ISO 8601 week rules (weeks start on Monday and week 1
//! holds the year's first Thursday), not locale-dependent week rules.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike, Utc};
use std::fmt::{self, Write};

use super::error::{PatternError, PatternResult};

const SUPPORTED_LETTERS: &str = "GyYMLwDdFEuaHkKhmsSzZX";

/// A single compiled element of a date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Field { letter: char, width: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Compiled {
    Tokens(Vec<Token>),
    Strftime(String),
}

/// A compiled date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    compiled: Compiled,
}

impl DatePattern {
    /// Compile a pattern string
    pub fn parse(pattern: &str) -> PatternResult<Self> {
        let compiled = if pattern.contains('%') {
            let invalid = || PatternError::InvalidStrftime {
                pattern: pattern.to_string(),
            };
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(invalid());
            }
            // Some specifiers are only valid for parsing and fail when formatting
            let epoch = DateTime::<Utc>::UNIX_EPOCH;
            let mut scratch = String::new();
            write!(scratch, "{}", epoch.format(pattern)).map_err(|_| invalid())?;
            Compiled::Strftime(pattern.to_string())
        } else {
            Compiled::Tokens(tokenize(pattern)?)
        };

        Ok(Self {
            source: pattern.to_string(),
            compiled,
        })
    }

    /// Render a date/time in whatever zone it carries
    pub fn render<Tz>(&self, dt: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match &self.compiled {
            Compiled::Strftime(spec) => {
                let mut out = String::new();
                if write!(out, "{}", dt.format(spec)).is_err() {
                    log::warn!("Date pattern '{}' could not be rendered", spec);
                    out.clear();
                }
                out
            }
            Compiled::Tokens(tokens) => {
                let mut out = String::with_capacity(self.source.len() + 8);
                for token in tokens {
                    match token {
                        Token::Literal(text) => out.push_str(text),
                        Token::Field { letter, width } => {
                            render_field(&mut out, dt, *letter, *width)
                        }
                    }
                }
                out
            }
        }
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::str::FromStr for DatePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(existing)) = tokens.last_mut() {
        existing.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_string()));
    }
}

fn tokenize(pattern: &str) -> PatternResult<Vec<Token>> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            // '' outside a quoted section is an escaped quote
            if chars.get(i + 1) == Some(&'\'') {
                push_literal(&mut tokens, "'");
                i += 2;
                continue;
            }

            let mut literal = String::new();
            let mut closed = false;
            i += 1;
            while i < chars.len() {
                if chars[i] == '\'' {
                    if chars.get(i + 1) == Some(&'\'') {
                        literal.push('\'');
                        i += 2;
                        continue;
                    }
                    closed = true;
                    i += 1;
                    break;
                }
                literal.push(chars[i]);
                i += 1;
            }
            if !closed {
                return Err(PatternError::UnterminatedQuote {
                    pattern: pattern.to_string(),
                });
            }
            push_literal(&mut tokens, &literal);
            continue;
        }

        if c.is_ascii_alphabetic() {
            if !SUPPORTED_LETTERS.contains(c) {
                return Err(PatternError::IllegalCharacter {
                    letter: c,
                    pattern: pattern.to_string(),
                });
            }
            let start = i;
            while i < chars.len() && chars[i] == c {
                i += 1;
            }
            tokens.push(Token::Field {
                letter: c,
                width: i - start,
            });
            continue;
        }

        let mut buf = [0u8; 4];
        push_literal(&mut tokens, c.encode_utf8(&mut buf));
        i += 1;
    }

    Ok(tokens)
}

fn push_number(out: &mut String, value: i64, width: usize) {
    if value < 0 {
        out.push('-');
    }
    out.push_str(&format!("{:0width$}", value.unsigned_abs(), width = width));
}

fn push_offset(out: &mut String, offset_secs: i32, with_minutes: bool, colon: bool) {
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let total_minutes = offset_secs.unsigned_abs() / 60;
    out.push(sign);
    out.push_str(&format!("{:02}", total_minutes / 60));
    if with_minutes {
        if colon {
            out.push(':');
        }
        out.push_str(&format!("{:02}", total_minutes % 60));
    }
}

fn render_field<Tz>(out: &mut String, dt: &DateTime<Tz>, letter: char, width: usize)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match letter {
        'G' => out.push_str(if dt.year() > 0 { "AD" } else { "BC" }),
        'y' | 'Y' => {
            let year = if letter == 'Y' {
                dt.iso_week().year()
            } else {
                dt.year()
            };
            if width == 2 {
                push_number(out, i64::from(year.rem_euclid(100)), 2);
            } else {
                push_number(out, i64::from(year), width);
            }
        }
        'M' | 'L' => match width {
            1 | 2 => push_number(out, i64::from(dt.month()), width),
            3 => out.push_str(&dt.format("%b").to_string()),
            _ => out.push_str(&dt.format("%B").to_string()),
        },
        'w' => push_number(out, i64::from(dt.iso_week().week()), width),
        'D' => push_number(out, i64::from(dt.ordinal()), width),
        'd' => push_number(out, i64::from(dt.day()), width),
        'F' => push_number(out, i64::from((dt.day() - 1) / 7 + 1), width),
        'E' => {
            if width >= 4 {
                out.push_str(&dt.format("%A").to_string());
            } else {
                out.push_str(&dt.format("%a").to_string());
            }
        }
        'u' => push_number(out, i64::from(dt.weekday().number_from_monday()), width),
        'a' => out.push_str(if dt.hour() < 12 { "AM" } else { "PM" }),
        'H' => push_number(out, i64::from(dt.hour()), width),
        'k' => {
            let hour = if dt.hour() == 0 { 24 } else { dt.hour() };
            push_number(out, i64::from(hour), width)
        }
        'K' => push_number(out, i64::from(dt.hour() % 12), width),
        'h' => {
            let hour = match dt.hour() % 12 {
                0 => 12,
                h => h,
            };
            push_number(out, i64::from(hour), width)
        }
        'm' => push_number(out, i64::from(dt.minute()), width),
        's' => push_number(out, i64::from(dt.second()), width),
        'S' => push_number(out, i64::from(dt.timestamp_subsec_millis() % 1000), width),
        'z' => out.push_str(&dt.format("%Z").to_string()),
        'Z' => push_offset(out, dt.offset().fix().local_minus_utc(), true, false),
        'X' => {
            let offset = dt.offset().fix().local_minus_utc();
            if offset == 0 {
                out.push('Z');
            } else {
                push_offset(out, offset, width >= 2, width >= 3);
            }
        }
        // tokenize() only emits supported letters
        _ => {}
    }
}
