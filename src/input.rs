//! Workload input parsing.
//!
//! The text format is whitespace-tokenised: a process count `N`, a
//! round-robin quantum `Q`, then `N` `arrival burst` pairs. IDs are
//! assigned 1-based in pair order. Tokens after the last pair are
//! ignored.
//!
//! ```text
//! 3 2
//! 0 5
//! 1 3
//! 2 1
//! ```
//!
//! Parsing is reader-agnostic: [`Workload::parse`] works on any string
//! and [`Workload::from_file`] wraps it for the CLI. A missing or
//! unreadable file fails before any simulation runs.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::num::NonZeroU64;
use std::path::Path;
use std::str::SplitWhitespace;

use crate::models::{ProcessSpec, Tick};

/// A parsed simulation input: the process set plus the RR quantum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    /// Round-robin time slice (used only by the RR policy).
    pub quantum: NonZeroU64,
    /// Processes in input order, ids assigned 1-based.
    pub processes: Vec<ProcessSpec>,
}

/// Errors produced while reading a workload.
#[derive(Debug)]
pub enum ParseError {
    /// Underlying file read failed.
    Io(io::Error),
    /// Input ended before the named field.
    UnexpectedEof {
        /// Field that was being read.
        expected: &'static str,
    },
    /// A token was not a non-negative integer.
    Malformed {
        /// The offending token.
        token: String,
        /// Field that was being read.
        expected: &'static str,
    },
    /// The quantum field was zero.
    ZeroQuantum,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(e) => write!(f, "could not read workload: {e}"),
            ParseError::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input while reading {expected}")
            }
            ParseError::Malformed { token, expected } => {
                write!(f, "malformed {expected}: '{token}' is not a non-negative integer")
            }
            ParseError::ZeroQuantum => write!(f, "quantum must be a positive integer"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Io(e)
    }
}

impl Workload {
    /// Parses a workload from text.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut tokens = text.split_whitespace();
        let count = next_field(&mut tokens, "process count")? as usize;
        let quantum = NonZeroU64::new(next_field(&mut tokens, "quantum")?)
            .ok_or(ParseError::ZeroQuantum)?;

        let mut processes = Vec::with_capacity(count);
        for i in 0..count {
            let arrival = next_field(&mut tokens, "arrival time")?;
            let burst = next_field(&mut tokens, "burst time")?;
            processes.push(ProcessSpec::new(i as u32 + 1, arrival, burst));
        }
        Ok(Self { quantum, processes })
    }

    /// Reads and parses a workload file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

fn next_field(tokens: &mut SplitWhitespace<'_>, expected: &'static str) -> Result<Tick, ParseError> {
    let token = tokens
        .next()
        .ok_or(ParseError::UnexpectedEof { expected })?;
    token.parse::<Tick>().map_err(|_| ParseError::Malformed {
        token: token.to_string(),
        expected,
    })
}
