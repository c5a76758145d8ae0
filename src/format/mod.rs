// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Reading and writing grid instances and solutions.
//!
//! Both formats are plain streams of whitespace separated numbers, line
//! breaks are only used for error messages.

pub mod instance;
pub use self::instance::{read as read_instance, Instance};

pub mod solution;
pub use self::solution::{read_solution, write_solution};

use std::error;
use std::fmt;
use std::io::{self, BufRead, BufReader, Read};
use std::str::FromStr;

/// Error when reading an instance or a solution.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Format { line: usize, msg: String },
    Data { line: usize, msg: String },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            Io(err) => err.fmt(fmt),
            Format { line, msg } => write!(fmt, "Format error on line {}: {}", line, msg),
            Data { line, msg } => write!(fmt, "Data error on line {}: {}", line, msg),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reads whitespace separated tokens and keeps track of line numbers.
pub struct TokenReader<R: Read> {
    io: BufReader<R>,

    line: String,
    line_number: usize,
    pos: usize,
}

impl<R: Read> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            io: BufReader::new(reader),
            line: String::new(),
            line_number: 0,
            pos: 0,
        }
    }

    /// Return the line number of the last token.
    pub fn line(&self) -> usize {
        self.line_number
    }

    /// Return the next token with its line number or `None` at the end
    /// of the input.
    fn token(&mut self) -> Result<Option<(usize, &str)>> {
        loop {
            if let Some(start) = self.line[self.pos..].find(|c: char| !c.is_whitespace()) {
                let start = self.pos + start;
                let end = self.line[start..]
                    .find(char::is_whitespace)
                    .map(|len| start + len)
                    .unwrap_or_else(|| self.line.len());
                self.pos = end;
                return Ok(Some((self.line_number, &self.line[start..end])));
            }

            self.line.clear();
            self.pos = 0;
            if self.io.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
        }
    }

    /// Returns the next token converted to a number.
    ///
    /// `what` describes the expected value in error messages.
    pub fn number<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.token()? {
            Some((line, tok)) => tok.parse().map_err(|e| Error::Format {
                line,
                msg: format!("invalid {} '{}': {}", what, tok, e),
            }),
            None => Err(Error::Format {
                line: self.line_number,
                msg: format!("unexpected end of input, expected {}", what),
            }),
        }
    }

    /// Returns the next token as a number in the range `lo..=hi`.
    pub fn bounded(&mut self, what: &str, lo: i64, hi: i64) -> Result<i64> {
        let x: i64 = self.number(what)?;
        if x < lo || x > hi {
            return Err(Error::Data {
                line: self.line_number,
                msg: format!("{} {} out of range (must be in {}..={})", what, x, lo, hi),
            });
        }
        Ok(x)
    }

    /// Ensures that there is no further token.
    pub fn end(&mut self) -> Result<()> {
        match self.token()? {
            Some((line, tok)) => Err(Error::Format {
                line,
                msg: format!("unexpected token at end of input: {}", tok),
            }),
            None => Ok(()),
        }
    }
}
