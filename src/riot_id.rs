//! Riot ID input: the interactive prompt and the `Name#Tag` parser.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::AppError;

pub const PROMPT: &str = "Enter Riot ID (RiotName#TagLine): ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl FromStr for RiotId {
    type Err = AppError;

    /// Splits on the first `#`. Both sides must be non-empty, only the line ending is stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (game_name, tag_line) = s
            .trim_end_matches(['\r', '\n'])
            .split_once('#')
            .ok_or(AppError::InvalidRiotId)?;

        if game_name.is_empty() || tag_line.is_empty() {
            return Err(AppError::InvalidRiotId);
        }

        Ok(Self {
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        })
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

/// Writes the prompt, reads a single line and parses it. `input` is dropped before parsing.
pub fn prompt_riot_id<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<RiotId, AppError> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let line = read_line(input)?;

    line.parse()
}

fn read_line<R: BufRead>(mut input: R) -> Result<String, AppError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
