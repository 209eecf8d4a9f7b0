//! Between-round prompt for extended tests.

use std::io::{self, BufRead, Write};

use hr_mechanics::RoundInput;

const HELP: &str = "  split params with space:
    e/edge  = use edge in this roll
    any int = specific mod for this roll (+/-)
    n/no    = stop the extended test
    <ENTER> or anything else to continue as is";

/// What the player answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Roll another round with this adjustment.
    Continue(RoundInput),
    /// End the test.
    Stop,
    /// Show the help text and ask again.
    Help,
}

/// Interpret one line of input.
///
/// Integers are summed (saturating) into the round modifier, `e`/`edge` turns on edge for
/// the round, `n`/`no` stops, `help` asks for help. Other words are ignored.
pub fn parse_reply(line: &str) -> Reply {
    let line = line.to_lowercase();
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.contains(&"help") {
        return Reply::Help;
    }
    if tokens.iter().any(|t| matches!(*t, "n" | "no")) {
        return Reply::Stop;
    }

    let extra_modifier = tokens
        .iter()
        .filter_map(|t| t.parse::<i32>().ok())
        .fold(0i32, i32::saturating_add);
    let edge = tokens.iter().any(|t| matches!(*t, "e" | "edge"));
    Reply::Continue(RoundInput::new(extra_modifier, edge))
}

/// Ask whether to continue until the player gives a usable answer.
///
/// End of input counts as stopping.
pub fn ask<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> io::Result<Option<RoundInput>> {
    let mut line = String::new();
    loop {
        write!(out, "\nContinue? (help for more) [Y]: ")?;
        out.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        writeln!(out)?;

        match parse_reply(&line) {
            Reply::Help => writeln!(out, "{HELP}")?,
            Reply::Stop => return Ok(None),
            Reply::Continue(input) => return Ok(Some(input)),
        }
    }
}
