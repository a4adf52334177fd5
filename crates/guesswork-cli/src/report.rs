//! Rendering of search transcripts and outcomes.

use std::io::Write;

use serde::Serialize;

use guesswork::{Guess, Resolution, SearchOutcome};

use crate::config::RangeConfig;
use crate::error::CliResult;

/// JSON document emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub low: i64,
    pub high: i64,
    #[serde(flatten)]
    pub outcome: &'a SearchOutcome,
}

impl<'a> Report<'a> {
    pub fn new(range: RangeConfig, outcome: &'a SearchOutcome) -> Self {
        Self {
            low: range.low,
            high: range.high,
            outcome,
        }
    }
}

/// Line shown when a guess is presented.
pub fn guess_line(guess: &Guess) -> String {
    format!("Our guess is: {}", guess.value)
}

/// Replay every recorded step as the interactive session would have shown it.
pub fn write_steps<W: Write>(out: &mut W, outcome: &SearchOutcome) -> CliResult<()> {
    for step in &outcome.steps {
        writeln!(out, "{}", guess_line(&step.guess))?;
        writeln!(out, "Enter reply: {}", step.reply)?;
    }
    Ok(())
}

/// Final summary line.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &SearchOutcome) -> CliResult<()> {
    let how = match outcome.resolution {
        Resolution::Confirmed => "confirmed",
        Resolution::Narrowed => "narrowed",
    };
    let noun = if outcome.step_count() == 1 { "step" } else { "steps" };
    writeln!(
        out,
        "Found: {} ({how} after {} {noun})",
        outcome.value,
        outcome.step_count()
    )?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &Report<'_>) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
