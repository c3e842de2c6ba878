use crate::console::Console;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub const MAX_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Prompting { attempts: usize },
    Confirmed,
    Cancelled,
}

impl GateState {
    pub fn is_resolved(self) -> bool {
        !matches!(self, GateState::Prompting { .. })
    }

    /// Advances on one line of input, or on `None` when the read failed.
    /// Running out of attempts cancels.
    pub fn step(self, answer: Option<&str>, max_attempts: usize) -> GateState {
        let GateState::Prompting { attempts } = self else {
            return self;
        };
        match answer.and_then(parse_answer) {
            Some(true) => GateState::Confirmed,
            Some(false) => GateState::Cancelled,
            None if attempts + 1 >= max_attempts => GateState::Cancelled,
            None => GateState::Prompting {
                attempts: attempts + 1,
            },
        }
    }
}

fn parse_answer(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

pub fn confirm<R: BufRead, O: Write, E: Write>(
    console: &mut Console<R, O, E>,
) -> io::Result<bool> {
    confirm_with_limit(console, MAX_ATTEMPTS)
}

pub fn confirm_with_limit<R: BufRead, O: Write, E: Write>(
    console: &mut Console<R, O, E>,
    max_attempts: usize,
) -> io::Result<bool> {
    let mut state = GateState::Prompting { attempts: 0 };
    write!(console.out, "Confirm rename?(y/n): ")?;
    console.out.flush()?;

    while !state.is_resolved() {
        let answer = match read_answer(&mut console.input) {
            Ok(line) => Some(line),
            Err(err) => {
                warn!("confirmation read failed: {}", err);
                writeln!(console.err, "Bad confirmation scan: {err}")?;
                None
            }
        };
        debug!("Checking confirmation received");

        state = state.step(answer.as_deref(), max_attempts);
        if answer.as_deref().and_then(parse_answer).is_none() {
            let shown = answer.as_deref().map(str::trim).unwrap_or_default();
            write!(
                console.out,
                "Unrecognized value {shown}, please enter y or n: "
            )?;
            console.out.flush()?;
        }
    }

    Ok(state == GateState::Confirmed)
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no more input",
        ));
    }
    Ok(line)
}
