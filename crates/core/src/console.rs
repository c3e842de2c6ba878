use std::io::{self, BufRead, StdinLock, Stderr, Stdout, Write};

/// Interactive input plus the output and error sinks of one run.
pub struct Console<R, O, E> {
    pub input: R,
    pub out: O,
    pub err: E,
}

impl<R: BufRead, O: Write, E: Write> Console<R, O, E> {
    pub fn new(input: R, out: O, err: E) -> Self {
        Self { input, out, err }
    }
}

impl Console<StdinLock<'static>, Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}
