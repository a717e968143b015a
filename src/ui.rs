use std::fmt;
use std::io::{BufRead, Write};

use anyhow::Result;

/// The user closed standard input mid-prompt. Propagates through every
/// interactive call site up to main, which turns it into a quiet exit.
#[derive(Debug)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Line-based console over any reader/writer pair, so the whole interactive
/// flow can be driven by a `Cursor` in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a full line of status or menu text.
    pub fn say(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one answer line. The
    /// trailing line break is stripped; interior whitespace is kept verbatim.
    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Err(Cancelled.into());
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Hand the captured output back, for assertions on printed menus.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Numbered-menu selection: keep prompting with `--> ` until the user
    /// enters an integer in [1, count]. Anything unparsable or out of range
    /// asks again; only cancellation breaks the loop.
    pub fn pick(&mut self, count: usize) -> Result<usize> {
        loop {
            let answer = self.prompt("--> ")?;
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(n),
                _ => continue,
            }
        }
    }
}
