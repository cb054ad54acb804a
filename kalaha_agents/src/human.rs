use std::io::{BufRead, Write};

use anyhow::Context;
use kalaha::Board;

use crate::Agent;

/// Hands the move decision to a person on the other end of a reader/writer
/// pair, usually a terminal.
///
/// Cup numbers are entered 1-based, counted from the mover's own leftmost
/// cup, and are mapped to the absolute pit index. Non-numeric or out-of-range
/// input is re-requested. Picking an own cup that happens to be empty is not
/// filtered here; the rules engine rejects it and the judge re-asks.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn choose_move(&mut self, board: &Board) -> anyhow::Result<usize> {
        let mover = board.current_player();
        let cups = board.cups_per_player();
        loop {
            write!(self.output, "{}, choose a cup (1-{}): ", mover, cups)?;
            self.output.flush()?;

            let mut line = String::new();
            let num_bytes_read = self
                .input
                .read_line(&mut line)
                .context("could not read the next move")?;
            if num_bytes_read == 0 {
                anyhow::bail!("input closed while waiting for {}", mover);
            }
            match line.trim().parse::<usize>() {
                Ok(cup_number) if (1..=cups).contains(&cup_number) => {
                    return Ok(board.cups(mover).start + cup_number - 1);
                }
                _ => {
                    writeln!(self.output, "Pick a number between 1 and {}", cups)?;
                }
            }
        }
    }
}
