use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};

use crate::soundbank::Soundbank;

/// Print the per-chunk summary of the bank to stdout.
pub fn print_info(bank: &Soundbank) -> Result<()> {
    let mut stdout = BufWriter::new(io::stdout().lock());
    write!(stdout, "{}", bank).context("Failed to write to stdout")?;

    stdout.flush().context("Failed to flush stdout")
}
