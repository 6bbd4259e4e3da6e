//! Console table of the most frequent words

use std::io::{self, Write};

use crate::ranking::RankedEntry;

/// Write the top `top_n` entries as a tab-separated table
///
/// ```text
///
/// Top 50 most frequent words:
/// Rank	Word	Frequency
/// ----	----	--------
/// 1	the	3
/// ```
pub fn write_table<W: Write>(out: &mut W, ranked: &[RankedEntry], top_n: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Top {top_n} most frequent words:")?;
    writeln!(out, "Rank\tWord\tFrequency")?;
    writeln!(out, "----\t----\t--------")?;

    for entry in ranked.iter().take(top_n) {
        writeln!(out, "{}\t{}\t{}", entry.rank, entry.word, entry.count)?;
    }

    out.flush()
}

/// Print the table to stdout, ignoring write failures
///
/// A closed or broken stdout must not abort the run.
pub fn print_table(ranked: &[RankedEntry], top_n: usize) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = write_table(&mut out, ranked, top_n) {
        tracing::warn!(error = %e, "Failed to print frequency table");
    }
}
