use std::io::{self, BufRead, Write};

use log::debug;
use thompson_grep::regex::{Error, Regex};

use crate::explain::explain;

const PATTERN_PROMPT: &str = "Enter Regex: ";
const INPUT_PROMPT: &str = "Enter String to match: ";

/// Prompts for a pattern, then for a string to match it against, until
/// `input` runs out. A bad pattern is reported and the loop moves on to the
/// next one.
pub fn interactive<R: BufRead, W: Write, E: Write>(
    input: R,
    out: &mut W,
    mut diag: Option<&mut E>,
) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(out, "{PATTERN_PROMPT}")?;
        out.flush()?;
        let Some(pattern) = lines.next().transpose()? else {
            writeln!(out)?;
            return Ok(());
        };

        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(Error::Syntax(err)) => {
                writeln!(out, "invalid regex: {err}")?;
                continue;
            }
            Err(Error::Build(err)) => {
                writeln!(out, "error while building nfa: {err}")?;
                continue;
            }
        };
        debug!("compiled {re} into {} states", re.nfa().len());
        if let Some(diag) = diag.as_deref_mut() {
            explain(&re, diag)?;
        }

        write!(out, "{INPUT_PROMPT}")?;
        out.flush()?;
        let Some(text) = lines.next().transpose()? else {
            writeln!(out)?;
            return Ok(());
        };

        if re.is_match(&text) {
            writeln!(out, "match found!")?;
        } else {
            writeln!(out, "no match found!")?;
        }
    }
}
