use std::io::{self, Write};

use thompson_grep::regex::Matcher;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub invert_match: bool,
    pub count: bool,
}

/// Writes the lines of `content` selected by `matcher` (or their count) to
/// `out` and returns how many were selected. A line is selected when the
/// whole line matches, or when it does not and `invert_match` is set.
pub fn process_input<W: Write>(
    content: &str,
    matcher: &mut Matcher<'_>,
    filename: Option<&str>,
    opts: SearchOptions,
    out: &mut W,
) -> io::Result<usize> {
    let prefix = filename.map(|f| format!("{f}:")).unwrap_or_default();

    let mut selected = 0;
    for line in content.lines() {
        if matcher.is_match(line) == opts.invert_match {
            continue;
        }
        selected += 1;
        if !opts.count {
            writeln!(out, "{prefix}{line}")?;
        }
    }

    if opts.count {
        writeln!(out, "{prefix}{selected}")?;
    }
    Ok(selected)
}
