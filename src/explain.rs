use std::io::{self, Write};

use thompson_grep::regex::Regex;
use thompson_grep::regex::ast::postfix_string;

/// Dumps the postfix stream and the state listing of a compiled pattern.
pub fn explain<W: Write + ?Sized>(re: &Regex, out: &mut W) -> io::Result<()> {
    writeln!(out, "postfix: {}", postfix_string(re.postfix()))?;
    write!(out, "{}", re.nfa())
}
