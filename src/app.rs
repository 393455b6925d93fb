use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;
use thompson_grep::regex::{Matcher, Regex};

use crate::cli::Config;
use crate::explain::explain;
use crate::fs_walk::{PathError, collect_files};
use crate::repl::interactive;
use crate::search::{SearchOptions, process_input};

pub const EXIT_MATCH: i32 = 0;
pub const EXIT_NO_MATCH: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

const PROGRAM: &str = "thompson-grep";

/// Runs the command described by `cfg` and returns the exit status.
pub fn run(cfg: Config) -> Result<i32> {
    debug!("{cfg:?}");

    let Some(pattern) = cfg.pattern.as_deref() else {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut stderr = io::stderr();
        let diag = if cfg.explain { Some(&mut stderr) } else { None };
        interactive(stdin.lock(), &mut stdout, diag).context("interactive session failed")?;
        return Ok(EXIT_MATCH);
    };

    let re = Regex::new(pattern).with_context(|| format!("invalid pattern `{pattern}`"))?;
    if cfg.explain {
        explain(&re, &mut io::stderr())?;
    }

    let opts = SearchOptions {
        invert_match: cfg.invert_match,
        count: cfg.count,
    };
    let mut matcher = re.matcher();
    let mut stdout = io::stdout().lock();

    let status = if cfg.paths.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        let selected = process_input(&buffer, &mut matcher, None, opts, &mut stdout)?;
        exit_status(selected, false)
    } else {
        search_paths(
            &cfg.paths,
            cfg.recursive,
            &mut matcher,
            opts,
            &mut stdout,
            &mut io::stderr(),
        )?
    };

    stdout.flush()?;
    Ok(status)
}

/// Searches every file named by `paths`, writing selected lines to `out`.
/// Paths that cannot be searched get a diagnostic line on `diag` and turn
/// the exit status into [`EXIT_ERROR`], even when other files matched.
pub fn search_paths<W: Write, E: Write>(
    paths: &[PathBuf],
    recursive: bool,
    matcher: &mut Matcher<'_>,
    opts: SearchOptions,
    out: &mut W,
    diag: &mut E,
) -> io::Result<i32> {
    let walk = collect_files(paths, recursive);
    let mut failed = !walk.errors.is_empty();
    for err in &walk.errors {
        writeln!(diag, "{PROGRAM}: {err}")?;
    }

    let show_filename = recursive || walk.files.len() > 1;
    let mut selected = 0;

    for path in walk.files {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) => {
                writeln!(diag, "{PROGRAM}: {}", PathError::Io { path, source })?;
                failed = true;
                continue;
            }
        };
        let name = path.to_string_lossy();
        let filename = show_filename.then_some(&*name);
        selected += process_input(&content, matcher, filename, opts, out)?;
    }

    Ok(exit_status(selected, failed))
}

fn exit_status(selected: usize, failed: bool) -> i32 {
    if failed {
        EXIT_ERROR
    } else if selected > 0 {
        EXIT_MATCH
    } else {
        EXIT_NO_MATCH
    }
}
