mod app;
mod cli;
mod explain;
mod fs_walk;
mod repl;
mod search;

use std::process;

// Usage: thompson-grep [-e <pattern>] [paths...]
fn main() {
    env_logger::init();

    let cfg = cli::parse_args();
    match app::run(cfg) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(app::EXIT_ERROR);
        }
    }
}
