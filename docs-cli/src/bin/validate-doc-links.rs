// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stderr: output failures are reported on stderr.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stderr, clippy::exit)]

use clap::Parser;
use docs_cli::{LinksArgs, logging, run_links};

fn main() {
    let args = LinksArgs::parse();
    logging::init_tracing(args.common.verbose);

    let mut stdout = std::io::stdout().lock();
    match run_links(&args, &mut stdout) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
