//! Entry point for the `kinmatch` command-line interface.
#![forbid(unsafe_code)]

use kinmatch_cli::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = kinmatch_cli::run() {
        report(&err);
        std::process::exit(1);
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report(err: &CliError) {
    eprintln!("kinmatch: {err}");
}
