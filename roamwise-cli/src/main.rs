//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use roamwise_cli::CliError;

fn main() {
    if let Err(err) = roamwise_cli::init_logging() {
        fail(&err);
    }
    match roamwise_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => fail(&err),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported on stderr before exiting"
)]
fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("roamwise: {err}");
    std::process::exit(1);
}
