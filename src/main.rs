use clap::Parser;
use std::process::ExitCode;

use lint_staged::Flags;

#[tokio::main]
async fn main() -> ExitCode {
    let flags = Flags::parse();
    lint_staged::cli::run(flags).await.into()
}
