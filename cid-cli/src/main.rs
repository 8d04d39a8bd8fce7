//! CID CLI - Command line tool for the country indicators dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cid-cli",
    version,
    about = "Country indicators dataset and figure toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cid_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cid_cmd::run(cli.command).await
}
