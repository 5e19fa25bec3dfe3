//! CGD CLI - Command line tool for cleaning COVID-19 case data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cgd-cli",
    version,
    about = "COVID-19 geo dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cgd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cgd_cmd::run(cli.command)
}
