use clap::Parser;
use emr_user_domain::cli::{self, Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => cli::check::run(args),
    }
}
