use anyhow::Result;
use clap::Parser;
use fairway_tui::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    fairway_tui::init_tracing(cli.one_shot);
    fairway_tui::run(cli).await
}
