use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use lastfm_artists::{cli, types::CliOverrides};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Last.fm user whose library is fetched (required here or in the config file)
    #[clap(short, long)]
    user: Option<String>,

    /// Minimum play count an artist needs to be included
    #[clap(short, long)]
    plays_limit: Option<u64>,

    /// Maximum number of artists requested from the API
    #[clap(short, long)]
    artists_limit: Option<u64>,

    /// Write the artist list to this file instead of stdout
    #[clap(short, long)]
    file: Option<String>,

    /// Path to an INI config file
    #[clap(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    cli::export_artists(CliOverrides {
        user: cli.user,
        plays_limit: cli.plays_limit,
        artists_limit: cli.artists_limit,
        file: cli.file,
        config: cli.config,
    })
    .await;
}
