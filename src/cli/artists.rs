use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res, config, error,
    error::LastFmError,
    lastfm, success,
    types::{Artist, CliOverrides, Options},
    utils, warning,
};

/// Fetches the user's library artists and writes the filtered list.
///
/// An empty filtered list is a successful no-op: nothing is written and no
/// message is printed. Configuration and retrieval errors are reported but
/// end the run normally, so no artist list ever appears for a failed fetch.
pub async fn export_artists(cli: CliOverrides) {
    let options = match config::resolve(cli).await {
        Ok(options) => options,
        Err(e) => {
            warning!("{}", e);
            return;
        }
    };

    let artists = match fetch_artists(&options).await {
        Ok(artists) => artists,
        Err(e) => {
            warning!("Cannot fetch artists from Last.fm. Err: {}", e);
            return;
        }
    };

    let qualified = utils::filter_by_plays(artists, options.plays_limit);
    if qualified.is_empty() {
        return;
    }

    let list = utils::format_artist_list(&qualified);
    match write_output(&list, &options).await {
        Ok(()) => {
            if let Some(path) = &options.output_file {
                success!("Wrote {} artists to {}", qualified.len(), path);
            }
        }
        Err(e) => error!("Cannot write artist list. Err: {}", e),
    }
}

async fn fetch_artists(options: &Options) -> Result<Vec<Artist>, LastFmError> {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!(
        "Fetching library artists for {}...",
        options.username
    ));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result =
        lastfm::artists::get_library_artists(&options.username, options.artists_limit).await;
    pb.finish_and_clear();

    result
}

/// Overwrites the output file with the list (no trailing newline), or prints
/// the list to stdout followed by one.
async fn write_output(list: &str, options: &Options) -> Res<()> {
    match &options.output_file {
        Some(path) => async_fs::write(path, list).await?,
        None => println!("{}", list),
    }

    Ok(())
}
