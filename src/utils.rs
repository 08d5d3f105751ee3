use crate::types::Artist;

/// Keeps the leading run of artists with at least `plays_limit` plays.
///
/// The service returns the library sorted by play count descending, so
/// iteration stops at the first artist below the limit instead of scanning
/// the rest. An artist whose count later rises above the limit again would
/// not be recovered; the input order is trusted.
pub fn filter_by_plays(artists: Vec<Artist>, plays_limit: u64) -> Vec<Artist> {
    artists
        .into_iter()
        .take_while(|artist| artist.playcount >= plays_limit)
        .collect()
}

pub fn format_artist_list(artists: &[Artist]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
