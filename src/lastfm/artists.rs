use reqwest::Client;

use crate::{
    error::LastFmError,
    types::{Artist, LibraryArtistsResponse},
};

use super::{API_KEY, API_URL};

/// Retrieves the artists in a user's library from the Last.fm web service.
///
/// Issues a single `library.getartists` GET request and parses the XML
/// response into a list of artists. The service returns the library sorted
/// by play count in descending order; that order is preserved here.
///
/// # Arguments
///
/// * `user` - Last.fm username whose library is fetched
/// * `limit` - Maximum number of artists to request in this call
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Artist>)` - Artists in document order, possibly empty
/// - `Err(LastFmError)` - Transport failure, non-2xx response, non-ok API
///   status, or an unparseable body
///
/// # Example
///
/// ```
/// let artists = get_library_artists("alice", 9999).await?;
/// println!("{} artists in library", artists.len());
/// ```
pub async fn get_library_artists(user: &str, limit: u64) -> Result<Vec<Artist>, LastFmError> {
    let api_url = format!(
        "{uri}/?method=library.getartists&api_key={key}&user={user}&limit={limit}",
        uri = API_URL,
        key = API_KEY,
        user = urlencoding::encode(user),
        limit = limit
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .send()
        .await
        .map_err(|e| LastFmError::Http(e.to_string()))?
        .error_for_status()
        .map_err(|e| LastFmError::Http(e.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|e| LastFmError::Http(e.to_string()))?;

    parse_library_artists(&body)
}

/// Parses a `library.getartists` XML response body.
///
/// Validates the `status` attribute on the response envelope before looking
/// at the artist list. A non-ok status is surfaced as [`LastFmError::Api`]
/// with the code and message from the service's `<error>` element when one
/// is present. An envelope without an artist list parses to an empty vec.
pub fn parse_library_artists(xml: &str) -> Result<Vec<Artist>, LastFmError> {
    let response: LibraryArtistsResponse =
        quick_xml::de::from_str(xml).map_err(|e| LastFmError::Parse(e.to_string()))?;

    if response.status != "ok" {
        return Err(match response.error {
            Some(error) => LastFmError::Api {
                code: error.code,
                message: error.message,
            },
            None => LastFmError::Api {
                code: 0,
                message: format!("response status \"{}\"", response.status),
            },
        });
    }

    Ok(response
        .artists
        .map(|artists| artists.items)
        .unwrap_or_default())
}
