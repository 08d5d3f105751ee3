use serde::Deserialize;

/// Raw option values taken from the command line, before merging with the
/// config file. `None` means the flag was not given.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub user: Option<String>,
    pub plays_limit: Option<u64>,
    pub artists_limit: Option<u64>,
    pub file: Option<String>,
    pub config: Option<String>,
}

/// Fully resolved run options. Built once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Options {
    pub username: String,
    pub plays_limit: u64,
    pub artists_limit: u64,
    pub output_file: Option<String>,
    pub config_file: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artist {
    pub name: String,
    pub playcount: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibraryArtistsResponse {
    #[serde(rename = "@status")]
    pub status: String,
    pub artists: Option<ArtistsContainer>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistsContainer {
    #[serde(rename = "artist", default)]
    pub items: Vec<Artist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(rename = "@code")]
    pub code: u32,
    #[serde(rename = "$text")]
    pub message: String,
}
