use lastfm_artists::types::Artist;
use lastfm_artists::utils::*;

// Helper function to create a test artist
fn create_test_artist(name: &str, playcount: u64) -> Artist {
    Artist {
        name: name.to_string(),
        playcount,
    }
}

#[test]
fn test_filter_by_plays_keeps_leading_run() {
    let artists = vec![
        create_test_artist("Artist1", 50),
        create_test_artist("Artist2", 30),
        create_test_artist("Artist3", 5),
    ];

    let qualified = filter_by_plays(artists, 10);

    assert_eq!(qualified.len(), 2);
    assert_eq!(qualified[0].name, "Artist1");
    assert_eq!(qualified[1].name, "Artist2");
}

#[test]
fn test_filter_by_plays_keeps_artist_at_exact_limit() {
    let artists = vec![
        create_test_artist("Artist1", 10),
        create_test_artist("Artist2", 9),
    ];

    let qualified = filter_by_plays(artists, 10);

    // The cut is strictly-below, an exact match stays in
    assert_eq!(qualified.len(), 1);
    assert_eq!(qualified[0].name, "Artist1");
}

#[test]
fn test_filter_by_plays_stops_at_first_below_limit() {
    // Unsorted input: the high-count artist after the cut is not recovered
    let artists = vec![
        create_test_artist("Artist1", 50),
        create_test_artist("Artist2", 5),
        create_test_artist("Artist3", 30),
    ];

    let qualified = filter_by_plays(artists, 10);

    assert_eq!(qualified.len(), 1);
    assert_eq!(qualified[0].name, "Artist1");
}

#[test]
fn test_filter_by_plays_empty_input() {
    let qualified = filter_by_plays(Vec::new(), 10);
    assert!(qualified.is_empty());
}

#[test]
fn test_filter_by_plays_none_qualify() {
    let artists = vec![
        create_test_artist("Artist1", 5),
        create_test_artist("Artist2", 3),
    ];

    let qualified = filter_by_plays(artists, 10);
    assert!(qualified.is_empty());
}

#[test]
fn test_format_artist_list() {
    let artists = vec![
        create_test_artist("Artist1", 50),
        create_test_artist("Artist2", 30),
    ];

    assert_eq!(format_artist_list(&artists), "Artist1, Artist2");
}

#[test]
fn test_format_artist_list_single_artist() {
    let artists = vec![create_test_artist("Artist1", 50)];
    assert_eq!(format_artist_list(&artists), "Artist1");
}

#[test]
fn test_format_artist_list_empty() {
    assert_eq!(format_artist_list(&[]), "");
}

#[test]
fn test_format_artist_list_is_pure() {
    let artists = vec![
        create_test_artist("Artist1", 50),
        create_test_artist("Artist2", 30),
        create_test_artist("Artist3", 20),
    ];

    // Same input twice yields identical output, no hidden state
    let first = format_artist_list(&artists);
    let second = format_artist_list(&artists);
    assert_eq!(first, second);
}
