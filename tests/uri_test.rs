use spotfetch::uri::{UriType, resource_id, uri_type};

#[test]
fn test_resource_id_for_matching_kind() {
    assert_eq!(
        resource_id(UriType::Track, "spotify:track:1301WleyT98MSxVHPZCA6M"),
        Some("1301WleyT98MSxVHPZCA6M")
    );
    assert_eq!(resource_id(UriType::Artist, "spotify:artist:abc"), Some("abc"));
    assert_eq!(resource_id(UriType::Album, "spotify:album:xyz"), Some("xyz"));
}

#[test]
fn test_resource_id_mismatched_kind_yields_nothing() {
    // a mismatched kind must yield no match, not a wrong one
    assert_eq!(resource_id(UriType::Track, "spotify:artist:123"), None);
    assert_eq!(resource_id(UriType::Artist, "spotify:track:123"), None);
    assert_eq!(resource_id(UriType::Album, "spotify:track:123"), None);
}

#[test]
fn test_resource_id_nested_playlist_form() {
    let uri = "spotify:user:jamesbarnsley:playlist:52T6pUf9HLmVyfHWEe9Ldt";

    // both ids are extractable from the same address
    assert_eq!(
        resource_id(UriType::Playlist, uri),
        Some("52T6pUf9HLmVyfHWEe9Ldt")
    );
    assert_eq!(resource_id(UriType::User, uri), Some("jamesbarnsley"));
}

#[test]
fn test_resource_id_fails_closed_on_missing_markers() {
    // a short form without the playlist marker is not a playlist address
    assert_eq!(resource_id(UriType::Playlist, "spotify:playlist:p42"), None);
    assert_eq!(resource_id(UriType::Playlist, "spotify:user:u:p42"), None);

    // truncated or empty addresses never match
    assert_eq!(resource_id(UriType::Track, "spotify:track"), None);
    assert_eq!(resource_id(UriType::Track, ""), None);
    assert_eq!(resource_id(UriType::User, "spotify:track:1"), None);
}

#[test]
fn test_resource_id_ignores_namespace() {
    // extraction is keyed on the segment markers, not the namespace
    assert_eq!(resource_id(UriType::Track, "local:track:9"), Some("9"));
}

#[test]
fn test_uri_type_recognizes_all_address_forms() {
    assert_eq!(uri_type("spotify:track:1"), Some(UriType::Track));
    assert_eq!(uri_type("spotify:artist:1"), Some(UriType::Artist));
    assert_eq!(uri_type("spotify:album:1"), Some(UriType::Album));
    assert_eq!(
        uri_type("spotify:user:u:playlist:p"),
        Some(UriType::Playlist)
    );
    assert_eq!(uri_type("spotify:user:u"), Some(UriType::User));
}

#[test]
fn test_uri_type_rejects_everything_else() {
    assert_eq!(uri_type(""), None);
    assert_eq!(uri_type("spotify"), None);
    assert_eq!(uri_type("spotify:radio:1"), None);
    assert_eq!(uri_type("mopidy:track:1"), None);
    assert_eq!(uri_type("spotify:user:u:playlist"), None);
    assert_eq!(uri_type("not a uri at all"), None);
}
