/// User feed loader tests: URL construction, string keys, and the fatal
/// malformed-document path.
use presence_analyzer::errors::AppError;
use presence_analyzer::models::directory;

mod common;

#[test]
fn test_read_directory_builds_avatar_urls() {
    let dir = directory::read_directory(common::SAMPLE_XML).expect("parse feed");
    assert_eq!(dir.len(), 2);

    let entry = &dir["10"];
    assert_eq!(entry.name, "Maja K.");
    assert_eq!(
        entry.avatar_url,
        "https://intranet.example.com:443/api/images/users/10"
    );
}

#[test]
fn test_read_directory_keys_are_raw_id_strings() {
    let dir = directory::read_directory(common::SAMPLE_XML).expect("parse feed");
    assert!(dir.contains_key("10"));
    assert!(dir.contains_key("11"));
    // Lookup happens by stringified id, never by integer.
    assert!(!dir.contains_key("012"));
}

#[test]
fn test_read_directory_empty_users_section() {
    let xml = r#"<intranet>
  <server><protocol>http</protocol><host>localhost</host><port>80</port></server>
  <users></users>
</intranet>"#;
    let dir = directory::read_directory(xml).expect("parse feed");
    assert!(dir.is_empty());
}

#[test]
fn test_read_directory_missing_server_section_fails() {
    let xml = r#"<intranet>
  <users>
    <user id="10"><name>Maja K.</name><avatar>/api/images/users/10</avatar></user>
  </users>
</intranet>"#;
    let result = directory::read_directory(xml);
    assert!(matches!(result, Err(AppError::Feed(_))));
}

#[test]
fn test_read_directory_missing_user_field_fails() {
    let xml = r#"<intranet>
  <server><protocol>http</protocol><host>localhost</host><port>80</port></server>
  <users>
    <user id="10"><avatar>/api/images/users/10</avatar></user>
  </users>
</intranet>"#;
    let result = directory::read_directory(xml);
    assert!(matches!(result, Err(AppError::Feed(_))));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let (dir, _config) = common::setup();
    let result = directory::load(&dir.path().join("missing.xml"));
    assert!(matches!(result, Err(AppError::Io(_))));
}
