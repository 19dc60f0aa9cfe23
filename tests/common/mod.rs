//! Shared fixtures for the integration tests.
//!
//! `setup()` writes a small presence CSV and user feed XML into a temp
//! directory and returns a config pointing at them, mirroring how the
//! server reads both files on every query.

use std::fs;

use tempfile::TempDir;

use presence_analyzer::config::AppConfig;

/// Presence rows for users 10, 11 and 14, wrapped in the header/footer
/// lines and malformed rows the parser must tolerate. User 14 is missing
/// from the feed on purpose.
pub const SAMPLE_CSV: &str = "\
intranet presence export
10,2013-09-10,09:39:05,17:59:52
10,2013-09-11,09:19:52,16:07:37
10,2013-09-12,10:48:46,17:23:51
11,2013-09-12,10:18:36,16:41:25
11,2013-09-13,13:16:56,15:04:02
14,2013-09-09,08:00:00,16:00:00
not-a-user,2013-09-13,08:00:00,16:00:00
13,2013-13-99,08:00:00,16:00:00
13,2013-09-13,25:00:00,16:00:00
end of export
";

pub const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<intranet>
  <server>
    <protocol>https</protocol>
    <host>intranet.example.com</host>
    <port>443</port>
  </server>
  <users>
    <user id="10">
      <name>Maja K.</name>
      <avatar>/api/images/users/10</avatar>
    </user>
    <user id="11">
      <name>Piotr D.</name>
      <avatar>/api/images/users/11</avatar>
    </user>
  </users>
</intranet>
"#;

/// Write the fixtures into a temp dir and build a config pointing at them.
/// The TempDir must stay alive for as long as the config is used.
pub fn setup() -> (TempDir, AppConfig) {
    let dir = TempDir::new().expect("create temp dir");
    let data_csv = dir.path().join("sample_data.csv");
    let data_xml = dir.path().join("users.xml");
    fs::write(&data_csv, SAMPLE_CSV).expect("write csv fixture");
    fs::write(&data_xml, SAMPLE_XML).expect("write xml fixture");

    let config = AppConfig {
        data_csv,
        data_xml,
        bind_addr: "127.0.0.1:0".to_string(),
        feed_url: String::new(),
    };
    (dir, config)
}
