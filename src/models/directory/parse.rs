use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::types::{UserDirectory, UserEntry};
use crate::errors::AppError;

/// Shape of the intranet feed document. Any missing section or field is a
/// fatal malformed-feed error; there is no row-by-row recovery here.
#[derive(Debug, Deserialize)]
struct IntranetDoc {
    server: Server,
    users: Users,
}

#[derive(Debug, Deserialize)]
struct Server {
    protocol: String,
    host: String,
    port: String,
}

#[derive(Debug, Deserialize)]
struct Users {
    #[serde(default, rename = "user")]
    entries: Vec<UserNode>,
}

#[derive(Debug, Deserialize)]
struct UserNode {
    #[serde(rename = "@id")]
    id: String,
    name: String,
    avatar: String,
}

/// Parses the feed document into a directory of display names and absolute
/// avatar URLs. Avatar paths in the feed are server-relative.
pub fn read_directory(xml: &str) -> Result<UserDirectory, AppError> {
    let doc: IntranetDoc = quick_xml::de::from_str(xml)?;
    let server_url = format!(
        "{}://{}:{}",
        doc.server.protocol, doc.server.host, doc.server.port
    );

    Ok(doc
        .users
        .entries
        .into_iter()
        .map(|user| {
            let entry = UserEntry {
                name: user.name,
                avatar_url: format!("{}{}", server_url, user.avatar),
            };
            (user.id, entry)
        })
        .collect())
}

/// Loads the user directory from the local XML copy of the intranet feed.
pub fn load(path: &Path) -> Result<UserDirectory, AppError> {
    let xml = fs::read_to_string(path)?;
    read_directory(&xml)
}
