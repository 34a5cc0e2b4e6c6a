//! Tomcat Manager endpoint selection and deploy URL construction.

use std::fmt;

use crate::archive::archive_base_name;

/// Version marker for servers that only expose the legacy manager API
pub const LEGACY_VERSION: &str = "6.x";

/// Manager API flavor, selected from the configured server version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagerApi {
    /// Tomcat 6: `/manager/deploy`
    Legacy,
    /// Tomcat 7 and later: `/manager/text/deploy`
    Text,
}

impl ManagerApi {
    /// Anything other than the exact legacy marker uses the text API.
    pub fn from_version(version: &str) -> Self {
        if version.trim() == LEGACY_VERSION {
            ManagerApi::Legacy
        } else {
            ManagerApi::Text
        }
    }

    #[inline]
    pub fn deploy_path(&self) -> &'static str {
        match self {
            ManagerApi::Legacy => "/manager/deploy",
            ManagerApi::Text => "/manager/text/deploy",
        }
    }
}

impl fmt::Display for ManagerApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.deploy_path())
    }
}

/// Build the manager URL that deploys `archive_path`.
///
/// The deployed path is taken from the archive's base name; `context` is
/// accepted for parity with the task inputs but does not change the URL.
/// No validation happens here, so malformed inputs give a malformed URL.
pub fn target_url_for_deploying_war(
    base_url: &str,
    archive_path: &str,
    _context: &str,
    version: &str,
) -> String {
    let api = ManagerApi::from_version(version);
    format!(
        "{}{}?path=/{}&update=true",
        base_url,
        api.deploy_path(),
        archive_base_name(archive_path)
    )
}
