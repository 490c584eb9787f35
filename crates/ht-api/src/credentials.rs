//! API key discovery from the WakaTime configuration file.
//!
//! The key lives in `~/.wakatime.cfg` as a line of the form `api_key = <value>`.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Pre-compiled regex for the `api_key = <value>` line.
static API_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*api_key[ \t]*=[ \t]*(.+?)[ \t\r]*$").unwrap());

/// File name of the WakaTime configuration in the home directory.
pub const CREDENTIALS_FILE_NAME: &str = ".wakatime.cfg";

/// Credential lookup errors.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The configuration file does not exist.
    #[error("the file {} was not found", path.display())]
    NotFound { path: PathBuf },
    /// The configuration file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration file has no `api_key` entry.
    #[error("API key not found in {}", path.display())]
    MissingKey { path: PathBuf },
}

/// Returns `~/.wakatime.cfg`, if the home directory is known.
pub fn default_credentials_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CREDENTIALS_FILE_NAME))
}

/// Extracts the first non-empty `api_key` value from configuration text.
pub fn parse_api_key(content: &str) -> Option<String> {
    API_KEY_RE
        .captures_iter(content)
        .map(|caps| caps[1].trim().to_string())
        .find(|key| !key.is_empty())
}

/// Reads the API key from a WakaTime configuration file.
pub fn load_api_key(path: &Path) -> Result<String, CredentialError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CredentialError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(CredentialError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    parse_api_key(&content).ok_or_else(|| CredentialError::MissingKey {
        path: path.to_path_buf(),
    })
}
