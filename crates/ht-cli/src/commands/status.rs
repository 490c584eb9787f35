//! Status command for showing configuration and credential state.

use std::io::Write;

use anyhow::Result;

use crate::Config;
use crate::config::KeySource;

pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    writeln!(writer, "Hackatime client status")?;
    writeln!(writer, "API: {}", config.api_url)?;
    writeln!(writer, "Credentials: {}", config.credentials_path.display())?;

    match config.resolve_api_key() {
        Ok((_, KeySource::Config)) => writeln!(writer, "API key: set in configuration")?,
        Ok((_, KeySource::CredentialsFile)) => {
            writeln!(writer, "API key: found in credentials file")?;
        }
        Err(err) => writeln!(writer, "API key: missing ({err})")?,
    }

    if config.default_range.is_known() {
        writeln!(writer, "Default range: {}", config.default_range)?;
    } else {
        writeln!(
            writer,
            "Default range: {} (not a known preset, sent as-is)",
            config.default_range
        )?;
    }
    writeln!(writer, "Display limit: {} entries", config.max_items)?;
    writeln!(writer, "Percent basis: {}", config.percent_basis)?;
    Ok(())
}
