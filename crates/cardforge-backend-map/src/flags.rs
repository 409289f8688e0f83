//! Flag image download.

use std::time::Duration;

use crate::error::MapError;

const FLAG_CDN: &str = "https://flagcdn.com/w160";
const TIMEOUT: Duration = Duration::from_secs(10);

/// Returns the flag URL for a two-letter ISO code.
pub fn flag_url(iso_a2: &str) -> String {
    format!("{}/{}.png", FLAG_CDN, iso_a2.to_lowercase())
}

/// Downloads a region's flag as PNG bytes.
///
/// Callers decide how to handle failure; decks degrade to a flagless card
/// and report the error as a warning.
pub fn fetch_flag(iso_a2: &str) -> Result<Vec<u8>, MapError> {
    let url = flag_url(iso_a2);
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(|e| MapError::FlagFetch(e.to_string()))?;
    let response = client
        .get(&url)
        .send()
        .map_err(|e| MapError::FlagFetch(format!("{}: {}", url, e)))?;
    if !response.status().is_success() {
        return Err(MapError::FlagFetch(format!(
            "{}: HTTP {}",
            url,
            response.status()
        )));
    }
    let bytes = response
        .bytes()
        .map_err(|e| MapError::FlagFetch(format!("{}: {}", url, e)))?;
    Ok(bytes.to_vec())
}
