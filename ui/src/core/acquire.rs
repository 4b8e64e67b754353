//! Payload acquisition: pull the `data` query parameter out of the page URL,
//! percent-decode it, and parse it as JSON.
//!
//! The input is static for the lifetime of the page, so there is no retry
//! path; every failure is terminal and surfaces as an error card.

use thiserror::Error;

use super::payload::RawPayload;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquisitionError {
    /// The `data` query parameter is absent or empty.
    #[error("no performance data was passed to this page")]
    MissingParameter,
    /// Percent-decoding produced invalid UTF-8.
    #[error("the performance data could not be decoded")]
    DecodeFailure,
    /// The decoded string is not valid JSON for the payload shape.
    #[error("the performance data could not be parsed: {0}")]
    MalformedJson(String),
}

/// Extract and decode the payload from a raw query string (with or without
/// the leading `?`).
pub fn acquire(query: &str) -> Result<RawPayload, AcquisitionError> {
    let encoded = find_param(query, "data").ok_or_else(|| {
        log::warn!("query string carries no data parameter");
        AcquisitionError::MissingParameter
    })?;

    // URLSearchParams treats '+' as a space; the bot percent-encodes spaces,
    // but hand-built links may not.
    let spaced = encoded.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map_err(|err| {
        log::warn!("data parameter is not valid percent-encoded UTF-8: {err}");
        AcquisitionError::DecodeFailure
    })?;

    serde_json::from_str(&decoded).map_err(|err| {
        log::warn!("data parameter is not valid payload JSON: {err}");
        AcquisitionError::MalformedJson(err.to_string())
    })
}

/// Read the payload from the current page URL.
///
/// Outside the browser (tests, server-side rendering) there is no location to
/// inspect, which is indistinguishable from a link without data.
pub fn current_location() -> Result<RawPayload, AcquisitionError> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        acquire(&search)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(AcquisitionError::MissingParameter)
    }
}

/// Return the raw (still percent-encoded) value of `key`, if present and
/// non-empty.
fn find_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    let trimmed = query.strip_prefix('?').unwrap_or(query);
    trimmed
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
