//! Browser save-as plumbing for binary downloads.
//!
//! A downloaded payload is handed to the browser through a transient object
//! URL attached to a detached anchor element. The object URL is a real
//! browser-level resource: it is revoked on every path once created, so
//! repeated downloads do not accumulate live handles.

use std::sync::LazyLock;

use regex::Regex;
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::core::error::FetchError;
use crate::utils::dom;

static FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename="?([^";]+)"?"#).expect("filename pattern is valid"));

/// Extract the suggested filename from a `content-disposition` header.
///
/// Handles both quoted and unquoted `filename=` parameters and
/// percent-decodes the result. Falls back to `fallback` when the header is
/// absent or carries no filename.
pub fn filename_from_disposition(header: Option<&str>, fallback: &str) -> String {
    header
        .and_then(|value| FILENAME_RE.captures(value))
        .and_then(|captures| captures.get(1))
        .map(|m| percent_decode(m.as_str()))
        .unwrap_or_else(|| fallback.to_string())
}

/// Decode %XX escapes; malformed escapes are kept verbatim.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(hi) = bytes.get(i + 1).copied().and_then(hex_val)
            && let Some(lo) = bytes.get(i + 2).copied().and_then(hex_val)
        {
            out.push(hi * 16 + lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).unwrap_or_else(|_| input.to_string())
}

fn hex_val(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Trigger a save-as interaction for `blob` under `filename`.
///
/// Scoped acquisition: the object URL is created, the anchor click is
/// attempted, and the URL is revoked before the outcome is returned —
/// including when the click plumbing fails.
pub fn save_blob(blob: &Blob, filename: &str) -> Result<(), FetchError> {
    let url = Url::create_object_url_with_blob(blob).map_err(|_| FetchError::SaveFailed)?;

    let result = click_through_anchor(&url, filename);

    if Url::revoke_object_url(&url).is_err() {
        // Revocation is cleanup; the download outcome stands either way.
        dom::warn("failed to revoke download object URL");
    }

    result
}

/// Create a detached anchor pointing at `url`, click it, remove it.
fn click_through_anchor(url: &str, filename: &str) -> Result<(), FetchError> {
    let document = dom::document().ok_or(FetchError::SaveFailed)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| FetchError::SaveFailed)?
        .dyn_into()
        .map_err(|_| FetchError::SaveFailed)?;
    anchor.set_href(url);
    anchor.set_download(filename);

    let body = document.body().ok_or(FetchError::SaveFailed)?;
    body.append_child(&anchor)
        .map_err(|_| FetchError::SaveFailed)?;
    anchor.click();
    anchor.remove();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_filename() {
        assert_eq!(
            filename_from_disposition(Some(r#"attachment; filename="custom.zip""#), "pack1"),
            "custom.zip"
        );
    }

    #[test]
    fn test_unquoted_filename() {
        assert_eq!(
            filename_from_disposition(Some("attachment; filename=custom.zip"), "pack1"),
            "custom.zip"
        );
    }

    #[test]
    fn test_missing_header_falls_back_to_project_name() {
        assert_eq!(filename_from_disposition(None, "pack1"), "pack1");
    }

    #[test]
    fn test_header_without_filename_falls_back() {
        assert_eq!(filename_from_disposition(Some("inline"), "pack1"), "pack1");
    }

    #[test]
    fn test_percent_encoded_filename_is_decoded() {
        assert_eq!(
            filename_from_disposition(Some(r#"attachment; filename="My%20Pack.zip""#), "pack1"),
            "My Pack.zip"
        );
    }

    #[test]
    fn test_malformed_percent_escape_kept_verbatim() {
        assert_eq!(percent_decode("bad%2"), "bad%2");
        assert_eq!(percent_decode("bad%zz"), "bad%zz");
    }
}
