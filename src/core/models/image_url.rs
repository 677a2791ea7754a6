use crate::core::models::ProbeFailure;
use crate::global_constants::{IMAGE_MEDIA_TYPE_PREFIX, SYNTHETIC_SUFFIX_PARAM};

/// Derives the filename suffix for an image content type, e.g. `image/png` gives `.png`.
///
/// Returns `None` when the content type is not an image media type. Parameters after
/// `;` are ignored so `image/jpeg; charset=binary` still yields `.jpeg`.
pub fn image_suffix_from_content_type(content_type: &str) -> Option<String> {
    let trimmed = content_type.trim();
    let prefix_len = IMAGE_MEDIA_TYPE_PREFIX.len();

    if trimmed.len() < prefix_len
        || !trimmed.is_char_boundary(prefix_len)
        || !trimmed[..prefix_len].eq_ignore_ascii_case(IMAGE_MEDIA_TYPE_PREFIX)
    {
        return None;
    }

    let subtype = trimmed[prefix_len..]
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();

    if subtype.is_empty() {
        return None;
    }

    Some(format!(".{}", subtype))
}

/// Makes sure `url` ends with `suffix` so suffix-sniffing clients recognise the image.
///
/// Either the whole URL or its path (before any query) may carry the suffix. The
/// comparison runs on the unescaped, lowercased text; the returned URL keeps its
/// original escaping. `.jpg` and `.jpeg` satisfy each other.
pub fn ensure_suffix(url: &str, suffix: &str) -> Result<String, ProbeFailure> {
    let lower_suffix = suffix.to_lowercase();
    let lower_url = unescape_for_comparison(url)?.to_lowercase();
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let lower_path = unescape_for_comparison(path)?.to_lowercase();

    if url_satisfies_suffix(&lower_url, &lower_suffix)
        || url_satisfies_suffix(&lower_path, &lower_suffix)
    {
        return Ok(url.to_string());
    }

    let separator = if url.contains('?') { '&' } else { '?' };
    Ok(format!(
        "{}{}{}{}",
        url, separator, SYNTHETIC_SUFFIX_PARAM, suffix
    ))
}

fn url_satisfies_suffix(lower_url: &str, lower_suffix: &str) -> bool {
    match lower_suffix {
        ".jpeg" | ".jpg" => lower_url.ends_with(".jpg") || lower_url.ends_with(".jpeg"),
        _ => lower_url.ends_with(lower_suffix),
    }
}

// query-style unescape: '+' is a space
fn unescape_for_comparison(url: &str) -> Result<String, ProbeFailure> {
    if has_malformed_escape(url) {
        return Err(ProbeFailure::Normalization {
            url: url.to_string(),
            reason: "malformed percent escape".to_string(),
        });
    }

    let plus_as_space = url.replace('+', " ");
    urlencoding::decode(&plus_as_space)
        .map(|decoded| decoded.into_owned())
        .map_err(|error| ProbeFailure::Normalization {
            url: url.to_string(),
            reason: error.to_string(),
        })
}

/// Every `%` must be followed by two hex digits; `urlencoding` passes bad escapes through.
fn has_malformed_escape(url: &str) -> bool {
    let bytes = url.as_bytes();
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b'%' {
            let escaped = bytes.get(index + 1..index + 3);
            match escaped {
                Some([high, low]) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit() => {
                    index += 3;
                    continue;
                }
                _ => return true,
            }
        }
        index += 1;
    }

    false
}
