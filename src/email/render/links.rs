//! URL detection inside already-escaped notes.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches `http(s)://` or bare `www.` URLs in escaped text.
///
/// After escaping, every `&` starts an entity. `&amp;` and `&#x27;` stay
/// part of a URL; `&lt;`, `&gt;` and `&quot;` end the match.
const URL_PATTERN: &str = r#"(?:https?://|www\.)(?:[^\s<>"&]|&amp;|&#x27;)+"#;

static URL_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(URL_PATTERN));

/// Returns the compiled URL pattern.
#[must_use]
pub(crate) fn url_regex() -> Option<&'static Regex> {
    URL_REGEX.as_ref().ok()
}

/// Wraps every URL in `escaped` in an anchor element.
///
/// The input must already be HTML-escaped. The matched text is used as the
/// visible label unchanged; bare `www.` matches get an `https://` prefix on
/// the link target only.
#[must_use]
pub fn linkify(escaped: &str) -> String {
    let Some(regex) = url_regex() else {
        return escaped.to_owned();
    };
    regex
        .replace_all(escaped, |caps: &Captures<'_>| {
            let url = caps.get(0).map_or("", |found| found.as_str());
            anchor(url)
        })
        .into_owned()
}

fn anchor(url: &str) -> String {
    if url.starts_with("http") {
        format!(r#"<a href="{url}" class="link-text">{url}</a>"#)
    } else {
        format!(r#"<a href="https://{url}" class="link-text">{url}</a>"#)
    }
}
