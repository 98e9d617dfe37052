//! URL Utility Functions
//!
//! String-level URL absolutization used by the postprocessor and by metadata assembly.
//! Resolution never fails from the caller's point of view: anything that cannot be resolved is
//! handed back unchanged.

use url::Url;

use crate::error::{Error, Result};

/// Make `url` absolute against `site_url`.
///
/// Protocol-relative URLs take the scheme of the site (`https:` when the site is served over
/// https, `http:` otherwise). URLs that already start with `http` are left alone, as are
/// absolute URLs with another scheme such as `mailto:` or `data:`. Everything else is resolved
/// against the site URL. Empty input stays empty.
///
/// # Examples
///
/// ```
/// use rs_crux::url_utils::absolutize;
///
/// assert_eq!(absolutize("//cdn/x.png", "https://a.com/"), "https://cdn/x.png");
/// assert_eq!(absolutize("/img/a.jpg", "https://a.com/news/1"), "https://a.com/img/a.jpg");
/// assert_eq!(absolutize("mailto:x@y", "https://a.com/"), "mailto:x@y");
/// ```
#[must_use]
pub fn absolutize(url: &str, site_url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    if url.starts_with("//") {
        let scheme = if site_url.starts_with("https:") { "https:" } else { "http:" };
        return format!("{scheme}{url}");
    }

    if url.starts_with('/') || !url.starts_with("http") {
        return resolve(url, site_url).unwrap_or_else(|_| url.to_string());
    }

    url.to_string()
}

/// Resolve a relative URL against the site URL.
///
/// Tries, in order: keeping absolute non-http URLs as they are, standard resolution against the
/// parsed site URL, and composing `scheme://host[:port]/url` by hand.
///
/// # Errors
///
/// Returns [`Error::MalformedUrl`] when none of the strategies produce a URL.
pub fn resolve(relative: &str, site_url: &str) -> Result<String> {
    if let Ok(parsed) = Url::parse(relative) {
        if !parsed.scheme().starts_with("http") {
            return Ok(relative.to_string());
        }
    }

    let base = Url::parse(site_url).map_err(|e| Error::MalformedUrl(format!("{site_url}: {e}")))?;

    if let Ok(joined) = base.join(relative) {
        return Ok(joined.to_string());
    }

    let host = base
        .host_str()
        .ok_or_else(|| Error::MalformedUrl(format!("{site_url}: no host")))?;
    let port = base.port().map(|p| format!(":{p}")).unwrap_or_default();
    let separator = if relative.starts_with('/') { "" } else { "/" };
    let composed = format!("{}://{host}{port}{separator}{relative}", base.scheme());

    Url::parse(&composed)
        .map(|u| u.to_string())
        .map_err(|e| Error::MalformedUrl(format!("{relative}: {e}")))
}

/// Make every URL inside a `srcset` value absolute.
///
/// Each comma-separated candidate is trimmed; its URL part is absolutized and its width or
/// density descriptor is kept. Candidates are re-joined with `", "`.
///
/// ```
/// use rs_crux::url_utils::absolutize_srcset;
///
/// assert_eq!(
///     absolutize_srcset("/a.jpg 1x, /b.jpg 2x", "https://site.com/post"),
///     "https://site.com/a.jpg 1x, https://site.com/b.jpg 2x"
/// );
/// ```
#[must_use]
pub fn absolutize_srcset(value: &str, site_url: &str) -> String {
    value
        .split(',')
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .map(|candidate| {
            let mut parts = candidate.splitn(2, char::is_whitespace);
            let url = absolutize(parts.next().unwrap_or_default(), site_url);
            match parts.next().map(str::trim) {
                Some(descriptor) if !descriptor.is_empty() => format!("{url} {descriptor}"),
                _ => url,
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Count the characters of `s` that are letters.
#[must_use]
pub fn count_letters(s: &str) -> usize {
    s.chars().filter(|c| c.is_alphabetic()).count()
}
