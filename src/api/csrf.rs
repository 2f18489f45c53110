use std::sync::Arc;

use parking_lot::Mutex;
use percent_encoding::percent_decode_str;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;

/// Cookie the server mirrors its anti-forgery token into.
const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Anti-forgery token source for mutating requests.
///
/// Lookup order mirrors the server's page contract: a `_csrf` meta token
/// captured from the app shell at bootstrap wins; otherwise the
/// `XSRF-TOKEN` cookie in the shared jar is used, percent-decoded.
pub struct CsrfTokenSource {
    jar: Arc<Jar>,
    base_url: Url,
    page_token: Mutex<Option<String>>,
}

impl CsrfTokenSource {
    pub fn new(jar: Arc<Jar>, base_url: Url) -> Self {
        Self {
            jar,
            base_url,
            page_token: Mutex::new(None),
        }
    }

    /// Record (or clear) the page-embedded token scraped at bootstrap.
    pub fn set_page_token(&self, token: Option<String>) {
        *self.page_token.lock() = token;
    }

    /// Current token: page token first, cookie fallback.
    pub fn token(&self) -> Option<String> {
        if let Some(token) = self.page_token.lock().clone() {
            return Some(token);
        }
        self.cookie_token()
    }

    fn cookie_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        let header = header.to_str().ok()?;
        for pair in header.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            let name = parts.next()?;
            let value = parts.next().unwrap_or("");
            if name == XSRF_COOKIE {
                return percent_decode_str(value)
                    .decode_utf8()
                    .ok()
                    .map(|v| v.into_owned());
            }
        }
        None
    }
}

/// Pull the `_csrf` meta token out of the app shell page, if present.
///
/// Looks for `<meta name="_csrf" content="...">` with either quote style
/// and either attribute order. A missing or malformed tag yields `None`,
/// which pushes lookup to the cookie fallback.
pub fn extract_meta_token(html: &str) -> Option<String> {
    for (start, _) in html.match_indices("<meta") {
        let rest = &html[start..];
        let end = rest.find('>')?;
        let tag = &rest[..end];
        if attr_value(tag, "name").as_deref() == Some("_csrf") {
            return attr_value(tag, "content");
        }
    }
    None
}

fn attr_value(tag: &str, attr: &str) -> Option<String> {
    for quote in ['"', '\''] {
        let needle = format!("{attr}={quote}");
        if let Some(pos) = tag.find(&needle) {
            let value = &tag[pos + needle.len()..];
            let close = value.find(quote)?;
            return Some(value[..close].to_string());
        }
    }
    None
}
