// food-client/src/session/jar.rs
// Cookie jar that can be written to disk between runs

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use reqwest::Url;
use reqwest::cookie::CookieStore;
use reqwest::header::HeaderValue;

/// Session cookies of a single backend.
///
/// The backend is one host, so domain and path scoping are not tracked:
/// every stored cookie is sent on every request.
#[derive(Debug, Default)]
pub struct SessionJar {
    cookies: RwLock<BTreeMap<String, String>>,
    dirty: AtomicBool,
}

impl SessionJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar pre-filled from a stored session
    pub fn from_cookies(cookies: BTreeMap<String, String>) -> Self {
        Self {
            cookies: RwLock::new(cookies),
            dirty: AtomicBool::new(false),
        }
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.cookies.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies.read().get(name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.read().is_empty()
    }

    pub fn clear(&self) {
        let mut cookies = self.cookies.write();
        if !cookies.is_empty() {
            cookies.clear();
            self.dirty.store(true, Ordering::Release);
        }
    }

    /// Whether cookies changed since the last call
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    /// Apply one `Set-Cookie` header value
    pub fn apply_set_cookie(&self, header: &str) {
        let Some(parsed) = parse_set_cookie(header) else {
            tracing::debug!(header, "Ignoring malformed Set-Cookie");
            return;
        };

        let mut cookies = self.cookies.write();
        let changed = if parsed.expired {
            cookies.remove(&parsed.name).is_some()
        } else {
            cookies.insert(parsed.name, parsed.value.clone()).as_ref() != Some(&parsed.value)
        };
        if changed {
            self.dirty.store(true, Ordering::Release);
        }
    }
}

impl CookieStore for SessionJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, _url: &Url) {
        for header in cookie_headers {
            match header.to_str() {
                Ok(value) => self.apply_set_cookie(value),
                Err(_) => tracing::debug!("Ignoring non-ASCII Set-Cookie header"),
            }
        }
    }

    fn cookies(&self, _url: &Url) -> Option<HeaderValue> {
        let cookies = self.cookies.read();
        if cookies.is_empty() {
            return None;
        }
        let header = cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        HeaderValue::from_str(&header).ok()
    }
}

struct SetCookie {
    name: String,
    value: String,
    expired: bool,
}

fn parse_set_cookie(header: &str) -> Option<SetCookie> {
    let mut parts = header.split(';');
    let (name, value) = parts.next()?.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let mut max_age = None;
    let mut expires = None;
    for attribute in parts {
        let (key, val) = attribute.split_once('=').unwrap_or((attribute, ""));
        let key = key.trim();
        if key.eq_ignore_ascii_case("max-age") {
            // Max-Age=0 (or negative) deletes the cookie
            max_age = val.trim().parse::<i64>().ok().map(|age| age <= 0);
        } else if key.eq_ignore_ascii_case("expires") {
            expires = DateTime::parse_from_rfc2822(val.trim())
                .ok()
                .map(|at| at <= Utc::now());
        }
    }
    // Max-Age wins over Expires
    let expired = max_age.or(expires).unwrap_or(false);

    Some(SetCookie {
        name: name.to_string(),
        value: value.trim().trim_matches('"').to_string(),
        expired,
    })
}
