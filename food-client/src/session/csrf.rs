//! CSRF token extraction
//!
//! The backend renders its token into every page as
//! `<meta name="csrf-token" content="...">`; mutations must echo it back in
//! the `X-CSRF-Token` header.

use regex::Regex;
use std::sync::LazyLock;

/// Header carrying the token on mutations
pub const CSRF_HEADER: &str = "X-CSRF-Token";

static META_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("meta tag pattern"));

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\b([a-z-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("attribute pattern")
});

/// Token from the first `csrf-token` meta tag of `html`.
///
/// Attribute order and quoting do not matter. Character references in
/// `content` are decoded (`html/template` writes `+` as `&#43;`). A tag with
/// an empty `content` counts as missing.
pub fn extract_csrf_token(html: &str) -> Option<String> {
    META_TAG.find_iter(html).find_map(|tag| {
        let mut name = None;
        let mut content = None;
        for caps in ATTRIBUTE.captures_iter(tag.as_str()) {
            let value = caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str());
            match caps[1].to_ascii_lowercase().as_str() {
                "name" => name = value,
                "content" => content = value,
                _ => {}
            }
        }
        match (name, content) {
            (Some(name), Some(content)) if name.eq_ignore_ascii_case("csrf-token") => {
                let token = html_escape::decode_html_entities(content.trim());
                (!token.is_empty()).then(|| token.into_owned())
            }
            _ => None,
        }
    })
}
