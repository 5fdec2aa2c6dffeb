//! Browser-like session state: cookies, CSRF token, and their storage

mod csrf;
mod jar;
mod storage;

pub use csrf::{CSRF_HEADER, extract_csrf_token};
pub use jar::SessionJar;
pub use storage::{SESSION_FILE, SessionState, SessionStorage};
