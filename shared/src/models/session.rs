//! Session Model

use serde::{Deserialize, Serialize};

use super::Role;

/// Server-side session as reported by `GET /api/session`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl SessionInfo {
    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.role.as_ref() == Some(role)
    }
}
