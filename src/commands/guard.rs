//! Administrator guard applied to every inbound interaction before dispatch

use serenity::model::permissions::Permissions;

pub const NOT_ADMINISTRATOR_REPLY: &str = "You need administrator permissions!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    /// Invoker lacks the administrator permission (or is not a guild member)
    NotAdministrator,
}

impl AccessDenied {
    pub fn reply_text(&self) -> &'static str {
        match self {
            Self::NotAdministrator => NOT_ADMINISTRATOR_REPLY,
        }
    }
}

/// Allow the interaction only if the invoker holds `ADMINISTRATOR`
///
/// Permissions are checked on every interaction; nothing is cached.
pub fn require_administrator(permissions: Option<Permissions>) -> Result<(), AccessDenied> {
    match permissions {
        Some(p) if p.administrator() => Ok(()),
        _ => Err(AccessDenied::NotAdministrator),
    }
}
