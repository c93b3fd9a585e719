//! Login gate: a credential allow-list checked before any data access.
//!
//! An empty allow-list disables the gate entirely. There is no session
//! state; credentials travel with every invocation.

use std::collections::BTreeMap;

use anyhow::{bail, Result};

/// Check the supplied credentials against the configured allow-list.
///
/// # Errors
///
/// Fails when the allow-list is non-empty and the pair does not match
/// an entry.
pub fn require_login(
    users: &BTreeMap<String, String>,
    user: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    if users.is_empty() {
        return Ok(());
    }

    let (Some(user), Some(password)) = (user, password) else {
        bail!("login required: pass --user and --password (or set WEEKBEELD_USER/WEEKBEELD_PASSWORD)");
    };

    match users.get(user) {
        Some(expected) if expected == password => Ok(()),
        _ => bail!("invalid username or password"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> BTreeMap<String, String> {
        BTreeMap::from([("thor".to_string(), "geheim".to_string())])
    }

    #[test]
    fn empty_allow_list_disables_the_gate() {
        assert!(require_login(&BTreeMap::new(), None, None).is_ok());
    }

    #[test]
    fn matching_pair_passes() {
        assert!(require_login(&users(), Some("thor"), Some("geheim")).is_ok());
    }

    #[test]
    fn missing_credentials_are_rejected() {
        assert!(require_login(&users(), None, None).is_err());
        assert!(require_login(&users(), Some("thor"), None).is_err());
    }

    #[test]
    fn wrong_password_or_unknown_user_is_rejected() {
        assert!(require_login(&users(), Some("thor"), Some("fout")).is_err());
        assert!(require_login(&users(), Some("loki"), Some("geheim")).is_err());
    }
}
