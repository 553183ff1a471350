//! Admin allowlist and per-command access requirements.

use crate::errors::{Error, Result};
use std::collections::BTreeSet;

/// The static set of Discord user IDs allowed to run privileged commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminAllowlist {
    ids: BTreeSet<u64>,
}

impl AdminAllowlist {
    /// Parses a comma-separated list of Discord user IDs.
    ///
    /// Whitespace around entries and empty entries are ignored. Any entry that is not
    /// a valid snowflake is a configuration error.
    pub fn parse(raw: &str) -> Result<Self> {
        let ids = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                entry.parse::<u64>().map_err(|_| Error::Config {
                    message: format!("ADMIN_IDS contains an invalid user ID: `{entry}`"),
                })
            })
            .collect::<Result<BTreeSet<_>>>()?;

        Ok(Self { ids })
    }

    /// Whether the user ID is an admin.
    #[must_use]
    pub fn contains(&self, user_id: &str) -> bool {
        user_id
            .parse::<u64>()
            .is_ok_and(|id| self.ids.contains(&id))
    }

    /// Number of admins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no admins are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<u64> for AdminAllowlist {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Who may run an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Any guild member
    Anyone,
    /// Only users in the admin allowlist
    Admin,
}

impl Access {
    /// Checks `caller_id` against this requirement.
    pub fn authorize(self, allowlist: &AdminAllowlist, caller_id: &str) -> Result<()> {
        match self {
            Self::Anyone => Ok(()),
            Self::Admin if allowlist.contains(caller_id) => Ok(()),
            Self::Admin => Err(Error::Unauthorized {
                user_id: caller_id.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_empty_entries() {
        let allowlist = AdminAllowlist::parse(" 111, 222 ,,333,").unwrap();
        assert_eq!(allowlist.len(), 3);
        assert!(allowlist.contains("111"));
        assert!(allowlist.contains("222"));
        assert!(allowlist.contains("333"));
        assert!(!allowlist.contains("444"));
    }

    #[test]
    fn test_parse_rejects_non_numeric_ids() {
        let result = AdminAllowlist::parse("111,not-an-id");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_empty_list_has_no_admins() {
        let allowlist = AdminAllowlist::parse("").unwrap();
        assert!(allowlist.is_empty());
        assert!(!allowlist.contains(""));
    }

    #[test]
    fn test_admin_access_denies_unlisted_callers() {
        let allowlist: AdminAllowlist = [111].into_iter().collect();

        assert!(Access::Admin.authorize(&allowlist, "111").is_ok());
        assert!(matches!(
            Access::Admin.authorize(&allowlist, "222"),
            Err(Error::Unauthorized { user_id }) if user_id == "222"
        ));
        assert!(Access::Anyone.authorize(&allowlist, "222").is_ok());
    }
}
