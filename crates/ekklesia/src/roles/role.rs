use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Sentinel granting every permission, including ones never enumerated.
pub const WILDCARD_PERMISSION: &str = "*";

/// Permissions attached to a role: either the wildcard or an explicit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionSet {
    All,
    Only(&'static [&'static str]),
}

impl PermissionSet {
    /// Exact string membership, short-circuited by the wildcard.
    pub fn grants(&self, permission: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(list) => list.iter().any(|granted| *granted == permission),
        }
    }

    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Serialize for PermissionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::All => serializer.serialize_str(WILDCARD_PERMISSION),
            Self::Only(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for permission in *list {
                    seq.serialize_element(permission)?;
                }
                seq.end()
            }
        }
    }
}

/// One position in the church hierarchy. Level 1 is the highest authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: &'static str,
    pub name: &'static str,
    pub display_name: &'static str,
    pub level: u8,
    pub description: &'static str,
    pub permissions: PermissionSet,
    /// Ids of the roles this role may approve or assign.
    pub can_approve: &'static [&'static str],
}

impl Role {
    pub fn approves(&self, role_id: &str) -> bool {
        self.can_approve.iter().any(|id| *id == role_id)
    }
}
