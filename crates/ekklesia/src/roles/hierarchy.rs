use std::collections::HashSet;

use super::catalog::ROLES;
use super::role::Role;

/// Read-only view over an ordered role table.
///
/// Lookups are linear scans and `approvable` nests one, so the table is expected to stay small.
#[derive(Debug, Clone, Copy)]
pub struct RoleHierarchy<'a> {
    roles: &'a [Role],
}

impl RoleHierarchy<'static> {
    /// The reference hierarchy compiled into the binary.
    pub fn standard() -> Self {
        Self { roles: ROLES }
    }
}

impl<'a> RoleHierarchy<'a> {
    pub const fn new(roles: &'a [Role]) -> Self {
        Self { roles }
    }

    pub fn roles(&self) -> &'a [Role] {
        self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn role(&self, id: &str) -> Option<&'a Role> {
        self.roles.iter().find(|role| role.id == id)
    }

    /// Roles listed in `id`'s approval set, in table order.
    pub fn approvable(&self, id: &str) -> Vec<&'a Role> {
        let Some(approver) = self.role(id) else {
            return Vec::new();
        };

        self.roles
            .iter()
            .filter(|candidate| approver.approves(candidate.id))
            .collect()
    }

    pub fn has_permission(&self, id: &str, permission: &str) -> bool {
        self.role(id)
            .map(|role| role.permissions.grants(permission))
            .unwrap_or(false)
    }

    /// Fresh vector ordered by ascending level; ties keep table order.
    pub fn sorted(&self) -> Vec<&'a Role> {
        let mut sorted: Vec<&'a Role> = self.roles.iter().collect();
        sorted.sort_by_key(|role| role.level);
        sorted
    }

    pub fn can_approve(&self, approver_id: &str, target_id: &str) -> bool {
        match (self.role(approver_id), self.role(target_id)) {
            (Some(approver), Some(target)) => approver.approves(target.id),
            _ => false,
        }
    }

    /// Lowest and highest level numbers present in the table.
    pub fn levels(&self) -> Option<(u8, u8)> {
        let min = self.roles.iter().map(|role| role.level).min()?;
        let max = self.roles.iter().map(|role| role.level).max()?;
        Some((min, max))
    }

    pub fn validate(&self) -> Result<(), HierarchyViolation> {
        let (_, max_level) = self.levels().ok_or(HierarchyViolation::Empty)?;

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for role in self.roles {
            if !ids.insert(role.id) {
                return Err(HierarchyViolation::DuplicateId { id: role.id });
            }
            if !names.insert(role.name) {
                return Err(HierarchyViolation::DuplicateName { name: role.name });
            }
        }

        for level in 1..=max_level {
            if !self.roles.iter().any(|role| role.level == level) {
                return Err(HierarchyViolation::LevelGap { level });
            }
        }

        for role in self.roles {
            for &target_id in role.can_approve {
                let target = self
                    .role(target_id)
                    .ok_or(HierarchyViolation::UnknownApprovalTarget {
                        role: role.id,
                        target: target_id,
                    })?;
                if target.level <= role.level {
                    return Err(HierarchyViolation::ApprovalNotSubordinate {
                        role: role.id,
                        role_level: role.level,
                        target: target.id,
                        target_level: target.level,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for RoleHierarchy<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Structural problems detected in a role table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyViolation {
    #[error("role hierarchy is empty")]
    Empty,
    #[error("role id '{id}' is declared more than once")]
    DuplicateId { id: &'static str },
    #[error("role name '{name}' is declared more than once")]
    DuplicateName { name: &'static str },
    #[error("no role occupies level {level}")]
    LevelGap { level: u8 },
    #[error("role '{role}' approves unknown role '{target}'")]
    UnknownApprovalTarget {
        role: &'static str,
        target: &'static str,
    },
    #[error(
        "role '{role}' (level {role_level}) cannot approve '{target}' (level {target_level})"
    )]
    ApprovalNotSubordinate {
        role: &'static str,
        role_level: u8,
        target: &'static str,
        target_level: u8,
    },
}

pub fn role_by_id(id: &str) -> Option<&'static Role> {
    RoleHierarchy::standard().role(id)
}

pub fn approvable_roles(id: &str) -> Vec<&'static Role> {
    RoleHierarchy::standard().approvable(id)
}

pub fn has_permission(id: &str, permission: &str) -> bool {
    RoleHierarchy::standard().has_permission(id, permission)
}

pub fn roles_sorted() -> Vec<&'static Role> {
    RoleHierarchy::standard().sorted()
}

pub fn can_approve(approver_id: &str, target_id: &str) -> bool {
    RoleHierarchy::standard().can_approve(approver_id, target_id)
}
