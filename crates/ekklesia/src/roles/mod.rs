//! Church role hierarchy and permission checks.
//!
//! The hierarchy is configuration compiled into the binary: a `static` table of
//! roles with levels, permissions, and explicit approval lists. Every query is
//! total; unknown role ids resolve to `None`, an empty list, or `false`.

mod catalog;
mod hierarchy;
mod role;
pub mod router;

pub use catalog::{DEFAULT_ROLE_ID, ROLES};
pub use hierarchy::{
    approvable_roles, can_approve, has_permission, role_by_id, roles_sorted, HierarchyViolation,
    RoleHierarchy,
};
pub use role::{PermissionSet, Role, WILDCARD_PERMISSION};
pub use router::role_router;
