//! Church governance core: the role hierarchy with its permission and
//! approval rules, member profiles with a weighted completion score, and the
//! configuration, telemetry, and HTTP plumbing the service binary builds on.

pub mod config;
pub mod error;
pub mod format;
pub mod profiles;
pub mod roles;
pub mod telemetry;
