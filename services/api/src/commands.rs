use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use ekklesia::error::AppError;
use ekklesia::format::format_relative;
use ekklesia::profiles::{completion_report, CompletionReport};
use ekklesia::roles::{Role, RoleHierarchy};
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub(crate) enum RolesCommand {
    /// List every role, in table order or by authority level
    List {
        /// Order by ascending level instead of table order
        #[arg(long)]
        sorted: bool,
    },
    /// Show a single role with its permissions and approval list
    Show { role_id: String },
    /// Check whether a role holds a permission
    Check { role_id: String, permission: String },
}

#[derive(Args, Debug)]
pub(crate) struct ProfileScoreArgs {
    /// JSON file holding a single profile object
    pub(crate) path: PathBuf,
}

pub(crate) fn run_roles(command: RolesCommand) -> Result<(), AppError> {
    let hierarchy = RoleHierarchy::standard();
    hierarchy.validate()?;

    match command {
        RolesCommand::List { sorted } => {
            let roles: Vec<&Role> = if sorted {
                hierarchy.sorted()
            } else {
                hierarchy.roles().iter().collect()
            };
            for role in roles {
                println!("{}", role_line(role));
            }
        }
        RolesCommand::Show { role_id } => match hierarchy.role(&role_id) {
            Some(role) => print!("{}", render_role(hierarchy, role)),
            None => println!("Unknown role '{role_id}'"),
        },
        RolesCommand::Check {
            role_id,
            permission,
        } => {
            let verdict = if hierarchy.has_permission(&role_id, &permission) {
                "granted"
            } else {
                "denied"
            };
            println!("{role_id} -> {permission}: {verdict}");
        }
    }

    Ok(())
}

fn role_line(role: &Role) -> String {
    format!("[{:>2}] {:<24} {}", role.level, role.id, role.display_name)
}

fn render_role(hierarchy: RoleHierarchy<'static>, role: &Role) -> String {
    let mut out = format!("{}\n  {}\n", role_line(role), role.description);
    if role.permissions.is_wildcard() {
        out.push_str("  Permissions: all\n");
    } else {
        out.push_str("  Permissions:\n");
        if let ekklesia::roles::PermissionSet::Only(list) = role.permissions {
            for permission in list {
                out.push_str(&format!("    - {permission}\n"));
            }
        }
    }

    let approvable = hierarchy.approvable(role.id);
    if approvable.is_empty() {
        out.push_str("  Approves: none\n");
    } else {
        out.push_str("  Approves:\n");
        for target in approvable {
            out.push_str(&format!("    - {}\n", role_line(target)));
        }
    }
    out
}

pub(crate) fn run_profile_score(args: ProfileScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.path)?;
    let fields: Map<String, Value> = serde_json::from_str(&raw)?;
    let report = completion_report(&fields);
    print!("{}", render_report(&report, last_update(&fields), Utc::now()));
    Ok(())
}

fn last_update(fields: &Map<String, Value>) -> Option<DateTime<Utc>> {
    fields
        .get("updated_at")
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

fn render_report(
    report: &CompletionReport,
    updated_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> String {
    let mut out = format!("Profile completion: {}%\n", report.score);
    if let Some(updated_at) = updated_at {
        out.push_str(&format!(
            "Last updated: {}\n",
            format_relative(updated_at, now)
        ));
    }
    if report.missing.is_empty() {
        out.push_str("All scored fields are filled\n");
    } else {
        out.push_str("Missing fields:\n");
        for field in &report.missing {
            out.push_str(&format!("  - {} (weight {})\n", field.name(), field.weight()));
        }
    }
    out
}
