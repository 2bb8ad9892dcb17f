use super::role::{PermissionSet, Role};

/// Reference hierarchy, in insertion order (not level order).
pub static ROLES: &[Role] = &[
    Role {
        id: "pasteur_principal",
        name: "pasteur_principal",
        display_name: "Pasteur Principal",
        level: 1,
        description: "Senior pastor with full authority over the church",
        permissions: PermissionSet::All,
        can_approve: &["pasteur_consacre", "pasteur_residant", "pasteur_assistant"],
    },
    Role {
        id: "pasteur_consacre",
        name: "pasteur_consacre",
        display_name: "Pasteur Consacré",
        level: 2,
        description: "Ordained pastor overseeing ministries and pastoral staff",
        permissions: PermissionSet::Only(&[
            "view:own_profile",
            "edit:own_profile",
            "view:own_church",
            "view:members",
            "manage:members",
            "approve:members",
            "manage:roles",
            "manage:tribes",
            "manage:departments",
            "manage:cells",
            "manage:events",
            "manage:attendance",
            "manage:announcements",
            "view:finances",
            "view:reports",
            "send:messages",
        ]),
        can_approve: &["pasteur_residant", "pasteur_assistant", "ancien"],
    },
    Role {
        id: "pasteur_residant",
        name: "pasteur_residant",
        display_name: "Pasteur Résidant",
        level: 3,
        description: "Resident pastor in charge of a local assembly",
        permissions: PermissionSet::Only(&[
            "view:own_profile",
            "edit:own_profile",
            "view:own_church",
            "view:members",
            "manage:members",
            "approve:members",
            "manage:tribes",
            "manage:departments",
            "manage:cells",
            "manage:events",
            "manage:attendance",
            "manage:announcements",
            "view:reports",
            "send:messages",
        ]),
        can_approve: &[
            "pasteur_assistant",
            "ancien",
            "diacre",
            "responsable_departement",
        ],
    },
    Role {
        id: "pasteur_assistant",
        name: "pasteur_assistant",
        display_name: "Pasteur Assistant",
        level: 4,
        description: "Assistant pastor supporting the resident pastor",
        permissions: PermissionSet::Only(&[
            "view:own_profile",
            "edit:own_profile",
            "view:own_church",
            "view:members",
            "manage:members",
            "approve:members",
            "manage:cells",
            "manage:events",
            "manage:attendance",
            "view:reports",
            "send:messages",
        ]),
        can_approve: &["ancien", "diacre", "responsable_departement", "secretaire"],
    },
    Role {
        id: "ancien",
        name: "ancien",
        display_name: "Ancien",
        level: 5,
        description: "Elder providing spiritual oversight to tribes",
        permissions: PermissionSet::Only(&[
            "view:own_profile",
            "edit:own_profile",
            "view:own_church",
            "view:members",
            "approve:members",
            "manage:tribes",
            "manage:attendance",
            "view:reports",
            "send:messages",
        ]),
        can_approve: &["diacre", "responsable_departement", "chef_tribu"],
    },
    Role {
        id: "diacre",
        name: "diacre",
        display_name: "Diacre",
        level: 6,
        description: "Deacon serving the practical needs of the congregation",
        permissions: PermissionSet::Only(&[
            "view:own_profile",
            "edit:own_profile",
            "view:own_church",
            "view:members",
            "manage:attendance",
            "manage:events",
            "send:messages",
        ]),
        can_approve: &["chef_cellule", "ouvrier"],
    },
    Role {
        id: "responsable_departement",
        name: "responsable_departement",
        display_name: "Responsable de Département",
        level: 6,
        description: "Head of a ministry department such as choir or youth",
        permissions: PermissionSet::Only(&[
            "view:own_profile",
            "edit:own_profile",
            "view:own_church",
            "view:members",
            "manage:departments",
            "manage:events",
            "send:messages",
        ]),
        can_approve: &["ouvrier", "membre"],
    },
    Role {
        id: "chef_tribu",
        name: "chef_tribu",
        display_name: "Chef de Tribu",
        level: 7,
        description: "Leader of a tribe grouping several cells",
        permissions: PermissionSet::Only(&[
            "view:own_profile",
            "edit:own_profile",
            "view:own_church",
            "view:members",
            "manage:cells",
            "manage:attendance",
            "send:messages",
        ]),
        can_approve: &["chef_cellule", "membre"],
    },
    Role {
        id: "chef_cellule",
        name: "chef_cellule",
        display_name: "Chef de Cellule",
        level: 8,
        description: "Leader of a home cell group",
        permissions: PermissionSet::Only(&[
            "view:own_profile",
            "edit:own_profile",
            "view:own_church",
            "view:members",
            "manage:attendance",
            "send:messages",
        ]),
        can_approve: &["ouvrier", "membre", "fidele"],
    },
    Role {
        id: "secretaire",
        name: "secretaire",
        display_name: "Secrétaire",
        level: 7,
        description: "Church secretary keeping records and announcements",
        permissions: PermissionSet::Only(&[
            "view:own_profile",
            "edit:own_profile",
            "view:own_church",
            "view:members",
            "manage:announcements",
            "view:reports",
        ]),
        can_approve: &[],
    },
    Role {
        id: "ouvrier",
        name: "ouvrier",
        display_name: "Ouvrier",
        level: 9,
        description: "Volunteer worker serving in a department",
        permissions: PermissionSet::Only(&[
            "view:own_profile",
            "edit:own_profile",
            "view:own_church",
            "view:events",
            "register:events",
            "send:messages",
        ]),
        can_approve: &[],
    },
    Role {
        id: "membre",
        name: "membre",
        display_name: "Membre",
        level: 10,
        description: "Baptised, registered member of the church",
        permissions: PermissionSet::Only(&[
            "view:own_profile",
            "edit:own_profile",
            "view:own_church",
            "view:events",
            "register:events",
        ]),
        can_approve: &[],
    },
    Role {
        id: "fidele",
        name: "fidele",
        display_name: "Fidèle",
        level: 11,
        description: "Regular attendee, default role on registration",
        permissions: PermissionSet::Only(&["view:own_profile", "edit:own_profile", "view:own_church"]),
        can_approve: &[],
    },
];

/// Role given to every newly registered profile.
pub const DEFAULT_ROLE_ID: &str = "fidele";
