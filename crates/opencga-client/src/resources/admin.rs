//! Admin web services
//!
//! PATH: `/{apiVersion}/admin`

use crate::endpoint::{BodyKind, Category, Endpoint};

pub static ADMIN: Category = Category {
    key: "admin",
    path: "admin",
    title: "Admin",
    endpoints: &[
        Endpoint::post("create_users", "create")
            .subcategory("users")
            .body(BodyKind::Required)
            .describe("Create a new user"),
        Endpoint::post("import_users", "import")
            .subcategory("users")
            .body(BodyKind::Required)
            .describe("Import users or a group of users from LDAP or AAD"),
        Endpoint::post("sync_users", "sync")
            .subcategory("users")
            .body(BodyKind::Required)
            .describe("Synchronise groups of users with LDAP groups"),
        Endpoint::get("group_by_audit", "groupBy")
            .subcategory("audit")
            .required(&["fields", "entity"])
            .describe("Group audit records by several fields"),
        Endpoint::post("install_catalog", "install")
            .subcategory("catalog")
            .body(BodyKind::Required)
            .describe("Install OpenCGA database"),
        Endpoint::post("index_stats_catalog", "indexStats")
            .subcategory("catalog")
            .describe("Sync Catalog into Solr"),
        Endpoint::post("panel_catalog", "panel")
            .subcategory("catalog")
            .body(BodyKind::Required)
            .describe("Handle global panels"),
        Endpoint::post("jwt_catalog", "jwt")
            .subcategory("catalog")
            .body(BodyKind::Required)
            .describe("Change JWT secret key"),
    ],
};
