//! Projects web services
//!
//! PATH: `/{apiVersion}/projects`

use crate::endpoint::{BodyKind, Category, Endpoint};

pub static PROJECTS: Category = Category {
    key: "projects",
    path: "projects",
    title: "Projects",
    endpoints: &[
        Endpoint::post("create", "create")
            .body(BodyKind::Required)
            .describe("Create a new project"),
        Endpoint::get("search", "search").describe("Search projects"),
        Endpoint::get("aggregation_stats", "aggregationStats")
            .path_id("projects")
            .describe("Fetch catalog project stats"),
        Endpoint::get("info", "info")
            .path_id("projects")
            .describe("Fetch project information"),
        Endpoint::post("inc_release", "incRelease")
            .path_id("project")
            .describe("Increment current release number in the project"),
        Endpoint::get("studies", "studies")
            .path_id("project")
            .describe("Fetch all the studies contained in the project"),
        Endpoint::post("update", "update")
            .path_id("project")
            .body(BodyKind::Required)
            .describe("Update some project attributes"),
    ],
};
