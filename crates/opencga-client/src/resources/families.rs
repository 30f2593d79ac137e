//! Families web services
//!
//! PATH: `/{apiVersion}/families`

use crate::endpoint::{BodyKind, Category, Endpoint};

pub static FAMILIES: Category = Category {
    key: "families",
    path: "families",
    title: "Families",
    endpoints: &[
        Endpoint::post("update", "update")
            .path_id("families")
            .body(BodyKind::Optional)
            .describe("Update some family attributes"),
        Endpoint::get("aggregation_stats", "aggregationStats")
            .describe("Fetch catalog family stats"),
        Endpoint::post("update_annotations", "annotations/update")
            .path_id("family")
            .subcategory("annotationSets")
            .second_path_id("annotationSet")
            .body(BodyKind::Optional)
            .describe("Update annotations from an annotationSet"),
        Endpoint::get("acl", "acl")
            .path_id("families")
            .describe("Return the acl of the families, or of one member"),
        Endpoint::post("update_acl", "update")
            .prefix("acl")
            .path_id("members")
            .body(BodyKind::Required)
            .describe("Update the set of permissions granted for the member"),
        Endpoint::get("info", "info")
            .path_id("families")
            .describe("Get family information"),
        Endpoint::post("create", "create")
            .body(BodyKind::Required)
            .describe("Create family and the individual objects if they do not exist"),
        Endpoint::delete("delete", "delete")
            .path_id("families")
            .describe("Delete existing families"),
        Endpoint::get("search", "search").describe("Search families"),
    ],
};
