//! Samples web services
//!
//! PATH: `/{apiVersion}/samples`

use crate::endpoint::{BodyKind, Category, Endpoint};

pub static SAMPLES: Category = Category {
    key: "samples",
    path: "samples",
    title: "Samples",
    endpoints: &[
        Endpoint::post("create", "create")
            .body(BodyKind::Required)
            .describe("Create sample"),
        Endpoint::get("load", "load")
            .required(&["file"])
            .describe("Load samples from a ped file"),
        Endpoint::get("search", "search").describe("Search samples"),
        Endpoint::get("aggregation_stats", "aggregationStats")
            .describe("Fetch catalog sample stats"),
        Endpoint::get("info", "info")
            .path_id("samples")
            .describe("Get sample information"),
        Endpoint::post("update", "update")
            .path_id("samples")
            .body(BodyKind::Optional)
            .describe("Update some sample attributes"),
        Endpoint::delete("delete", "delete")
            .path_id("samples")
            .describe("Delete samples"),
        Endpoint::get("acl", "acl")
            .path_id("samples")
            .describe("Return the acl of the samples, or of one member"),
        Endpoint::post("update_acl", "update")
            .prefix("acl")
            .path_id("members")
            .body(BodyKind::Required)
            .describe("Update the set of permissions granted for the member"),
        Endpoint::post("update_annotations", "annotations/update")
            .path_id("sample")
            .subcategory("annotationSets")
            .second_path_id("annotationSet")
            .body(BodyKind::Optional)
            .describe("Update annotations from an annotationSet"),
    ],
};
