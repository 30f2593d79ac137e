//! Analysis - Clinical Interpretation web services
//!
//! PATH: `/{apiVersion}/analysis/clinical`

use crate::endpoint::{BodyKind, Category, Endpoint};

pub static CLINICAL: Category = Category {
    key: "clinical",
    path: "analysis/clinical",
    title: "Analysis - Clinical Interpretation",
    endpoints: &[
        Endpoint::get("stats_interpretation", "stats")
            .subcategory("interpretation")
            .describe("Clinical interpretation analysis"),
        Endpoint::post("update_interpretations", "update")
            .path_id("clinicalAnalysis")
            .subcategory("interpretations")
            .body(BodyKind::Optional)
            .describe("Add or remove Interpretations to/from a Clinical Analysis"),
        Endpoint::post("update_comments", "comments/update")
            .path_id("clinicalAnalysis")
            .subcategory("interpretations")
            .second_path_id("interpretation")
            .body(BodyKind::Optional)
            .describe("Update comments of an Interpretation"),
        Endpoint::post("update_primary_findings", "primaryFindings/update")
            .path_id("clinicalAnalysis")
            .subcategory("interpretations")
            .second_path_id("interpretation")
            .body(BodyKind::Optional)
            .describe("Update reported variants of an interpretation"),
        Endpoint::post("run_interpretation_team", "run")
            .subcategory("interpretation/team")
            .describe("TEAM interpretation analysis"),
        Endpoint::post("run_interpretation_tiering", "run")
            .subcategory("interpretation/tiering")
            .describe("GEL Tiering interpretation analysis"),
        Endpoint::post("run_interpretation_custom", "run")
            .subcategory("interpretation/custom")
            .describe("Interpretation custom analysis"),
        Endpoint::post("run_interpretation_cancer_tiering", "run")
            .subcategory("interpretation/cancerTiering")
            .describe("Cancer Tiering interpretation analysis"),
        Endpoint::get("primary_findings_interpretation", "primaryFindings")
            .subcategory("interpretation")
            .describe("Search for primary findings for a given query"),
        Endpoint::get("secondary_findings_interpretation", "secondaryFindings")
            .subcategory("interpretation")
            .describe("Search for secondary findings for a given sample"),
        Endpoint::get("acl", "acl")
            .path_id("clinicalAnalyses")
            .describe("Return the acl of the clinical analyses, or of one member"),
        Endpoint::post("update_acl", "update")
            .prefix("acl")
            .path_id("members")
            .body(BodyKind::Optional)
            .describe("Update the set of permissions granted for the member"),
        Endpoint::get("index_interpretation", "index")
            .subcategory("interpretation")
            .describe("Index clinical analysis interpretations in the clinical variant database"),
        Endpoint::post("update", "update")
            .path_id("clinicalAnalyses")
            .body(BodyKind::Optional)
            .describe("Update clinical analysis attributes"),
        Endpoint::post("update_interpretation", "update")
            .path_id("clinicalAnalysis")
            .subcategory("interpretations")
            .second_path_id("interpretation")
            .body(BodyKind::Optional)
            .describe("Update Interpretation fields"),
        Endpoint::get("info", "info")
            .path_id("clinicalAnalyses")
            .describe("Clinical analysis info"),
        Endpoint::post("create", "create")
            .body(BodyKind::Optional)
            .describe("Create a new clinical analysis"),
        Endpoint::get("query_interpretation", "query")
            .subcategory("interpretation")
            .describe("Query for reported variants"),
        Endpoint::get("search", "search").describe("Clinical analysis search"),
    ],
};
