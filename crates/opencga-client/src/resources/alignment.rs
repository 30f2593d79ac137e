//! Analysis - Alignment web services
//!
//! PATH: `/{apiVersion}/analysis/alignment`

use crate::endpoint::{Category, Endpoint};

pub static ALIGNMENT: Category = Category {
    key: "alignment",
    path: "analysis/alignment",
    title: "Analysis - Alignment",
    endpoints: &[
        Endpoint::post("run_stats", "stats/run")
            .required(&["file"])
            .describe("Compute stats for a given alignment file"),
        Endpoint::post("run_coverage", "coverage/run")
            .required(&["file"])
            .describe("Compute coverage for a list of alignment files"),
        Endpoint::post("run_coverage_index", "coverage/index/run")
            .required(&["file"])
            .describe("Compute the coverage index of an alignment file"),
        Endpoint::get("query_coverage", "coverage/query")
            .required(&["file"])
            .describe("Query the coverage of an alignment file for regions or genes"),
        Endpoint::get("ratio_coverage", "coverage/ratio")
            .required(&["file1", "file2"])
            .describe("Compute coverage ratio from file #1 vs file #2 (e.g. somatic vs germline)"),
        Endpoint::get("stats_coverage", "coverage/stats")
            .required(&["file", "gene"])
            .describe("Compute coverage stats per transcript for a list of genes"),
        Endpoint::get("info_stats", "stats/info")
            .required(&["file"])
            .describe("Show the stats for a given alignment file"),
        Endpoint::get("query_stats", "stats/query")
            .describe("Fetch alignment files according to their stats"),
        Endpoint::post("run_bwa", "bwa/run")
            .describe("BWA mapping of low-divergent sequences against a reference genome"),
        Endpoint::post("run_samtools", "samtools/run")
            .describe("Samtools commands on SAM, BAM and CRAM files"),
        Endpoint::post("run_deeptools", "deeptools/run")
            .describe("Deeptools analysis of high-throughput sequencing data"),
        Endpoint::post("run_fastqc", "fastqc/run")
            .describe("Quality control for high throughput sequence data"),
        Endpoint::post("index", "index")
            .required(&["file"])
            .describe("Index alignment file"),
        Endpoint::get("query", "query")
            .required(&["file"])
            .describe("Search over indexed alignments"),
    ],
};
