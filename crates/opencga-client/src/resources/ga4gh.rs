//! GA4GH web services
//!
//! PATH: `/{apiVersion}/ga4gh`

use crate::endpoint::{Category, Endpoint};

pub static GA4GH: Category = Category {
    key: "ga4gh",
    path: "ga4gh",
    title: "GA4GH",
    endpoints: &[
        Endpoint::post("search_variants", "search")
            .subcategory("variants")
            .describe("Search variants using the GA4GH schema"),
        Endpoint::post("search_reads", "search")
            .subcategory("reads")
            .describe("Search reads using the GA4GH schema"),
        Endpoint::get("responses", "responses")
            .required(&["chrom", "pos", "allele", "beacon"])
            .describe("Beacon allele query across configured beacons"),
    ],
};
