//! Meta web services
//!
//! PATH: `/{apiVersion}/meta`

use crate::endpoint::{Category, Endpoint};

pub static META: Category = Category {
    key: "meta",
    path: "meta",
    title: "Meta",
    endpoints: &[
        Endpoint::get("about", "about").describe("Return information about the server"),
        Endpoint::get("api", "api").describe("Describe the REST API"),
        Endpoint::get("fail", "fail").describe("Fail on purpose, for client testing"),
        Endpoint::get("ping", "ping").describe("Ping the server"),
        Endpoint::get("status", "status").describe("Server status"),
    ],
};
