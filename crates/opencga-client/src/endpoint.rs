//! Endpoint descriptors
//!
//! Every REST action the client can call is described by a static
//! [`Endpoint`]; the endpoints of one URL category are grouped in a
//! [`Category`]. The tables themselves live in [`crate::resources`].
//!
//! A request path is assembled as
//! `{category}[/{prefix}][/{pathId}][/{subcategory}][/{secondPathId}]/{action}`.
//! Empty optional parts contribute nothing, not even a slash.

use crate::error::{ClientError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP verb of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an endpoint takes a JSON request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    None,
    Optional,
    Required,
}

/// Static description of one REST action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name, snake_case (`run_stats`)
    pub name: &'static str,
    pub method: HttpMethod,
    /// Final path segment(s) (`stats/run`)
    pub action: &'static str,
    /// Fixed segment placed before the first path id (`acl` in `acl/{members}/update`)
    pub prefix: Option<&'static str>,
    /// Name of the first path-embedded identifier
    pub path_id: Option<&'static str>,
    pub subcategory: Option<&'static str>,
    /// Name of the second path-embedded identifier
    pub second_path_id: Option<&'static str>,
    /// Identifiers merged into the options bag under these keys
    pub required: &'static [&'static str],
    pub body: BodyKind,
    pub description: &'static str,
}

impl Endpoint {
    const fn new(method: HttpMethod, name: &'static str, action: &'static str) -> Self {
        Self {
            name,
            method,
            action,
            prefix: None,
            path_id: None,
            subcategory: None,
            second_path_id: None,
            required: &[],
            body: BodyKind::None,
            description: "",
        }
    }

    pub const fn get(name: &'static str, action: &'static str) -> Self {
        Self::new(HttpMethod::Get, name, action)
    }

    pub const fn post(name: &'static str, action: &'static str) -> Self {
        Self::new(HttpMethod::Post, name, action)
    }

    pub const fn delete(name: &'static str, action: &'static str) -> Self {
        Self::new(HttpMethod::Delete, name, action)
    }

    pub const fn prefix(self, segment: &'static str) -> Self {
        Self {
            prefix: Some(segment),
            ..self
        }
    }

    pub const fn path_id(self, name: &'static str) -> Self {
        Self {
            path_id: Some(name),
            ..self
        }
    }

    pub const fn subcategory(self, segment: &'static str) -> Self {
        Self {
            subcategory: Some(segment),
            ..self
        }
    }

    pub const fn second_path_id(self, name: &'static str) -> Self {
        Self {
            second_path_id: Some(name),
            ..self
        }
    }

    pub const fn required(self, keys: &'static [&'static str]) -> Self {
        Self {
            required: keys,
            ..self
        }
    }

    pub const fn body(self, body: BodyKind) -> Self {
        Self { body, ..self }
    }

    pub const fn describe(self, description: &'static str) -> Self {
        Self {
            description,
            ..self
        }
    }

    /// Names of every argument the caller must supply, path ids first
    pub fn arguments(&self) -> impl Iterator<Item = &'static str> {
        self.path_id
            .into_iter()
            .chain(self.second_path_id)
            .chain(self.required.iter().copied())
    }

    /// Whether `name` is a path-embedded identifier of this endpoint
    pub fn is_path_id(&self, name: &str) -> bool {
        self.path_id == Some(name) || self.second_path_id == Some(name)
    }

    /// Build the request path relative to the API version
    ///
    /// Identifiers are percent-encoded as single path segments; `,`, `@` and
    /// `:` stay literal so id lists and `user@project:study` pass through.
    pub fn path(&self, category: &str, path_id: Option<&str>, second_path_id: Option<&str>) -> String {
        let first = path_id.map(encode_segment);
        let second = second_path_id.map(encode_segment);
        self.join(category, first.as_deref(), second.as_deref())
    }

    /// Path with `{placeholders}` for the identifiers, as documented by the service
    pub fn template(&self, category: &str) -> String {
        let first = self.path_id.map(|name| format!("{{{}}}", name));
        let second = self.second_path_id.map(|name| format!("{{{}}}", name));
        self.join(category, first.as_deref(), second.as_deref())
    }

    fn join(&self, category: &str, path_id: Option<&str>, second_path_id: Option<&str>) -> String {
        let mut segments: Vec<&str> = vec![category];
        segments.extend(self.prefix);
        segments.extend(path_id);
        segments.extend(self.subcategory);
        segments.extend(second_path_id);
        segments.push(self.action);

        segments.join("/")
    }
}

/// Characters escaped inside one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

fn encode_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

/// A URL category and the endpoints it exposes
#[derive(Debug)]
pub struct Category {
    /// Short name used on the command line (`alignment`)
    pub key: &'static str,
    /// URL category (`analysis/alignment`)
    pub path: &'static str,
    pub title: &'static str,
    pub endpoints: &'static [Endpoint],
}

impl Category {
    /// Look up an endpoint by operation name
    pub fn endpoint(&self, name: &str) -> Option<&'static Endpoint> {
        self.endpoints.iter().find(|e| e.name == name)
    }

    /// Like [`Category::endpoint`], failing with [`ClientError::UnknownEndpoint`]
    pub fn require(&self, name: &str) -> Result<&'static Endpoint> {
        self.endpoint(name).ok_or_else(|| ClientError::UnknownEndpoint {
            category: self.key.to_string(),
            endpoint: name.to_string(),
        })
    }
}
