// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Query descriptors and the results a watched query emits.
//!
//! The transport is out of scope here; this module only knows the GraphQL
//! document for the satellite list and how to read the standard response
//! envelope (`{"data": ..., "errors": [...]}`) into a [`QueryResult`].

use crate::{QueryError, Satellite};
use serde::Deserialize;
use serde_json::Value;

/// GraphQL document listing every satellite with its latest TLE.
pub const ALL_SATELLITES_QUERY: &str = "query {
    allSatellites {
        name
        satId
        tleDate
        line1
        line2
    }
}";

/// Identifies what a view watches.
///
/// The document is handed to the query service untouched; `field` names the
/// key under `data` that holds the satellite list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryDescriptor {
    document: String,
    field: String,
}

impl QueryDescriptor {
    pub fn new(document: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            field: field.into(),
        }
    }

    /// The `allSatellites` query.
    #[must_use]
    pub fn all_satellites() -> Self {
        Self::new(ALL_SATELLITES_QUERY, "allSatellites")
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }
}

/// One successful emission of a watched query.
///
/// `data` is `None` when the emission carried no payload for the watched
/// field. `loading` is the upstream flag, which may stay `true` after a first
/// partial payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryResult {
    pub data: Option<Vec<Satellite>>,
    pub loading: bool,
}

#[derive(Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    data: Option<serde_json::Map<String, Value>>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Deserialize)]
struct ResponseError {
    message: String,
}

impl QueryResult {
    /// A settled result carrying `data`.
    #[must_use]
    pub const fn loaded(data: Vec<Satellite>) -> Self {
        Self {
            data: Some(data),
            loading: false,
        }
    }

    /// An in-flight result without a payload.
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            data: None,
            loading: true,
        }
    }

    /// Returns `true` if the result carries at least one record.
    #[must_use]
    pub fn has_records(&self) -> bool {
        self.data.as_ref().is_some_and(|data| !data.is_empty())
    }

    /// Decode a GraphQL response body for `query`.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] when the body is not valid JSON, when the
    /// watched field does not hold a list of satellites, or when the server
    /// reported errors. Server messages are joined with `"; "`.
    pub fn from_graphql_response(query: &QueryDescriptor, body: &str) -> Result<Self, QueryError> {
        let envelope: ResponseEnvelope = serde_json::from_str(body)?;

        if !envelope.errors.is_empty() {
            let messages: Vec<&str> = envelope
                .errors
                .iter()
                .map(|error| error.message.as_str())
                .collect();
            return Err(QueryError::new(messages.join("; ")));
        }

        let data = match envelope.data.and_then(|mut data| data.remove(query.field())) {
            None | Some(Value::Null) => None,
            Some(value) => Some(serde_json::from_value::<Vec<Satellite>>(value)?),
        };

        Ok(Self {
            data,
            loading: false,
        })
    }
}
