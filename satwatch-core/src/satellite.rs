// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display};

/// A satellite as returned by the `allSatellites` query.
///
/// Field names on the wire are fixed by the query service: `name`, `satId`,
/// `tleDate`, `line1` and `line2`. `id` and `epoch` are accepted as aliases
/// when decoding.
///
/// The TLE lines and the epoch are carried as opaque text. The service
/// registers satellites before their first TLE arrives, so `null` or missing
/// text decodes as an empty string and a `null` id as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Satellite {
    pub name: String,
    #[serde(rename = "satId", alias = "id")]
    pub id: Option<i64>,
    #[serde(rename = "tleDate", alias = "epoch", default, deserialize_with = "text_or_empty")]
    pub epoch: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub line1: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub line2: String,
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Satellite {
    /// A satellite with an id and a TLE.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: i64,
        epoch: impl Into<String>,
        line1: impl Into<String>,
        line2: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: Some(id),
            epoch: epoch.into(),
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    /// A satellite registered without a TLE yet.
    #[must_use]
    pub fn awaiting_tle(name: impl Into<String>, id: Option<i64>) -> Self {
        Self {
            name: name.into(),
            id,
            epoch: String::new(),
            line1: String::new(),
            line2: String::new(),
        }
    }

    /// Returns `true` once a TLE has been recorded for the satellite.
    #[must_use]
    pub fn has_tle(&self) -> bool {
        !self.line1.is_empty() && !self.line2.is_empty()
    }
}

impl Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Satellite[name={}, id={}, epoch={}]", self.name, id, self.epoch),
            None => write!(f, "Satellite[name={}, id=-, epoch={}]", self.name, self.epoch),
        }
    }
}
