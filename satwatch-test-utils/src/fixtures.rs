// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use satwatch_core::{Notification, QueryError, QueryResult, Satellite, StreamItem};
use serde_json::json;

pub fn iss() -> Satellite {
    Satellite::new(
        "ISS",
        25544,
        "2024-01-01",
        "1 25544U 98067A   24001.50000000  .00016717  00000-0  10270-3 0  9005",
        "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537",
    )
}

pub fn hubble() -> Satellite {
    Satellite::new(
        "HST",
        20580,
        "2024-01-02",
        "1 20580U 90037B   24002.19265017  .00001433  00000-0  73117-4 0  9997",
        "2 20580  28.4699 288.8102 0002495 321.7771 171.5855 15.24179616 67567",
    )
}

pub fn noaa_19() -> Satellite {
    Satellite::new(
        "NOAA 19",
        33591,
        "2024-01-03",
        "1 33591U 09005A   24003.52014331  .00000211  00000-0  13892-3 0  9990",
        "2 33591  99.1044  47.6373 0013919 219.5466 140.4687 14.12813596768201",
    )
}

/// A settled emission carrying `data`.
pub fn loaded(data: Vec<Satellite>) -> Notification {
    StreamItem::Value(QueryResult::loaded(data))
}

/// An emission with the given payload and loading flag.
pub fn emission(data: Option<Vec<Satellite>>, loading: bool) -> Notification {
    StreamItem::Value(QueryResult { data, loading })
}

/// An in-flight emission carrying an empty list.
pub fn loading_empty() -> Notification {
    emission(Some(Vec::new()), true)
}

pub fn failure(message: &str) -> Notification {
    StreamItem::Error(QueryError::new(message))
}

/// A GraphQL response body listing `satellites` under `allSatellites`.
pub fn graphql_body(satellites: &[Satellite]) -> String {
    json!({ "data": { "allSatellites": satellites } }).to_string()
}

/// A satellite the service has registered but not yet fetched a TLE for.
pub fn awaiting_tle() -> Satellite {
    Satellite::awaiting_tle("NEW", Some(99999))
}
