// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only client for the Discogs database API.
//!
//! [`DiscogsClient`] exposes one async method per resource (artists,
//! releases, master releases, labels, users, inventories, fees). Responses
//! are decoded leniently into the entities in [`models`]: a missing or
//! mistyped field reads as `None` instead of failing the whole response.
//!
//! Entities carry follow-up lookups such as [`Artist::releases`]; these
//! fail with [`DiscogsError::Validation`] without touching the network when
//! the entity lacks the identifier they need.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod json;
pub mod models;
pub mod transport;

pub use client::{DiscogsClient, DiscogsClientBuilder};
pub use discollect_config::ClientConfig;
pub use endpoint::Endpoint;
pub use error::{DiscogsError, ErrorKind, MissingValue, Result, MISSING_VALUE_CODE};
pub use json::{DiscogsUrl, JsonObject};
pub use models::{
    Artist, Community, Label, MasterRelease, Page, Rating, Release, Track, User,
};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
