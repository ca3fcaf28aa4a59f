// SPDX-License-Identifier: GPL-3.0-or-later

use crate::client::DiscogsClient;
use crate::error::{DiscogsError, MissingValue, Result};
use crate::json::{DiscogsUrl, Fields, JsonObject};
use crate::models::{Community, MasterRelease, Track};
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// A release as returned by `/releases/{id}` or inside a release listing.
///
/// Listing entries carry only a subset of these fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Release {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub artists: Option<Vec<JsonObject>>,
    pub extra_artists: Option<Vec<JsonObject>>,
    pub master_id: Option<u64>,
    pub labels: Option<Vec<JsonObject>>,
    pub formats: Option<Vec<JsonObject>>,
    pub format_quantity: Option<u32>,
    pub notes: Option<String>,
    /// Release date as entered, e.g. "1987-00-00".
    pub released: Option<String>,
    pub released_formatted: Option<String>,
    pub country: Option<String>,
    pub year: Option<u16>,
    pub genres: Option<Vec<String>>,
    pub styles: Option<Vec<String>>,
    /// Estimated weight in grams.
    pub estimated_weight: Option<f64>,
    pub identifiers: Option<Vec<JsonObject>>,
    pub status: Option<String>,
    pub date_added: Option<NaiveDateTime>,
    pub date_changed: Option<NaiveDateTime>,
    pub images: Option<Vec<JsonObject>>,
    pub tracklist: Option<Vec<Track>>,
    pub companies: Option<Vec<JsonObject>>,
    pub videos: Option<Vec<JsonObject>>,
    pub series: Option<Vec<Value>>,
    pub community: Option<Community>,
    pub master_url: Option<DiscogsUrl>,
    pub resource_url: Option<DiscogsUrl>,
    pub uri: Option<DiscogsUrl>,
    pub data_quality: Option<String>,
    pub thumb: Option<DiscogsUrl>,
}

impl Release {
    pub fn from_json(object: &JsonObject) -> Self {
        let fields = Fields::new(object);
        Self {
            id: fields.u64("id"),
            title: fields.string("title"),
            artists: fields.object_list("artists"),
            extra_artists: fields.object_list("extraartists"),
            master_id: fields.u64("master_id"),
            labels: fields.object_list("labels"),
            formats: fields.object_list("formats"),
            format_quantity: fields.u32("format_quantity"),
            notes: fields.string("notes"),
            released: fields.string("released"),
            released_formatted: fields.string("released_formatted"),
            country: fields.string("country"),
            year: fields.u16("year"),
            genres: fields.string_list("genres"),
            styles: fields.string_list("styles"),
            estimated_weight: fields.f64("estimated_weight"),
            identifiers: fields.object_list("identifiers"),
            status: fields.string("status"),
            date_added: fields.date("date_added"),
            date_changed: fields.date("date_changed"),
            images: fields.object_list("images"),
            tracklist: tracklist(&fields),
            companies: fields.object_list("companies"),
            videos: fields.object_list("videos"),
            series: fields.list("series"),
            community: fields
                .object("community")
                .map(|community| Community::from_json(&community)),
            master_url: fields.url("master_url"),
            resource_url: fields.url("resource_url"),
            uri: fields.url("uri"),
            data_quality: fields.string("data_quality"),
            thumb: fields.url("thumb"),
        }
    }

    /// Fetch the master release this release belongs to.
    pub async fn master_release(&self, client: &DiscogsClient) -> Result<MasterRelease> {
        let Some(master_id) = self.master_id else {
            debug!(target: "discogs", release_id = ?self.id, "release has no master id");
            return Err(DiscogsError::Validation(MissingValue::ReleaseMasterId));
        };
        client.get_master_release(master_id).await
    }
}

impl From<JsonObject> for Release {
    fn from(object: JsonObject) -> Self {
        Self::from_json(&object)
    }
}

pub(crate) fn tracklist(fields: &Fields<'_>) -> Option<Vec<Track>> {
    fields
        .object_list("tracklist")
        .map(|tracks| tracks.iter().map(Track::from_json).collect())
}
