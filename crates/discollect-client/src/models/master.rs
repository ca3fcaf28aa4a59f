// SPDX-License-Identifier: GPL-3.0-or-later

use crate::client::DiscogsClient;
use crate::error::{DiscogsError, MissingValue, Result};
use crate::json::{DiscogsUrl, Fields, JsonObject};
use crate::models::release::tracklist;
use crate::models::{Page, Release, Track};
use serde::Serialize;
use tracing::debug;

/// A master release: the grouping of all versions of one recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MasterRelease {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub artists: Option<Vec<JsonObject>>,
    /// Id of the release chosen as the canonical version.
    pub main_release: Option<u64>,
    pub year: Option<u16>,
    pub genres: Option<Vec<String>>,
    pub styles: Option<Vec<String>>,
    pub images: Option<Vec<JsonObject>>,
    pub tracklist: Option<Vec<Track>>,
    pub videos: Option<Vec<JsonObject>>,
    pub main_release_url: Option<DiscogsUrl>,
    pub versions_url: Option<DiscogsUrl>,
    pub resource_url: Option<DiscogsUrl>,
    pub uri: Option<DiscogsUrl>,
    pub data_quality: Option<String>,
}

impl MasterRelease {
    pub fn from_json(object: &JsonObject) -> Self {
        let fields = Fields::new(object);
        Self {
            id: fields.u64("id"),
            title: fields.string("title"),
            artists: fields.object_list("artists"),
            main_release: fields.u64("main_release"),
            year: fields.u16("year"),
            genres: fields.string_list("genres"),
            styles: fields.string_list("styles"),
            images: fields.object_list("images"),
            tracklist: tracklist(&fields),
            videos: fields.object_list("videos"),
            main_release_url: fields.url("main_release_url"),
            versions_url: fields.url("versions_url"),
            resource_url: fields.url("resource_url"),
            uri: fields.url("uri"),
            data_quality: fields.string("data_quality"),
        }
    }

    /// Fetch the first page of versions of this master release.
    pub async fn versions(&self, client: &DiscogsClient) -> Result<Page<Release>> {
        let Some(id) = self.id else {
            debug!(target: "discogs", "master release has no id, not fetching versions");
            return Err(DiscogsError::Validation(MissingValue::MasterId));
        };
        client.get_master_release_versions(id).await
    }
}

impl From<JsonObject> for MasterRelease {
    fn from(object: JsonObject) -> Self {
        Self::from_json(&object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_master() {
        let object = json!({
            "id": 1000,
            "title": "Stardiver",
            "main_release": 66785,
            "main_release_url": "https://api.discogs.com/releases/66785",
            "versions_url": "https://api.discogs.com/masters/1000/versions",
            "year": 1997,
            "genres": ["Electronic"],
            "styles": ["Electro"],
            "artists": [{"id": 21849, "name": "Electric Universe"}],
            "tracklist": [{"duration": "7:00", "position": "1", "title": "Alien Invasion", "type_": "track"}],
            "data_quality": "Correct"
        });
        let master = MasterRelease::from_json(object.as_object().unwrap());

        assert_eq!(master.id, Some(1000));
        assert_eq!(master.main_release, Some(66785));
        assert_eq!(master.year, Some(1997));
        assert_eq!(
            master.versions_url.as_ref().map(DiscogsUrl::as_str),
            Some("https://api.discogs.com/masters/1000/versions")
        );
        assert_eq!(master.tracklist.unwrap()[0].duration, Some(420.0));
        assert_eq!(master.images, None);
        assert_eq!(master.uri, None);
    }

    #[test]
    fn mistyped_fields_are_absent() {
        let object = json!({"id": "1000", "year": "1997", "tracklist": {"position": "1"}});
        let master = MasterRelease::from_json(object.as_object().unwrap());
        assert_eq!(master, MasterRelease::default());
    }
}
