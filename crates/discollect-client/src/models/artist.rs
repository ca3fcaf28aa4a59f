// SPDX-License-Identifier: GPL-3.0-or-later

use crate::client::DiscogsClient;
use crate::error::{DiscogsError, MissingValue, Result};
use crate::json::{DiscogsUrl, Fields, JsonObject};
use crate::models::{Page, Release};
use serde::Serialize;
use tracing::debug;

/// An artist as returned by `/artists/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Artist {
    pub id: Option<u64>,
    pub name: Option<String>,
    /// Legal name, for artists performing under a pseudonym.
    pub realname: Option<String>,
    pub name_variations: Option<Vec<String>>,
    pub profile: Option<String>,
    /// Group members; each entry is the raw member object.
    pub members: Option<Vec<JsonObject>>,
    pub images: Option<Vec<JsonObject>>,
    pub urls: Option<Vec<DiscogsUrl>>,
    pub releases_url: Option<DiscogsUrl>,
    pub resource_url: Option<DiscogsUrl>,
    pub uri: Option<DiscogsUrl>,
    pub data_quality: Option<String>,
}

impl Artist {
    pub fn from_json(object: &JsonObject) -> Self {
        let fields = Fields::new(object);
        Self {
            id: fields.u64("id"),
            name: fields.string("name"),
            realname: fields.string("realname"),
            name_variations: fields.string_list("namevariations"),
            profile: fields.string("profile"),
            members: fields.object_list("members"),
            images: fields.object_list("images"),
            urls: fields.url_list("urls"),
            releases_url: fields.url("releases_url"),
            resource_url: fields.url("resource_url"),
            uri: fields.url("uri"),
            data_quality: fields.string("data_quality"),
        }
    }

    /// Fetch the first page of this artist's releases.
    pub async fn releases(&self, client: &DiscogsClient) -> Result<Page<Release>> {
        let Some(id) = self.id else {
            debug!(target: "discogs", "artist has no id, not fetching releases");
            return Err(DiscogsError::Validation(MissingValue::ArtistId));
        };
        client.get_artist_releases(id).await
    }
}

impl From<JsonObject> for Artist {
    fn from(object: JsonObject) -> Self {
        Self::from_json(&object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_artist() {
        let object = json!({
            "id": 108713,
            "name": "Nickelback",
            "realname": null,
            "namevariations": ["Nickleback", "NickelBack"],
            "profile": "Canadian rock band.",
            "members": [{"active": true, "id": 270222, "name": "Chad Kroeger"}],
            "images": [{"type": "primary", "uri": "", "height": 260, "width": 330}],
            "urls": ["http://www.nickelback.com/", "http://en.wikipedia.org/wiki/Nickelback"],
            "releases_url": "https://api.discogs.com/artists/108713/releases",
            "resource_url": "https://api.discogs.com/artists/108713",
            "uri": "https://www.discogs.com/artist/108713-Nickelback",
            "data_quality": "Needs Vote"
        });
        let artist = Artist::from_json(object.as_object().unwrap());

        assert_eq!(artist.id, Some(108713));
        assert_eq!(artist.name.as_deref(), Some("Nickelback"));
        assert_eq!(artist.realname, None);
        assert_eq!(artist.name_variations.as_ref().map(Vec::len), Some(2));
        assert_eq!(artist.members.as_ref().map(Vec::len), Some(1));
        assert_eq!(artist.urls.as_ref().map(Vec::len), Some(2));
        assert_eq!(
            artist.releases_url.as_ref().map(DiscogsUrl::as_str),
            Some("https://api.discogs.com/artists/108713/releases")
        );
        assert_eq!(
            artist.uri.as_ref().map(DiscogsUrl::as_str),
            Some("https://www.discogs.com/artist/108713-Nickelback")
        );
        assert_eq!(artist.data_quality.as_deref(), Some("Needs Vote"));
    }

    #[test]
    fn empty_object_decodes_to_all_absent() {
        let artist = Artist::from_json(&JsonObject::new());
        assert_eq!(artist, Artist::default());
    }

    #[test]
    fn bad_urls_are_absent() {
        let object = json!({"uri": "", "resource_url": "relative/path", "urls": "nope"});
        let artist = Artist::from(object.as_object().cloned().unwrap());
        assert_eq!(artist.uri, None);
        assert_eq!(artist.resource_url, None);
        assert_eq!(artist.urls, None);
    }

    #[test]
    fn urls_serialize_as_received() {
        let object = json!({
            "urls": ["http://www.warp.net", "HTTP://Aphex.Twin.COM"],
            "uri": "https://www.discogs.com",
            "resource_url": "https://api.discogs.com/artists/45"
        });
        let artist = Artist::from_json(object.as_object().unwrap());
        let reencoded = serde_json::to_value(&artist).unwrap();

        assert_eq!(reencoded["urls"], object["urls"]);
        assert_eq!(reencoded["uri"], object["uri"]);
        assert_eq!(reencoded["resource_url"], object["resource_url"]);
        assert_eq!(artist.uri.unwrap().url().as_str(), "https://www.discogs.com/");
    }
}
