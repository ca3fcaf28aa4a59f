// SPDX-License-Identifier: GPL-3.0-or-later

use crate::client::DiscogsClient;
use crate::error::{DiscogsError, MissingValue, Result};
use crate::json::{DiscogsUrl, Fields, JsonObject};
use crate::models::{Page, Release};
use serde::Serialize;
use tracing::debug;

/// A record label.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Label {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub profile: Option<String>,
    pub contact_info: Option<String>,
    pub sublabels: Option<Vec<JsonObject>>,
    pub images: Option<Vec<JsonObject>>,
    pub urls: Option<Vec<DiscogsUrl>>,
    pub releases_url: Option<DiscogsUrl>,
    pub resource_url: Option<DiscogsUrl>,
    pub uri: Option<DiscogsUrl>,
    pub data_quality: Option<String>,
}

impl Label {
    pub fn from_json(object: &JsonObject) -> Self {
        let fields = Fields::new(object);
        Self {
            id: fields.u64("id"),
            name: fields.string("name"),
            profile: fields.string("profile"),
            contact_info: fields.string("contact_info"),
            sublabels: fields.object_list("sublabels"),
            images: fields.object_list("images"),
            urls: fields.url_list("urls"),
            releases_url: fields.url("releases_url"),
            resource_url: fields.url("resource_url"),
            uri: fields.url("uri"),
            data_quality: fields.string("data_quality"),
        }
    }

    /// Fetch the first page of releases on this label.
    pub async fn releases(&self, client: &DiscogsClient) -> Result<Page<Release>> {
        let Some(id) = self.id else {
            debug!(target: "discogs", "label has no id, not fetching releases");
            return Err(DiscogsError::Validation(MissingValue::LabelId));
        };
        client.get_label_releases(id).await
    }
}

impl From<JsonObject> for Label {
    fn from(object: JsonObject) -> Self {
        Self::from_json(&object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_label() {
        let object = json!({
            "id": 1,
            "name": "Planet E",
            "profile": "Classic Techno label from Detroit, USA.",
            "contact_info": "Planet E Communications\r\nP.O. Box 27218\r\nDetroit, 48227, USA",
            "sublabels": [{"id": 86537, "name": "Antidote (4)"}, {"id": 41841, "name": "Community Projects"}],
            "urls": ["http://www.planet-e.net", "http://planetecommunications.bandcamp.com"],
            "releases_url": "https://api.discogs.com/labels/1/releases",
            "resource_url": "https://api.discogs.com/labels/1",
            "uri": "https://www.discogs.com/label/1-Planet-E",
            "data_quality": "Needs Vote"
        });
        let label = Label::from_json(object.as_object().unwrap());

        assert_eq!(label.id, Some(1));
        assert_eq!(label.name.as_deref(), Some("Planet E"));
        assert!(label.contact_info.unwrap().contains("Detroit"));
        assert_eq!(label.sublabels.map(|s| s.len()), Some(2));
        assert_eq!(label.urls.map(|u| u.len()), Some(2));
        assert_eq!(
            label.releases_url.as_ref().map(DiscogsUrl::as_str),
            Some("https://api.discogs.com/labels/1/releases")
        );
        assert_eq!(label.images, None);
    }
}
