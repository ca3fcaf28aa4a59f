// SPDX-License-Identifier: GPL-3.0-or-later

use crate::json::{Fields, JsonObject};
use serde::Serialize;

/// Community statistics embedded in a release.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Community {
    pub contributors: Option<Vec<JsonObject>>,
    pub data_quality: Option<String>,
    /// Number of users who have the release in their collection.
    pub have: Option<u32>,
    /// Number of users who have the release in their wantlist.
    pub want: Option<u32>,
    pub rating: Option<Rating>,
    pub status: Option<String>,
    pub submitter: Option<JsonObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rating {
    pub average: Option<f64>,
    pub count: Option<u32>,
}

impl Community {
    pub fn from_json(object: &JsonObject) -> Self {
        let fields = Fields::new(object);
        Self {
            contributors: fields.object_list("contributors"),
            data_quality: fields.string("data_quality"),
            have: fields.u32("have"),
            want: fields.u32("want"),
            rating: fields.object("rating").map(|rating| Rating::from_json(&rating)),
            status: fields.string("status"),
            submitter: fields.object("submitter"),
        }
    }
}

impl Rating {
    pub fn from_json(object: &JsonObject) -> Self {
        let fields = Fields::new(object);
        Self {
            average: fields.f64("average"),
            count: fields.u32("count"),
        }
    }
}

impl From<JsonObject> for Community {
    fn from(object: JsonObject) -> Self {
        Self::from_json(&object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_rating_and_counts() {
        let object = json!({
            "contributors": [{"username": "memory", "resource_url": "https://api.discogs.com/users/memory"}],
            "data_quality": "Correct",
            "have": 252,
            "want": 42,
            "rating": {"average": 4.28, "count": 61},
            "status": "Accepted",
            "submitter": {"username": "memory"}
        });
        let community = Community::from_json(object.as_object().unwrap());

        assert_eq!(community.have, Some(252));
        assert_eq!(community.want, Some(42));
        assert_eq!(
            community.rating,
            Some(Rating {
                average: Some(4.28),
                count: Some(61)
            })
        );
        assert_eq!(community.contributors.map(|c| c.len()), Some(1));
        assert_eq!(
            community.submitter.unwrap().get("username"),
            Some(&json!("memory"))
        );
    }

    #[test]
    fn rating_is_absent_when_not_an_object() {
        let object = json!({"rating": 4.5});
        let community = Community::from_json(object.as_object().unwrap());
        assert_eq!(community.rating, None);
        assert_eq!(community, Community::default());
    }
}
