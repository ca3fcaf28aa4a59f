// SPDX-License-Identifier: GPL-3.0-or-later

use crate::client::DiscogsClient;
use crate::error::{DiscogsError, MissingValue, Result};
use crate::json::{DiscogsUrl, Fields, JsonObject};
use serde::Serialize;
use tracing::debug;

/// A public user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub profile: Option<String>,
    pub location: Option<String>,
    /// Registration timestamp exactly as returned by the API.
    pub registered: Option<String>,
    /// Only present when the profile owner is authenticated.
    pub email: Option<String>,
    pub homepage: Option<DiscogsUrl>,
    pub rank: Option<u64>,
    pub num_pending: Option<u32>,
    pub releases_contributed: Option<u32>,
    pub releases_rated: Option<u32>,
    pub rating_avg: Option<f64>,
    pub num_lists: Option<u32>,
    pub num_collection: Option<u32>,
    pub num_wantlist: Option<u32>,
    pub num_for_sale: Option<u32>,
    pub collection_fields_url: Option<DiscogsUrl>,
    pub collection_folders_url: Option<DiscogsUrl>,
    pub wantlist_url: Option<DiscogsUrl>,
    pub inventory_url: Option<DiscogsUrl>,
    pub avatar_url: Option<DiscogsUrl>,
    pub uri: Option<DiscogsUrl>,
    pub resource_url: Option<DiscogsUrl>,
}

impl User {
    pub fn from_json(object: &JsonObject) -> Self {
        let fields = Fields::new(object);
        Self {
            id: fields.u64("id"),
            name: fields.string("name"),
            username: fields.string("username"),
            profile: fields.string("profile"),
            location: fields.string("location"),
            registered: fields.string("registered"),
            email: fields.string("email"),
            homepage: fields.url("home_page"),
            rank: fields.u64("rank"),
            num_pending: fields.u32("num_pending"),
            releases_contributed: fields.u32("releases_contributed"),
            releases_rated: fields.u32("releases_rated"),
            rating_avg: fields.f64("rating_avg"),
            num_lists: fields.u32("num_lists"),
            num_collection: fields.u32("num_collection"),
            num_wantlist: fields.u32("num_wantlist"),
            num_for_sale: fields.u32("num_for_sale"),
            collection_fields_url: fields.url("collection_fields_url"),
            collection_folders_url: fields.url("collection_folders_url"),
            wantlist_url: fields.url("wantlist_url"),
            inventory_url: fields.url("inventory_url"),
            avatar_url: fields.url("avatar_url"),
            uri: fields.url("uri"),
            resource_url: fields.url("resource_url"),
        }
    }

    fn require_username(&self) -> Result<&str> {
        match self.username.as_deref() {
            Some(username) if !username.trim().is_empty() => Ok(username),
            _ => {
                debug!(target: "discogs", user_id = ?self.id, "user has no username");
                Err(DiscogsError::Validation(MissingValue::Username))
            }
        }
    }

    /// Fetch the user's database submissions, as raw JSON.
    pub async fn submissions(&self, client: &DiscogsClient) -> Result<JsonObject> {
        let username = self.require_username()?;
        client.get_user_submissions(username).await
    }

    /// Fetch the user's database contributions, as raw JSON.
    pub async fn contributions(&self, client: &DiscogsClient) -> Result<JsonObject> {
        let username = self.require_username()?;
        client.get_user_contributions(username).await
    }
}

impl From<JsonObject> for User {
    fn from(object: JsonObject) -> Self {
        Self::from_json(&object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_profile() {
        let object = json!({
            "id": 1578108,
            "username": "rodneyfool",
            "name": "Rodney",
            "profile": "I am a software developer for Discogs.",
            "location": "Portland",
            "registered": "2012-08-15T21:13:36-07:00",
            "home_page": "",
            "rank": 149.0,
            "num_pending": 61,
            "releases_contributed": 5,
            "releases_rated": 1,
            "rating_avg": 3.47,
            "num_lists": 0,
            "num_collection": 6,
            "num_wantlist": 5,
            "num_for_sale": 0,
            "collection_folders_url": "https://api.discogs.com/users/rodneyfool/collection/folders",
            "wantlist_url": "https://api.discogs.com/users/rodneyfool/wants",
            "inventory_url": "https://api.discogs.com/users/rodneyfool/inventory",
            "avatar_url": "https://img.discogs.com/mDaw_OUjHspYLj77C_tcobr2eXc=/500x500/ag.jpeg",
            "uri": "https://www.discogs.com/user/rodneyfool",
            "resource_url": "https://api.discogs.com/users/rodneyfool"
        });
        let user = User::from_json(object.as_object().unwrap());

        assert_eq!(user.id, Some(1578108));
        assert_eq!(user.username.as_deref(), Some("rodneyfool"));
        assert_eq!(user.registered.as_deref(), Some("2012-08-15T21:13:36-07:00"));
        assert_eq!(user.homepage, None);
        assert_eq!(user.rank, Some(149));
        assert_eq!(user.num_pending, Some(61));
        assert_eq!(user.rating_avg, Some(3.47));
        assert_eq!(user.email, None);
        assert_eq!(
            user.inventory_url.as_ref().map(DiscogsUrl::as_str),
            Some("https://api.discogs.com/users/rodneyfool/inventory")
        );
    }

    #[test]
    fn blank_username_is_missing() {
        let user = User {
            username: Some(String::new()),
            ..User::default()
        };
        assert!(matches!(
            user.require_username(),
            Err(DiscogsError::Validation(MissingValue::Username))
        ));
    }
}
