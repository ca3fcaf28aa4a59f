// SPDX-License-Identifier: GPL-3.0-or-later

/// A single Discogs resource, rendered into path segments and query pairs.
///
/// Segments are kept unescaped here; [`crate::DiscogsClient::url_for`]
/// percent-encodes them when building the final URL.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Artist(u64),
    ArtistReleases(u64),
    Release(u64),
    MasterRelease(u64),
    MasterReleaseVersions(u64),
    Label(u64),
    LabelReleases(u64),
    /// Marketplace inventory; `params` are passed through in order.
    Inventory {
        username: String,
        params: Vec<(String, String)>,
    },
    Fee {
        price: f64,
        currency: Option<String>,
    },
    User(String),
    UserSubmissions(String),
    UserContributions(String),
    UserCollectionFolders(String),
    UserFolder {
        username: String,
        folder_id: u64,
    },
    UserFolderReleases {
        username: String,
        folder_id: u64,
    },
    UserWantlist(String),
}

impl Endpoint {
    pub fn path_segments(&self) -> Vec<String> {
        match self {
            Endpoint::Artist(id) => vec!["artists".into(), id.to_string()],
            Endpoint::ArtistReleases(id) => {
                vec!["artists".into(), id.to_string(), "releases".into()]
            }
            Endpoint::Release(id) => vec!["releases".into(), id.to_string()],
            Endpoint::MasterRelease(id) => vec!["masters".into(), id.to_string()],
            Endpoint::MasterReleaseVersions(id) => {
                vec!["masters".into(), id.to_string(), "versions".into()]
            }
            Endpoint::Label(id) => vec!["labels".into(), id.to_string()],
            Endpoint::LabelReleases(id) => {
                vec!["labels".into(), id.to_string(), "releases".into()]
            }
            Endpoint::Inventory { username, .. } => {
                vec!["users".into(), username.clone(), "inventory".into()]
            }
            Endpoint::Fee { price, currency } => {
                let mut segments = vec!["fee".to_string(), format_price(*price)];
                if let Some(currency) = currency {
                    segments.push(currency.clone());
                }
                segments
            }
            Endpoint::User(username) => vec!["users".into(), username.clone()],
            Endpoint::UserSubmissions(username) => {
                vec!["users".into(), username.clone(), "submissions".into()]
            }
            Endpoint::UserContributions(username) => {
                vec!["users".into(), username.clone(), "contributions".into()]
            }
            Endpoint::UserCollectionFolders(username) => vec![
                "users".into(),
                username.clone(),
                "collection".into(),
                "folders".into(),
            ],
            Endpoint::UserFolder {
                username,
                folder_id,
            } => vec![
                "users".into(),
                username.clone(),
                "collection".into(),
                "folders".into(),
                folder_id.to_string(),
            ],
            Endpoint::UserFolderReleases {
                username,
                folder_id,
            } => vec![
                "users".into(),
                username.clone(),
                "collection".into(),
                "folders".into(),
                folder_id.to_string(),
                "releases".into(),
            ],
            Endpoint::UserWantlist(username) => {
                vec!["users".into(), username.clone(), "wants".into()]
            }
        }
    }

    /// Whether the endpoint sends the client's page size as `per_page`.
    pub fn is_paginated(&self) -> bool {
        matches!(
            self,
            Endpoint::ArtistReleases(_)
                | Endpoint::MasterReleaseVersions(_)
                | Endpoint::LabelReleases(_)
                | Endpoint::UserSubmissions(_)
                | Endpoint::UserContributions(_)
                | Endpoint::UserFolderReleases { .. }
                | Endpoint::UserWantlist(_)
        )
    }

    pub fn query(&self, per_page: u32) -> Vec<(String, String)> {
        match self {
            Endpoint::Inventory { params, .. } => params.clone(),
            _ if self.is_paginated() => vec![("per_page".to_string(), per_page.to_string())],
            _ => Vec::new(),
        }
    }
}

/// Whole prices keep one decimal place (`10.0`); others use the shortest
/// exact form (`9.99`).
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        price.to_string()
    }
}
