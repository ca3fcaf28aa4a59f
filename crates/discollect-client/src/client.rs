// SPDX-License-Identifier: GPL-3.0-or-later

use crate::endpoint::Endpoint;
use crate::error::{DiscogsError, MissingValue, Result};
use crate::json::{kind_name, JsonObject};
use crate::models::{Artist, Label, MasterRelease, Page, Release, User};
use crate::transport::{ReqwestTransport, Transport, TransportResponse};
use discollect_config::{ClientConfig, DEFAULT_HOST, DEFAULT_PER_PAGE, DEFAULT_SCHEME, DEFAULT_USER_AGENT};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, trace};
use url::Url;

/// Read-only client for the Discogs database API.
///
/// Each call issues exactly one unauthenticated GET request. Nothing is
/// cached or retried; callers are responsible for staying inside the API's
/// rate limits.
#[derive(Debug, Clone)]
pub struct DiscogsClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    user_agent: String,
    per_page: u32,
}

impl DiscogsClient {
    /// Create a client for the public Discogs API with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> DiscogsClientBuilder {
        DiscogsClientBuilder::default()
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Render the full request URL for `endpoint`. Path segments and query
    /// values are percent-encoded.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DiscogsError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(endpoint.path_segments());

        let query = endpoint.query(self.per_page);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    // ------------------------------------------------------------------
    // Artists
    // ------------------------------------------------------------------

    /// Look up an artist by Discogs id.
    ///
    /// # Example
    /// ```no_run
    /// # use discollect_client::DiscogsClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = DiscogsClient::new()?;
    /// let artist = client.get_artist(108713).await?;
    /// println!("{:?}", artist.name);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn get_artist(&self, artist_id: u64) -> Result<Artist> {
        let object = self.fetch(&Endpoint::Artist(artist_id)).await?;
        Ok(Artist::from_json(&object))
    }

    /// First page of an artist's releases.
    #[instrument(skip(self))]
    pub async fn get_artist_releases(&self, artist_id: u64) -> Result<Page<Release>> {
        let object = self.fetch(&Endpoint::ArtistReleases(artist_id)).await?;
        Page::from_json(&object, &["releases"], Release::from_json)
    }

    // ------------------------------------------------------------------
    // Releases
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn get_release(&self, release_id: u64) -> Result<Release> {
        let object = self.fetch(&Endpoint::Release(release_id)).await?;
        Ok(Release::from_json(&object))
    }

    #[instrument(skip(self))]
    pub async fn get_master_release(&self, master_id: u64) -> Result<MasterRelease> {
        let object = self.fetch(&Endpoint::MasterRelease(master_id)).await?;
        Ok(MasterRelease::from_json(&object))
    }

    /// First page of all versions of a master release.
    ///
    /// Requests `/masters/{id}/versions` rather than `/masters/{id}`: only
    /// the versions listing is paginated. Versions are listed under
    /// `versions`; a `releases` list is accepted too.
    #[instrument(skip(self))]
    pub async fn get_master_release_versions(&self, master_id: u64) -> Result<Page<Release>> {
        let object = self
            .fetch(&Endpoint::MasterReleaseVersions(master_id))
            .await?;
        Page::from_json(&object, &["versions", "releases"], Release::from_json)
    }

    // ------------------------------------------------------------------
    // Labels
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn get_label(&self, label_id: u64) -> Result<Label> {
        let object = self.fetch(&Endpoint::Label(label_id)).await?;
        Ok(Label::from_json(&object))
    }

    #[instrument(skip(self))]
    pub async fn get_label_releases(&self, label_id: u64) -> Result<Page<Release>> {
        let object = self.fetch(&Endpoint::LabelReleases(label_id)).await?;
        Page::from_json(&object, &["releases"], Release::from_json)
    }

    // ------------------------------------------------------------------
    // Marketplace
    // ------------------------------------------------------------------

    /// A seller's public inventory. `params` (status, sort, page, ...) are
    /// sent unmodified, in the order given.
    #[instrument(skip(self, params))]
    pub async fn get_inventory<I, K, V>(&self, username: &str, params: I) -> Result<JsonObject>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let username = require_username(username)?;
        let params = params
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.fetch(&Endpoint::Inventory {
            username: username.to_string(),
            params,
        })
        .await
    }

    /// Marketplace fee for `price`, in `currency` when given (USD otherwise).
    ///
    /// Non-finite or negative prices fail with [`DiscogsError::InvalidPrice`]
    /// without a request being sent.
    #[instrument(skip(self))]
    pub async fn get_fee(&self, price: f64, currency: Option<&str>) -> Result<JsonObject> {
        if !price.is_finite() || price < 0.0 {
            debug!(target: "discogs", price, "rejecting fee price");
            return Err(DiscogsError::InvalidPrice(price));
        }
        self.fetch(&Endpoint::Fee {
            price,
            currency: currency.map(str::to_string),
        })
        .await
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> Result<User> {
        let username = require_username(username)?;
        let object = self.fetch(&Endpoint::User(username.to_string())).await?;
        Ok(User::from_json(&object))
    }

    #[instrument(skip(self))]
    pub async fn get_user_submissions(&self, username: &str) -> Result<JsonObject> {
        let username = require_username(username)?;
        self.fetch(&Endpoint::UserSubmissions(username.to_string()))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_user_contributions(&self, username: &str) -> Result<JsonObject> {
        let username = require_username(username)?;
        self.fetch(&Endpoint::UserContributions(username.to_string()))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_user_collection_folders(&self, username: &str) -> Result<JsonObject> {
        let username = require_username(username)?;
        self.fetch(&Endpoint::UserCollectionFolders(username.to_string()))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_user_folder_metadata(
        &self,
        username: &str,
        folder_id: u64,
    ) -> Result<JsonObject> {
        let username = require_username(username)?;
        self.fetch(&Endpoint::UserFolder {
            username: username.to_string(),
            folder_id,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_user_folder_releases(
        &self,
        username: &str,
        folder_id: u64,
    ) -> Result<JsonObject> {
        let username = require_username(username)?;
        self.fetch(&Endpoint::UserFolderReleases {
            username: username.to_string(),
            folder_id,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_user_wantlist(&self, username: &str) -> Result<JsonObject> {
        let username = require_username(username)?;
        self.fetch(&Endpoint::UserWantlist(username.to_string()))
            .await
    }

    // ------------------------------------------------------------------
    // Raw access
    // ------------------------------------------------------------------

    /// GET `path` (appended verbatim to the base URL) with `query` pairs in
    /// the order given, returning the decoded top-level JSON object.
    pub async fn get_json<K, V>(&self, path: &str, query: &[(K, V)]) -> Result<JsonObject>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            self.base_url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_ref(), v.as_ref())));
        }
        self.perform_get(url).await
    }

    async fn fetch(&self, endpoint: &Endpoint) -> Result<JsonObject> {
        let url = self.url_for(endpoint)?;
        self.perform_get(url).await
    }

    async fn perform_get(&self, url: Url) -> Result<JsonObject> {
        trace!(target: "discogs", %url, "GET");

        let response = self.transport.get(url, &self.user_agent).await?;
        debug!(target: "discogs", status = %response.status, "response status");

        decode_response(response)
    }
}

/// Usernames are path segments; a blank one would address a different resource.
fn require_username(username: &str) -> Result<&str> {
    if username.trim().is_empty() {
        debug!(target: "discogs", "blank username, not sending request");
        return Err(DiscogsError::Validation(MissingValue::Username));
    }
    Ok(username)
}

/// Turn a raw response into the top-level JSON object it must contain.
fn decode_response(response: TransportResponse) -> Result<JsonObject> {
    if !response.status.is_success() {
        return Err(DiscogsError::HttpStatus {
            status: response.status,
            message: error_message(&response.body),
        });
    }

    match serde_json::from_slice::<Value>(&response.body)? {
        Value::Object(object) => Ok(object),
        other => Err(DiscogsError::NotAnObject(kind_name(&other))),
    }
}

/// Discogs reports errors as `{"message": "..."}`; fall back to the raw body.
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
}

/// Builder for configuring a Discogs client.
#[derive(Debug)]
pub struct DiscogsClientBuilder {
    scheme: String,
    host: String,
    base_url: Option<String>,
    user_agent: String,
    per_page: u32,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for DiscogsClientBuilder {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            base_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout: None,
            transport: None,
        }
    }
}

impl DiscogsClientBuilder {
    /// Take every setting from a loaded [`ClientConfig`].
    pub fn config(mut self, config: &ClientConfig) -> Self {
        self.scheme = config.scheme.clone();
        self.host = config.host.clone();
        self.user_agent = config.user_agent.clone();
        self.per_page = config.per_page;
        self.timeout = config.timeout_secs.map(Duration::from_secs);
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Host name, optionally with a port.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set a complete base URL, overriding scheme and host (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Page size for paginated endpoints.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Request timeout for the default transport. Unset keeps reqwest's default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the HTTP transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<DiscogsClient> {
        let raw_base = self.base_url.unwrap_or_else(|| {
            ClientConfig {
                scheme: self.scheme,
                host: self.host,
                ..ClientConfig::default()
            }
            .base_url()
        });
        let base_url = Url::parse(&raw_base)?;
        if base_url.cannot_be_a_base() {
            return Err(DiscogsError::InvalidBaseUrl(raw_base));
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.timeout)?),
        };

        debug!(target: "discogs", %base_url, "Initialized Discogs client");

        Ok(DiscogsClient {
            transport,
            base_url,
            user_agent: self.user_agent,
            per_page: self.per_page,
        })
    }
}
