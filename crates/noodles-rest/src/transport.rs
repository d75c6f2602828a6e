//! HTTP transport
//!
//! One shared [`reqwest::Client`] carries the per-client headers (API key,
//! content negotiation, user agent). Per-call headers such as `x-chain`
//! travel as an [`AmbientHeaders`] overlay applied to a single request, so
//! concurrent calls with different chains never observe each other.

use crate::client::ClientConfig;
use crate::credentials::ApiKey;
use crate::error::{classify_response, classify_transport_error, RestResult};
use crate::routes::{Route, Verb};
use noodles_types::{ApiResponse, Chain, NoodlesError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT_ENCODING, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header selecting the blockchain for chain-scoped endpoints
pub const CHAIN_HEADER: &str = "x-chain";

/// Headers added to one request only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbientHeaders {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl AmbientHeaders {
    /// No extra headers
    pub fn none() -> Self {
        Self::default()
    }

    /// `x-chain: <chain>`
    pub fn chain(chain: &Chain) -> RestResult<Self> {
        Self::none().with(CHAIN_HEADER, chain.as_str())
    }

    /// Add a header to the overlay
    pub fn with(mut self, name: &str, value: &str) -> RestResult<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| NoodlesError::invalid_request(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            NoodlesError::invalid_request(format!("invalid value for header {name}: {e}"))
        })?;
        self.headers.retain(|(existing, _)| *existing != name);
        self.headers.push((name, value));
        Ok(self)
    }

    /// Look up a header by name
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.headers
            .iter()
            .find(|(n, _)| n.as_str().eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    fn apply(&self, mut request: RequestBuilder) -> RequestBuilder {
        for (name, value) in &self.headers {
            request = request.header(name.clone(), value.clone());
        }
        request
    }
}

/// Executes requests against the Noodles API
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build the transport
    ///
    /// Fails with a configuration error if the base URL does not parse or the
    /// HTTP client cannot be created. Never panics.
    pub fn new(api_key: &ApiKey, config: &ClientConfig) -> RestResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| {
            NoodlesError::configuration(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;
        if parsed.cannot_be_a_base() {
            return Err(NoodlesError::configuration(format!(
                "base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key.header_value()?);
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| NoodlesError::configuration(format!("failed to build HTTP client: {e}")))?;

        info!(base_url = %base_url, "Created Noodles HTTP transport");

        Ok(Self { client, base_url })
    }

    /// Base URL all paths are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> RestResult<Url> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&joined)
            .map_err(|e| NoodlesError::invalid_request(format!("invalid request URL {joined}: {e}")))
    }

    /// Send a GET with `query` serialized as URL query parameters
    ///
    /// `None` fields are omitted. Encoding failures are reported before any
    /// network I/O.
    #[instrument(skip(self, query, ambient))]
    pub async fn execute_get<T, Q>(
        &self,
        path: &str,
        query: &Q,
        ambient: &AmbientHeaders,
    ) -> RestResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut url = self.url(path)?;
        let encoded = serde_urlencoded::to_string(query).map_err(|e| {
            NoodlesError::invalid_request(format!("failed to encode query for {path}: {e}"))
        })?;
        if !encoded.is_empty() {
            url.set_query(Some(&encoded));
        }

        debug!(url = %url, "GET");
        self.send(ambient.apply(self.client.get(url))).await
    }

    /// Send a POST with `body` serialized as JSON
    #[instrument(skip(self, body, ambient))]
    pub async fn execute_post<T, B>(
        &self,
        path: &str,
        body: &B,
        ambient: &AmbientHeaders,
    ) -> RestResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let payload = serde_json::to_vec(body).map_err(|e| {
            NoodlesError::invalid_request(format!("failed to encode body for {path}: {e}"))
        })?;

        debug!(url = %url, bytes = payload.len(), "POST");
        self.send(ambient.apply(self.client.post(url).body(payload)))
            .await
    }

    /// Execute a route from the endpoint table
    ///
    /// Chain-scoped routes always send `x-chain`, using `chain` or the
    /// default chain when none is given. Other routes never send it.
    pub async fn call<T, P>(
        &self,
        route: &Route,
        params: &P,
        chain: Option<&Chain>,
    ) -> RestResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let ambient = if route.chain_scoped {
            match chain {
                Some(chain) => AmbientHeaders::chain(chain)?,
                None => AmbientHeaders::chain(&Chain::default())?,
            }
        } else {
            AmbientHeaders::none()
        };

        match route.verb {
            Verb::Get => self.execute_get(route.path, params, &ambient).await,
            Verb::Post => self.execute_post(route.path, params, &ambient).await,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> RestResult<ApiResponse<T>> {
        let response = request.send().await.map_err(classify_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(classify_transport_error)?;

        if !status.is_success() {
            let err = classify_response(status, &body);
            warn!(status = status.as_u16(), kind = %err.kind(), message = %err.message(), "Request failed");
            return Err(err);
        }

        let envelope = decode_envelope(status, &body)?;
        debug!(status = status.as_u16(), has_payload = envelope.payload().is_some(), "Response received");
        Ok(envelope)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Decode a 2xx body into the response envelope
///
/// An envelope whose `code` is not 200 is classified like an error response.
fn decode_envelope<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> RestResult<ApiResponse<T>> {
    let raw: ApiResponse<Value> = serde_json::from_slice(body).map_err(|e| NoodlesError::Decode {
        status_code: status.as_u16(),
        message: format!("invalid response envelope: {e}"),
    })?;

    if !raw.is_success() {
        return Err(NoodlesError::from_vendor(
            raw.status_code,
            raw.message,
            raw.payload,
        ));
    }

    let payload = raw
        .payload
        .map(serde_json::from_value::<T>)
        .transpose()
        .map_err(|e| NoodlesError::Decode {
            status_code: status.as_u16(),
            message: format!("invalid response payload: {e}"),
        })?;

    Ok(ApiResponse {
        status_code: raw.status_code,
        message: raw.message,
        payload,
    })
}
