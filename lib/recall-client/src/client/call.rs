use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::pin::Pin;

use bytes::Bytes;
use headers::HeaderMapExt;
use http::HeaderValue;
use http::header::{AUTHORIZATION, HeaderName};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use url::Url;

use super::RecallClient;
use super::cancel::EffectiveCancellation;
use super::endpoint::Endpoint;
use super::error::{RecallError, truncated_body};
use super::transport::RawResponse;

/// Header used to let the remote service deduplicate retried mutations.
const IDEMPOTENCY_HEADER: HeaderName = HeaderName::from_static("idempotency-key");

/// One prepared API operation, executed by awaiting it.
///
/// `Call` is built by the resource facades and carries everything a single
/// request needs: the operation descriptor, the resolved identifier, an
/// optional query/body, and the per-call options. Awaiting it performs the
/// exchange and either resolves with the deserialized payload or rejects with
/// a [`RecallError`].
///
/// ```rust,no_run
/// use recall_client::RecallClient;
/// # use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), recall_client::RecallError> {
/// let client = RecallClient::builder().with_api_key("my-key").build()?;
///
/// let bot = client
///     .bot()
///     .retrieve("bot-123")
///     .with_cancellation(CancellationToken::new())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Call<T> {
    client: RecallClient,
    endpoint: Endpoint,
    id: Option<String>,
    query: Option<String>,
    body: Option<Value>,
    idempotency_key: Option<String>,
    cancel: Option<CancellationToken>,
    invalid: Option<RecallError>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Call<T> {
    pub(crate) fn new(client: &RecallClient, endpoint: Endpoint, id: Option<String>) -> Self {
        Self {
            client: client.clone(),
            endpoint,
            id,
            query: None,
            body: None,
            idempotency_key: None,
            cancel: None,
            invalid: None,
            _marker: PhantomData,
        }
    }

    /// Sets the query string from a serializable set of parameters.
    ///
    /// The typed query structs in [`types`](crate::types) document which
    /// parameters each list operation accepts.
    pub fn with_query<Q: Serialize>(mut self, query: &Q) -> Self {
        match serde_urlencoded::to_string(query) {
            Ok(encoded) if !encoded.is_empty() => self.query = Some(encoded),
            Ok(_) => {}
            Err(error) => self.invalid = Some(error.into()),
        }
        self
    }

    /// Attaches an idempotency token, sent via the `Idempotency-Key` header.
    ///
    /// The token is an opaque string, forwarded as-is for the remote service
    /// to deduplicate retried mutations. Nothing is tracked locally.
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Ties this request to a caller-owned cancellation token.
    ///
    /// Cancelling the token rejects the call with [`RecallError::Cancelled`];
    /// when it races a configured timeout, whichever fires first wins.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub(crate) fn with_json<B: Serialize>(mut self, body: &B) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(value),
            Err(error) => self.invalid = Some(error.into()),
        }
        self
    }

    async fn execute_raw(self) -> Result<RawResponse, RecallError> {
        let Self {
            client,
            endpoint,
            id,
            query,
            body,
            idempotency_key,
            cancel,
            invalid,
            _marker,
        } = self;

        if let Some(error) = invalid {
            return Err(error);
        }

        let url = build_url(&client.base_url, &endpoint.resolve(id.as_deref()), query)?;
        let mut request = reqwest::Request::new(endpoint.method.clone(), url);
        let headers = request.headers_mut();

        // The credential header is derived per request, never cached.
        headers.insert(AUTHORIZATION, client.api_key.to_header_value()?);
        if let Some(key) = idempotency_key {
            headers.insert(IDEMPOTENCY_HEADER, HeaderValue::from_str(&key)?);
        }
        if let Some(body) = body {
            headers.typed_insert(headers::ContentType::json());
            *request.body_mut() = Some(reqwest::Body::from(serde_json::to_vec(&body)?));
        }

        let mut cancellation = EffectiveCancellation::new(cancel, client.timeout);
        let outcome = client.transport.perform(request, cancellation.token()).await;
        // Timer and listener are released before the caller sees the outcome,
        // whichever way the exchange finished.
        cancellation.teardown();

        match outcome {
            Ok(raw) if raw.status.is_success() => Ok(raw),
            Ok(raw) => {
                let status_text = raw.status_text().to_string();
                Err(RecallError::api(
                    raw.status.as_u16(),
                    status_text,
                    raw.json_value(),
                ))
            }
            Err(error) => Err(cancellation.reclassify(error)),
        }
    }

    async fn execute(self) -> Result<T, RecallError>
    where
        T: DeserializeOwned,
    {
        let raw = self.execute_raw().await?;
        deserialize_payload(&raw.body)
    }
}

fn build_url(base_url: &Url, path: &str, query: Option<String>) -> Result<Url, RecallError> {
    let joined = format!(
        "{}/{}",
        base_url.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let mut url = joined.parse::<Url>()?;
    if let Some(query) = query {
        url.set_query(Some(&query));
    }
    Ok(url)
}

fn deserialize_payload<T: DeserializeOwned>(body: &Bytes) -> Result<T, RecallError> {
    // 204-style empty bodies deserialize as JSON null, which covers the unit
    // payloads of delete operations.
    let body = if body.is_empty() {
        Bytes::from_static(b"null")
    } else {
        body.clone()
    };
    let mut deserializer = serde_json::Deserializer::from_slice(&body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|error| RecallError::Json {
        path: error.path().to_string(),
        error: error.into_inner(),
        body: truncated_body(&body),
    })
}

impl<T> IntoFuture for Call<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = Result<T, RecallError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}
