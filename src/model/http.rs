/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::responses::OandaErrorResponse;
use crate::model::retry::RetryConfig;
use reqwest::Client as HttpInternalClient;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// HTTP client for the Oanda v20 REST API
///
/// Handles the bearer token, the base URL of the selected environment,
/// client-side rate limiting and retries when Oanda answers 429.
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    rate_limiter: Arc<RateLimiter>,
}

impl HttpClient {
    /// Creates a new HTTP client
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying reqwest client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = Arc::new(RateLimiter::new(&config.rate_limiter));

        Ok(Self {
            http_client,
            config,
            rate_limiter,
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Account id every request operates on
    pub fn account_id(&self) -> &str {
        &self.config.credentials.account_id
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, &[], None::<()>).await
    }

    /// Makes a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, query, None::<()>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// Makes a PUT request
    ///
    /// Oanda uses PUT for state changes on existing resources, such as
    /// cancelling an order or closing a position.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, &[], body).await
    }

    /// Makes a request and deserializes the JSON body
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<B>,
    ) -> Result<T, AppError> {
        let url = self.url(path);
        let auth_header_value = format!("Bearer {}", self.config.credentials.api_key);

        let headers = vec![
            ("Authorization", auth_header_value.as_str()),
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
            ("Accept-Datetime-Format", "RFC3339"),
        ];

        let response = make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            method,
            &url,
            headers,
            query,
            &body,
            &self.config.retry,
        )
        .await?;

        self.parse_response(response).await
    }

    /// Joins the configured base URL and an API path
    fn url(&self, path: &str) -> String {
        let base = self.config.rest_api.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Parses response
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| AppError::Deserialization(e.to_string()))
    }
}

/// Makes an HTTP request with rate limiting and retry on 429
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter to control request rate
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query string parameters
/// * `body` - Optional request body (will be serialized to JSON)
/// * `retry_config` - Retry configuration (max retries and delay)
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError)` - `Oanda` for any other non-success answer, decoded from
///   Oanda's `errorMessage`; `Unauthorized` for 401; `RateLimitExceeded` once
///   the retries are used up
#[allow(clippy::too_many_arguments)]
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: Arc<RateLimiter>,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(&str, String)],
    body: &Option<B>,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let mut retry_count = 0;
    let max_retries = retry_config.max_retries();
    let delay_secs = retry_config.delay_secs();

    loop {
        rate_limiter.wait().await;

        debug!("{} {}", method, url);

        let mut request = client.request(method.clone(), url);

        for (name, value) in &headers {
            request = request.header(*name, *value);
        }

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                retry_count += 1;
                if retry_count > max_retries {
                    error!(
                        "Rate limit exceeded after {} attempts. Max retries ({}) reached.",
                        retry_count, max_retries
                    );
                    return Err(AppError::RateLimitExceeded);
                }
                warn!(
                    "Rate limit exceeded (attempt {}). Waiting {} seconds before retry...",
                    retry_count, delay_secs
                );
                tokio::time::sleep(Duration::from_secs(delay_secs)).await;
            }
            StatusCode::UNAUTHORIZED => {
                let body_text = response.text().await.unwrap_or_default();
                error!("Unauthorized: {}", body_text);
                return Err(AppError::Unauthorized);
            }
            _ => {
                let body_text = response.text().await.unwrap_or_default();
                error!("Request failed with status {}: {}", status, body_text);
                return Err(oanda_error(status, &body_text));
            }
        }
    }
}

/// Builds an [`AppError::Oanda`] from a failed response body
///
/// Oanda answers errors with `{"errorMessage": ..., "errorCode": ...}`; when the
/// body is not in that shape the raw text (or the status) is used instead.
pub fn oanda_error(status: StatusCode, body: &str) -> AppError {
    match serde_json::from_str::<OandaErrorResponse>(body) {
        Ok(parsed) => AppError::Oanda {
            status,
            code: parsed.error_code,
            message: parsed.error_message,
        },
        Err(_) => AppError::Oanda {
            status,
            code: None,
            message: if body.trim().is_empty() {
                status.to_string()
            } else {
                body.trim().to_string()
            },
        },
    }
}
