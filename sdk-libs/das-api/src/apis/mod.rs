use std::fmt;

use reqwest::Url;

use crate::models::JsonRpcError;

const API_KEY_PARAM: &str = "api-key";

pub mod default_api;

pub mod configuration {
    pub use super::Configuration;
}

/// Configuration for the DAS API client.
#[derive(Clone)]
pub struct Configuration {
    pub base_path: String,
    pub api_key: Option<String>,
    pub client: reqwest::Client,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("base_path", &self.base_path)
            .finish()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_path: "https://api.devnet.solana.com".to_string(),
            api_key: None,
            client: reqwest::Client::new(),
        }
    }
}

impl Configuration {
    /// Create a new configuration from a URL string.
    ///
    /// An `api-key` query parameter is split off and appended, URL-encoded,
    /// to every request. Other query parameters stay in `base_path`.
    pub fn new(url: String) -> Self {
        let (base_path, api_key) = Self::parse_url(&url);
        Self {
            base_path,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    pub(crate) fn build_url(&self) -> String {
        let Some(key) = &self.api_key else {
            return self.base_path.clone();
        };
        match Url::parse(&self.base_path) {
            Ok(mut url) => {
                url.query_pairs_mut().append_pair(API_KEY_PARAM, key);
                url.into()
            }
            Err(_) => format!("{}?{}={}", self.base_path, API_KEY_PARAM, key),
        }
    }

    pub(crate) fn parse_url(url: &str) -> (String, Option<String>) {
        let Ok(mut parsed) = Url::parse(url) else {
            return (url.to_string(), None);
        };
        let mut api_key = None;
        let mut params = Vec::new();
        for (name, value) in parsed.query_pairs() {
            if name == API_KEY_PARAM {
                api_key = Some(value.into_owned());
            } else {
                params.push((name.into_owned(), value.into_owned()));
            }
        }
        if api_key.is_none() {
            return (url.to_string(), None);
        }

        parsed.set_query(None);
        if !params.is_empty() {
            parsed.query_pairs_mut().extend_pairs(params);
        }
        (parsed.into(), api_key)
    }
}

/// Error type for API calls.
#[derive(Debug)]
pub enum Error<T> {
    Reqwest(reqwest::Error),
    ResponseError {
        status: u16,
        body: String,
    },
    /// The endpoint answered with a JSON-RPC error object.
    JsonRpc(JsonRpcError),
    /// The JSON-RPC envelope had neither `result` nor `error`.
    MissingResult,
    #[doc(hidden)]
    _Phantom(std::marker::PhantomData<T>),
}

impl<T> fmt::Display for Error<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Reqwest(e) => write!(f, "HTTP error: {}", e),
            Error::ResponseError { status, body } => {
                write!(f, "Error response (status {}): {}", status, body)
            }
            Error::JsonRpc(e) => write!(f, "JSON-RPC error {}: {}", e.code, e.message),
            Error::MissingResult => write!(f, "Response contains no result"),
            Error::_Phantom(_) => unreachable!(),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for Error<T> {}
