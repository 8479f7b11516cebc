//! HTTP fetch helpers.
//!
//! Wraps `gloo-net` with a timeout so a hanging request cannot stall the
//! boot sequence.

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use crate::config;
use crate::core::error::FetchError;

/// GET a JSON document, racing the request against [`config::FETCH_TIMEOUT_MS`].
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let request = async {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(FetchError::Http(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| FetchError::Json(err.to_string()))
    };

    match future::select(Box::pin(request), TimeoutFuture::new(config::FETCH_TIMEOUT_MS)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchError::Timeout),
    }
}
