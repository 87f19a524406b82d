//! GET helpers shared by the observations client and the forecast service.

use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Error types that can describe a failed HTTP exchange.
pub(crate) trait HttpError {
    fn network(url: String, source: reqwest::Error) -> Self;
    fn status(url: String, status: StatusCode, source: reqwest::Error) -> Self;
    fn json(url: String, source: serde_json::Error) -> Self;
}

/// Sends a GET request and returns the body of a successful response.
pub(crate) async fn get_bytes<E: HttpError>(client: &Client, url: &str) -> Result<Vec<u8>, E> {
    debug!("GET {url}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| E::network(url.to_string(), e))?;
    let response = match response.error_for_status() {
        Ok(resp) => resp,
        Err(e) => {
            if let Some(status) = e.status() {
                return Err(E::status(url.to_string(), status, e));
            } else {
                return Err(E::network(url.to_string(), e));
            }
        }
    };
    let bytes = response
        .bytes()
        .await
        .map_err(|e| E::network(url.to_string(), e))?;
    Ok(bytes.to_vec())
}

pub(crate) async fn get_json<T: DeserializeOwned, E: HttpError>(
    client: &Client,
    url: &str,
) -> Result<T, E> {
    let bytes = get_bytes(client, url).await?;
    serde_json::from_slice(&bytes).map_err(|source| E::json(url.to_string(), source))
}
