use crate::errors::{Result, VizError};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("VizLab/", env!("CARGO_PKG_VERSION"));

fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| VizError::RuntimeError {
            message: e.to_string(),
        })?;
    Ok(runtime.block_on(future))
}

/// GET `url` with the given query pairs and decode the JSON body. Non-2xx
/// statuses are errors.
///
/// Drives reqwest with a one-off current-thread runtime, so this blocks and
/// must only run on loader threads, never on the UI thread.
pub fn get_json<T: DeserializeOwned>(url: &str, query: &[(&str, String)]) -> Result<T> {
    tracing::debug!("GET {}", url);
    block_on(async {
        let client = reqwest::Client::new();
        let response = client
            .get(url)
            .query(query)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .error_for_status()?;
        let value = response.json::<T>().await?;
        Ok(value)
    })?
}

/// Like [`get_json`], but a non-2xx status yields `None` instead of an error.
/// Used where a failed fetch is a normal empty result.
pub fn get_json_lenient<T: DeserializeOwned>(url: &str, query: &[(&str, String)]) -> Result<Option<T>> {
    tracing::debug!("GET {}", url);
    block_on(async {
        let client = reqwest::Client::new();
        let response = client
            .get(url)
            .query(query)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            log::warn!("GET {} returned status {}", url, response.status());
            return Ok(None);
        }

        let value = response.json::<T>().await?;
        Ok(Some(value))
    })?
}
