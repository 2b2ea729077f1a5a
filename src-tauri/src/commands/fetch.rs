//! Network fetch on behalf of hosted content
//!
//! Content talks to local model servers and chat backends through this
//! command. The configured [`lune_core::FetchPolicy`] decides which origins
//! are reachable; the default allows any http(s) URL.

use std::collections::HashMap;

use lune_core::{FetchError, FetchRequest, FetchResponse};
use tauri::State;

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub async fn fetch(
    state: State<'_, AppState>,
    request: FetchRequest,
) -> CommandResult<FetchResponse> {
    let url = state.config().fetch.check(&request.url).inspect_err(|e| {
        tracing::warn!(url = %request.url, error = %e, "Fetch rejected");
    })?;
    let method = reqwest::Method::from_bytes(request.method()?.as_bytes())
        .map_err(|e| FetchError::InvalidMethod(e.to_string()))?;

    tracing::debug!(method = %method, url = %url, "Fetch");

    let mut builder = state.http().request(method, url);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    if let Some(body) = request.body {
        builder = builder.body(body);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| FetchError::Failed(e.to_string()))?;

    let status = response.status().as_u16();
    let headers: HashMap<String, String> = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Failed(e.to_string()))?;

    Ok(FetchResponse {
        status,
        headers,
        body,
    })
}
