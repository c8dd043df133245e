//! Session Commands
//!
//! Login, logout and the protected probe that tells whether a session exists.

use gloo_net::http::Request;

use crate::config::DashboardConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::LoginArgs;

/// Send credentials; any non-2xx answer is a failed login
pub async fn login(config: &DashboardConfig, username: &str, password: &str) -> ApiResult<()> {
    let response = Request::post(&config.api_url("/login"))
        .json(&LoginArgs { username, password })?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

/// End the server session. The caller reloads the page whatever happens.
pub async fn logout(config: &DashboardConfig) -> ApiResult<()> {
    let response = Request::post(&config.api_url("/logout")).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

/// True when `GET /vms` answers OK, i.e. the browser already holds a session
pub async fn probe_session(config: &DashboardConfig) -> bool {
    match Request::get(&config.api_url("/vms")).send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            web_sys::console::log_1(&format!("[SESSION] Probe failed: {}", e).into());
            false
        }
    }
}
