//! VM Commands
//!
//! Listing and power control.

use gloo_net::http::Request;

use crate::config::DashboardConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{ControlArgs, ControlReply, VmAction, VmList};

pub async fn list_vms(config: &DashboardConfig) -> ApiResult<VmList> {
    let response = Request::get(&config.api_url("/vms")).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<VmList>().await?)
}

/// `POST /control_vm`. Error replies come back with non-2xx codes but still
/// carry a JSON body, so the body is decoded regardless of status.
pub async fn control_vm(
    config: &DashboardConfig,
    vm: &str,
    action: VmAction,
) -> ApiResult<ControlReply> {
    let args = ControlArgs {
        vm: vm.to_string(),
        action,
    };
    let response = Request::post(&config.api_url("/control_vm"))
        .json(&args)?
        .send()
        .await?;
    let status = response.status();
    match response.json::<ControlReply>().await {
        Ok(reply) => Ok(reply),
        Err(_) if !response.ok() => Err(ApiError::Status(status)),
        Err(e) => Err(e.into()),
    }
}
