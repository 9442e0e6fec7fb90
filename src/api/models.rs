use serde::Serialize;

use crate::stats::NdviStatistics;

/// Service metadata returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Success body for `POST /compute-ndvi-json`.
#[derive(Debug, Serialize)]
pub struct NdviJsonResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub statistics: NdviStatistics,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
