use axum::{
    body::Body,
    extract::multipart::Multipart,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use tracing::{error, info, warn};

use crate::error::Error;
use crate::types::BandGrid;
use crate::{io, ndvi, render, stats};

use super::models::*;

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: "Compute NDVI vegetation-health analysis from satellite imagery",
        endpoints: vec![
            EndpointInfo {
                method: "GET",
                path: "/",
                description: "Service metadata",
            },
            EndpointInfo {
                method: "POST",
                path: "/compute-ndvi",
                description: "Upload red_band and nir_band rasters; returns a PNG visualization with statistics headers",
            },
            EndpointInfo {
                method: "POST",
                path: "/compute-ndvi-json",
                description: "Upload red_band and nir_band rasters; returns statistics as JSON",
            },
        ],
    })
}

/// `POST /compute-ndvi`: full pipeline, PNG response with statistics
/// echoed in custom headers.
pub async fn compute_ndvi_image(multipart: Multipart) -> Result<Response, ApiError> {
    let (red, nir) = collect_bands(multipart).await?;

    let result = spawn_pipeline(move || {
        let ndvi_grid = decode_and_transform(&red, &nir)?;
        let statistics = stats::classify(&ndvi_grid)?;
        let png = render::render_ndvi_png(&ndvi_grid)?;
        Ok((statistics, png))
    })
    .await?;

    let (statistics, png) = result.map_err(error_response)?;

    info!(
        valid_pixels = statistics.total_valid_pixels,
        mean_ndvi = statistics.mean_ndvi,
        "rendered NDVI visualization"
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime::IMAGE_PNG.as_ref())
        .header("X-Healthy-Vegetation", statistics.healthy_vegetation_percent.to_string())
        .header("X-Moderate-Vegetation", statistics.moderate_vegetation_percent.to_string())
        .header("X-Stressed-Vegetation", statistics.stressed_vegetation_percent.to_string())
        .header("X-Bare-Land", statistics.bare_land_percent.to_string())
        .header("X-Mean-NDVI", statistics.mean_ndvi.to_string())
        .body(Body::from(png))
        .map_err(|e| internal(format!("response assembly failed: {}", e)))
}

/// `POST /compute-ndvi-json`: statistics only, no visualization.
pub async fn compute_ndvi_json(multipart: Multipart) -> Result<Json<NdviJsonResponse>, ApiError> {
    let (red, nir) = collect_bands(multipart).await?;

    let result = spawn_pipeline(move || {
        let ndvi_grid = decode_and_transform(&red, &nir)?;
        stats::classify(&ndvi_grid)
    })
    .await?;

    let statistics = result.map_err(error_response)?;

    info!(
        valid_pixels = statistics.total_valid_pixels,
        mean_ndvi = statistics.mean_ndvi,
        "computed NDVI statistics"
    );

    Ok(Json(NdviJsonResponse {
        status: "success",
        message: "NDVI computed successfully",
        statistics,
    }))
}

/// One uploaded multipart file field.
struct UploadedBand {
    filename: String,
    bytes: Vec<u8>,
}

/// Pulls the `red_band` and `nir_band` file fields out of the multipart
/// body. Missing fields are a client error.
async fn collect_bands(mut multipart: Multipart) -> Result<(UploadedBand, UploadedBand), ApiError> {
    let mut red: Option<UploadedBand> = None;
    let mut nir: Option<UploadedBand> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "red_band" | "nir_band" => {
                let filename = field.file_name().unwrap_or(&name).to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read field '{}': {}", name, e)))?
                    .to_vec();
                let band = UploadedBand { filename, bytes };
                if name == "red_band" {
                    red = Some(band);
                } else {
                    nir = Some(band);
                }
            }
            _ => {}
        }
    }

    let red = red.ok_or_else(|| bad_request("Missing 'red_band' file field".to_string()))?;
    let nir = nir.ok_or_else(|| bad_request("Missing 'nir_band' file field".to_string()))?;
    Ok((red, nir))
}

/// Decode both uploads and run the NDVI transform. Shared by both
/// compute endpoints.
fn decode_and_transform(red: &UploadedBand, nir: &UploadedBand) -> crate::Result<BandGrid> {
    let red_grid = io::read_band(&red.bytes, &red.filename)?;
    let nir_grid = io::read_band(&nir.bytes, &nir.filename)?;
    ndvi::compute_ndvi(&red_grid, &nir_grid)
}

/// Runs the CPU-bound pipeline off the async executor. Each invocation
/// owns its grids outright; nothing is pooled or shared across requests.
async fn spawn_pipeline<T, F>(work: F) -> Result<crate::Result<T>, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> crate::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| internal(format!("pipeline task failed: {}", e)))
}

/// Maps pipeline errors to HTTP status codes: input problems are the
/// client's to fix (400), the rest are ours (500).
fn error_response(err: Error) -> ApiError {
    if err.is_input_error() {
        warn!(error = %err, "rejected NDVI request");
        bad_request(err.to_string())
    } else {
        error!(error = %err, "NDVI pipeline failed");
        internal(err.to_string())
    }
}

fn bad_request(message: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: message }),
    )
}

fn internal(message: String) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
}
