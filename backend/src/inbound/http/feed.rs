//! GeoJSON feed endpoint consumed by the map layer.

use actix_web::{HttpResponse, get, web};

use super::ApiResult;
use super::state::HttpState;

/// Every stored observation as a GeoJSON `FeatureCollection`.
#[utoipa::path(
    get,
    path = "/geojson",
    responses(
        (status = 200, description = "Observation feed", body = super::schemas::FeatureCollectionSchema),
        (status = 503, description = "Storage unavailable", body = super::schemas::ErrorSchema)
    ),
    tags = ["feed"],
    operation_id = "observationFeed"
)]
#[get("/geojson")]
pub async fn observation_feed(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let feed = state.observations_query.feed().await?;
    Ok(HttpResponse::Ok().json(feed))
}
