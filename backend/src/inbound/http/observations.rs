//! Observation endpoints.
//!
//! ```text
//! POST /api/v1/observations
//! GET  /api/v1/observations
//! GET  /api/v1/observations/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ApiResult;
use super::schemas::PointSchema;
use super::state::HttpState;
use crate::domain::{ObservationForm, ObservationId, ObservationRecord, Point};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Stored observation as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ObservationBody {
    /// Storage identifier.
    #[schema(example = 1)]
    pub id: u64,
    /// Name of the phenomenon.
    #[schema(example = "Teste")]
    pub name: String,
    /// Date as `YYYY-MM-DD`.
    #[schema(example = "2020-01-01")]
    pub date: String,
    /// Time as `HH:MM:SS`.
    #[schema(example = "09:12:12")]
    pub time: String,
    /// Longitude in WGS84 degrees.
    #[schema(example = json!(-42.0))]
    pub longitude: f64,
    /// Latitude in WGS84 degrees.
    #[schema(example = json!(-22.0))]
    pub latitude: f64,
    /// GeoJSON point, `[longitude, latitude]`.
    #[schema(value_type = PointSchema)]
    pub geometry: Point,
}

impl From<ObservationRecord> for ObservationBody {
    fn from(record: ObservationRecord) -> Self {
        let ObservationRecord { id, observation } = record;
        let geometry = *observation.geometry();
        Self {
            id: id.get(),
            name: observation.name().to_string(),
            date: observation.date().format(DATE_FORMAT).to_string(),
            time: observation.time().format(TIME_FORMAT).to_string(),
            longitude: geometry.longitude(),
            latitude: geometry.latitude(),
            geometry,
        }
    }
}

/// Record a new observation.
///
/// Every rejected field is reported in `details.fieldErrors`.
#[utoipa::path(
    post,
    path = "/api/v1/observations",
    request_body = super::schemas::ObservationFormSchema,
    responses(
        (status = 201, description = "Observation recorded", body = ObservationBody),
        (status = 400, description = "Invalid observation", body = super::schemas::ErrorSchema),
        (status = 503, description = "Storage unavailable", body = super::schemas::ErrorSchema)
    ),
    tags = ["observations"],
    operation_id = "createObservation"
)]
#[post("/observations")]
pub async fn create_observation(
    state: web::Data<HttpState>,
    payload: web::Json<ObservationForm>,
) -> ApiResult<HttpResponse> {
    let record = state.observations.submit(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(ObservationBody::from(record)))
}

/// List every stored observation in ascending id order.
#[utoipa::path(
    get,
    path = "/api/v1/observations",
    responses(
        (status = 200, description = "Stored observations", body = [ObservationBody]),
        (status = 503, description = "Storage unavailable", body = super::schemas::ErrorSchema)
    ),
    tags = ["observations"],
    operation_id = "listObservations"
)]
#[get("/observations")]
pub async fn list_observations(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ObservationBody>>> {
    let records = state.observations_query.list().await?;
    Ok(web::Json(
        records.into_iter().map(ObservationBody::from).collect(),
    ))
}

/// Fetch one observation.
#[utoipa::path(
    get,
    path = "/api/v1/observations/{id}",
    params(("id" = u64, Path, description = "Observation identifier")),
    responses(
        (status = 200, description = "Observation", body = ObservationBody),
        (status = 404, description = "Unknown observation", body = super::schemas::ErrorSchema)
    ),
    tags = ["observations"],
    operation_id = "getObservation"
)]
#[get("/observations/{id}")]
pub async fn get_observation(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<ObservationBody>> {
    let id = ObservationId::new(path.into_inner());
    let record = state.observations_query.find(id).await?;
    Ok(web::Json(ObservationBody::from(record)))
}

#[cfg(test)]
#[path = "observations_tests.rs"]
mod tests;
