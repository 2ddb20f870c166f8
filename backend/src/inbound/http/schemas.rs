//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their JSON shape and live in the inbound adapter
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// Storage is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "observation failed validation")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "6f9619ff-8b86-4011-b42d-00c04fc964ff")]
    trace_id: Option<String>,
    /// Supplementary details, for example `{"fieldErrors": {...}}`.
    #[schema(example = json!({
        "fieldErrors": {
            "longitude": ["Coordinate longitude outside the state's configured context"]
        }
    }))]
    details: Option<serde_json::Value>,
}

/// GeoJSON geometry type tag.
#[derive(ToSchema)]
pub enum GeometryTypeSchema {
    /// A single position.
    Point,
}

/// OpenAPI schema for [`crate::domain::Point`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Point)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PointSchema {
    /// Always `Point`.
    #[schema(rename = "type")]
    kind: GeometryTypeSchema,
    /// `[longitude, latitude]`.
    #[schema(example = json!([-42.0, -22.0]), min_items = 2, max_items = 2)]
    coordinates: Vec<f64>,
}

/// OpenAPI schema for [`crate::domain::ObservationForm`].
///
/// Coordinates may also be sent as numeric strings such as `"-42.5"`.
#[derive(ToSchema)]
#[schema(as = crate::domain::ObservationForm)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ObservationFormSchema {
    /// Name of the phenomenon, at most 100 characters.
    #[schema(example = "Teste", max_length = 100)]
    name: Option<String>,
    /// Date as `YYYY-MM-DD`.
    #[schema(example = "2020-01-01")]
    date: Option<String>,
    /// Time as `HH:MM:SS` or `HH:MM`.
    #[schema(example = "09:12:12")]
    time: Option<String>,
    /// Longitude inside the configured bounding box.
    #[schema(example = json!(-42.0))]
    longitude: Option<f64>,
    /// Latitude inside the configured bounding box.
    #[schema(example = json!(-22.0))]
    latitude: Option<f64>,
}

/// OpenAPI schema for [`crate::domain::FeatureProperties`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FeatureProperties)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FeaturePropertiesSchema {
    /// HTML popup fragment with the escaped observation name.
    #[schema(example = "<p><strong><span>Name: </span>Teste</strong></p>")]
    popup_content: String,
    /// Source model label.
    #[schema(example = "core.observation")]
    model: String,
}

/// OpenAPI schema for [`crate::domain::Feature`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Feature)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FeatureSchema {
    /// Always `Feature`.
    #[schema(rename = "type", example = "Feature")]
    kind: String,
    /// Observation identifier.
    #[schema(example = 1)]
    id: u64,
    /// Popup properties.
    properties: FeaturePropertiesSchema,
    /// Point geometry.
    geometry: PointSchema,
}

/// OpenAPI schema for [`crate::domain::FeatureCollection`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FeatureCollection)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FeatureCollectionSchema {
    /// Always `FeatureCollection`.
    #[schema(rename = "type", example = "FeatureCollection")]
    kind: String,
    /// Named CRS, always EPSG:4326.
    #[schema(example = json!({"type": "name", "properties": {"name": "EPSG:4326"}}))]
    crs: serde_json::Value,
    /// Features in ascending id order.
    features: Vec<FeatureSchema>,
}
