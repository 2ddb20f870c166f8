//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the observation, feed, and health endpoints together
//! with the schema wrappers from [`crate::inbound::http::schemas`]. Swagger
//! UI serves it in debug builds and `cargo run --bin openapi-dump` exports
//! it for tooling.

use utoipa::OpenApi;

use crate::inbound::http::observations::ObservationBody;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FeatureCollectionSchema, FeaturePropertiesSchema,
    FeatureSchema, GeometryTypeSchema, ObservationFormSchema, PointSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Observation map API",
        description = "Point observations validated against a configured bounding box, \
                       with a GeoJSON feed for map layers."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::observations::create_observation,
        crate::inbound::http::observations::list_observations,
        crate::inbound::http::observations::get_observation,
        crate::inbound::http::feed::observation_feed,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ObservationBody,
        ObservationFormSchema,
        PointSchema,
        GeometryTypeSchema,
        FeatureCollectionSchema,
        FeatureSchema,
        FeaturePropertiesSchema,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "observations", description = "Recording and reading observations"),
        (name = "feed", description = "GeoJSON feed for map layers"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/observations",
            "/api/v1/observations/{id}",
            "/geojson",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn point_schema_has_geojson_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let point = schemas.get("crate.domain.Point").expect("Point schema");

        assert_object_schema_has_field(point, "type");
        assert_object_schema_has_field(point, "coordinates");
    }

    #[test]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = schemas.get("crate.domain.Error").expect("Error schema");

        assert_object_schema_has_field(error, "code");
        assert_object_schema_has_field(error, "message");
        assert_object_schema_has_field(error, "traceId");
    }
}
