//! End-to-end tests for the observation endpoints and the GeoJSON feed.
//!
//! Each test builds the full application over the in-memory repository with
//! the Rio de Janeiro bounding box.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use observation_map::Trace;
use observation_map::domain::{BoundingBox, ObservationService};
use observation_map::inbound::http::health::HealthState;
use observation_map::inbound::http::routes::configure;
use observation_map::inbound::http::state::HttpState;
use observation_map::outbound::persistence::InMemoryObservationRepository;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const OUT_OF_BOUNDS_LONGITUDE: &str =
    "Coordinate longitude outside the state's configured context";
const OUT_OF_BOUNDS_LATITUDE: &str = "Coordinate latitude outside the state's configured context";

#[fixture]
fn rio() -> BoundingBox {
    BoundingBox::new(-44.887212, -40.95975, -23.366868, -20.764962)
        .expect("fixture bounds are valid")
}

async fn app(
    bounds: BoundingBox,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let repository = Arc::new(InMemoryObservationRepository::new());
    let service = Arc::new(ObservationService::new(repository, bounds));
    let state = web::Data::new(HttpState::new(service.clone(), service));
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    actix_test::init_service(
        App::new()
            .app_data(state)
            .app_data(health)
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

fn submission(name: &str, longitude: f64, latitude: f64) -> Value {
    json!({
        "name": name,
        "date": "2020-01-01",
        "time": "09:12:12",
        "longitude": longitude,
        "latitude": latitude,
    })
}

fn post(body: &Value) -> actix_http::Request {
    actix_test::TestRequest::post()
        .uri("/api/v1/observations")
        .set_json(body)
        .to_request()
}

#[rstest]
#[actix_web::test]
async fn submitted_observation_appears_in_feed(rio: BoundingBox) {
    let app = app(rio).await;

    let res = actix_test::call_service(&app, post(&submission("Teste", -42.0, -22.0))).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let req = actix_test::TestRequest::get().uri("/geojson").to_request();
    let feed: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        feed,
        json!({
            "type": "FeatureCollection",
            "crs": {"type": "name", "properties": {"name": "EPSG:4326"}},
            "features": [{
                "type": "Feature",
                "id": 1,
                "properties": {
                    "popup_content": "<p><strong><span>Name: </span>Teste</strong></p>",
                    "model": "core.observation",
                },
                "geometry": {"type": "Point", "coordinates": [-42.0, -22.0]},
            }],
        })
    );
}

#[rstest]
#[case::longitude_only(-45.0, -21.0, json!({ "longitude": [OUT_OF_BOUNDS_LONGITUDE] }))]
#[case::latitude_only(-42.0, -24.0, json!({ "latitude": [OUT_OF_BOUNDS_LATITUDE] }))]
#[case::both(-40.0, -19.0, json!({
    "longitude": [OUT_OF_BOUNDS_LONGITUDE],
    "latitude": [OUT_OF_BOUNDS_LATITUDE],
}))]
#[actix_web::test]
async fn out_of_bounds_submissions_are_rejected(
    rio: BoundingBox,
    #[case] longitude: f64,
    #[case] latitude: f64,
    #[case] field_errors: Value,
) {
    let app = app(rio).await;

    let res = actix_test::call_service(&app, post(&submission("Teste", longitude, latitude))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.headers().contains_key("trace-id"));
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["fieldErrors"], field_errors);
    assert_eq!(
        body["traceId"].as_str().map(str::len),
        Some(36),
        "error carries the request trace id"
    );

    let req = actix_test::TestRequest::get().uri("/api/v1/observations").to_request();
    let stored: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored, json!([]), "rejected submissions are not stored");
}

#[rstest]
#[actix_web::test]
async fn parse_and_bounds_errors_are_reported_together(rio: BoundingBox) {
    let app = app(rio).await;
    let body = json!({
        "name": "",
        "date": "2020-13-01",
        "time": "09:12:12",
        "longitude": "-45",
        "latitude": "norte",
    });

    let res = actix_test::call_service(&app, post(&body)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        error["details"]["fieldErrors"],
        json!({
            "name": ["This field is required."],
            "date": ["Enter a valid date."],
            "longitude": [OUT_OF_BOUNDS_LONGITUDE],
            "latitude": ["Enter a number."],
        })
    );
}

#[rstest]
#[actix_web::test]
async fn stored_observations_are_listed_and_fetched(rio: BoundingBox) {
    let app = app(rio).await;
    for (name, longitude, latitude) in [("Teste", -42.0, -22.0), ("Ipê", -43.1, -22.9)] {
        let res = actix_test::call_service(&app, post(&submission(name, longitude, latitude))).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let req = actix_test::TestRequest::get().uri("/api/v1/observations").to_request();
    let listed: Value = actix_test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = listed
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|item| item["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Teste", "Ipê"]);

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/observations/2")
        .to_request();
    let fetched: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["longitude"], json!(-43.1));
    assert_eq!(
        fetched["geometry"],
        json!({ "type": "Point", "coordinates": [-43.1, -22.9] })
    );

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/observations/3")
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn boundary_coordinates_are_accepted(rio: BoundingBox) {
    let app = app(rio).await;

    let res = actix_test::call_service(
        &app,
        post(&submission("Canto", rio.lon_max(), rio.lat_min())),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
}

#[rstest]
#[actix_web::test]
async fn health_probes_report_ready(rio: BoundingBox) {
    let app = app(rio).await;

    for uri in ["/health/ready", "/health/live"] {
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK, "{uri}");
    }
}
