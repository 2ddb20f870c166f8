//! Unit coverage for observation submission and field error collection.

use chrono::{NaiveDate, NaiveTime};
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::{CoordinateField, ErrorCode, OutOfBounds};

#[fixture]
fn rio() -> BoundingBox {
    BoundingBox::new(-44.887212, -40.95975, -23.366868, -20.764962)
        .expect("fixture bounds are valid")
}

fn draft(longitude: f64, latitude: f64) -> ObservationDraft {
    ObservationDraft {
        name: ObservationName::new("Teste").expect("valid name"),
        date: NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
        time: NaiveTime::from_hms_opt(9, 12, 12).expect("valid time"),
        longitude,
        latitude,
    }
}

#[rstest]
fn admissible_coordinates_build_point(rio: BoundingBox) {
    let observation = submit_observation(draft(-42.0, -22.0), &rio).expect("inside the box");
    assert_eq!(observation.geometry(), &build_geometry(-42.0, -22.0));
    assert_eq!(observation.name().as_ref(), "Teste");
    assert_eq!(
        observation.date(),
        NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date")
    );
}

#[rstest]
#[case::longitude_only(-45.0, -21.0, vec![ObservationField::Longitude])]
#[case::latitude_only(-42.0, -24.0, vec![ObservationField::Latitude])]
#[case::both(-40.0, -19.0, vec![ObservationField::Longitude, ObservationField::Latitude])]
fn every_failing_coordinate_is_reported(
    rio: BoundingBox,
    #[case] longitude: f64,
    #[case] latitude: f64,
    #[case] expected: Vec<ObservationField>,
) {
    let errors = submit_observation(draft(longitude, latitude), &rio).expect_err("out of bounds");
    assert_eq!(errors.fields(), expected);
    assert_eq!(errors.len(), expected.len());
}

#[rstest]
fn boundary_values_are_admissible(rio: BoundingBox) {
    let corner = draft(rio.lon_min(), rio.lat_max());
    let observation = submit_observation(corner, &rio).expect("edges are inclusive");
    assert_eq!(
        observation.geometry().coordinates(),
        [-44.887212, -20.764962]
    );
}

#[rstest]
fn out_of_bounds_message_matches_field(rio: BoundingBox) {
    let errors = submit_observation(draft(-45.0, -21.0), &rio).expect_err("west of the box");
    assert_eq!(
        errors.messages_for(ObservationField::Longitude),
        vec!["Coordinate longitude outside the state's configured context"]
    );
    assert!(errors.messages_for(ObservationField::Latitude).is_empty());
}

#[rstest]
fn details_group_messages_by_field() {
    let mut errors = ValidationErrors::default();
    errors.push(ObservationField::Name, FieldError::Required);
    errors.push_out_of_bounds(OutOfBounds::new(CoordinateField::Latitude));
    assert_eq!(
        errors.to_details(),
        json!({
            "fieldErrors": {
                "name": ["This field is required."],
                "latitude": ["Coordinate latitude outside the state's configured context"],
            }
        })
    );
}

#[rstest]
fn converts_into_invalid_request_error() {
    let mut errors = ValidationErrors::default();
    errors.push(ObservationField::Date, FieldError::InvalidDate);
    let error = crate::domain::Error::from(errors);
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details(),
        Some(&json!({ "fieldErrors": { "date": ["Enter a valid date."] } }))
    );
}

#[rstest]
fn capture_keeps_values_and_records_errors() {
    let mut errors = ValidationErrors::default();
    let kept = errors.capture(ObservationField::Name, Ok::<_, FieldError>(7));
    let dropped: Option<u8> =
        errors.capture(ObservationField::Latitude, Err(FieldError::InvalidNumber));
    assert_eq!(kept, Some(7));
    assert!(dropped.is_none());
    assert_eq!(errors.fields(), vec![ObservationField::Latitude]);
}

#[rstest]
#[case::blank("   ".to_owned(), ObservationNameError::Empty)]
#[case::too_long("x".repeat(101), ObservationNameError::TooLong { max: 100, actual: 101 })]
fn name_rejects_invalid_values(#[case] raw: String, #[case] expected: ObservationNameError) {
    assert_eq!(ObservationName::new(raw), Err(expected));
}

#[rstest]
fn name_accepts_maximum_length() {
    let raw = "é".repeat(OBSERVATION_NAME_MAX);
    assert!(ObservationName::new(raw).is_ok());
}

#[rstest]
fn name_length_error_maps_to_field_message() {
    let error = FieldError::from(ObservationNameError::TooLong {
        max: 100,
        actual: 120,
    });
    assert_eq!(
        error.to_string(),
        "Ensure this value has at most 100 characters (it has 120)."
    );
}

#[rstest]
fn observation_identifier_serialises_as_number() {
    assert_eq!(
        serde_json::to_value(ObservationId::new(1)).expect("serialise id"),
        json!(1)
    );
}
