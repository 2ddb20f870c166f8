//! GeoJSON feed of stored observations for the map layer.
//!
//! Collections are tagged `FeatureCollection`, carry a named EPSG:4326 CRS,
//! and list one `Feature` per record in ascending id order.

use serde::{Deserialize, Serialize};

use super::{ObservationId, ObservationRecord, Point};

/// CRS name advertised by the feed.
pub const FEED_CRS_NAME: &str = "EPSG:4326";
/// Model label attached to every feature.
pub const FEED_MODEL: &str = "core.observation";

/// Properties of a named coordinate reference system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrsProperties {
    /// CRS identifier, for example `EPSG:4326`.
    pub name: String,
}

/// `{"type": "name", "properties": {...}}` CRS member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "name")]
pub struct NamedCrs {
    /// CRS properties.
    pub properties: CrsProperties,
}

impl Default for NamedCrs {
    fn default() -> Self {
        Self {
            properties: CrsProperties {
                name: FEED_CRS_NAME.to_owned(),
            },
        }
    }
}

/// Properties shown by the map popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureProperties {
    /// HTML fragment rendered in the popup.
    pub popup_content: String,
    /// Source model label.
    pub model: String,
}

/// One stored observation as a GeoJSON feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    /// Storage identifier.
    pub id: ObservationId,
    /// Popup properties.
    pub properties: FeatureProperties,
    /// Point geometry.
    pub geometry: Point,
}

impl Feature {
    /// Build the feature for a stored record.
    #[must_use]
    pub fn from_record(record: &ObservationRecord) -> Self {
        let name = escape_html(record.observation.name().as_ref());
        Self {
            id: record.id,
            properties: FeatureProperties {
                popup_content: format!("<p><strong><span>Name: </span>{name}</strong></p>"),
                model: FEED_MODEL.to_owned(),
            },
            geometry: *record.observation.geometry(),
        }
    }
}

/// GeoJSON feature collection served at `/geojson`.
///
/// # Examples
/// ```
/// use observation_map::domain::FeatureCollection;
///
/// let empty = FeatureCollection::from_records(Vec::new());
/// let json = serde_json::to_value(&empty).expect("serialise feed");
/// assert_eq!(json["type"], "FeatureCollection");
/// assert_eq!(json["features"], serde_json::json!([]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    /// Coordinate reference system.
    pub crs: NamedCrs,
    /// Features in ascending id order.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Build the feed from stored records, sorting by id.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = ObservationRecord>) -> Self {
        let mut features: Vec<Feature> = records
            .into_iter()
            .map(|record| Feature::from_record(&record))
            .collect();
        features.sort_by_key(|feature| feature.id);
        Self {
            crs: NamedCrs::default(),
            features,
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}
