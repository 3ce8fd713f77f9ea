//! Conversion of GeoJSON geometry fragments into [`geo_types`] geometries.

use geo_types::Geometry;
use serde_json::Value;

use crate::error::ImportError;

/// Constructs a geometry from a GeoJSON geometry fragment.
///
/// The fragment is serialized back to JSON text and parsed by the `geojson` crate, so the
/// only checks performed are the ones of the geometry constructor itself.
pub fn parse_geometry(fragment: &Value) -> Result<Geometry<f64>, ImportError> {
    let json = serde_json::to_string(fragment)?;
    parse_geometry_str(&json)
}

/// Constructs a geometry from the GeoJSON text of a geometry.
pub fn parse_geometry_str(json: &str) -> Result<Geometry<f64>, ImportError> {
    let geometry: geojson::Geometry = json.parse()?;
    Ok(Geometry::try_from(geometry)?)
}
