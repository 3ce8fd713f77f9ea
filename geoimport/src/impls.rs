//! Ready-made importers.

use geojson::JsonObject;
use serde_json::Value;

use crate::error::ImportError;
use crate::importer::GeoJsonImporter;
use crate::options::ReadOptions;

/// Any function taking a feature object can be used as an importer.
impl<F, T> GeoJsonImporter for F
where
    F: Fn(JsonObject) -> Result<T, ImportError>,
{
    type Output = T;

    fn parse_member(&self, member: JsonObject) -> Result<Self::Output, ImportError> {
        self(member)
    }
}

/// Imports only the geometries of the features.
///
/// Features without geometry (`"geometry": null` or no `geometry` member at all) produce `None`.
#[derive(Debug, Default, Clone)]
pub struct GeometryImporter {
    options: ReadOptions,
}

impl GeometryImporter {
    /// Creates a new importer reading documents with the given options.
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }
}

impl GeoJsonImporter for GeometryImporter {
    type Output = Option<geo_types::Geometry<f64>>;

    fn parse_member(&self, member: JsonObject) -> Result<Self::Output, ImportError> {
        match member.get("geometry") {
            None | Some(Value::Null) => Ok(None),
            Some(geometry) => self.get_polygons(geometry).map(Some),
        }
    }

    fn options(&self) -> ReadOptions {
        self.options.clone()
    }
}

/// Imports features as [`geojson::Feature`] values.
#[derive(Debug, Default, Clone)]
pub struct FeatureImporter {
    options: ReadOptions,
}

impl FeatureImporter {
    /// Creates a new importer reading documents with the given options.
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }
}

impl GeoJsonImporter for FeatureImporter {
    type Output = geojson::Feature;

    fn parse_member(&self, member: JsonObject) -> Result<Self::Output, ImportError> {
        Ok(geojson::Feature::try_from(member)?)
    }

    fn options(&self) -> ReadOptions {
        self.options.clone()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geo_types::{point, Geometry};

    use super::*;

    const SIMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test-data/simple.geojson");
    const NULL_GEOMETRY: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/test-data/null_geometry.geojson");

    #[test]
    fn geometry_importer() {
        let geometries = GeometryImporter::default()
            .import_all(SIMPLE)
            .expect("failed to import");
        assert_eq!(geometries.len(), 3);
        assert_eq!(geometries[0], Some(Geometry::Point(point!(x: 0.0, y: 0.0))));
        assert_matches!(geometries[1], Some(Geometry::Polygon(_)));
    }

    #[test]
    fn geometry_importer_null_geometry() {
        let geometries = GeometryImporter::default()
            .import_all(NULL_GEOMETRY)
            .expect("failed to import");
        assert_eq!(geometries.len(), 3);
        assert!(geometries[0].is_some());
        assert!(geometries[1].is_none());
        assert!(geometries[2].is_none());
    }

    #[test]
    fn geometry_importer_type_check() {
        let importer = GeometryImporter::new(ReadOptions::default().with_expected_type("Feature"));
        assert_matches!(
            importer.import_all(SIMPLE),
            Err(ImportError::UnexpectedType { .. })
        );
    }

    #[test]
    fn feature_importer() {
        let features = FeatureImporter::default()
            .import_all(SIMPLE)
            .expect("failed to import");
        assert_eq!(features.len(), 3);
        assert_eq!(
            features[2].property("name"),
            Some(&Value::String("Path".into()))
        );
        assert_eq!(
            features[0].id,
            Some(geojson::feature::Id::Number(serde_json::Number::from(1u64)))
        );
    }

    #[test]
    fn feature_importer_rejects_non_features() {
        let json = r#"{"features": [{"type": "Point", "coordinates": [0, 0]}]}"#;
        let importer = FeatureImporter::default();
        let mut iter = importer.parse_str(json).expect("failed to read");
        assert_matches!(iter.next(), Some(Err(ImportError::Geometry(_))));
    }

    #[test]
    fn closure_importer() {
        let count_properties = |member: JsonObject| -> Result<usize, ImportError> {
            Ok(member
                .get("properties")
                .and_then(Value::as_object)
                .map_or(0, |p| p.len()))
        };
        let counts = count_properties.import_all(SIMPLE).expect("failed to import");
        assert_eq!(counts, vec![1, 2, 1]);
    }
}
