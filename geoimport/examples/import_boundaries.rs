//! This example shows how to write an importer for administrative boundaries.
//!
//! Run it without arguments to import the bundled data set, or with one argument - path to a
//! `.geojson` file with polygon features that have `name` and `admin_level` properties.
//!
//! ```shell
//! cargo run --example import_boundaries -- ./geoimport/examples/data/boundaries.geojson
//! ```

use anyhow::Result;
use geo::{Area, Centroid};
use geoimport::geo_types::Geometry;
use geoimport::geojson::JsonObject;
use geoimport::{GeoJsonImporter, ImportError, ReadOptions};
use serde_json::Value;

const DEFAULT_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/examples/data/boundaries.geojson");

struct Boundary {
    name: String,
    admin_level: u64,
    geometry: Geometry<f64>,
}

struct BoundaryImporter;

impl GeoJsonImporter for BoundaryImporter {
    type Output = Boundary;

    fn parse_member(&self, member: JsonObject) -> Result<Self::Output, ImportError> {
        let properties = member
            .get("properties")
            .and_then(Value::as_object)
            .ok_or_else(|| ImportError::Generic("boundary has no properties".into()))?;
        let name = properties
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| ImportError::Generic("boundary has no name".into()))?
            .to_string();
        let admin_level = properties
            .get("admin_level")
            .and_then(Value::as_u64)
            .unwrap_or_default();

        let geometry = match member.get("geometry") {
            Some(geometry) => self.get_polygons(geometry)?,
            None => return Err(ImportError::Generic(format!("boundary {name} has no geometry"))),
        };

        if !matches!(geometry, Geometry::Polygon(_) | Geometry::MultiPolygon(_)) {
            return Err(ImportError::Generic(format!(
                "boundary {name} is not a polygon"
            )));
        }

        Ok(Boundary {
            name,
            admin_level,
            geometry,
        })
    }

    fn options(&self) -> ReadOptions {
        ReadOptions::default().with_expected_type("FeatureCollection")
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let file_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_FILE.to_string());

    // The file is read completely here. Boundaries are converted one by one in the loop below.
    let importer = BoundaryImporter;
    let boundaries = importer.read_and_parse(&file_name)?;
    log::info!("Importing boundaries from {file_name}");

    let mut count = 0;
    for boundary in boundaries {
        let boundary = boundary?;
        let centroid = boundary.geometry.centroid();

        log::info!(
            "{} (level {}): area {:.6} sq. deg, centroid {:?}",
            boundary.name,
            boundary.admin_level,
            boundary.geometry.unsigned_area(),
            centroid.map(|c| (c.x(), c.y())),
        );
        count += 1;
    }

    log::info!("Imported {count} boundaries");
    Ok(())
}
