//! Geoimport reads GeoJSON feature collections and hands every feature to an importer of your
//! choice.
//!
//! # Quick start
//!
//! Implement [`GeoJsonImporter`] for a type that knows how to convert one feature, then let the
//! provided methods do the reading:
//!
//! ```no_run
//! use geoimport::{GeoJsonImporter, ImportError};
//! use geojson::JsonObject;
//!
//! struct District {
//!     name: String,
//!     shape: geo_types::Geometry<f64>,
//! }
//!
//! struct DistrictImporter;
//!
//! impl GeoJsonImporter for DistrictImporter {
//!     type Output = District;
//!
//!     fn parse_member(&self, member: JsonObject) -> Result<District, ImportError> {
//!         let name = member
//!             .get("properties")
//!             .and_then(|p| p.get("name"))
//!             .and_then(|n| n.as_str())
//!             .unwrap_or_default()
//!             .to_string();
//!         let geometry = member
//!             .get("geometry")
//!             .ok_or_else(|| ImportError::Generic("district without geometry".into()))?;
//!         let shape = self.get_polygons(geometry)?;
//!         Ok(District { name, shape })
//!     }
//! }
//!
//! for district in DistrictImporter.read_and_parse("districts.geojson")? {
//!     let district = district?;
//!     println!("{}", district.name);
//! }
//! # Ok::<(), ImportError>(())
//! ```
//!
//! The file is read and decoded completely before the first feature is produced. Features are
//! then converted lazily, one per iteration step, and the first failing feature ends the
//! iteration.
//!
//! For the common cases there are [`GeometryImporter`] and [`FeatureImporter`], and any
//! `Fn(JsonObject) -> Result<T, ImportError>` closure is an importer too.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod geometry;
mod impls;
mod importer;
mod members;
mod options;

pub use error::ImportError;
pub use geometry::{parse_geometry, parse_geometry_str};
pub use impls::{FeatureImporter, GeometryImporter};
pub use importer::GeoJsonImporter;
pub use members::ParsedMembers;
pub use options::{ReadOptions, DEFAULT_FEATURES_KEY};

pub use geo_types;
pub use geojson;
