use std::io::Read;
use std::path::Path;

use geojson::JsonObject;
use serde_json::Value;

use crate::document::{extract_members, read_document, read_document_from};
use crate::error::ImportError;
use crate::geometry::parse_geometry;
use crate::members::ParsedMembers;
use crate::options::ReadOptions;

/// Importer of GeoJSON feature collections.
///
/// An importer only knows how to turn a single feature into a value of its choice. Reading the
/// document and iterating over its features is done by the provided methods of this trait.
///
/// ```no_run
/// use geoimport::{GeoJsonImporter, ImportError};
/// use geojson::JsonObject;
///
/// struct Names;
///
/// impl GeoJsonImporter for Names {
///     type Output = Option<String>;
///
///     fn parse_member(&self, member: JsonObject) -> Result<Self::Output, ImportError> {
///         Ok(member
///             .get("properties")
///             .and_then(|p| p.get("name"))
///             .and_then(|n| n.as_str())
///             .map(String::from))
///     }
/// }
///
/// for name in Names.read_and_parse("countries.geojson")? {
///     println!("{:?}", name?);
/// }
/// # Ok::<(), ImportError>(())
/// ```
pub trait GeoJsonImporter {
    /// Value produced for every feature.
    type Output;

    /// Converts one member of the features array into the output value.
    ///
    /// Returning an error aborts the import of the whole document.
    fn parse_member(&self, member: JsonObject) -> Result<Self::Output, ImportError>;

    /// Options used to read documents with this importer.
    fn options(&self) -> ReadOptions {
        ReadOptions::default()
    }

    /// Reads the GeoJSON file at `path` and returns an iterator over the results of
    /// [`parse_member`](GeoJsonImporter::parse_member) for each of its features.
    ///
    /// The whole file is read and decoded before this method returns, so a missing file, invalid
    /// JSON or a document without features is reported here and not by the iterator. The features
    /// themselves are parsed lazily, one per call to `next`.
    fn read_and_parse(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<ParsedMembers<'_, Self>, ImportError> {
        let document = read_document(path)?;
        let members = extract_members(document, &self.options())?;
        Ok(ParsedMembers::new(self, members))
    }

    /// Same as [`read_and_parse`](GeoJsonImporter::read_and_parse), but reads the document
    /// from `reader`.
    fn read_and_parse_reader(
        &self,
        reader: impl Read,
    ) -> Result<ParsedMembers<'_, Self>, ImportError> {
        let document = read_document_from(reader)?;
        let members = extract_members(document, &self.options())?;
        Ok(ParsedMembers::new(self, members))
    }

    /// Same as [`read_and_parse`](GeoJsonImporter::read_and_parse) for a document given as text.
    fn parse_str(&self, json: &str) -> Result<ParsedMembers<'_, Self>, ImportError> {
        let document = serde_json::from_str(json)?;
        let members = extract_members(document, &self.options())?;
        Ok(ParsedMembers::new(self, members))
    }

    /// Imports all features of the file at `path`.
    ///
    /// Either all features are imported, or the first error is returned.
    fn import_all(&self, path: impl AsRef<Path>) -> Result<Vec<Self::Output>, ImportError> {
        self.read_and_parse(path)?.collect()
    }

    /// Constructs a geometry from a GeoJSON geometry fragment, e.g. the `geometry` member of
    /// a feature.
    fn get_polygons(&self, geom: &Value) -> Result<geo_types::Geometry<f64>, ImportError> {
        parse_geometry(geom)
    }
}
