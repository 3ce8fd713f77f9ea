use std::iter::{Enumerate, FusedIterator};
use std::vec::IntoIter;

use serde_json::Value;

use crate::error::ImportError;
use crate::importer::GeoJsonImporter;

/// Lazy sequence of import results, one per member of a document, in document order.
///
/// Created by [`GeoJsonImporter::read_and_parse`] and its siblings. The document is already
/// decoded when this iterator is created; every call to `next` hands one member to
/// [`GeoJsonImporter::parse_member`].
///
/// The first error ends the sequence: after an `Err` item the iterator returns only `None`.
pub struct ParsedMembers<'a, I: GeoJsonImporter + ?Sized> {
    importer: &'a I,
    members: Enumerate<IntoIter<Value>>,
    failed: bool,
}

impl<'a, I: GeoJsonImporter + ?Sized> ParsedMembers<'a, I> {
    pub(crate) fn new(importer: &'a I, members: Vec<Value>) -> Self {
        Self {
            importer,
            members: members.into_iter().enumerate(),
            failed: false,
        }
    }

    /// Returns true if the import was aborted by an error.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    fn parse(&self, index: usize, member: Value) -> Result<I::Output, ImportError> {
        match member {
            Value::Object(object) => self.importer.parse_member(object),
            _ => Err(ImportError::InvalidMember { index }),
        }
    }
}

impl<I: GeoJsonImporter + ?Sized> Iterator for ParsedMembers<'_, I> {
    type Item = Result<I::Output, ImportError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let (index, member) = self.members.next()?;
        let result = self.parse(index, member);
        if let Err(err) = &result {
            log::debug!("Import aborted at member {index}: {err}");
            self.failed = true;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            let remaining = self.members.len();
            (0, Some(remaining))
        }
    }
}

impl<I: GeoJsonImporter + ?Sized> FusedIterator for ParsedMembers<'_, I> {}

impl<I: GeoJsonImporter + ?Sized> std::fmt::Debug for ParsedMembers<'_, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedMembers")
            .field("remaining", &self.members.len())
            .field("failed", &self.failed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geojson::JsonObject;
    use serde_json::json;

    use super::*;

    fn name_importer(member: JsonObject) -> Result<String, ImportError> {
        member
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ImportError::Generic("no name".into()))
    }

    #[test]
    fn yields_in_order() {
        let importer = name_importer;
        let members = vec![json!({"name": "a"}), json!({"name": "b"})];
        let results: Vec<_> = ParsedMembers::new(&importer, members)
            .collect::<Result<_, _>>()
            .expect("failed");
        assert_eq!(results, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn stops_after_error() {
        let importer = name_importer;
        let members = vec![json!({"name": "a"}), json!({}), json!({"name": "c"})];
        let mut iter = ParsedMembers::new(&importer, members);

        assert_eq!(iter.size_hint(), (0, Some(3)));
        assert_matches!(iter.next(), Some(Ok(name)) if name == "a");
        assert_matches!(iter.next(), Some(Err(ImportError::Generic(_))));
        assert!(iter.is_failed());
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn non_object_member() {
        let importer = name_importer;
        let members = vec![json!({"name": "a"}), json!("b")];
        let results: Vec<_> = ParsedMembers::new(&importer, members).collect();
        assert_eq!(results.len(), 2);
        assert_matches!(results[1], Err(ImportError::InvalidMember { index: 1 }));
    }
}
