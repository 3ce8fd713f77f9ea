//! Loading of GeoJSON documents.
//!
//! A document is always read and decoded completely before any of its members is handed out.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::ImportError;
use crate::options::ReadOptions;

/// Reads the file at `path` as UTF-8 text and decodes it as JSON.
///
/// The file is closed before this function returns.
pub fn read_document(path: impl AsRef<Path>) -> Result<Value, ImportError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|err| ImportError::io(path, err))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|err| ImportError::io(path, err))?;
    drop(file);

    debug!("Read {} bytes from {path:?}", contents.len());
    Ok(serde_json::from_str(&contents)?)
}

/// Reads the whole `reader` as UTF-8 text and decodes it as JSON.
pub fn read_document_from(mut reader: impl Read) -> Result<Value, ImportError> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(ImportError::Read)?;

    Ok(serde_json::from_str(&contents)?)
}

/// Takes the member list out of a decoded document.
pub fn extract_members(document: Value, options: &ReadOptions) -> Result<Vec<Value>, ImportError> {
    let Value::Object(mut object) = document else {
        return Err(ImportError::NotAnObject);
    };

    if let Some(expected) = options.expected_type() {
        let found = object.get("type").and_then(Value::as_str);
        if found != Some(expected) {
            return Err(ImportError::UnexpectedType {
                expected: expected.to_string(),
                found: found.map(str::to_string),
            });
        }
    }

    let key = options.features_key();
    match object.remove(key) {
        Some(Value::Array(members)) => {
            debug!("Document contains {} members", members.len());
            Ok(members)
        }
        Some(_) => Err(ImportError::NotAnArray(key.to_string())),
        None => Err(ImportError::MissingKey(key.to_string())),
    }
}
