//! Configuration of document reading.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key of the features array in a GeoJSON feature collection.
pub const DEFAULT_FEATURES_KEY: &str = "features";

/// Options controlling how a document is turned into a list of feature members.
///
/// The defaults read a standard feature collection without checking its `type`:
///
/// ```
/// use geoimport::ReadOptions;
///
/// let options = ReadOptions::default().with_expected_type("FeatureCollection");
/// assert_eq!(options.features_key(), "features");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReadOptions {
    features_key: String,
    expected_type: Option<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            features_key: DEFAULT_FEATURES_KEY.to_string(),
            expected_type: None,
        }
    }
}

impl ReadOptions {
    /// Sets the key of the array the members are read from.
    pub fn with_features_key(mut self, key: impl Into<String>) -> Self {
        self.features_key = key.into();
        self
    }

    /// Requires the `type` member of the document to be equal to `expected_type`.
    pub fn with_expected_type(mut self, expected_type: impl Into<String>) -> Self {
        self.expected_type = Some(expected_type.into());
        self
    }

    /// Key of the array the members are read from.
    pub fn features_key(&self) -> &str {
        &self.features_key
    }

    /// Document type required by these options. `None` if the type is not checked.
    pub fn expected_type(&self) -> Option<&str> {
        self.expected_type.as_deref()
    }
}
