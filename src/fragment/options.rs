//! Document header options

use serde::Deserialize;

/// Root element attributes, usually embedded in the caller device config
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DocumentOptions {
    /// Tool or device writing the document
    #[serde(default = "default_creator")]
    pub creator: String,
    /// GPX schema version declared on the root element
    #[serde(default = "default_version")]
    pub version: String,
}

impl DocumentOptions {
    /// Parse the options from a YAML snippet, applying the defaults for
    /// any missing field
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml)
            .map_err(|e| format!("Failed on parse the options: {}", e.to_string()))
    }
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            creator: default_creator(),
            version: default_version(),
        }
    }
}

fn default_creator() -> String {
    "gpx-fragments".to_string()
}

fn default_version() -> String {
    "1.1".to_string()
}
