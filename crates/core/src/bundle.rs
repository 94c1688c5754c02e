use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::FhirError;

/// FHIR Bundle resource (lenient read-side view of search responses)
///
/// Only the fields a client needs to walk results are modelled; everything
/// else in the server response is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    #[serde(default)]
    pub resource_type: String,

    #[serde(rename = "type", default)]
    pub bundle_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<BundleLink>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<BundleEntry>,
}

/// Link in a bundle (self, next, previous)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleLink {
    pub relation: String,
    pub url: String,
}

/// Entry in a bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<JsonValue>,
}

impl Bundle {
    /// Read a bundle out of a raw search response
    pub fn from_value(value: &JsonValue) -> Result<Self, FhirError> {
        let bundle: Bundle = serde_json::from_value(value.clone())?;
        if bundle.resource_type != "Bundle" {
            return Err(FhirError::Invalid(format!(
                "Expected resourceType 'Bundle', got '{}'",
                bundle.resource_type
            )));
        }
        Ok(bundle)
    }

    /// Resources carried by the entries, skipping entries without one
    pub fn resources(&self) -> impl Iterator<Item = &JsonValue> {
        self.entry.iter().filter_map(|e| e.resource.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_reads_searchset() {
        let value = json!({
            "resourceType": "Bundle",
            "type": "searchset",
            "total": 2,
            "meta": {"lastUpdated": "2026-01-01T00:00:00Z"},
            "link": [{"relation": "next", "url": "http://x/Patient?page=2"}],
            "entry": [
                {
                    "fullUrl": "http://x/Patient/1",
                    "resource": {"resourceType": "Patient", "id": "1"}
                },
                {"fullUrl": "http://x/Patient/2", "search": {"mode": "match"}}
            ]
        });

        let bundle = Bundle::from_value(&value).unwrap();
        assert_eq!(bundle.total, Some(2));
        assert_eq!(bundle.bundle_type.as_deref(), Some("searchset"));
        assert_eq!(bundle.resources().count(), 1);
        assert_eq!(bundle.link[0].relation, "next");
    }

    #[test]
    fn test_from_value_rejects_other_resources() {
        let err = Bundle::from_value(&json!({"resourceType": "Patient"})).unwrap_err();
        assert!(matches!(err, FhirError::Invalid(_)));
    }
}
