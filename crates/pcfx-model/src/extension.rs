//! # Data Model Extensions
//!
//! Opaque, schema-tagged payloads attached to a footprint for data the
//! core model does not cover. The core never interprets `data`; it is
//! carried unmodified to and from schema-specific handlers keyed by
//! `data_schema`.

use serde::{Deserialize, Serialize};

/// A data model extension attached to a product footprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModelExtension {
    /// Version of the extension specification.
    pub spec_version: String,

    /// Identifier of the schema describing `data`, typically a URL.
    pub data_schema: String,

    /// The extension payload, opaque to this layer. Structurally valid
    /// JSON of any shape; unrecognized content here is never an error.
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_payload_roundtrip() {
        let json = r#"{
            "specVersion": "2.0.0",
            "dataSchema": "https://catalog.carbon-transparency.com/shipment/1.0.0/schema.json",
            "data": {"shipmentId": "S1234567890", "nested": [1, 2, {"deep": true}]}
        }"#;
        let ext: DataModelExtension = serde_json::from_str(json).unwrap();
        assert_eq!(ext.data["nested"][2]["deep"], serde_json::json!(true));

        let back = serde_json::to_value(&ext).unwrap();
        let reparsed: DataModelExtension = serde_json::from_value(back).unwrap();
        assert_eq!(ext, reparsed);
    }
}
