//! Purpose: Typed bodies for the registrar's non-domain responses.
//! Exports: `Record`, `PingResponse`, `CreateResponse`, `RetrieveResponse`,
//! `SslBundle`, `SslBundleResponse`, `NameServersResponse`.
//! Role: Plain serde models; each embeds the shared `Status` envelope.
//! Invariants: Record fields are optional on the wire and default to empty strings.

use super::Status;
use serde::{Deserialize, Serialize};

/// A DNS record. The API sends numeric values such as `ttl` as strings.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub record_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ttl: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prio: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct PingResponse {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "yourIp")]
    pub your_ip: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct CreateResponse {
    #[serde(flatten)]
    pub status: Status,
    pub id: i64,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct RetrieveResponse {
    #[serde(flatten)]
    pub status: Status,
    #[serde(default)]
    pub records: Vec<Record>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SslBundle {
    #[serde(rename = "intermediatecertificate")]
    pub intermediate_certificate: String,
    #[serde(rename = "certificatechain")]
    pub certificate_chain: String,
    #[serde(rename = "privatekey")]
    pub private_key: String,
    #[serde(rename = "publickey")]
    pub public_key: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct SslBundleResponse {
    #[serde(flatten)]
    pub status: Status,
    #[serde(flatten)]
    pub bundle: SslBundle,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct NameServersResponse {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "ns", default)]
    pub name_servers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::{Record, RetrieveResponse, SslBundleResponse};
    use serde_json::json;

    #[test]
    fn record_fields_default_to_empty() {
        let record: Record =
            serde_json::from_value(json!({"id": "106926659", "type": "A"})).expect("record");
        assert_eq!(record.record_type, "A");
        assert_eq!(record.notes, "");
        assert_eq!(
            serde_json::to_value(&record).expect("encode"),
            json!({"id": "106926659", "type": "A"})
        );
    }

    #[test]
    fn retrieve_without_records_is_empty() {
        let response: RetrieveResponse =
            serde_json::from_value(json!({"status": "SUCCESS"})).expect("retrieve");
        assert!(response.status.is_success());
        assert!(response.records.is_empty());
    }

    #[test]
    fn ssl_bundle_flattens_alongside_status() {
        let response: SslBundleResponse = serde_json::from_value(json!({
            "status": "SUCCESS",
            "intermediatecertificate": "inter",
            "certificatechain": "chain",
            "privatekey": "private",
            "publickey": "public"
        }))
        .expect("bundle");
        assert_eq!(response.bundle.certificate_chain, "chain");
        assert_eq!(response.status.message, None);
    }
}
