//! Purpose: Decode registrar domain objects whose field encodings vary by API version.
//! Exports: `Domain`, `DomainLabel`, `decode_domain`, `decode_domain_list`.
//! Role: Centralizes schema variance so callers get one clean typed value.
//! Invariants: Decoding is all-or-nothing; any field failure discards the record.
//! Invariants: Only `createDate` and `labels` may be absent; every other anomaly is an error.
//! Notes: Fields are read from a raw `Map<String, Value>` first because several need inspection.

use super::{ApiResult, decode_response};
use crate::core::error::{Error, ErrorKind};
use crate::core::quasi_bool::decode_quasi_bool;
use crate::core::timestamp::{format_timestamp, parse_timestamp};
use crate::json::parse;
use serde::de::{self, Deserializer};
use serde::ser::{self, SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

const FIELD_DOMAIN: &str = "domain";
const FIELD_STATUS: &str = "status";
const FIELD_TLD: &str = "tld";
const FIELD_CREATE_DATE: &str = "createDate";
const FIELD_EXPIRE_DATE: &str = "expireDate";
const FIELD_SECURITY_LOCK: &str = "securityLock";
const FIELD_WHOIS_PRIVACY: &str = "whoisPrivacy";
const FIELD_AUTO_RENEW: &str = "autoRenew";
const FIELD_NOT_LOCAL: &str = "notLocal";
const FIELD_LABELS: &str = "labels";

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DomainLabel {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,
}

/// A domain managed by the registrar.
///
/// `create_date` is the Unix epoch when the server omitted it. `labels` is
/// empty when the server omitted it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Domain {
    pub domain: String,
    pub status: String,
    pub tld: String,
    pub create_date: OffsetDateTime,
    pub expire_date: OffsetDateTime,
    pub security_lock: bool,
    pub whois_privacy: bool,
    pub auto_renew: bool,
    pub not_local: bool,
    pub labels: Vec<DomainLabel>,
}

impl Domain {
    pub fn from_map(map: &Map<String, Value>) -> ApiResult<Self> {
        let domain = required_string(map, FIELD_DOMAIN)?;
        tracing::debug!(domain = %domain, "decoding domain");
        let status = required_string(map, FIELD_STATUS)?;
        let tld = required_string(map, FIELD_TLD)?;

        let create_date = match optional(map, FIELD_CREATE_DATE) {
            Some(raw) => parse_timestamp(FIELD_CREATE_DATE, date_text(FIELD_CREATE_DATE, raw)?)?,
            None => {
                tracing::debug!(field = FIELD_CREATE_DATE, "absent; using unix epoch");
                OffsetDateTime::UNIX_EPOCH
            }
        };
        let expire_date = parse_timestamp(
            FIELD_EXPIRE_DATE,
            date_text(FIELD_EXPIRE_DATE, required(map, FIELD_EXPIRE_DATE)?)?,
        )?;

        let security_lock = quasi_bool(map, FIELD_SECURITY_LOCK)?;
        let whois_privacy = quasi_bool(map, FIELD_WHOIS_PRIVACY)?;
        let auto_renew = quasi_bool(map, FIELD_AUTO_RENEW)?;
        let not_local = quasi_bool(map, FIELD_NOT_LOCAL)?;

        let labels = match optional(map, FIELD_LABELS) {
            Some(raw) => Vec::<DomainLabel>::deserialize(raw).map_err(|err| {
                Error::new(ErrorKind::InvalidField)
                    .with_message(format!("field `{FIELD_LABELS}` is not a label list: {err}"))
                    .with_field(FIELD_LABELS)
                    .with_source(err)
            })?,
            None => Vec::new(),
        };

        Ok(Self {
            domain,
            status,
            tld,
            create_date,
            expire_date,
            security_lock,
            whois_privacy,
            auto_renew,
            not_local,
            labels,
        })
    }
}

/// Decodes one domain object from raw response bytes.
pub fn decode_domain(bytes: &[u8]) -> ApiResult<Domain> {
    let map: Map<String, Value> = parse::from_slice(bytes, "domain object")?;
    Domain::from_map(&map)
}

#[derive(Deserialize)]
struct DomainListEnvelope {
    #[serde(default)]
    domains: Vec<Map<String, Value>>,
}

/// Decodes a `{status, domains: [...]}` listing; the first bad domain fails the call.
pub fn decode_domain_list(bytes: &[u8]) -> ApiResult<Vec<Domain>> {
    let envelope: DomainListEnvelope = decode_response(bytes)?;
    envelope.domains.iter().map(Domain::from_map).collect()
}

fn optional<'a>(map: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    map.get(field).filter(|raw| !raw.is_null())
}

fn required<'a>(map: &'a Map<String, Value>, field: &str) -> ApiResult<&'a Value> {
    map.get(field).ok_or_else(|| Error::missing_field(field))
}

fn required_string(map: &Map<String, Value>, field: &str) -> ApiResult<String> {
    match required(map, field)? {
        Value::String(text) => Ok(text.clone()),
        _ => Err(not_a_string(field)),
    }
}

fn date_text<'a>(field: &str, raw: &'a Value) -> ApiResult<&'a str> {
    raw.as_str().ok_or_else(|| not_a_string(field))
}

fn quasi_bool(map: &Map<String, Value>, field: &str) -> ApiResult<bool> {
    decode_quasi_bool(field, required(map, field)?)
}

fn not_a_string(field: &str) -> Error {
    Error::new(ErrorKind::InvalidField)
        .with_message(format!("field `{field}` is not a string"))
        .with_field(field)
}

impl<'de> Deserialize<'de> for Domain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Domain::from_map(&map).map_err(de::Error::custom)
    }
}

impl Serialize for Domain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let create_date =
            format_timestamp(FIELD_CREATE_DATE, self.create_date).map_err(ser::Error::custom)?;
        let expire_date =
            format_timestamp(FIELD_EXPIRE_DATE, self.expire_date).map_err(ser::Error::custom)?;

        let mut state = serializer.serialize_struct("Domain", 10)?;
        state.serialize_field(FIELD_DOMAIN, &self.domain)?;
        state.serialize_field(FIELD_STATUS, &self.status)?;
        state.serialize_field(FIELD_TLD, &self.tld)?;
        state.serialize_field(FIELD_CREATE_DATE, &create_date)?;
        state.serialize_field(FIELD_EXPIRE_DATE, &expire_date)?;
        state.serialize_field(FIELD_SECURITY_LOCK, &u8::from(self.security_lock))?;
        state.serialize_field(FIELD_WHOIS_PRIVACY, &u8::from(self.whois_privacy))?;
        state.serialize_field(FIELD_AUTO_RENEW, &u8::from(self.auto_renew))?;
        state.serialize_field(FIELD_NOT_LOCAL, &u8::from(self.not_local))?;
        state.serialize_field(FIELD_LABELS, &self.labels)?;
        state.end()
    }
}
