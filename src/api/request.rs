//! Request body decoding
//!
//! `/country-data` bodies are a union discriminated by `operation`. Each
//! operation owns a set of fields and a body carrying a field owned by a
//! different operation is rejected, even when its value is `null`. Fields
//! unknown to every operation are ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::models::ContainerCount;

const OPERATION: &str = "operation";
const ENTRY_ID: &str = "entry_id";
const SEARCH_QUERY: &str = "search_query";
const ENTRY1_ID: &str = "entry1_id";
const ENTRY2_ID: &str = "entry2_id";

const ALL_FIELDS: [&str; 4] = [ENTRY_ID, SEARCH_QUERY, ENTRY1_ID, ENTRY2_ID];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryDataRequest {
    GetEntry { entry_id: String },
    Search { search_query: String },
    SameCountry { entry1_id: String, entry2_id: String },
}

impl CountryDataRequest {
    pub fn operation(&self) -> &'static str {
        match self {
            CountryDataRequest::GetEntry { .. } => "get_entry",
            CountryDataRequest::Search { .. } => "search",
            CountryDataRequest::SameCountry { .. } => "same_country",
        }
    }
}

impl TryFrom<Value> for CountryDataRequest {
    type Error = ApiError;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let fields = match body {
            Value::Object(fields) => fields,
            other => {
                return Err(ApiError::Validation(format!(
                    "expected a JSON object, got {}",
                    kind(&other)
                )))
            }
        };

        let operation = match fields.get(OPERATION) {
            Some(Value::String(op)) => op.as_str(),
            Some(other) => {
                return Err(ApiError::Validation(format!(
                    "`operation` must be a string, got {}",
                    kind(other)
                )))
            }
            None => return Err(ApiError::Validation("missing field `operation`".to_string())),
        };

        match operation {
            "get_entry" => {
                only_owned_fields(&fields, operation, &[ENTRY_ID])?;
                Ok(CountryDataRequest::GetEntry {
                    entry_id: required_string(&fields, ENTRY_ID)?,
                })
            }
            "search" => {
                only_owned_fields(&fields, operation, &[SEARCH_QUERY])?;
                Ok(CountryDataRequest::Search {
                    search_query: required_string(&fields, SEARCH_QUERY)?,
                })
            }
            "same_country" => {
                only_owned_fields(&fields, operation, &[ENTRY1_ID, ENTRY2_ID])?;
                Ok(CountryDataRequest::SameCountry {
                    entry1_id: required_string(&fields, ENTRY1_ID)?,
                    entry2_id: required_string(&fields, ENTRY2_ID)?,
                })
            }
            _ => Err(ApiError::InvalidOperation),
        }
    }
}

fn only_owned_fields(
    fields: &Map<String, Value>,
    operation: &str,
    owned: &[&str],
) -> Result<(), ApiError> {
    let foreign: Vec<&str> = ALL_FIELDS
        .iter()
        .copied()
        .filter(|name| !owned.contains(name) && fields.contains_key(*name))
        .collect();

    if foreign.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "field(s) {} not allowed for operation `{}`",
            foreign.join(", "),
            operation
        )))
    }
}

fn required_string(fields: &Map<String, Value>, name: &str) -> Result<String, ApiError> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ApiError::Validation(format!(
            "`{}` must be a string, got {}",
            name,
            kind(other)
        ))),
        None => Err(ApiError::Validation(format!("missing field `{}`", name))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Body of `POST /container-check`
#[derive(Debug, Clone, Deserialize)]
pub struct ContainerCheckRequest {
    pub containers: Vec<ContainerCount>,
}

impl TryFrom<Value> for ContainerCheckRequest {
    type Error = ApiError;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(body).map_err(|e| ApiError::Validation(e.to_string()))
    }
}
