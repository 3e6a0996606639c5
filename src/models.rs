use serde::{Deserialize, Serialize};

/// A location record served by the lookup endpoints.
///
/// `id` is unique across the table (conventionally `"<COUNTRY>-<CITY>"`).
/// `name` and `country` are free-form and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub country: String,
}

impl Entry {
    pub fn new(id: &str, name: &str, country: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            country: country.to_string(),
        }
    }
}

/// Container size codes accepted by the container check
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContainerType {
    HH42,
    HH24,
    HH12,
}

impl ContainerType {
    pub const ALL: [ContainerType; 3] = [ContainerType::HH42, ContainerType::HH24, ContainerType::HH12];
}

/// One line of a container check request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerCount {
    #[serde(rename = "type")]
    pub container_type: ContainerType,
    pub count: u64,
}
