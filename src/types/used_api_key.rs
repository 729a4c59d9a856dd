use serde::{Deserialize, Serialize};

/// A struct to hold the API key extracted from the `Authorization` header.
///
/// The key is taken as-is from the header. It may be empty and is not
/// validated against any credential store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UsedApiKey {
    pub used_api_key: String,
}
