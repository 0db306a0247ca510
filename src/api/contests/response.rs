//! Contest response DTOs

use serde::{Deserialize, Deserializer, de};

use crate::models::{Contest, ContestListing};

/// `GET /contests`
///
/// The lists usually arrive under a `contests` key; a bare object is
/// accepted as well. Which shape applies is decided by the presence of the
/// key, so a malformed listing is an error rather than an empty one.
#[derive(Debug)]
pub struct ContestsResponse {
    listing: ContestListing,
}

impl ContestsResponse {
    pub fn into_listing(self) -> ContestListing {
        self.listing
    }
}

impl<'de> Deserialize<'de> for ContestsResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        let body = if value.get("contests").is_some() {
            value["contests"].take()
        } else {
            value
        };

        let listing = ContestListing::deserialize(body).map_err(de::Error::custom)?;
        Ok(Self { listing })
    }
}

/// `GET /contests/{id}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestDetailsResponse {
    pub contest_details: Contest,
}
