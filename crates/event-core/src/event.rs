//! The synthetic view event record.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Country codes an event can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    IT,
    FR,
    EN,
    US,
    CH,
    RU,
    DE,
    NE,
    JP,
}

impl Country {
    /// Every code, in declaration order.
    pub const ALL: [Country; 9] = [
        Country::IT,
        Country::FR,
        Country::EN,
        Country::US,
        Country::CH,
        Country::RU,
        Country::DE,
        Country::NE,
        Country::JP,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::IT => "IT",
            Country::FR => "FR",
            Country::EN => "EN",
            Country::US => "US",
            Country::CH => "CH",
            Country::RU => "RU",
            Country::DE => "DE",
            Country::NE => "NE",
            Country::JP => "JP",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCountry(s.to_string()))
    }
}

/// One synthetic view record.
///
/// Events are produced once by the generator and never mutated afterwards.
/// The JSON field names are part of the wire contract: note that `clip_id` is
/// encoded as `clip`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Zero-padded decimal clip identifier
    #[serde(rename = "clip")]
    pub clip_id: String,
    pub country: Country,
    /// UUID v4 string, used as the batch key
    pub event_id: String,
    /// Zero-padded decimal publisher identifier
    pub publisher_id: String,
    /// Seconds viewed, a multiple of 0.1 in [0, 30)
    pub viewable_time: f64,
    /// Generation time as fractional unix epoch seconds
    pub timestamp: f64,
}

impl Event {
    /// Encode this event as a JSON object string.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(CoreError::Serialization)
    }

    /// Decode an event from its JSON object string.
    pub fn from_json(s: &str) -> Result<Self, CoreError> {
        serde_json::from_str(s).map_err(CoreError::InvalidPayload)
    }
}
