use serde::{Deserialize, Serialize};

/// A computed path as returned by `/api/find-path`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    #[serde(rename = "total_time")]
    pub total_time_minutes: f64,
    pub total_transfers: u32,
    pub steps: Vec<RouteStep>,
}

/// One leg of a route, tagged by the service's `type` field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RouteStep {
    Ride {
        line: String,
        from: String,
        to: String,
        stops: u32,
        #[serde(rename = "time")]
        time_minutes: f64,
    },
    Walk {
        line: String,
        from: String,
        to: String,
        #[serde(rename = "time")]
        time_minutes: f64,
    },
    /// Any step kind this client does not know how to show
    #[serde(other)]
    Unknown,
}

impl RouteStep {
    #[must_use]
    pub fn line(&self) -> Option<&str> {
        match self {
            Self::Ride { line, .. } | Self::Walk { line, .. } => Some(line),
            Self::Unknown => None,
        }
    }
}
