use crate::api::ApiError;
use crate::constants::{
    MSG_LOAD_FAILURE, MSG_ROUTE_NOT_FOUND, MSG_SAME_STATION, MSG_SEARCH_FAILED, MSG_UNKNOWN_STATION,
};

/// Why a search did not produce a route; `Display` is the inline message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The station directory is not available, so nothing can be validated
    #[error("{}", MSG_LOAD_FAILURE)]
    LoadFailure,

    #[error("{}", MSG_UNKNOWN_STATION)]
    UnknownStation,

    #[error("{}", MSG_SAME_STATION)]
    SameStation,

    /// The service rejected the search; carries its detail message
    #[error("{0}")]
    RouteNotFound(String),

    #[error("{}", MSG_SEARCH_FAILED)]
    MalformedResponse,

    #[error("{}", MSG_SEARCH_FAILED)]
    Network,
}

impl From<ApiError> for SearchError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { detail, .. } => {
                Self::RouteNotFound(detail.unwrap_or_else(|| MSG_ROUTE_NOT_FOUND.to_string()))
            }
            ApiError::Decode(_) => Self::MalformedResponse,
            ApiError::Http(_) => Self::Network,
        }
    }
}
