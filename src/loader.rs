use crate::api::{ApiError, TransitBackend};
use crate::models::{LineCatalog, StationDirectory};

/// Fetch the station directory once, logging the outcome
///
/// # Errors
///
/// Passes the backend failure through unchanged; there is no retry.
pub async fn load_station_directory<B: TransitBackend>(
    backend: &B,
) -> Result<StationDirectory, ApiError> {
    let result = backend.all_stations().await;
    match &result {
        Ok(directory) => crate::log!("Loaded {} stations", directory.len()),
        Err(err) => crate::log_error!("Error loading stations: {err}"),
    }
    result
}

/// Fetch the line catalog once, logging the outcome
///
/// # Errors
///
/// Passes the backend failure through unchanged; there is no retry.
pub async fn load_line_catalog<B: TransitBackend>(backend: &B) -> Result<LineCatalog, ApiError> {
    let result = backend.lines_and_stations().await;
    match &result {
        Ok(catalog) => crate::log!("Loaded {} lines", catalog.len()),
        Err(err) => crate::log_error!("Error loading sidebar data: {err}"),
    }
    result
}
