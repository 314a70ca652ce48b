use std::sync::Arc;

use anyhow::Result;
use model::MspDataset;

use crate::schemas::AppState;

/// Initialize application state: load and reshape the dataset once.
///
/// Any failure here (unreadable file, missing identifier column, no usable
/// records) is an unrecoverable startup error.
pub fn initialize_app_state(data_path: &str) -> Result<AppState> {
    tracing::info!("Loading MSP dataset from: {}", data_path);
    let dataset = MspDataset::from_path(data_path)?;

    Ok(AppState {
        dataset: Arc::new(dataset),
    })
}
