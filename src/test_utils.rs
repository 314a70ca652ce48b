#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use model::MspDataset;
    use std::sync::Arc;

    /// Wide CSV fixture covering the endpoint behaviors: a fully priced
    /// commodity, a sparse one, a perfectly linear one, a non-year column
    /// and an embedded-newline header.
    pub const SAMPLE_CSV: &str = "\
Commodities,\"KMS\n2018-19\",KMS 2019-20,KMS 2020-21,KMS 2021-22,KMS 2022-23,Remarks
Paddy (Common),1750,1815,1868,1940,2040,kharif
Wheat,,NA,1975,2015,,rabi
Maize,100,200,300,400,500,linear
";

    /// Create the dataset used by the integration tests
    pub fn setup_test_dataset() -> MspDataset {
        MspDataset::from_reader(SAMPLE_CSV.as_bytes()).expect("Failed to load test dataset")
    }

    /// Create AppState for testing
    pub fn setup_test_app_state() -> AppState {
        AppState {
            dataset: Arc::new(setup_test_dataset()),
        }
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        create_router(setup_test_app_state())
    }
}
