#[cfg(test)]
mod integration_tests {
    use crate::schemas::ApiResponse;
    use crate::test_utils::test_utils::setup_test_app;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        // 3 commodities x 5 surviving year columns
        assert_eq!(body["records"], 15);
    }

    #[tokio::test]
    async fn test_commodity_catalog() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/commodities").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Commodity catalog retrieved successfully");

        let catalog = &body.data;
        assert_eq!(
            catalog["commodities"],
            serde_json::json!(["Paddy (Common)", "Wheat", "Maize"])
        );
        assert_eq!(catalog["year_min"], 2018);
        assert_eq!(catalog["year_max"], 2022);
        assert_eq!(catalog["records"], 15);
    }

    #[tokio::test]
    async fn test_overview_statistics() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/commodities/Paddy%20(Common)/overview")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);

        let stats = &body.data["statistics"];
        assert_eq!(stats["latest_price"], 2040.0);
        assert_eq!(stats["first_price"], 1750.0);
        assert!((stats["average_price"].as_f64().unwrap() - 1882.6).abs() < 1e-9);
        let growth = stats["growth_pct"].as_f64().unwrap();
        assert!((growth - (2040.0 - 1750.0) / 1750.0 * 100.0).abs() < 1e-9);

        let series = body.data["series"].as_array().unwrap();
        assert_eq!(series.len(), 5);
        assert_eq!(series[0]["year"], "2018-19");
        assert_eq!(series[4]["year"], "2022-23");
    }

    #[tokio::test]
    async fn test_overview_range_is_inclusive() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/commodities/Paddy%20(Common)/overview?start_year=2019&end_year=2021")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();

        let years: Vec<i64> = body.data["series"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["year_num"].as_i64().unwrap())
            .collect();
        assert_eq!(years, vec![2019, 2020, 2021]);
        assert_eq!(body.data["range"]["start_year"], 2019);
        assert_eq!(body.data["range"]["end_year"], 2021);
    }

    #[tokio::test]
    async fn test_overview_empty_selection_yields_zeros() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/commodities/Wheat/overview?start_year=1900&end_year=1901")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();

        let stats = &body.data["statistics"];
        assert_eq!(stats["latest_price"], 0.0);
        assert_eq!(stats["first_price"], 0.0);
        assert_eq!(stats["average_price"], 0.0);
        assert_eq!(stats["growth_pct"], 0.0);
        assert!(body.data["series"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_overview_unknown_commodity_not_found() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/commodities/Barley/overview").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_overview_inverted_range_bad_request() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/commodities/Wheat/overview?start_year=2022&end_year=2018")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_forecast_linear_prediction() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/commodities/Maize/forecast?start_year=2018&end_year=2021")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);

        let forecast = &body.data;
        assert_eq!(forecast["status"], "forecast");
        assert_eq!(forecast["next_year"], 2022);
        assert_eq!(forecast["next_year_label"], "2022-23");
        assert!((forecast["predicted_msp"].as_f64().unwrap() - 500.0).abs() < 1e-6);
        assert_eq!(forecast["actual"].as_array().unwrap().len(), 4);
        assert_eq!(forecast["trend"].as_array().unwrap().len(), 100);
    }

    #[tokio::test]
    async fn test_forecast_insufficient_data() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        // Wheat has only two priced observations
        let response = server.get("/api/v1/commodities/Wheat/forecast").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);

        let forecast = &body.data;
        assert_eq!(forecast["status"], "insufficient_data");
        assert_eq!(forecast["warning"], "Not enough data for prediction.");
        assert_eq!(forecast["available"], 2);
        assert_eq!(forecast["required"], 3);
    }

    #[tokio::test]
    async fn test_forecast_empty_selection_is_insufficient() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/commodities/Maize/forecast?start_year=1900&end_year=1901")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["status"], "insufficient_data");
        assert_eq!(body.data["available"], 0);
    }

    #[tokio::test]
    async fn test_scatter_drops_null_prices() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/scatter").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();

        // 15 records minus Wheat's three null prices
        let points = body.data["points"].as_array().unwrap();
        assert_eq!(points.len(), 12);
        assert!(!points
            .iter()
            .any(|p| p["commodity"] == "Wheat" && p["year_num"] == 2018));
    }

    #[tokio::test]
    async fn test_view_dispatch_defaults_to_overview() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/commodities/Maize/view").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["mode"], "overview");
        assert_eq!(body.data["overview"]["statistics"]["latest_price"], 500.0);
    }

    #[tokio::test]
    async fn test_view_dispatch_prediction_mode() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/commodities/Maize/view?mode=prediction")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["mode"], "prediction");

        // All five linear points: the 2023 projection continues the line
        let prediction = &body.data["prediction"];
        assert_eq!(prediction["status"], "forecast");
        assert_eq!(prediction["next_year"], 2023);
        assert!((prediction["predicted_msp"].as_f64().unwrap() - 600.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_view_dispatch_3d_mode() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/commodities/Maize/view?mode=3d").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["mode"], "3d");
        // The 3D view always spans the whole dataset
        assert_eq!(body.data["scatter"]["points"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_view_dispatch_rejects_unknown_mode() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/commodities/Maize/view?mode=pie").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
