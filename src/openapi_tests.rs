#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        // Test that the OpenAPI schema can be generated without errors
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        assert!(components.schemas.contains_key("ErrorResponse"));
        assert!(components.schemas.contains_key("HealthResponse"));
        assert!(components.schemas.contains_key("CommodityCatalog"));
        assert!(components.schemas.contains_key("ForecastView"));
        assert!(components.schemas.contains_key("DashboardView"));

        // Verify that the schema can be serialized to JSON without errors
        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let error_response_schema = components.schemas.get("ErrorResponse").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) =
            error_response_schema
        {
            let properties = &obj.properties;
            assert!(properties.contains_key("error"));
            assert!(properties.contains_key("code"));
            assert!(properties.contains_key("success"));
        } else {
            panic!("ErrorResponse should be an object schema");
        }
    }

    #[test]
    fn test_openapi_paths_contain_dashboard_endpoints() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.paths.paths.contains_key("/health"));
        assert!(openapi.paths.paths.contains_key("/api/v1/commodities"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/api/v1/commodities/{commodity}/overview"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/api/v1/commodities/{commodity}/forecast"));
        assert!(openapi
            .paths
            .paths
            .contains_key("/api/v1/commodities/{commodity}/view"));
        assert!(openapi.paths.paths.contains_key("/api/v1/scatter"));

        let health_path = openapi.paths.paths.get("/health").unwrap();
        let health_get = health_path
            .operations
            .get(&utoipa::openapi::PathItemType::Get);
        assert!(health_get.is_some());

        let responses = &health_get.unwrap().responses;
        assert!(responses.responses.contains_key("200"));
    }
}
