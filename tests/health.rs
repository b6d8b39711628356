use axum::{body::Body, http::Request};
use tower::ServiceExt;

use stock_data_service::{
    api::router::create_router,
    config::{AppEnv, Config},
    stocks::service::StockService,
};

#[tokio::test]
async fn health_check_works() {
    let config = Config {
        port: 3000,
        host: "127.0.0.1".into(),
        app_env: AppEnv::Test,
        tiingo_api_key: String::new(),
        static_dir: "static".into(),
    };
    let service = StockService::new(config.tiingo_api_key.clone());
    let app = create_router(&config, service);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}
