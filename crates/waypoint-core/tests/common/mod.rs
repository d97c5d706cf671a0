#![allow(dead_code)]

use axum::Router;
use jiff::civil::{date, Date};
use tempfile::TempDir;
use waypoint_core::{
    models::{Pace, Session, TripRequest},
    params::Credentials,
    GatewayConfig, TravelPlanner, TravelPlannerBuilder,
};

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{addr}")
}

/// A base URL with nothing listening behind it.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Helper function to create a test planner talking to `backend_url`
pub async fn create_test_planner(backend_url: &str) -> (TempDir, TravelPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = TravelPlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_gateway_config(GatewayConfig {
            backend_url: backend_url.to_string(),
            timeout_secs: 5,
            ..GatewayConfig::default()
        })
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Signs up `email` with a fixed password and logs in.
pub async fn login_as(planner: &TravelPlanner, email: &str) -> Session {
    let credentials = Credentials {
        email: email.to_string(),
        password: "secret1".to_string(),
    };
    planner.signup(&credentials).await.expect("Failed to sign up");
    planner.login(&credentials).await.expect("Failed to log in")
}

pub fn trip(start: Date, end: Date) -> TripRequest {
    TripRequest {
        origin: "Ho Chi Minh City".to_string(),
        destination: "Da Nang".to_string(),
        start_date: start,
        end_date: end,
        interests: vec!["Food".to_string(), "Nature".to_string()],
        pace: Pace::Normal,
        model: "llama3".to_string(),
    }
}

pub fn two_day_trip() -> TripRequest {
    trip(date(2024, 6, 1), date(2024, 6, 2))
}
