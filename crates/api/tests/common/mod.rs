#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use weatherdesk_api::config::ServerConfig;
use weatherdesk_api::router::build_app_router;
use weatherdesk_api::state::AppState;
use weatherdesk_core::provider::{
    Coordinates, CurrentConditions, GeoPlace, Geocoder, ProviderError, WeatherSource,
};
use weatherdesk_db::DbPool;
use weatherdesk_openmeteo::OpenMeteoConfig;

// ---------------------------------------------------------------------------
// Fake providers
// ---------------------------------------------------------------------------

/// What a fake provider answers with.
#[derive(Clone)]
pub enum Reply<T> {
    Ok(T),
    Fail(u16),
}

impl<T: Clone> Reply<T> {
    fn get(&self) -> Result<T, ProviderError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Fail(status) => Err(ProviderError::Status {
                status: *status,
                body: "upstream unavailable".into(),
            }),
        }
    }
}

/// Geocoder answering every lookup with the same reply.
pub struct FakeGeocoder {
    reply: Reply<Vec<GeoPlace>>,
    calls: AtomicUsize,
}

impl FakeGeocoder {
    pub fn new(reply: Reply<Vec<GeoPlace>>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn search(&self, _name: &str) -> Result<Vec<GeoPlace>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.get()
    }
}

/// Weather source answering every lookup with the same reply.
pub struct FakeWeather {
    reply: Reply<Option<CurrentConditions>>,
    calls: AtomicUsize,
}

impl FakeWeather {
    pub fn new(reply: Reply<Option<CurrentConditions>>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherSource for FakeWeather {
    async fn current_conditions(
        &self,
        _coordinates: Coordinates,
    ) -> Result<Option<CurrentConditions>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.get()
    }
}

pub fn berlin() -> GeoPlace {
    GeoPlace {
        name: "Berlin".into(),
        coordinates: Coordinates {
            latitude: 52.52,
            longitude: 13.41,
        },
        country: Some("Germany".into()),
    }
}

pub fn mild_conditions() -> CurrentConditions {
    CurrentConditions {
        temperature: 12.3,
        windspeed: 7.9,
        weathercode: 2,
    }
}

// ---------------------------------------------------------------------------
// Test application
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        open_meteo: OpenMeteoConfig::default(),
    }
}

/// A router over a throwaway SQLite file plus handles on the fakes behind it.
///
/// The `TempDir` is held so the database file lives as long as the app.
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    pub geocoder: Arc<FakeGeocoder>,
    pub weather: Arc<FakeWeather>,
    _dir: TempDir,
}

impl TestApp {
    /// App whose providers always resolve to Berlin with mild conditions.
    pub async fn new() -> Self {
        Self::with_replies(
            Reply::Ok(vec![berlin()]),
            Reply::Ok(Some(mild_conditions())),
        )
        .await
    }

    pub async fn with_replies(
        places: Reply<Vec<GeoPlace>>,
        conditions: Reply<Option<CurrentConditions>>,
    ) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("weather.db").display());
        let pool = weatherdesk_db::create_pool(&url).await.unwrap();
        weatherdesk_db::run_migrations(&pool).await.unwrap();

        let geocoder = Arc::new(FakeGeocoder::new(places));
        let weather = Arc::new(FakeWeather::new(conditions));

        let config = test_config();
        let state = AppState {
            pool: pool.clone(),
            config: Arc::new(config.clone()),
            geocoder: geocoder.clone(),
            weather: weather.clone(),
        };

        Self {
            router: build_app_router(state, &config),
            pool,
            geocoder,
            weather,
            _dir: dir,
        }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        send(self.router.clone(), Method::GET, uri).await
    }

    pub async fn post(&self, uri: &str) -> Response<Body> {
        send(self.router.clone(), Method::POST, uri).await
    }

    pub async fn put(&self, uri: &str) -> Response<Body> {
        send(self.router.clone(), Method::PUT, uri).await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        send(self.router.clone(), Method::DELETE, uri).await
    }
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Send a body-less request through the router.
pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
