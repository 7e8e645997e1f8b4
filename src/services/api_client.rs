// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use std::fmt;
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use crate::config::CONFIG;
use crate::models::{Hospital, HospitalsResponse, RouteResponse};
use crate::utils::constants::{HOSPITALS_PATH, ROUTE_PATH};

/// Error de una llamada al servicio
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Http { status: u16, status_text: String },
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, status_text } => write!(f, "HTTP {}: {}", status, status_text),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Servicio de rutas precalculadas
#[async_trait(?Send)]
pub trait RouteClient {
    async fn fetch_route(&self, start: &str) -> Result<RouteResponse, ApiError>;
}

/// Servicio de búsqueda de hospitales
#[async_trait(?Send)]
pub trait HospitalClient {
    async fn fetch_nearby_hospitals(&self, location: &str) -> Result<Vec<Hospital>, ApiError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET con un único parámetro de query; sin timeout ni reintentos
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        param: &str,
        value: &str,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        let response = Request::get(&url)
            .query([(param, value)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl RouteClient for ApiClient {
    async fn fetch_route(&self, start: &str) -> Result<RouteResponse, ApiError> {
        log::info!("🚑 [API] Pidiendo ruta desde: {}", start);
        let response: RouteResponse = self.get_json(ROUTE_PATH, "start", start).await?;
        log::info!(
            "✅ [API] Ruta recibida: {} puntos optimizados, ETA {}",
            response.route.optimized_path.len(),
            response.eta
        );
        Ok(response)
    }
}

#[async_trait(?Send)]
impl HospitalClient for ApiClient {
    async fn fetch_nearby_hospitals(&self, location: &str) -> Result<Vec<Hospital>, ApiError> {
        log::info!("🏥 [API] Buscando hospitales cerca de: {}", location);
        let response: HospitalsResponse = self.get_json(HOSPITALS_PATH, "location", location).await?;
        log::info!("✅ [API] {} hospitales encontrados", response.hospitals.len());
        Ok(response.hospitals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = ApiClient::with_base_url("https://api.example.com/");
        assert_eq!(client.endpoint(ROUTE_PATH), "https://api.example.com/route");
        assert_eq!(
            client.endpoint(HOSPITALS_PATH),
            "https://api.example.com/nearby_hospitals"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Http { status: 503, status_text: "Service Unavailable".to_string() };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network error: offline");
    }
}
