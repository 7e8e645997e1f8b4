use serde::{Deserialize, Serialize};
use crate::models::Coordinate;

/// Zoom fijo de todos los mapas
pub const MAP_ZOOM: f64 = 13.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub enable_logging: bool,
    pub map: MapSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.example.com".to_string(),
            enable_logging: true,
            map: MapSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSettings {
    pub default_center: Coordinate,
    pub zoom: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_center: Coordinate::new(51.505, -0.09),
            zoom: MAP_ZOOM,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "API_BASE_URL" => option_env!("API_BASE_URL"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "DEFAULT_MAP_CENTER_LAT" => option_env!("DEFAULT_MAP_CENTER_LAT"),
            "DEFAULT_MAP_CENTER_LNG" => option_env!("DEFAULT_MAP_CENTER_LNG"),
            "DEFAULT_MAP_ZOOM" => option_env!("DEFAULT_MAP_ZOOM"),
            "MAP_TILE_URL" => option_env!("MAP_TILE_URL"),
            _ => None,
        })
    }

    /// Construir a partir de una fuente de variables; valores mal formados usan el default
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = Self::default();
        let parse_or = |key: &str, default: f64| {
            lookup(key).and_then(|v| v.trim().parse().ok()).unwrap_or(default)
        };

        Self {
            api_base_url: lookup("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            map: MapSettings {
                default_center: Coordinate::new(
                    parse_or("DEFAULT_MAP_CENTER_LAT", defaults.map.default_center.latitude),
                    parse_or("DEFAULT_MAP_CENTER_LNG", defaults.map.default_center.longitude),
                ),
                zoom: parse_or("DEFAULT_MAP_ZOOM", defaults.map.zoom),
                tile_url: lookup("MAP_TILE_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.map.tile_url),
                attribution: defaults.map.attribution,
            },
        }
    }

    /// URL base del servicio de rutas/hospitales
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel para wasm_logger según la configuración
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
