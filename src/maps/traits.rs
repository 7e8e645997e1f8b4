use std::fmt;
use crate::models::Coordinate;

/// Marcador con etiqueta (popup)
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: Coordinate,
    pub label: String,
}

/// Polilínea con color y grosor
#[derive(Debug, Clone, PartialEq)]
pub struct MapPolyline {
    pub path: Vec<Coordinate>,
    pub color: String,
    pub weight: u32,
}

/// Trait común para renderizadores de mapas
pub trait MapRenderer {
    /// Centrar el mapa en una ubicación específica
    fn set_view(&mut self, center: Coordinate, zoom: f64) -> Result<(), MapError>;

    fn add_marker(&mut self, marker: &MapMarker) -> Result<(), MapError>;

    fn add_polyline(&mut self, polyline: &MapPolyline) -> Result<(), MapError>;

    /// Quitar marcadores y polilíneas (las tiles se quedan)
    fn clear_overlays(&mut self) -> Result<(), MapError>;

    /// Verificar si el mapa está listo
    fn is_ready(&self) -> bool;
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NotReady,
    InvalidCoordinates(Coordinate),
    Renderer(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::NotReady => write!(f, "Map is not ready"),
            MapError::InvalidCoordinates(c) => write!(f, "Invalid coordinates: {}", c),
            MapError::Renderer(msg) => write!(f, "Renderer error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

/// Latitud en [-90, 90], longitud en [-180, 180], ambas finitas
pub fn is_valid_coordinate(c: &Coordinate) -> bool {
    c.latitude.is_finite()
        && c.longitude.is_finite()
        && (-90.0..=90.0).contains(&c.latitude)
        && (-180.0..=180.0).contains(&c.longitude)
}
