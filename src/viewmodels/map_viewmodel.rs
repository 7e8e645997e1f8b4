// ============================================================================
// MAP VIEWMODEL - Preparación de datos para el mapa
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado
// ============================================================================

use crate::config::{MapSettings, MAP_ZOOM};
use crate::maps::{is_valid_coordinate, MapError, MapMarker, MapPolyline, MapRenderer};
use crate::models::{Coordinate, RouteResult};
use crate::utils::constants::{DESTINATION_MARKER_LABEL, START_MARKER_LABEL};

pub const OPTIMIZED_PATH_COLOR: &str = "purple";
pub const OPTIMIZED_PATH_WEIGHT: u32 = 4;
pub const NON_OPTIMIZED_PATH_COLOR: &str = "gray";
pub const NON_OPTIMIZED_PATH_WEIGHT: u32 = 2;

/// Todo lo que un mapa necesita dibujar
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub center: Coordinate,
    pub zoom: f64,
    pub markers: Vec<MapMarker>,
    pub polylines: Vec<MapPolyline>,
}

/// ViewModel del mapa - SOLO lógica de negocio
pub struct MapViewModel;

impl MapViewModel {
    /// Mapa general: solo tiles, centrado en el punto por defecto
    pub fn base_scene(settings: &MapSettings) -> MapScene {
        MapScene {
            center: settings.default_center,
            zoom: settings.zoom,
            markers: Vec::new(),
            polylines: Vec::new(),
        }
    }

    /// Mapa de la ruta: salida, hospital, camino optimizado encima del no optimizado
    pub fn route_scene(route: &RouteResult) -> MapScene {
        MapScene {
            center: route.start,
            zoom: MAP_ZOOM,
            markers: vec![
                MapMarker {
                    position: route.start,
                    label: START_MARKER_LABEL.to_string(),
                },
                MapMarker {
                    position: route.destination,
                    label: DESTINATION_MARKER_LABEL.to_string(),
                },
            ],
            polylines: vec![
                MapPolyline {
                    path: route.optimized_path.clone(),
                    color: OPTIMIZED_PATH_COLOR.to_string(),
                    weight: OPTIMIZED_PATH_WEIGHT,
                },
                MapPolyline {
                    path: route.non_optimized_path.clone(),
                    color: NON_OPTIMIZED_PATH_COLOR.to_string(),
                    weight: NON_OPTIMIZED_PATH_WEIGHT,
                },
            ],
        }
    }

    /// Dibujar la escena. Si alguna coordenada es inválida no se dibuja nada.
    pub fn draw<R: MapRenderer + ?Sized>(renderer: &mut R, scene: &MapScene) -> Result<(), MapError> {
        let all_points = std::iter::once(&scene.center)
            .chain(scene.markers.iter().map(|m| &m.position))
            .chain(scene.polylines.iter().flat_map(|p| p.path.iter()));
        for point in all_points {
            if !is_valid_coordinate(point) {
                return Err(MapError::InvalidCoordinates(*point));
            }
        }

        renderer.clear_overlays()?;
        renderer.set_view(scene.center, scene.zoom)?;
        for marker in &scene.markers {
            renderer.add_marker(marker)?;
        }
        for polyline in &scene.polylines {
            renderer.add_polyline(polyline)?;
        }

        log::debug!(
            "📍 [MAP] Escena dibujada: {} marcadores, {} polilíneas",
            scene.markers.len(),
            scene.polylines.len()
        );
        Ok(())
    }
}
