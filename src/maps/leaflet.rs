use wasm_bindgen::JsValue;
use crate::models::Coordinate;
use crate::utils::leaflet_ffi::*;
use super::{MapError, MapMarker, MapPolyline, MapRenderer};

/// Renderizador de mapas para web usando Leaflet (ver static/leaflet-bridge.js)
pub struct LeafletMapRenderer {
    container_id: String,
    is_ready: bool,
}

impl LeafletMapRenderer {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
            is_ready: false,
        }
    }

    /// Crear el mapa Leaflet dentro del contenedor (que ya debe estar en el DOM)
    pub fn initialize(
        &mut self,
        center: Coordinate,
        zoom: f64,
        tile_url: &str,
        attribution: &str,
    ) -> Result<(), MapError> {
        log::debug!("🗺️ [MAP] Inicializando Leaflet en #{}", self.container_id);
        init_leaflet_map(
            &self.container_id,
            center.latitude,
            center.longitude,
            zoom,
            tile_url,
            attribution,
        )
        .map_err(js_error)?;
        self.is_ready = true;
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), MapError> {
        if self.is_ready {
            Ok(())
        } else {
            Err(MapError::NotReady)
        }
    }
}

fn js_error(e: JsValue) -> MapError {
    MapError::Renderer(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

impl MapRenderer for LeafletMapRenderer {
    fn set_view(&mut self, center: Coordinate, zoom: f64) -> Result<(), MapError> {
        self.ensure_ready()?;
        set_leaflet_view(&self.container_id, center.latitude, center.longitude, zoom).map_err(js_error)
    }

    fn add_marker(&mut self, marker: &MapMarker) -> Result<(), MapError> {
        self.ensure_ready()?;
        add_leaflet_marker(
            &self.container_id,
            marker.position.latitude,
            marker.position.longitude,
            &marker.label,
        )
        .map_err(js_error)
    }

    fn add_polyline(&mut self, polyline: &MapPolyline) -> Result<(), MapError> {
        self.ensure_ready()?;
        let points_json = serde_json::to_string(&polyline.path)
            .map_err(|e| MapError::Renderer(e.to_string()))?;
        add_leaflet_polyline(&self.container_id, &points_json, &polyline.color, polyline.weight)
            .map_err(js_error)
    }

    fn clear_overlays(&mut self) -> Result<(), MapError> {
        self.ensure_ready()?;
        clear_leaflet_overlays(&self.container_id).map_err(js_error)
    }

    fn is_ready(&self) -> bool {
        self.is_ready
    }
}
