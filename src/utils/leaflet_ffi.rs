// ============================================================================
// LEAFLET FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS (static/leaflet-bridge.js) - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initLeafletMap, catch)]
    pub fn init_leaflet_map(
        container_id: &str,
        lat: f64,
        lng: f64,
        zoom: f64,
        tile_url: &str,
        attribution: &str,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = setLeafletView, catch)]
    pub fn set_leaflet_view(container_id: &str, lat: f64, lng: f64, zoom: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = addLeafletMarker, catch)]
    pub fn add_leaflet_marker(container_id: &str, lat: f64, lng: f64, label: &str) -> Result<(), JsValue>;

    /// `points_json`: `[[lat, lng], ...]`
    #[wasm_bindgen(js_name = addLeafletPolyline, catch)]
    pub fn add_leaflet_polyline(
        container_id: &str,
        points_json: &str,
        color: &str,
        weight: u32,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = clearLeafletOverlays, catch)]
    pub fn clear_leaflet_overlays(container_id: &str) -> Result<(), JsValue>;
}
