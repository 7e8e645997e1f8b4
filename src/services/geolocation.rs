// ============================================================================
// GEOLOCATION - Ubicación inicial del navegador (best-effort)
// ============================================================================

use async_trait::async_trait;
use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use crate::models::Coordinate;

/// Fuente de la posición actual. `None` si no hay permiso o soporte.
#[async_trait(?Send)]
pub trait LocationProvider {
    async fn current_position(&self) -> Option<Coordinate>;
}

/// `navigator.geolocation.getCurrentPosition`
pub struct BrowserLocationProvider;

#[async_trait(?Send)]
impl LocationProvider for BrowserLocationProvider {
    async fn current_position(&self) -> Option<Coordinate> {
        match request_position().await {
            Ok(position) => Some(position),
            Err(e) => {
                log::debug!("📍 [GEO] Ubicación no disponible: {:?}", e);
                None
            }
        }
    }
}

async fn request_position() -> Result<Coordinate, JsValue> {
    let geolocation = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .navigator()
        .geolocation()?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });
    let position = JsFuture::from(promise).await?;

    let coords = Reflect::get(&position, &JsValue::from_str("coords"))?;
    let read = |field: &str| -> Result<f64, JsValue> {
        Reflect::get(&coords, &JsValue::from_str(field))?
            .as_f64()
            .ok_or_else(|| JsValue::from_str(&format!("coords.{} is not a number", field)))
    };

    Ok(Coordinate::new(read("latitude")?, read("longitude")?))
}
