// ============================================================================
// APP - Aplicación principal: estado + viewmodel + render completo
// ============================================================================

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::maps::{LeafletMapRenderer, MapError};
use crate::services::{AlertNotifier, ApiClient, BrowserLocationProvider};
use crate::state::{AppState, RouteViewState};
use crate::utils::constants::{BASE_MAP_ID, ROUTE_MAP_ID};
use crate::viewmodels::{ActionError, MapScene, MapViewModel, RouteViewModel};
use crate::views::render_app;

/// ViewModel con los colaboradores reales del navegador
pub type AppViewModel = RouteViewModel<ApiClient, BrowserLocationProvider, AlertNotifier>;

/// Lanzar una acción async del viewmodel desde un handler del DOM
pub fn spawn_action<F, Fut>(vm: &Rc<AppViewModel>, action: F)
where
    F: FnOnce(Rc<AppViewModel>) -> Fut,
    Fut: Future<Output = Result<(), ActionError>> + 'static,
{
    let task = action(vm.clone());
    wasm_bindgen_futures::spawn_local(async move {
        // el viewmodel ya registró el error y avisó al usuario si correspondía
        if let Err(e) = task.await {
            log::debug!("↩️ [APP] Acción terminada sin cambios: {}", e);
        }
    });
}

/// Aplicación principal
pub struct App {
    state: AppState,
    vm: Rc<AppViewModel>,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        let vm = Rc::new(RouteViewModel::new(
            ApiClient::new(),
            BrowserLocationProvider,
            AlertNotifier,
            state.view.clone(),
        ));

        // Varios cambios seguidos => un solo re-render en el próximo tick
        let render_scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if render_scheduled.replace(true) {
                return;
            }
            let render_scheduled = render_scheduled.clone();
            Timeout::new(0, move || {
                render_scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, vm, root })
    }

    /// Pedir la ubicación inicial en segundo plano
    pub fn start(&self) {
        let vm = self.vm.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.on_mount().await;
        });
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&self) -> Result<(), JsValue> {
        let snapshot = self.state.snapshot();
        log::debug!(
            "🎬 [APP] Render (ruta: {}, hospitales: {}, dark: {})",
            snapshot.route.is_some(),
            snapshot.hospitals.len(),
            snapshot.dark_mode
        );

        clear_children(&self.root);
        let view = render_app(&snapshot, &self.vm)?;
        append_child(&self.root, &view)?;

        // Los contenedores ya están en el DOM: montar Leaflet
        self.draw_maps(&snapshot);
        Ok(())
    }

    fn draw_maps(&self, snapshot: &RouteViewState) {
        let base = MapViewModel::base_scene(&CONFIG.map);
        if let Err(e) = draw_scene(BASE_MAP_ID, &base) {
            log::warn!("⚠️ [MAP] Mapa base no disponible: {}", e);
        }

        if let Some(outcome) = &snapshot.route {
            let scene = MapViewModel::route_scene(&outcome.route);
            if let Err(e) = draw_scene(ROUTE_MAP_ID, &scene) {
                log::error!("❌ [MAP] No se pudo dibujar la ruta: {}", e);
            }
        }
    }
}

fn draw_scene(container_id: &str, scene: &MapScene) -> Result<(), MapError> {
    let mut renderer = LeafletMapRenderer::new(container_id);
    renderer.initialize(scene.center, scene.zoom, &CONFIG.map.tile_url, &CONFIG.map.attribution)?;
    MapViewModel::draw(&mut renderer, scene)
}
