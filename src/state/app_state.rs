// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::state::{ReactiveState, RouteViewState};

/// Estado global de la aplicación (un solo snapshot de la vista de rutas)
#[derive(Clone)]
pub struct AppState {
    pub view: ReactiveState<RouteViewState>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            view: ReactiveState::new(RouteViewState::new()),
        }
    }

    /// Snapshot actual para renderizar
    pub fn snapshot(&self) -> RouteViewState {
        self.view.snapshot()
    }

    /// Suscribirse a cambios de estado (re-render)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.view.subscribe(callback);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
