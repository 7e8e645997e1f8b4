// ============================================================================
// STATE MODULE - Snapshot inmutable + holder reactivo con notificaciones
// ============================================================================

pub mod reactivity;
pub mod route_view;
pub mod app_state;

pub use reactivity::*;
pub use route_view::*;
pub use app_state::*;
