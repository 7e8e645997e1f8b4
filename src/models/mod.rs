// ============================================================================
// MODELS - Estructuras compartidas con el servicio de rutas
// ============================================================================

pub mod coordinate;
pub mod route;
pub mod hospital;

pub use coordinate::Coordinate;
pub use route::{Eta, RouteOutcome, RouteResponse, RouteResult};
pub use hospital::{Hospital, HospitalsResponse};

#[cfg(test)]
pub(crate) mod fixtures;
