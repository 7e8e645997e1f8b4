// Módulo de mapas: trait del renderizador + implementación Leaflet

pub mod traits;
pub mod leaflet;

pub use traits::*;
pub use leaflet::LeafletMapRenderer;
