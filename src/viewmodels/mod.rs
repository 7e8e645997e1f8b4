pub mod route_viewmodel;
pub mod map_viewmodel;

pub use route_viewmodel::{ActionError, RouteViewModel};
pub use map_viewmodel::{MapScene, MapViewModel};
