// Utils compartidos

pub mod constants;
pub mod leaflet_ffi;

pub use constants::*;
