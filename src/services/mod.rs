pub mod api_client;
pub mod geolocation;
pub mod notifier;

pub use api_client::*;
pub use geolocation::*;
pub use notifier::*;
