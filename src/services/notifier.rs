use std::fmt;
use crate::state::ValidationError;

/// Aviso visible para el usuario
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Validation(ValidationError),
    RouteFetchFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Validation(err) => write!(f, "{}", err),
            Notice::RouteFetchFailed => write!(f, "Failed to fetch route data. Try again later."),
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// `window.alert`
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        let message = notice.to_string();
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(&message) {
                    log::error!("❌ [NOTICE] No se pudo mostrar el aviso: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [NOTICE] Sin window: {}", message),
        }
    }
}
