pub mod theme;
pub mod app;
pub mod sidebar;
pub mod route_form;
pub mod route_panel;
pub mod hospital_list;

pub use theme::Theme;
pub use app::render_app;
pub use sidebar::render_sidebar;
pub use route_form::render_route_form;
pub use route_panel::render_route_panel;
pub use hospital_list::render_hospital_list;
