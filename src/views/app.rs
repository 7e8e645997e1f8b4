// ============================================================================
// APP VIEW - Página completa (sin lógica, solo DOM)
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::app::AppViewModel;
use crate::dom::ElementBuilder;
use crate::state::RouteViewState;
use crate::utils::constants::BASE_MAP_ID;
use crate::views::{render_hospital_list, render_route_form, render_route_panel, render_sidebar, Theme};

/// Renderizar la página a partir de un snapshot
pub fn render_app(state: &RouteViewState, vm: &Rc<AppViewModel>) -> Result<Element, JsValue> {
    let theme = Theme::for_mode(state.dark_mode);

    let heading = ElementBuilder::new("h1")?
        .style(&theme.heading_style())?
        .text("Ambulance Routing to Nearest Hospitals")
        .build();

    let form = if state.shows_route_form() {
        Some(render_route_form(state, &theme, vm)?)
    } else {
        None
    };

    let eta = ElementBuilder::new("p")?
        .style(&theme.heading_style())?
        .text("Estimated Time of Arrival: ")
        .child(ElementBuilder::new("strong")?.text(&format!("{} minutes", state.eta)).build())?
        .build();

    let base_map = ElementBuilder::new("div")?
        .id(BASE_MAP_ID)?
        .style("height: 100%; flex: 1; min-height: 300px; margin-top: 20px;")?
        .build();

    let route_panel = match &state.route {
        Some(outcome) => Some(render_route_panel(&outcome.route, &theme)?),
        None => None,
    };

    let hospitals = if state.has_hospitals() {
        Some(render_hospital_list(&state.hospitals, &theme)?)
    } else {
        None
    };

    let main = ElementBuilder::new("div")?
        .class("main")
        .style("flex: 1; padding: 20px; display: flex; flex-direction: column;")?
        .child(heading)?
        .child_opt(form)?
        .child(eta)?
        .child(base_map)?
        .child_opt(route_panel)?
        .child_opt(hospitals)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("page")
        .style(&theme.page_style())?
        .child(render_sidebar(&theme, vm)?)?
        .child(main)?
        .build())
}
