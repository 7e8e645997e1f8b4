use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::RouteResult;
use crate::utils::constants::ROUTE_MAP_ID;
use crate::views::Theme;

fn minutes_line(theme: &Theme, label: &str, minutes: f64) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?
        .style(&theme.heading_style())?
        .text(label)
        .child(ElementBuilder::new("strong")?.text(&format!("{} minutes", minutes)).build())?
        .build())
}

/// Tiempos + contenedor del mapa de la ruta (Leaflet se monta después del append)
pub fn render_route_panel(route: &RouteResult, theme: &Theme) -> Result<Element, JsValue> {
    let map = ElementBuilder::new("div")?
        .id(ROUTE_MAP_ID)?
        .style("height: 500px; width: 100%; margin-top: 20px;")?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("route-panel")
        .child(
            ElementBuilder::new("h3")?
                .style(&theme.heading_style())?
                .text("Optimized Route:")
                .build(),
        )?
        .child(minutes_line(theme, "Travel Time: ", route.optimized_time)?)?
        .child(minutes_line(theme, "Non-Optimized Time: ", route.non_optimized_time)?)?
        .child(map)?
        .build())
}
