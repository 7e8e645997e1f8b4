use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::app::{spawn_action, AppViewModel};
use crate::dom::{on_click, ElementBuilder};
use crate::views::Theme;

fn nav_button<F>(label: &str, theme: &Theme, handler: F) -> Result<Element, JsValue>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let button = ElementBuilder::new("button")?
        .class("nav-button")
        .attr("type", "button")?
        .style(&theme.nav_button_style())?
        .text(label)
        .build();
    on_click(&button, handler)?;
    Ok(button)
}

/// Sidebar: título, navegación y footer
pub fn render_sidebar(theme: &Theme, vm: &Rc<AppViewModel>) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h2")?
        .style("color: #fff; font-size: 24px;")?
        .text("Ambulance Routing")
        .build();

    // Home y Route hacen lo mismo: volver al formulario
    let home = {
        let vm = vm.clone();
        nav_button("Home", theme, move |_| vm.reset_route())?
    };
    let route = {
        let vm = vm.clone();
        nav_button("Route", theme, move |_| vm.reset_route())?
    };
    let hospitals = {
        let vm = vm.clone();
        nav_button("Hospitals", theme, move |_| {
            let location = vm.state().snapshot().start_location;
            spawn_action(&vm, move |vm| async move {
                vm.search_nearby_hospitals(&location).await
            });
        })?
    };
    let dark_mode = {
        let vm = vm.clone();
        nav_button("Dark Mode", theme, move |_| vm.toggle_dark_mode())?
    };

    let footer = ElementBuilder::new("footer")?
        .style("color: #fff; text-align: center; font-size: 12px;")?
        .child(ElementBuilder::new("p")?.text("© 2024 Ambulance Routing System").build())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("sidebar")
        .style(&theme.sidebar_style())?
        .child(title)?
        .child(home)?
        .child(route)?
        .child(hospitals)?
        .child(dark_mode)?
        .child(footer)?
        .build())
}
