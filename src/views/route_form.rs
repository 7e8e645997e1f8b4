use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use crate::app::{spawn_action, AppViewModel};
use crate::dom::{on_input, on_submit, ElementBuilder};
use crate::state::RouteViewState;
use crate::views::Theme;

/// Formulario de salida (solo mientras no hay ruta)
pub fn render_route_form(
    state: &RouteViewState,
    theme: &Theme,
    vm: &Rc<AppViewModel>,
) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("label")?
        .attr("for", "start-location")?
        .style(&theme.label_style())?
        .text("Enter Ambulance Starting Location:")
        .build();

    let input = ElementBuilder::new("input")?
        .id("start-location")?
        .attr("type", "text")?
        .attr("placeholder", "E.g., 123 Main St")?
        .attr("value", &state.start_location)?
        .style(theme.input_style())?
        .build();
    {
        let vm = vm.clone();
        let field = input.clone();
        on_input(&input, move |_| {
            if let Some(field) = field.dyn_ref::<HtmlInputElement>() {
                vm.set_start_location(&field.value());
            }
        })?;
    }

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .style(&theme.submit_button_style())?
        .text("Find Route")
        .build();

    let form = ElementBuilder::new("form")?
        .class("route-form")
        .style("margin-bottom: 20px; display: flex; align-items: center;")?
        .child(label)?
        .child(input)?
        .child(submit)?
        .build();
    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let start = vm.state().snapshot().start_location;
            spawn_action(&vm, move |vm| async move { vm.calculate_route(&start).await });
        })?;
    }

    Ok(form)
}
