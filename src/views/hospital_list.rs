use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::Hospital;
use crate::views::Theme;

pub fn render_hospital_list(hospitals: &[Hospital], theme: &Theme) -> Result<Element, JsValue> {
    let mut list = ElementBuilder::new("ul")?.style(&theme.heading_style())?;
    for hospital in hospitals {
        list = list.child(ElementBuilder::new("li")?.text(&hospital.name).build())?;
    }

    Ok(ElementBuilder::new("div")?
        .class("hospital-list")
        .child(
            ElementBuilder::new("h3")?
                .style(&theme.heading_style())?
                .text("Nearby Hospitals:")
                .build(),
        )?
        .child(list.build())?
        .build())
}
