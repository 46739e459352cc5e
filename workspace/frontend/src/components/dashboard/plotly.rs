use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(element: &Element, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(element: &Element) -> Result<(), JsValue>;
}

/// Plain JS objects rather than `Map`s, which is what Plotly expects.
fn to_js(value: &Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

pub fn render(element: &Element, data: &Value, layout: &Value) {
    let config = json!({"responsive": true, "displayModeBar": false});

    let args = to_js(data).and_then(|data| Ok((data, to_js(layout)?, to_js(&config)?)));
    let (data, layout, config) = match args {
        Ok(args) => args,
        Err(e) => {
            log::error!("Failed to serialize chart definition: {}", e);
            return;
        }
    };

    if let Err(e) = new_plot(element, data, layout, config) {
        log::error!("Plotly.newPlot failed: {:?}", e);
    }
}

pub fn clear(element: &Element) {
    if let Err(e) = purge(element) {
        log::warn!("Plotly.purge failed: {:?}", e);
    }
}

/// Layout shared by both dashboard charts.
pub fn base_layout() -> Value {
    json!({
        "margin": {"t": 10, "r": 30, "l": 60, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "font": {"size": 12, "color": "#6b7280"},
        "hoverlabel": {"bgcolor": "rgba(255,255,255,0.95)"},
        "showlegend": false
    })
}
