use common::charts::{revenue_axis_ticks, BarSeries};
use serde_json::{json, Value};
use web_sys::Element;
use yew::prelude::*;

use super::plotly;
use crate::ui::loading::Skeleton;

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub title: AttrValue,
    pub empty_message: AttrValue,
    pub series: BarSeries,
    pub loading: bool,
}

fn traces(series: &BarSeries) -> Value {
    json!([{
        "x": series.positions,
        "y": series.revenue,
        "text": series.hover,
        "hoverinfo": "text",
        "textposition": "none",
        "type": "bar",
        "marker": {"color": "#3b82f6"},
        "name": "Revenue"
    }])
}

fn layout(series: &BarSeries) -> Value {
    let ticks = revenue_axis_ticks(series.max_revenue());
    let mut layout = plotly::base_layout();
    layout["margin"] = json!({"t": 20, "r": 30, "l": 60, "b": 110});
    layout["xaxis"] = json!({
        "tickmode": "array",
        "tickvals": series.positions,
        "ticktext": series.labels,
        "tickangle": -45,
        "showgrid": false
    });
    layout["yaxis"] = json!({
        "tickmode": "array",
        "tickvals": ticks.values,
        "ticktext": ticks.labels,
        "showgrid": true,
        "gridcolor": "#e5e7eb",
        "griddash": "dash"
    });
    layout
}

/// Revenue per category as vertical bars, one slot per entry.
#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let deps = (chart_ref.clone(), props.series.clone(), props.loading);
        use_effect_with(deps, |(chart_ref, series, loading)| {
            let element = if *loading { None } else { chart_ref.cast::<Element>() };
            if let Some(element) = &element {
                log::trace!("Plotting {} bars", series.len());
                plotly::render(element, &traces(series), &layout(series));
            }
            move || {
                if let Some(element) = element {
                    plotly::clear(&element);
                }
            }
        });
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{&props.title}</h2>
                if props.loading {
                    <Skeleton class="h-[300px] w-full" />
                } else if props.series.is_empty() {
                    <p class="text-center text-sm text-gray-500 py-24">{&props.empty_message}</p>
                } else {
                    <div ref={chart_ref} class="chart-container" style="height: 300px;"></div>
                }
            </div>
        </div>
    }
}
