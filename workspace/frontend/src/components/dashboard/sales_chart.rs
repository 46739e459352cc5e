use common::charts::{revenue_axis_ticks, SalesSeries};
use serde_json::{json, Value};
use web_sys::Element;
use yew::prelude::*;

use super::plotly;
use crate::ui::loading::Skeleton;

const LINE_COLOR: &str = "#3b82f6";

#[derive(Properties, PartialEq)]
pub struct SalesChartProps {
    pub series: SalesSeries,
    pub loading: bool,
}

fn traces(series: &SalesSeries) -> Value {
    json!([{
        "x": series.dates,
        "y": series.revenue,
        "text": series.hover,
        "hoverinfo": "text",
        "type": "scatter",
        "mode": "lines",
        "fill": "tozeroy",
        "fillcolor": "rgba(59,130,246,0.15)",
        "line": {"color": LINE_COLOR, "width": 2, "shape": "spline"},
        "name": "Revenue"
    }])
}

fn layout(series: &SalesSeries) -> Value {
    let ticks = revenue_axis_ticks(series.max_revenue());
    let mut layout = plotly::base_layout();
    layout["xaxis"] = json!({
        "type": "date",
        "tickformat": "%b %-d",
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

/// Revenue per day as an area chart.
#[function_component(SalesChart)]
pub fn sales_chart(props: &SalesChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let deps = (chart_ref.clone(), props.series.clone(), props.loading);
        use_effect_with(deps, |(chart_ref, series, loading)| {
            let element = if *loading { None } else { chart_ref.cast::<Element>() };
            if let Some(element) = &element {
                log::trace!("Plotting {} sales points", series.dates.len());
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
                <h2 class="card-title">{"Sales Over Time"}</h2>
                if props.loading {
                    <Skeleton class="h-[300px] w-full" />
                } else if props.series.is_empty() {
                    <p class="text-center text-sm text-gray-500 py-24">{"No sales in this period"}</p>
                } else {
                    <div ref={chart_ref} class="chart-container" style="height: 300px;"></div>
                }
            </div>
        </div>
    }
}
