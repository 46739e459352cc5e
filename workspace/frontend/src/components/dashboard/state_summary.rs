use common::format::format_currency_whole;
use common::geography::{StateSummary as Summary, US_STATE_COUNT};
use yew::prelude::*;

use crate::ui::loading::Skeleton;

#[derive(Properties, PartialEq)]
pub struct StateSummaryProps {
    pub summary: Option<Summary>,
    pub loading: bool,
}

#[function_component(StateSummary)]
pub fn state_summary(props: &StateSummaryProps) -> Html {
    let body = match (&props.summary, props.loading) {
        (_, true) => html! { <Skeleton class="h-24 w-full" /> },
        (None, false) => html! {
            <p class="text-center text-sm text-gray-500 py-8">{"No state data for this period"}</p>
        },
        (Some(summary), false) => html! {
            <div class="stats stats-vertical shadow-none w-full">
                <div class="stat">
                    <div class="stat-title">{"Top State"}</div>
                    <div class="stat-value text-2xl">{&summary.top_state}</div>
                    <div class="stat-desc">{format_currency_whole(summary.top_revenue)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"States with Sales"}</div>
                    <div class="stat-value text-2xl">{summary.states_with_sales}</div>
                    <div class="stat-desc">{format!("Out of {} states", US_STATE_COUNT)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Average State Revenue"}</div>
                    <div class="stat-value text-2xl">{format_currency_whole(summary.average_revenue)}</div>
                    <div class="stat-desc">{format!("{} above average", summary.above_average)}</div>
                </div>
            </div>
        },
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"State Highlights"}</h2>
                {body}
            </div>
        </div>
    }
}
