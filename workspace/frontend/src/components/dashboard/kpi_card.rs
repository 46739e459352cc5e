use common::format::{trend_magnitude, Trend};
use common::{KpiCard as Kpi, KpiKind};
use yew::prelude::*;

use crate::ui::loading::Skeleton;

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub card: Kpi,
    pub loading: bool,
    /// Percentage change against the previous period, when known.
    #[prop_or_default]
    pub trend: Option<f64>,
}

fn icon(kind: KpiKind) -> &'static str {
    match kind {
        KpiKind::TotalRevenue => "fas fa-dollar-sign",
        KpiKind::TotalOrders => "fas fa-shopping-cart",
        KpiKind::ItemsSold => "fas fa-box",
        KpiKind::UniqueCustomers => "fas fa-users",
    }
}

fn trend_view(percentage: f64) -> Html {
    let (icon, color) = match Trend::from_percentage(percentage) {
        Trend::Up => ("fas fa-arrow-trend-up", "text-success"),
        Trend::Down => ("fas fa-arrow-trend-down", "text-error"),
        Trend::Flat => ("fas fa-minus", "text-gray-500"),
    };
    html! {
        <span class={classes!("flex", "items-center", "gap-1", color)}>
            <i class={icon}></i>
            {trend_magnitude(percentage)}
        </span>
    }
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    if props.loading {
        return html! {
            <div class="stats shadow bg-base-100">
                <div class="stat gap-2">
                    <Skeleton class="h-4 w-[100px]" />
                    <Skeleton class="h-8 w-[120px]" />
                    <Skeleton class="h-3 w-[80px]" />
                </div>
            </div>
        };
    }

    let kind = props.card.kind;
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-figure text-gray-400">
                    <i class={icon(kind)}></i>
                </div>
                <div class="stat-title">{kind.title()}</div>
                <div class="stat-value text-2xl">{&props.card.value}</div>
                <div class="stat-desc flex items-center gap-2">
                    if let Some(trend) = props.trend {
                        {trend_view(trend)}
                    }
                    <span>{kind.description()}</span>
                </div>
            </div>
        </div>
    }
}
