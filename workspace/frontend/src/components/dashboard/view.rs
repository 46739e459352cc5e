use common::charts::{sales_series, top_products_series};
use common::geography::{state_summary, top_states_series};
use common::DashboardView;
use yew::prelude::*;

use super::bar_chart::BarChart;
use super::header::Header;
use super::kpi_card::KpiCard;
use super::sales_chart::SalesChart;
use super::state_summary::StateSummary;
use super::user_menu::UserMenu;
use crate::components::orders::RecentOrders;
use crate::components::upload::FileUpload;
use crate::hooks::use_dashboard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let driver = use_dashboard();
    let state = driver.snapshot();
    let loading = state.is_loading();

    if state.view() == DashboardView::Empty {
        log::trace!("Rendering empty dashboard");
        return html! {
            <div class="min-h-screen bg-base-200 p-8">
                <div class="max-w-7xl mx-auto">
                    <div class="flex justify-between items-center mb-8">
                        <h1 class="text-3xl font-bold">{"Order Analytics Dashboard"}</h1>
                        <UserMenu />
                    </div>
                    <div class="flex flex-col items-center justify-center gap-6 mt-16">
                        <h2 class="text-xl font-medium text-gray-500">
                            {"No data available. Please upload a CSV file to get started."}
                        </h2>
                        <FileUpload on_upload_success={driver.refresh()} />
                    </div>
                </div>
            </div>
        };
    }

    let metrics = state.metrics();
    let sales = sales_series(metrics.map(|m| m.time_series.as_slice()).unwrap_or_default());
    let products = top_products_series(metrics.map(|m| m.top_products.as_slice()).unwrap_or_default());
    let geography = metrics.map(|m| m.geographic_distribution.as_slice()).unwrap_or_default();
    let states = top_states_series(geography);
    let summary = state_summary(geography);

    html! {
        <div class="min-h-screen bg-base-200 p-8">
            <div class="max-w-7xl mx-auto space-y-8">
                <Header
                    range={state.range()}
                    loading={loading}
                    can_export={state.can_export()}
                    on_range_change={driver.change_range()}
                    on_refresh={driver.refresh()}
                    on_export={driver.export()}
                />

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    {for state.kpi_cards().into_iter().map(|card| html! {
                        <KpiCard card={card} loading={loading} />
                    })}
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <SalesChart series={sales} loading={loading} />
                    <BarChart
                        title="Top Selling Products"
                        empty_message="No products sold in this period"
                        series={products}
                        loading={loading}
                    />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2">
                        <BarChart
                            title="Top States by Revenue"
                            empty_message="No state data for this period"
                            series={states}
                            loading={loading}
                        />
                    </div>
                    <StateSummary summary={summary} loading={loading} />
                </div>

                <RecentOrders range={state.range()} reload={state.latest_seq()} />

                <div class="pt-8">
                    <h2 class="text-xl font-semibold mb-4">{"Upload New Data"}</h2>
                    <FileUpload on_upload_success={driver.refresh()} />
                </div>
            </div>
        </div>
    }
}
