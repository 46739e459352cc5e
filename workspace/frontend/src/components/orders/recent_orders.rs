use common::format::format_currency;
use common::{DateRange, OrdersQuery, OrdersResponse};
use yew::prelude::*;

use crate::api_client::orders::get_orders;
use crate::components::common::pagination::Pagination;
use crate::hooks::{use_fetch_with_deps, FetchState};
use crate::session::SessionContext;
use crate::settings;
use crate::ui::error::ErrorBanner;
use crate::ui::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct RecentOrdersProps {
    pub range: DateRange,
    /// Bumped by the dashboard whenever its metrics are reloaded.
    pub reload: u64,
}

#[function_component(RecentOrders)]
pub fn recent_orders(props: &RecentOrdersProps) -> Html {
    let session = use_context::<SessionContext>();
    let page_size = settings::get_settings().orders_page_size;
    // The page number only applies to the range it was chosen in.
    let selected = use_state(|| (props.range, 1u64));
    let page = if selected.0 == props.range { selected.1 } else { 1 };
    let retry = use_state(|| 0u64);

    let orders = {
        let client = session.map(|s| s.client());
        use_fetch_with_deps((props.range, page, props.reload, *retry), move |(range, page, _, _)| async move {
            let Some(client) = client else {
                return Err("Not signed in".to_string());
            };
            get_orders(&client, &OrdersQuery::page(range, page, page_size))
                .await
                .map_err(|e| e.user_message("Failed to load orders"))
        })
    };

    let on_page_change = {
        let selected = selected.clone();
        let range = props.range;
        Callback::from(move |page: u64| {
            log::debug!("Orders page {}", page);
            selected.set((range, page));
        })
    };

    let on_retry = {
        let retry = retry.clone();
        Callback::from(move |_| retry.set(*retry + 1))
    };

    let body = match &*orders {
        FetchState::Loading => html! { <Loading text={Some("Loading orders...".to_string())} /> },
        FetchState::Error(message) => html! { <ErrorBanner message={message.clone()} on_retry={on_retry} /> },
        FetchState::Success(response) if response.orders.is_empty() => html! {
            <p class="text-center text-sm text-gray-500 py-8">{"No orders in this period"}</p>
        },
        FetchState::Success(response) => html! {
            <>
                {orders_table(response)}
                <Pagination
                    current_page={page}
                    total_items={response.filtered_count}
                    items_per_page={page_size}
                    on_page_change={on_page_change}
                />
            </>
        },
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Recent Orders"}</h2>
                {body}
            </div>
        </div>
    }
}

fn orders_table(response: &OrdersResponse) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra table-sm">
                <thead>
                    <tr>
                        <th>{"Order"}</th>
                        <th>{"Date"}</th>
                        <th>{"Customer"}</th>
                        <th>{"Item"}</th>
                        <th>{"Location"}</th>
                        <th class="text-right">{"Qty"}</th>
                        <th class="text-right">{"Total"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for response.orders.iter().map(|order| html! {
                        <tr>
                            <td class="font-mono text-xs">{&order.order_id}</td>
                            <td>{order.display_date()}</td>
                            <td>{&order.customer_name}</td>
                            <td title={order.item_sku.clone()}>{&order.item_name}</td>
                            <td>{order.location()}</td>
                            <td class="text-right">{order.quantity}</td>
                            <td class="text-right">{format_currency(order.order_total)}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
