use common::DateRange;
use yew::prelude::*;

use super::date_range_picker::DateRangePicker;
use super::user_menu::UserMenu;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub range: DateRange,
    pub loading: bool,
    pub can_export: bool,
    pub on_range_change: Callback<DateRange>,
    pub on_refresh: Callback<()>,
    pub on_export: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };
    let on_export = {
        let on_export = props.on_export.clone();
        Callback::from(move |_: MouseEvent| on_export.emit(()))
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm rounded-box flex-col sm:flex-row gap-4">
            <div class="flex-1 px-4">
                <h1 class="text-3xl font-bold">{"Order Analytics Dashboard"}</h1>
            </div>
            <div class="flex-none flex items-center gap-2">
                <DateRangePicker range={props.range} on_change={props.on_range_change.clone()} />
                <button
                    class="btn btn-sm btn-square btn-outline"
                    title="Refresh"
                    disabled={props.loading}
                    onclick={on_refresh}
                >
                    <i class={classes!("fas", "fa-sync-alt", props.loading.then_some("fa-spin"))}></i>
                </button>
                <button class="btn btn-sm btn-primary" disabled={!props.can_export} onclick={on_export}>
                    <i class="fas fa-download"></i>
                    {"Export"}
                </button>
                <UserMenu />
            </div>
        </div>
    }
}
