use common::pagination::{page_count, page_window, PageSlot};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: u64,
    pub total_items: u64,
    pub items_per_page: u64,
    pub on_page_change: Callback<u64>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total_pages = page_count(props.total_items, props.items_per_page);

    if total_pages <= 1 {
        return html! {};
    }

    let current = props.current_page;

    let go_to = |page: u64| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_page_change.emit(page);
        })
    };

    html! {
        <div class="flex justify-center items-center gap-2 my-4">
            <button
                class="btn btn-sm"
                disabled={current <= 1}
                onclick={go_to(current.saturating_sub(1).max(1))}
            >
                <i class="fas fa-chevron-left"></i>
            </button>

            {for page_window(current, total_pages).into_iter().map(|slot| match slot {
                PageSlot::Gap => html! { <span class="px-2">{"..."}</span> },
                PageSlot::Page(page) => html! {
                    <button
                        class={classes!("btn", "btn-sm", (page == current).then_some("btn-primary"))}
                        onclick={go_to(page)}
                    >
                        {page}
                    </button>
                },
            })}

            <button
                class="btn btn-sm"
                disabled={current >= total_pages}
                onclick={go_to((current + 1).min(total_pages))}
            >
                <i class="fas fa-chevron-right"></i>
            </button>

            <div class="ml-4 text-sm text-base-content/70">
                {format!("Page {} of {} ({} orders)", current, total_pages, props.total_items)}
            </div>
        </div>
    }
}
