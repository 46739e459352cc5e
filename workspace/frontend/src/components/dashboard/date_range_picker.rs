use chrono::{Local, Utc};
use common::{DateRange, Preset};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    pub range: DateRange,
    pub on_change: Callback<DateRange>,
}

#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let selected = Preset::matching(&props.range);

    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let Some(preset) = select.value().parse::<i64>().ok().and_then(Preset::from_days) else {
                log::warn!("Unknown date preset: {}", select.value());
                return;
            };
            log::debug!("Preset selected: {}", preset.label());
            on_change.emit(preset.range_at(Utc::now()));
        })
    };

    html! {
        <div class="flex items-center gap-2">
            <select class="select select-sm select-bordered w-[180px]" onchange={on_select}>
                <option disabled=true selected={selected.is_none()}>{"Select date range"}</option>
                {for Preset::ALL.iter().map(|preset| html! {
                    <option value={preset.days().to_string()} selected={selected == Some(*preset)}>
                        {preset.label()}
                    </option>
                })}
            </select>
            <div class="hidden md:flex items-center gap-2 text-sm text-gray-500">
                <i class="far fa-calendar"></i>
                <span>{props.range.display_in(&Local)}</span>
            </div>
        </div>
    }
}
