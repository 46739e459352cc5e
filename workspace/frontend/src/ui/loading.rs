use yew::prelude::*;

/// Centered spinner, optionally captioned.
#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <span class="loading loading-spinner loading-lg"></span>
            if let Some(text) = &props.text {
                <p class="text-sm text-gray-500">{text}</p>
            }
        </div>
    }
}

/// Grey placeholder block shown while a widget's data is in flight.
#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    #[prop_or_else(|| "h-4 w-full".to_string())]
    pub class: String,
}

#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    html! { <div class={classes!("skeleton", props.class.clone())}></div> }
}
