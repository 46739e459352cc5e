use common::upload::CSV_MIME_TYPE;
use common::UploadMsg;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_upload;

#[derive(Properties, PartialEq)]
pub struct FileUploadProps {
    pub on_upload_success: Callback<()>,
}

/// CSV drop zone with an explicit confirm step before uploading.
#[function_component(FileUpload)]
pub fn file_upload(props: &FileUploadProps) -> Html {
    let upload = use_upload(props.on_upload_success.clone());
    let drag_active = use_state(|| false);
    let input_ref = use_node_ref();
    let state = upload.snapshot();

    let on_browse = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_input_change = {
        let upload = upload.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            upload.select(input.files());
            // Selecting the same file again must fire another change event.
            input.set_value("");
        })
    };

    let on_drag_over = {
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(true);
        })
    };

    let on_drag_leave = {
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(false);
        })
    };

    let on_drop = {
        let upload = upload.clone();
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(false);
            upload.select(e.data_transfer().and_then(|dt| dt.files()));
        })
    };

    let on_cancel = {
        let upload = upload.clone();
        Callback::from(move |_: MouseEvent| upload.dispatch(UploadMsg::Cancel))
    };

    let on_submit = {
        let upload = upload.clone();
        Callback::from(move |_: MouseEvent| upload.dispatch(UploadMsg::Submit))
    };

    let zone_class = classes!(
        "border-2",
        "border-dashed",
        "rounded-lg",
        "p-8",
        "text-center",
        "cursor-pointer",
        "transition-all",
        if *drag_active { "border-primary bg-primary/5" } else { "border-base-300 hover:border-primary/50" },
        state.held().is_some().then_some("bg-base-200"),
    );

    html! {
        <div class="card bg-base-100 shadow w-full max-w-2xl mx-auto">
            <div class="card-body">
                <input
                    ref={input_ref}
                    type="file"
                    class="hidden"
                    accept={format!("{},.csv", CSV_MIME_TYPE)}
                    onchange={on_input_change}
                />
                <div
                    class={zone_class}
                    onclick={on_browse}
                    ondragover={on_drag_over}
                    ondragleave={on_drag_leave}
                    ondrop={on_drop}
                >
                    <div class="flex flex-col items-center gap-4">
                        if let Some(file) = state.held() {
                            <i class="fas fa-file-csv text-5xl text-primary"></i>
                            <div>
                                <p class="text-sm font-medium">{&file.name}</p>
                                <p class="text-xs text-gray-500">{file.size_label()}</p>
                            </div>
                        } else {
                            <i class="fas fa-cloud-upload-alt text-5xl text-gray-400"></i>
                            <div>
                                <p class="text-sm font-medium">
                                    {if *drag_active { "Drop your CSV file here" } else { "Drag & drop your CSV file here" }}
                                </p>
                                <p class="text-xs text-gray-500 mt-1">{"or click to browse (max 5MB)"}</p>
                            </div>
                        }
                    </div>
                </div>

                if let Some(error) = state.error() {
                    <div class="flex items-center gap-2 text-error mt-4">
                        <i class="fas fa-exclamation-circle"></i>
                        <p class="text-sm">{error}</p>
                    </div>
                }
                if let Some(success) = state.success() {
                    <div class="flex items-center gap-2 text-success mt-4">
                        <i class="fas fa-check-circle"></i>
                        <p class="text-sm">{success}</p>
                    </div>
                }

                if state.shows_actions() {
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-outline" disabled={state.is_uploading()} onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button class="btn btn-primary" disabled={state.is_uploading()} onclick={on_submit}>
                            if state.is_uploading() {
                                <span class="loading loading-spinner loading-sm"></span>
                                {"Processing..."}
                            } else {
                                {"Upload & Process"}
                            }
                        </button>
                    </div>
                }
            </div>
        </div>
    }
}
