use common::{LoginRequest, Session};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::api_client::auth::login;
use crate::api_client::ApiClient;

const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please check your credentials.";

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_login_success: Callback<Session>,
}

fn field(form: &FormData, name: &str) -> String {
    form.get(name).as_string().unwrap_or_default()
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let form_ref = use_node_ref();
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let form_ref = form_ref.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let on_login_success = props.on_login_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let form_data = match FormData::new_with_form(&form) {
                Ok(form_data) => form_data,
                Err(e) => {
                    log::error!("Failed to read login form: {:?}", e);
                    return;
                }
            };

            let request = match LoginRequest::from_form(&field(&form_data, "email"), &field(&form_data, "password")) {
                Ok(request) => request,
                Err(invalid) => {
                    error.set(Some(invalid.to_string()));
                    return;
                }
            };

            submitting.set(true);
            error.set(None);

            let submitting = submitting.clone();
            let error = error.clone();
            let on_login_success = on_login_success.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match login(&ApiClient::anonymous(), &request).await {
                    Ok(response) => on_login_success.emit(response.into_session()),
                    // A 401 has already sent the browser to the login route.
                    Err(err) => error.set(Some(err.user_message(LOGIN_FALLBACK_MESSAGE))),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 p-4">
            <div class="card bg-base-100 shadow-xl w-full max-w-md">
                <div class="card-body">
                    <h1 class="card-title text-2xl justify-center">{"Order Analytics"}</h1>
                    <p class="text-center text-sm text-gray-500">{"Sign in to access your dashboard"}</p>

                    <form ref={form_ref} onsubmit={on_submit} class="space-y-4 mt-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Email"}</span></label>
                            <input
                                type="email"
                                name="email"
                                class="input input-bordered w-full"
                                placeholder="you@example.com"
                                autocomplete="username"
                                required={true}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Password"}</span></label>
                            <input
                                type="password"
                                name="password"
                                class="input input-bordered w-full"
                                autocomplete="current-password"
                                required={true}
                            />
                        </div>

                        if let Some(message) = &*error {
                            <div class="alert alert-error text-sm">
                                <i class="fas fa-exclamation-circle"></i>
                                <span>{message}</span>
                            </div>
                        }

                        <button type="submit" class="btn btn-primary w-full" disabled={*submitting}>
                            if *submitting {
                                <span class="loading loading-spinner loading-sm"></span>
                                {"Signing in..."}
                            } else {
                                {"Sign In"}
                            }
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
