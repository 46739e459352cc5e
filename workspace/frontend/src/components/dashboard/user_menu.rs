use yew::prelude::*;

use crate::session::SessionContext;

#[function_component(UserMenu)]
pub fn user_menu() -> Html {
    let Some(session) = use_context::<SessionContext>() else {
        return html! {};
    };
    let Some(profile) = session.profile() else {
        return html! {};
    };

    let on_sign_out = {
        let sign_out = session.sign_out.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Sign out requested");
            sign_out.emit(());
        })
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-sm btn-outline gap-2">
                <i class="fas fa-user"></i>
                <span>{profile.display_name()}</span>
                <i class="fas fa-chevron-down text-xs"></i>
            </div>
            <ul tabindex="0" class="dropdown-content menu bg-base-100 rounded-box z-50 w-56 p-2 shadow">
                <li class="menu-title">{"My Account"}</li>
                <li class="disabled"><span class="text-sm text-gray-500">{&profile.email}</span></li>
                <li class="disabled"><span class="text-sm">{format!("Role: {}", profile.role)}</span></li>
                <div class="divider my-1"></div>
                <li>
                    <a class="text-error" onclick={on_sign_out}>
                        <i class="fas fa-sign-out-alt"></i>
                        {"Sign Out"}
                    </a>
                </li>
            </ul>
        </div>
    }
}
