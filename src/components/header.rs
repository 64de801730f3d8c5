//! Header bar component.
//!
//! Displays the app title and session, with login and refresh actions.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_TITLE, APP_VERSION};
use crate::models::{AuthState, Command};

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Header bar with the session name and auth actions.
///
/// | Auth state | Actions |
/// |------------|---------|
/// | Initializing | none |
/// | Signed out | Log in |
/// | Signed in | Reload list |
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let session_name = Signal::derive(move || ctx.auth.with(AuthState::display_name));
    let signed_out = Signal::derive(move || ctx.auth.with(|a| *a == AuthState::SignedOut));
    let signed_in = Signal::derive(move || ctx.is_signed_in());

    let on_login = move |_: leptos::ev::MouseEvent| ctx.dispatch(Command::Login);
    let on_refresh = move |_: leptos::ev::MouseEvent| ctx.refresh();

    view! {
        <header class=css::bar>
            <div class=css::title>
                <span class=css::titleIcon><Icon icon=ic::FILE /></span>
                <span>{APP_TITLE}</span>
                <span class=css::version>{format!("v{APP_VERSION}")}</span>
            </div>

            <div class=css::session>
                <span class=css::label>
                    <Icon icon=ic::USER />
                    <span class=css::value>{session_name}</span>
                </span>

                <Show when=move || signed_out.get()>
                    <button class=css::button on:click=on_login title="Log in with Fission">
                        <Icon icon=ic::LOGIN />
                        <span>"Log in"</span>
                    </button>
                </Show>

                <Show when=move || signed_in.get()>
                    <button class=css::iconButton on:click=on_refresh title="Reload manifests">
                        <Icon icon=ic::REFRESH />
                    </button>
                </Show>
            </div>
        </header>
    }
}
