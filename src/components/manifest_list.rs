//! Saved manifest list component.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{AuthState, Command, Manifest};

stylance::import_crate_style!(css, "src/components/manifest_list.module.css");

#[component]
pub fn ManifestList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let empty_text = Signal::derive(move || match ctx.auth.get() {
        AuthState::Initializing => "Connecting...",
        AuthState::SignedOut => "Log in to see your saved manifests.",
        AuthState::SignedIn(_) => "No manifests saved yet.",
    });
    let is_empty = Signal::derive(move || ctx.manifests.with(Vec::is_empty));

    view! {
        <section class=css::panel>
            <h2 class=css::heading>"Saved manifests"</h2>
            <Show
                when=move || !is_empty.get()
                fallback=move || view! { <p class=css::empty>{empty_text}</p> }
            >
                <ul class=css::list>
                    <For
                        each=move || ctx.manifests.get()
                        key=|m| (m.short_name.clone(), m.label().to_string())
                        children=move |manifest| view! { <ManifestItem manifest=manifest /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn ManifestItem(manifest: Manifest) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let label = manifest.label().to_string();
    let short_name = manifest.short_name.clone();
    let is_current = Signal::derive({
        let short_name = short_name.clone();
        move || ctx.draft.with(|d| d.short_name == short_name)
    });

    let on_edit = {
        let short_name = short_name.clone();
        move |_: leptos::ev::MouseEvent| ctx.dispatch(Command::Load(short_name.clone()))
    };
    let on_delete =
        move |_: leptos::ev::MouseEvent| ctx.dispatch(Command::Delete(manifest.clone()));

    view! {
        <li class=move || if is_current.get() { css::itemCurrent } else { css::item }>
            <div class=css::names>
                <span class=css::label>{label}</span>
                <span class=css::shortName>{short_name}</span>
            </div>
            <div class=css::actions>
                <button class=css::iconButton on:click=on_edit title="Edit">
                    <Icon icon=ic::EDIT />
                </button>
                <button class=css::iconButtonDanger on:click=on_delete title="Delete">
                    <Icon icon=ic::TRASH />
                </button>
            </div>
        </li>
    }
}
