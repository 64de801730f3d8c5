//! Live JSON preview of the draft with a copy button.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::PREVIEW_ELEMENT_ID;
use crate::models::{Command, Manifest};

stylance::import_crate_style!(css, "src/components/preview.module.css");

#[component]
pub fn Preview() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let json = Signal::derive(move || ctx.draft.with(Manifest::to_pretty_json));
    let on_copy = move |_: leptos::ev::MouseEvent| {
        ctx.dispatch(Command::CopyToClipboard(PREVIEW_ELEMENT_ID.to_string()));
    };

    view! {
        <section class=css::panel>
            <div class=css::toolbar>
                <h2 class=css::heading>"manifest.json"</h2>
                <button class=css::copyButton on:click=on_copy title="Copy to clipboard">
                    <Icon icon=ic::COPY />
                    <span>"Copy"</span>
                </button>
            </div>
            <pre id=PREVIEW_ELEMENT_ID class=css::code>{json}</pre>
        </section>
    }
}
