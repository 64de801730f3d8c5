//! Transient status message under the header.

use leptos::prelude::*;

use crate::app::{AppContext, StatusKind};

stylance::import_crate_style!(css, "src/components/status_line.module.css");

fn kind_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Info => css::info,
        StatusKind::Success => css::success,
        StatusKind::Error => css::error,
    }
}

#[component]
pub fn StatusLine() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        {move || {
            ctx.status.get().map(|message| {
                view! {
                    <div class=kind_class(message.kind) role="status">
                        {message.text}
                    </div>
                }
            })
        }}
    }
}
