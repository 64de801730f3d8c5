//! Manifest editor form.
//!
//! Every field writes straight into the draft signal; the preview and the
//! save button read from it.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{DISPLAY_MODES, ORIENTATIONS};
use crate::core::store::validate_short_name;
use crate::models::{Command, Manifest, fields};

stylance::import_crate_style!(css, "src/components/editor.module.css");

#[component]
pub fn Editor() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let short_name_valid =
        Signal::derive(move || ctx.draft.with(|d| validate_short_name(&d.short_name).is_ok()));
    let can_save = Signal::derive(move || ctx.is_signed_in() && short_name_valid.get());

    let on_save = move |_: leptos::ev::MouseEvent| {
        ctx.dispatch(Command::Save(ctx.draft.get_untracked()));
    };
    let on_new = move |_: leptos::ev::MouseEvent| ctx.draft.set(Manifest::draft());

    view! {
        <form class=css::form on:submit=|ev| ev.prevent_default()>
            <h2 class=css::heading>"Manifest"</h2>

            <label class=css::field>
                <span class=css::label>"Short name"</span>
                <input
                    type="text"
                    class=css::input
                    required=true
                    prop:value=move || ctx.draft.with(|d| d.short_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.draft.update(|d| d.short_name = value);
                    }
                />
                <Show when=move || !short_name_valid.get()>
                    <span class=css::hint>"Required. Used as the folder and file name."</span>
                </Show>
            </label>

            <TextField label="Name" key=fields::NAME />
            <TextField label="Description" key=fields::DESCRIPTION />
            <TextField label="Start URL" key=fields::START_URL />
            <SelectField label="Display" key=fields::DISPLAY options=DISPLAY_MODES />
            <SelectField label="Orientation" key=fields::ORIENTATION options=ORIENTATIONS />

            <div class=css::colors>
                <TextField label="Theme color" key=fields::THEME_COLOR input_type="color" />
                <TextField label="Background color" key=fields::BACKGROUND_COLOR input_type="color" />
            </div>

            <div class=css::actions>
                <button type="button" class=css::secondary on:click=on_new>
                    <Icon icon=ic::PLUS />
                    <span>"New"</span>
                </button>
                <button
                    type="button"
                    class=css::primary
                    on:click=on_save
                    disabled=move || !can_save.get()
                    title=move || {
                        if ctx.is_signed_in() { "Save manifest" } else { "Log in to save" }
                    }
                >
                    <Icon icon=ic::SAVE />
                    <span>"Save"</span>
                </button>
            </div>
        </form>
    }
}

/// Single-line input bound to a string member of the draft.
#[component]
fn TextField(
    label: &'static str,
    key: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <label class=css::field>
            <span class=css::label>{label}</span>
            <input
                type=input_type
                class=css::input
                prop:value=move || ctx.draft.with(|d| d.text(key).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.draft.update(|d| d.set_text(key, &value));
                }
            />
        </label>
    }
}

/// Drop-down bound to a string member of the draft. The blank option unsets it.
#[component]
fn SelectField(
    label: &'static str,
    key: &'static str,
    options: &'static [&'static str],
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <label class=css::field>
            <span class=css::label>{label}</span>
            <select
                class=css::input
                prop:value=move || ctx.draft.with(|d| d.text(key).to_string())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.draft.update(|d| d.set_text(key, &value));
                }
            >
                <option value="">"-"</option>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
