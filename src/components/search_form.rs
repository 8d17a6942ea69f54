use leptos::{component, event_target_value, expect_context, view, IntoView, SignalWith};
use crate::api::HttpBackend;
use crate::constants::{BUTTON_SEARCH, LABEL_END, LABEL_START};
use crate::models::InputSlot;
use crate::search::SearchController;
use crate::state::AppState;

const STATIONS_DATALIST_ID: &str = "stations-list";

#[component]
fn StationInput(which: InputSlot, label: &'static str) -> impl IntoView {
    let state = expect_context::<AppState>();
    let id = which.element_id();

    view! {
        <div class="station-field">
            <label for=id>{label}</label>
            <input
                id=id
                type="text"
                list=STATIONS_DATALIST_ID
                autocomplete="off"
                placeholder=move || state.placeholder(which)
                prop:value=move || state.inputs.with(|inputs| inputs.value(which).to_string())
                on:input=move |ev| state.set_input(which, event_target_value(&ev))
                on:focus=move |_| state.focus_input(which)
            />
        </div>
    }
}

/// Start/end inputs with station autocomplete and the submit button
#[component]
#[must_use]
pub fn SearchForm() -> impl IntoView {
    let state = expect_context::<AppState>();
    let backend = expect_context::<HttpBackend>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.submit_search(backend.clone());
    };

    view! {
        <form id="search-form" class="search-form" on:submit=on_submit>
            <StationInput which=InputSlot::Start label=LABEL_START />
            <StationInput which=InputSlot::End label=LABEL_END />
            <datalist id=STATIONS_DATALIST_ID>
                {move || state.search.with(|controller| {
                    controller
                        .directory()
                        .stations()
                        .iter()
                        .map(|station| view! { <option value=station.clone()></option> })
                        .collect::<Vec<_>>()
                })}
            </datalist>
            <button
                type="submit"
                class="search-button"
                disabled=move || !state.search.with(SearchController::can_submit)
            >
                {BUTTON_SEARCH}
            </button>
        </form>
    }
}
