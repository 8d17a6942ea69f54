use leptos::{component, expect_context, view, IntoView, SignalWith};
use crate::api::HttpBackend;
use crate::constants::{BUTTON_RETRY, STEP_FROM, STEP_TO, SUMMARY_TOTAL_TIME, SUMMARY_TRANSFERS};
use crate::render::RouteView;
use crate::search::SearchError;
use crate::state::AppState;

#[component]
fn RouteTimeline(route: RouteView) -> impl IntoView {
    view! {
        <div class="route-summary">
            <div>
                {SUMMARY_TOTAL_TIME}" "
                <span id="total-time" class="font-bold">{route.total_time}</span>
            </div>
            <div>
                {SUMMARY_TRANSFERS}" "
                <span id="total-transfers" class="font-bold">{route.total_transfers}</span>
            </div>
        </div>
        <ol id="path-steps" class="timeline">
            {route.entries.into_iter().map(|entry| {
                let class = entry.css_class();
                view! {
                    <li class=class>
                        <h4 class="font-semibold text-gray-800">{entry.heading}</h4>
                        <p class="text-gray-600">
                            {STEP_FROM}" "<span class="font-medium">{entry.from}</span>
                            " "{STEP_TO}" "<span class="font-medium">{entry.to}</span>
                            {entry.stops.map(|stops| format!(" ({stops})"))}
                        </p>
                        <time class="text-sm text-gray-500">{entry.duration}</time>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ol>
    }
}

/// Loading spinner, inline error banner and the rendered route
#[component]
#[must_use]
pub fn ResultsPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let backend = expect_context::<HttpBackend>();

    let visible = move || state.search.with(|c| c.panel().visible);
    let loading = move || state.search.with(|c| c.panel().loading);
    let error = move || state.search.with(|c| c.panel().error.clone());
    let content_visible = move || state.search.with(|c| c.panel().content_visible);

    view! {
        <section id="results-container" class="results" class:hidden=move || !visible()>
            <div id="loading-spinner" class="spinner" class:hidden=move || !loading()></div>
            <div id="error-message" class="error-banner" class:hidden=move || error().is_none()>
                <p id="error-text">{move || error().map(|err| err.to_string())}</p>
                {move || (error() == Some(SearchError::LoadFailure)).then(|| {
                    let backend = backend.clone();
                    view! {
                        <button
                            class="retry-button"
                            on:click=move |_| state.load_station_directory(backend.clone())
                        >
                            {BUTTON_RETRY}
                        </button>
                    }
                })}
            </div>
            <div id="results-content" class:hidden=move || !content_visible()>
                {move || state.search.with(|c| c.panel().route.clone())
                    .map(|route| view! { <RouteTimeline route=route /> })}
            </div>
        </section>
    }
}
