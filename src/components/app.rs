use leptos::{component, provide_context, view, IntoView};
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use crate::api::HttpBackend;
use crate::components::results_panel::ResultsPanel;
use crate::components::search_form::SearchForm;
use crate::components::sidebar::Sidebar;
use crate::constants::{API_URL, PAGE_HEADING, PAGE_TITLE};
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = AppState::new();
    let backend = HttpBackend::new(API_URL);
    provide_context(state);
    provide_context(backend.clone());

    // Both loads start together; neither waits on the other
    state.load_station_directory(backend.clone());
    state.load_line_catalog(backend);

    view! {
        <Stylesheet id="leptos" href="/pkg/bkk_route_finder.css"/>
        <Title text=PAGE_TITLE/>

        <div class="app">
            <Sidebar />
            <main class="main-panel">
                <h1 class="app-title">{PAGE_HEADING}</h1>
                <SearchForm />
                <ResultsPanel />
            </main>
        </div>
    }
}
