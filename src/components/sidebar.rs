use leptos::{component, expect_context, view, IntoView, SignalWith, View};
use crate::sidebar::{SidebarEntry, SidebarNavigator};
use crate::state::AppState;

const ITEM_CLASS: &str = "sidebar-item p-3 hover:bg-gray-700 rounded-md cursor-pointer transition-colors";
const BACK_CLASS: &str = "sidebar-item sidebar-back p-3 font-bold text-indigo-400 hover:bg-gray-700 rounded-md cursor-pointer transition-colors";
const HEADER_CLASS: &str = "sidebar-header p-3 text-gray-400 text-sm font-semibold uppercase mt-2";

fn entry_view(state: AppState, entry: SidebarEntry) -> View {
    let label = entry.label().to_string();
    if entry.is_interactive() {
        let class = if entry == SidebarEntry::Back { BACK_CLASS } else { ITEM_CLASS };
        return view! {
            <div class=class on:click=move |_| state.activate_sidebar_entry(&entry)>
                {label}
            </div>
        }.into_view();
    }

    match entry {
        SidebarEntry::Header(_) => view! { <h3 class=HEADER_CLASS>{label}</h3> }.into_view(),
        SidebarEntry::Failed => view! { <div class="sidebar-item error">{label}</div> }.into_view(),
        _ => view! { <div class="sidebar-item loading">{label}</div> }.into_view(),
    }
}

/// Line/station browser; clicking a station fills the last focused input
#[component]
#[must_use]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <aside class="sidebar">
            <div id="sidebar-list" class="sidebar-list">
                {move || {
                    state.sidebar
                        .with(SidebarNavigator::entries)
                        .into_iter()
                        .map(|entry| entry_view(state, entry))
                        .collect::<Vec<_>>()
                }}
            </div>
        </aside>
    }
}
