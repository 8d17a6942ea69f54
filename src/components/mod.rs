#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod results_panel;
pub mod search_form;
pub mod sidebar;
