/// Console logging for the browser build
///
/// `log!` is informational output that is compiled out of release builds
/// unless the `console_logging` feature is enabled. `log_error!` is always
/// emitted. On non-wasm targets (native unit tests) both macros only
/// evaluate their format arguments, since JS imports cannot be called there.
///
/// # Examples
///
/// ```rust
/// use bkk_route_finder::{log, log_error};
///
/// log!("Loaded {} stations", 42);
/// log_error!("Error loading stations: {}", "timeout");
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {{
        #[cfg(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging")))]
        {
            web_sys::console::log_1(&format!($($arg)+).into());
        }
        #[cfg(not(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging"))))]
        {
            let _ = format_args!($($arg)+);
        }
    }};
}

/// Log an error to the console in every build
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::error_1(&format!($($arg)+).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)+);
        }
    }};
}
