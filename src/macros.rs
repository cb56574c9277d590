//! Small crate-wide convenience macros.

/// `console.log` with `format!` arguments.
///
/// ```rust,ignore
/// console_log!("mounted {} particles", count);
/// ```
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)))
    };
}

/// `console.warn` with `format!` arguments.  Used for browser calls that
/// failed inside callbacks, where there is nobody to return an error to.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        ::web_sys::console::warn_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)))
    };
}

/// `console.error` with `format!` arguments.
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        ::web_sys::console::error_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)))
    };
}
