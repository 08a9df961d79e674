/// Browser console logging for components.
/// Each line is prefixed with the `Date.now()` timestamp and formatted in Rust
/// before it reaches gloo_console. Service code logs through `tracing` instead.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_line {
    ($level:ident, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::__console_line!(info, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::__console_line!(warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::__console_line!(error, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::__console_line!(debug, $($arg)*)
    };
}
