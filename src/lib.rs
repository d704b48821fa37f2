/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("generate", "Generated a new controller called {}", global_identity);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod core;
pub mod output;
pub mod tty;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `appgen::generate` instead of `appgen::core::generate`
pub use core::*;
pub use utils::*;
