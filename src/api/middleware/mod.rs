pub mod error_hook;
pub mod logging;
pub mod panic;

pub use error_hook::error_hook;
pub use logging::logging_middleware;
pub use panic::panic_response;
