pub mod bridge;
pub mod content;
pub mod cursor;
pub mod error;
pub mod motion;
pub mod reveal;
pub mod scroll;
pub mod telemetry;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
