//! Browser console logging.
//!
//! On `wasm32` these forward to `console.log` / `console.warn` /
//! `console.error`. Native builds (unit tests) have no JS runtime, so the
//! calls are dropped there.

#[cfg(target_arch = "wasm32")]
pub fn info(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_msg: &str) {}
