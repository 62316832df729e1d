#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, target_arch = "wasm32"))]
pub mod browser;
