//! Yew components. State transitions live in the library; these only wire
//! them to the DOM.

mod app;
mod balancer;
mod builder;
mod common;
mod formula_practice;
mod handwriting;
mod home;
mod login;
mod topics;

pub use app::{App, AppProps};

/// Seed for challenge selection, taken from the clock and `Math.random`.
pub(crate) fn fresh_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now ^ (noise << 21)
}
