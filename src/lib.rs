//! Chemistry practice for secondary students: ion formula drills, equation
//! balancing and equation building, with optional AI grading of handwritten
//! answers.
//!
//! Everything here is independent of rendering; the Yew front end lives in
//! the binary.

pub mod bank;
pub mod chem;
pub mod config;
pub mod error;
pub mod grading;
pub mod i18n;
pub mod logging;
pub mod nav;
pub mod practice;
pub mod profile;
