//! Client-side conversation logic, decoupled from any rendering mechanism.
//!
//! The browser widget is out of scope here; what lives in this module is
//! the testable behavior behind it: session state, intent classification,
//! and the traits for the translation and product-search collaborators.

pub mod intent;
pub mod search;
pub mod session;
pub mod translate;
