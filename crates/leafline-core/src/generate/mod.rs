//! Text generation collaborator abstraction.

pub mod boxed;
pub mod provider;

pub use boxed::BoxTextGenerator;
pub use provider::TextGenerator;
