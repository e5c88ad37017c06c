//! Text-generation collaborator clients.

pub mod gemini;
