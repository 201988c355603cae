//! Model client implementations.

pub mod gemini;

pub use gemini::Gemini;
