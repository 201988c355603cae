//! Trait abstractions at the engine's collaborator seams.

pub mod model;
