//! Trait seams for collaborators with side effects.

pub mod activation;

pub use activation::ActivationChecker;
