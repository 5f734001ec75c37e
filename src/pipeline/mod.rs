//! The classification pipeline: tokenize → normalize → dedupe → classify.
//!
//! Stages are pure over the immutable [`Lexicon`](crate::lexicon::Lexicon);
//! the [`Pipeline`] runner threads them together and reports stage
//! boundaries to a [`observer::PipelineObserver`].

pub mod classifier;
pub mod dedup;
pub mod format;
pub mod normalizer;
pub mod observer;
pub mod runner;
pub mod tokenizer;

pub use runner::Pipeline;
