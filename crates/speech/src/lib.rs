//! Client for the external speech-feedback provider.
//!
//! The provider is an opaque HTTP service: it takes an audio blob
//! reference plus the target word and returns a transcript and coaching
//! feedback. This crate isolates the integration behind a timeout + retry
//! policy so that provider trouble degrades to a stored error message at
//! the call site instead of failing the surrounding request.

pub mod client;
pub mod scoring;

pub use client::{SpeechClient, SpeechConfig, SpeechError, SpeechFeedback};
