//! CLI library components for the relative-pronoun CLDF pipeline.

pub mod logging;
pub mod pipeline;
