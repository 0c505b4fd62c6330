//! The dominant color decision engine
//!
//! Pure stages (filter, rank, border, select, normalize) composed by
//! `pipeline`, wrapped by the single-flight `cache`.

pub mod border;
pub mod cache;
pub mod filter;
pub mod normalize;
pub mod pipeline;
pub mod rank;
pub mod select;
