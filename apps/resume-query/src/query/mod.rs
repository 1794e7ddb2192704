pub mod cleanup;
pub mod synthesizer;

pub use cleanup::clean_query;
pub use synthesizer::{query_input, synthesize_query, ExperienceTier, QueryPlan};
