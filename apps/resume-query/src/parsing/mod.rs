pub mod catalog;
pub mod education;
pub mod experience;
pub mod highlights;
pub mod normalize;
pub mod parser;
pub mod profession;
pub mod roles;
pub mod sections;
pub mod skills;
pub mod summary;

pub use parser::{ResumeDocument, UniversalParser};
