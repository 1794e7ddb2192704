pub mod profile;
pub mod sections;

pub use profile::{EducationEntry, EducationLevel, StructuredProfile};
pub use sections::{SectionMap, SectionName};
