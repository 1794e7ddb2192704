use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Header,
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Awards,
    Languages,
    Publications,
}

impl SectionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Header => "header",
            SectionName::Contact => "contact",
            SectionName::Summary => "summary",
            SectionName::Experience => "experience",
            SectionName::Education => "education",
            SectionName::Skills => "skills",
            SectionName::Projects => "projects",
            SectionName::Certifications => "certifications",
            SectionName::Awards => "awards",
            SectionName::Languages => "languages",
            SectionName::Publications => "publications",
        }
    }
}

/// Section name -> concatenated content, in order of first appearance.
/// Serializes as a JSON object keyed by section name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionMap {
    entries: Vec<(SectionName, String)>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `content` to `section`, creating it if absent.
    pub(crate) fn append(&mut self, section: SectionName, content: String) {
        if content.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|(name, _)| *name == section) {
            Some((_, existing)) => {
                existing.push(' ');
                existing.push_str(&content);
            }
            None => self.entries.push((section, content)),
        }
    }

    pub fn get(&self, section: SectionName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == section)
            .map(|(_, content)| content.as_str())
    }

    pub fn contains(&self, section: SectionName) -> bool {
        self.get(section).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionName, &str)> {
        self.entries
            .iter()
            .map(|(name, content)| (*name, content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, content) in &self.entries {
            map.serialize_entry(name.as_str(), content)?;
        }
        map.end()
    }
}
