//! Static portfolio content.
//!
//! Tables are compiled into the binary and never change at runtime. A
//! project's position in [`PROJECTS`] is its address (`/project/{index}`), so
//! entries are only ever appended.

mod contributors;
mod projects;
mod tags;
mod work;

use serde::Serialize;

pub use contributors::CONTRIBUTORS;
pub use projects::PROJECTS;
pub use tags::Tag;
pub use work::WORK_EXPERIENCE;

/// Kind of project, shown as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    /// Browser application
    WebApp,
    /// Phone application
    MobileApp,
    /// Marketing or informational site
    Website,
    /// Game
    Game,
    /// Brand book or visual identity
    Branding,
    /// Interface design concept
    UiDesign,
}

impl Category {
    /// Badge text. Categories are proper names and stay untranslated.
    pub const fn label(self) -> &'static str {
        match self {
            Self::WebApp => "Web App",
            Self::MobileApp => "Mobile App",
            Self::Website => "Website",
            Self::Game => "Video Game",
            Self::Branding => "Branding",
            Self::UiDesign => "UI/UX Design",
        }
    }
}

/// External links of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectLinks {
    /// Live deployment
    pub preview: Option<&'static str>,
    /// Source repository
    pub code: Option<&'static str>,
    /// Design file
    pub design: Option<&'static str>,
}

impl ProjectLinks {
    /// No links.
    pub const NONE: Self = Self {
        preview: None,
        code: None,
        design: None,
    };

    /// First available link: preview, then code, then design.
    pub fn primary(&self) -> Option<&'static str> {
        self.preview.or(self.code).or(self.design)
    }
}

/// One showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Label key under the `projects` namespace
    pub key: &'static str,
    /// Badge
    pub category: Category,
    /// Technologies, in display order
    pub tags: &'static [Tag],
    /// Cover image reference
    pub cover: &'static str,
    /// External links
    pub links: ProjectLinks,
    /// Keys into [`CONTRIBUTORS`]
    pub contributors: &'static [&'static str],
}

impl Project {
    /// Key of the translated title.
    pub fn title_key(&self) -> String {
        format!("{}.title", self.key)
    }

    /// Key of the translated one-line description.
    pub fn description_key(&self) -> String {
        format!("{}.description", self.key)
    }

    /// Key of the translated long description.
    pub fn long_description_key(&self) -> String {
        format!("{}.long_description", self.key)
    }

    /// Credited contributors, skipping unknown keys.
    pub fn credited(&self) -> impl Iterator<Item = &'static Contributor> + '_ {
        self.contributors.iter().filter_map(|key| contributor(key))
    }
}

/// An entry on the work timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkExperience {
    /// Label key under the `work_experience` namespace
    pub key: &'static str,
    /// Company name, untranslated
    pub company: &'static str,
    /// Period, e.g. `2022 - Present`
    pub year: &'static str,
    /// Logo image reference
    pub logo: &'static str,
}

impl WorkExperience {
    /// Key of the translated position.
    pub fn position_key(&self) -> String {
        format!("{}.position", self.key)
    }

    /// Key of the translated description.
    pub fn description_key(&self) -> String {
        format!("{}.description", self.key)
    }
}

/// A person credited on projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contributor {
    /// Stable identifier
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Public handle
    pub handle: &'static str,
    /// Avatar image reference
    pub avatar: &'static str,
    /// Profile link
    pub link: &'static str,
}

/// Project at `index`, if it exists.
pub fn project(index: usize) -> Option<&'static Project> {
    PROJECTS.get(index)
}

/// Contributor with `key`, if it exists.
pub fn contributor(key: &str) -> Option<&'static Contributor> {
    CONTRIBUTORS.iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translator;
    use crate::prefs::Language;
    use std::collections::HashSet;

    #[test]
    fn test_project_keys_unique() {
        let keys: HashSet<_> = PROJECTS.iter().map(|p| p.key).collect();
        assert_eq!(keys.len(), PROJECTS.len());
    }

    #[test]
    fn test_every_project_has_labels() {
        let translator = Translator::bundled();
        for lang in Language::ALL {
            for p in PROJECTS {
                assert!(
                    translator.lookup(lang, "projects", &p.title_key()).is_some(),
                    "missing title for {} in {lang}",
                    p.key
                );
                assert!(translator
                    .lookup(lang, "projects", &p.long_description_key())
                    .is_some());
            }
        }
    }

    #[test]
    fn test_every_work_entry_has_labels() {
        let translator = Translator::bundled();
        for w in WORK_EXPERIENCE {
            assert!(translator
                .lookup(Language::Spanish, "work_experience", &w.position_key())
                .is_some());
        }
    }

    #[test]
    fn test_credits_resolve() {
        for p in PROJECTS {
            assert_eq!(p.credited().count(), p.contributors.len(), "{}", p.key);
        }
    }

    #[test]
    fn test_primary_link_order() {
        let links = ProjectLinks {
            preview: None,
            code: Some("https://example.com/code"),
            design: Some("https://example.com/design"),
        };
        assert_eq!(links.primary(), Some("https://example.com/code"));
        assert_eq!(ProjectLinks::NONE.primary(), None);
    }

    #[test]
    fn test_lookup_by_index() {
        assert!(project(0).is_some());
        assert!(project(PROJECTS.len()).is_none());
    }
}
