//! Shapes of the static portfolio content.
//!
//! Every value here is authored once in [`crate::portfolio`] and never mutated, so
//! the fields borrow `'static` data instead of owning strings.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Lowest and highest proficiency a skill can be rated with.
pub const PROFICIENCY_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Who the page is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileConfig {
    pub name: &'static str,
    pub age: u8,
    pub title: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
}

impl ProfileConfig {
    /// The first whitespace-separated word of the name (used by the hero headline).
    #[must_use]
    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }

    /// Upper-case initials of every name part, e.g. `"AF"`.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Skill grouping shown as sub-headings of the skills section.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, IntoStaticStr,
)]
pub enum SkillCategory {
    Frontend,
    Backend,
    DevOps,
    Tools,
    Languages,
}

impl SkillCategory {
    /// Order in which categories are rendered.
    pub const DISPLAY_ORDER: [Self; 5] =
        [Self::Languages, Self::Frontend, Self::Backend, Self::DevOps, Self::Tools];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub category: SkillCategory,
    /// 1 (learning) to 5 (expert).
    pub proficiency: u8,
    pub keywords: &'static [&'static str],
}

impl SkillEntry {
    /// One flag per meter dot, `true` for filled.
    pub fn meter(&self) -> impl Iterator<Item = bool> + use<> {
        let filled = self.proficiency;
        PROFICIENCY_RANGE.map(move |dot| dot <= filled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Site-relative path or absolute URL; resolved through the image policy.
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    /// Live/demo/package page.
    pub link: &'static str,
    /// Source repository.
    pub github: &'static str,
    pub features: &'static [&'static str],
}

/// The closed set of icons the social grid knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Twitter,
    Mail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
    /// Icon key as authored; unknown keys simply have no icon.
    pub icon: &'static str,
}

impl SocialLink {
    #[must_use]
    pub fn icon(&self) -> Option<SocialIcon> {
        self.icon.parse().ok()
    }
}

/// One step of the "My Journey" timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline number in the about section, e.g. `"6+" Languages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Document metadata emitted into `<head>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeoMeta {
    pub site_name: &'static str,
    pub description: &'static str,
    pub site_url: &'static str,
    pub twitter_handle: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: ProfileConfig = ProfileConfig {
        name: "Ada King Lovelace",
        age: 36,
        title: "Analyst",
        bio: "",
        email: "ada@example.com",
    };

    #[test]
    fn first_name_and_initials() {
        assert_eq!(PROFILE.first_name(), "Ada");
        assert_eq!(PROFILE.initials(), "AKL");
        assert_eq!(PROFILE.mailto(), "mailto:ada@example.com");
    }

    #[test]
    fn meter_has_five_dots() {
        let skill = SkillEntry {
            name: "Rust",
            category: SkillCategory::Languages,
            proficiency: 3,
            keywords: &[],
        };
        let dots: Vec<bool> = skill.meter().collect();
        assert_eq!(dots, [true, true, true, false, false]);
    }

    #[test]
    fn icon_keys_parse_case_insensitively() {
        let link = SocialLink { platform: "GitHub", url: "https://github.com", icon: "GitHub" };
        assert_eq!(link.icon(), Some(SocialIcon::Github));

        let unknown = SocialLink { platform: "Mastodon", url: "https://example.social", icon: "mastodon" };
        assert_eq!(unknown.icon(), None);
    }

    #[test]
    fn category_labels() {
        assert_eq!(SkillCategory::DevOps.to_string(), "DevOps");
        assert_eq!("Languages".parse::<SkillCategory>().ok(), Some(SkillCategory::Languages));
        assert!("OS".parse::<SkillCategory>().is_err());
    }
}
