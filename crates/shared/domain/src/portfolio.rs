//! The hand-authored portfolio content.
//!
//! The four exported shapes ([`profile`], [`skills`], [`projects`],
//! [`social_links`]) are what the views destructure; the remaining items back
//! the about section and the document head.

use crate::model::{
    PROFICIENCY_RANGE, ProfileConfig, ProjectEntry, SeoMeta, SkillCategory, SkillEntry,
    SocialLink, Stat, TimelineEntry,
};
use std::collections::HashSet;
use std::fmt;

static PROFILE: ProfileConfig = ProfileConfig {
    name: "Ananda Firmansyah",
    age: 17,
    title: "Full Stack Developer",
    bio: "Passionate full-stack developer with expertise in modern web technologies and programming \
          languages. Focused on building scalable, performant applications with clean, maintainable code.",
    email: "firrthecreator@gmail.com",
};

static SKILLS: &[SkillEntry] = &[
    // Frontend
    SkillEntry {
        name: "React",
        category: SkillCategory::Frontend,
        proficiency: 5,
        keywords: &["JSX", "Hooks", "Component Design", "Performance Optimization"],
    },
    SkillEntry {
        name: "Next.js",
        category: SkillCategory::Frontend,
        proficiency: 5,
        keywords: &["Server Components", "API Routes", "SSG", "SSR"],
    },
    SkillEntry {
        name: "TypeScript",
        category: SkillCategory::Languages,
        proficiency: 5,
        keywords: &["Type Safety", "Generics", "Decorators", "Interfaces"],
    },
    SkillEntry {
        name: "Tailwind CSS",
        category: SkillCategory::Frontend,
        proficiency: 5,
        keywords: &["Responsive Design", "Utility Classes", "Customization"],
    },
    SkillEntry {
        name: "JavaScript",
        category: SkillCategory::Languages,
        proficiency: 5,
        keywords: &["ES6+", "Async/Await", "DOM API", "Event Handling"],
    },
    // Backend
    SkillEntry {
        name: "Go",
        category: SkillCategory::Backend,
        proficiency: 4,
        keywords: &["Concurrency", "REST APIs", "goroutines", "Microservices"],
    },
    SkillEntry {
        name: "Python",
        category: SkillCategory::Backend,
        proficiency: 4,
        keywords: &["FastAPI", "Django", "Data Processing", "Scripting"],
    },
    SkillEntry {
        name: "Node.js",
        category: SkillCategory::Backend,
        proficiency: 5,
        keywords: &["Express", "Async", "npm ecosystem", "Server Architecture"],
    },
    SkillEntry {
        name: "C++",
        category: SkillCategory::Languages,
        proficiency: 4,
        keywords: &["OOP", "STL", "Performance Critical", "Game Development"],
    },
    SkillEntry {
        name: "Rust",
        category: SkillCategory::Languages,
        proficiency: 3,
        keywords: &["Memory Safety", "Concurrency", "Systems Programming"],
    },
    // Database & DevOps
    SkillEntry {
        name: "PostgreSQL",
        category: SkillCategory::Backend,
        proficiency: 4,
        keywords: &["SQL", "Normalization", "Indexing", "Transactions"],
    },
    SkillEntry {
        name: "MongoDB",
        category: SkillCategory::Backend,
        proficiency: 4,
        keywords: &["NoSQL", "Document Model", "Aggregation"],
    },
    SkillEntry {
        name: "Docker",
        category: SkillCategory::DevOps,
        proficiency: 4,
        keywords: &["Containerization", "Docker Compose", "Images"],
    },
    SkillEntry {
        name: "Git",
        category: SkillCategory::Tools,
        proficiency: 5,
        keywords: &["Version Control", "Branching", "Collaboration"],
    },
    // Tools
    SkillEntry {
        name: "VS Code",
        category: SkillCategory::Tools,
        proficiency: 5,
        keywords: &["Extensions", "Debugging", "Workflow"],
    },
];

static PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: "project-1",
        title: "MyAnimeList Wrapper",
        description: "A refined TypeScript interface for the MyAnimeList API, engineered for seamless \
                      data fetching and full type safety.",
        image: "/myanimelist-wrapper-interface.png",
        technologies: &["Node.js", "TypeScript", "NPM"],
        link: "https://www.npmjs.com/package/myanimelist-wrapper",
        github: "https://github.com/firrthecreator/myanimelist-wrapper",
        features: &[
            "Full TypeScript support with end-to-end type safety",
            "OAuth2 authentication flow simplified",
            "Built-in caching mechanism to reduce API calls",
            "Automatic rate-limit handling and request queuing",
            "Comprehensive methods for Anime, Manga, and User data",
            "Lightweight with zero heavy dependencies",
        ],
    },
    ProjectEntry {
        id: "project-2",
        title: "Anilist Wrapper",
        description: "A sophisticated TypeScript interface for AniList, utilizing GraphQL to deliver \
                      a seamless and fully type-safe experience.",
        image: "/anilist-wrapper-interface.png",
        technologies: &["Node.js", "TypeScript", "GraphQL", "NPM"],
        link: "https://www.npmjs.com/package/anilist-wrapper",
        github: "https://github.com/firrthecreator/anilist-wrapper",
        features: &[
            "Native GraphQL query builder for complex data fetching",
            "End-to-end type safety for all AniList media types",
            "Efficient handling of paginated results and media lists",
            "Optimized OAuth2 authentication for user-specific actions",
            "Advanced filtering system for Anime, Manga, and Characters",
        ],
    },
    ProjectEntry {
        id: "project-3",
        title: "PixelArtify",
        description: "A refined C++ engine that distills images into minimalist pixel art. \
                      High-performance, header-only, and engineered for simplicity.",
        image: "/pixelartify-interface.png",
        technologies: &["C++", "STL", "Google Test"],
        link: "https://github.com/firrthecreator/PixelArtify",
        github: "https://github.com/firrthecreator/PixelArtify",
        features: &[
            "Header-only C++ library (no build complexity)",
            "High-performance pixel art generation",
            "Image downscaling with color preservation",
            "Minimalist and clean pixel-art output",
            "Configurable pixel size and resolution",
            "Lightweight with zero external dependencies",
            "Cross-platform support (Windows, Linux, macOS)",
            "Easy integration into existing C++ projects",
        ],
    },
    ProjectEntry {
        id: "project-4",
        title: "TermiPixel",
        description: "Lightweight C++ image-to-ASCII converter featuring adjustable resolution, \
                      brightness inversion, and URL-to-ASCII automation.",
        image: "/termipixel-interface.png",
        technologies: &["C++", "STL", "Google Test"],
        link: "https://github.com/firrthecreator/TermiPixel",
        github: "https://github.com/firrthecreator/TermiPixel",
        features: &[
            "Fast image-to-ASCII conversion for terminal output",
            "Adjustable resolution and character density",
            "Cross-platform support (Windows, Linux, macOS)",
            "Brightness inversion for dark and light terminal themes",
            "Direct URL-to-ASCII image processing",
            "Lightweight and dependency-free C++ implementation",
        ],
    },
];

static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { platform: "GitHub", url: "https://github.com/firrthecreator", icon: "github" },
    SocialLink {
        platform: "LinkedIn",
        url: "https://linkedin.com/in/firrthecreator",
        icon: "linkedin",
    },
    SocialLink { platform: "Twitter", url: "https://twitter.com/firrthecreator", icon: "twitter" },
    SocialLink { platform: "Email", url: "mailto:firrthecreator@gmail.com", icon: "mail" },
];

static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2026",
        title: "Freelance Full Stack Developer",
        description: "Building web applications for startups and small businesses using modern stack.",
    },
    TimelineEntry {
        year: "2025",
        title: "Started Learning Backend Development",
        description: "Explored Go, Rust, and advanced Node.js patterns for scalable systems.",
    },
    TimelineEntry {
        year: "2024",
        title: "Mastered React & Next.js",
        description: "Became proficient in modern React patterns and Next.js full-stack development.",
    },
    TimelineEntry {
        year: "2023",
        title: "Began Programming Journey",
        description: "Started with JavaScript and built first interactive web projects.",
    },
];

static STATS: &[Stat] = &[
    Stat { value: "6+", label: "Languages" },
    Stat { value: "10+", label: "Projects" },
    Stat { value: "2+", label: "Years Coding" },
];

static SEO: SeoMeta = SeoMeta {
    site_name: "Ananda Firmansyah",
    description: "Full Stack Developer Portfolio - JavaScript, TypeScript, Go, C++, Rust, Python",
    site_url: "https://firrthecreator.vercel.app",
    twitter_handle: "@firrthecreator",
};

/// Public profile of the developer.
#[must_use]
pub fn profile() -> &'static ProfileConfig {
    &PROFILE
}

/// Skills in authoring order (grouping happens in the view).
#[must_use]
pub fn skills() -> &'static [SkillEntry] {
    SKILLS
}

/// Featured projects in display order.
#[must_use]
pub fn projects() -> &'static [ProjectEntry] {
    PROJECTS
}

#[must_use]
pub fn social_links() -> &'static [SocialLink] {
    SOCIAL_LINKS
}

#[must_use]
pub fn timeline() -> &'static [TimelineEntry] {
    TIMELINE
}

#[must_use]
pub fn stats() -> &'static [Stat] {
    STATS
}

#[must_use]
pub fn seo() -> &'static SeoMeta {
    &SEO
}

/// Skills of one category, preserving authoring order.
pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static SkillEntry> {
    SKILLS.iter().filter(move |skill| skill.category == category)
}

/// A broken content invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    DuplicateProjectId(&'static str),
    ProficiencyOutOfRange { skill: &'static str, proficiency: u8 },
    EmptyField { entity: &'static str, field: &'static str },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateProjectId(id) => write!(f, "project id '{id}' is used more than once"),
            Self::ProficiencyOutOfRange { skill, proficiency } => {
                write!(f, "skill '{skill}' has proficiency {proficiency}, expected 1-5")
            }
            Self::EmptyField { entity, field } => write!(f, "{entity} has an empty '{field}'"),
        }
    }
}

/// Checks content invariants over arbitrary collections.
#[must_use]
pub fn check(
    profile: &ProfileConfig,
    skills: &[SkillEntry],
    projects: &[ProjectEntry],
) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    if profile.name.trim().is_empty() {
        issues.push(ContentIssue::EmptyField { entity: "profile", field: "name" });
    }
    if profile.email.trim().is_empty() {
        issues.push(ContentIssue::EmptyField { entity: "profile", field: "email" });
    }

    for skill in skills {
        if !PROFICIENCY_RANGE.contains(&skill.proficiency) {
            issues.push(ContentIssue::ProficiencyOutOfRange {
                skill: skill.name,
                proficiency: skill.proficiency,
            });
        }
    }

    let mut seen = HashSet::with_capacity(projects.len());
    for project in projects {
        if !seen.insert(project.id) {
            issues.push(ContentIssue::DuplicateProjectId(project.id));
        }
    }

    issues
}

/// Checks the built-in content.
#[must_use]
pub fn validate() -> Vec<ContentIssue> {
    check(profile(), skills(), projects())
}
