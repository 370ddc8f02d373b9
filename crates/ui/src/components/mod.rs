//! Page sections, top to bottom.

mod about;
mod background;
mod contact;
mod footer;
mod hero;
mod icons;
mod indicators;
mod navigation;
mod projects;
mod skills;

pub use about::About;
pub use background::AnimatedBackground;
pub use contact::{Contact, ContactFormView, SocialLinks};
pub use footer::Footer;
pub use hero::Hero;
pub use icons::SocialIconView;
pub use indicators::{ScrollProgress, ScrollToTop};
pub use navigation::Navigation;
pub use projects::{ProjectCard, Projects};
pub use skills::{SkillCard, Skills};
