//! # Domain Models
//!
//! Plain data for the portfolio: the hand-authored content in [`portfolio`], the
//! shapes it is written in ([`model`]), the contact draft, page constants and the
//! site configuration. Keep it lean: no I/O, networking, or rendering here.

pub mod config;
pub mod constants;
pub mod contact;
pub mod model;
pub mod portfolio;

pub use contact::{ContactDraft, ContactField};
pub use model::{
    ProfileConfig, ProjectEntry, SeoMeta, SkillCategory, SkillEntry, SocialIcon, SocialLink, Stat,
    TimelineEntry,
};
