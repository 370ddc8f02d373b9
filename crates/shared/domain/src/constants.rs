//! Page-wide constants: anchors, thresholds and timings.

use std::time::Duration;

pub const ANCHOR_ABOUT: &str = "#about";
pub const ANCHOR_SKILLS: &str = "#skills";
pub const ANCHOR_PROJECTS: &str = "#projects";
pub const ANCHOR_CONTACT: &str = "#contact";

/// `(label, href)` pairs shared by the navigation bar and the footer.
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("About", ANCHOR_ABOUT),
    ("Skills", ANCHOR_SKILLS),
    ("Projects", ANCHOR_PROJECTS),
    ("Contact", ANCHOR_CONTACT),
];

/// Scroll offset (px) past which the navigation bar gets a solid background.
pub const NAV_SOLID_OFFSET: f64 = 10.0;
/// Scroll offset (px) past which the back-to-top button appears.
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;
/// Visible fraction of a section needed to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Duration of the reveal transition.
pub const REVEAL_DURATION: Duration = Duration::from_millis(700);
/// Extra delay per project card so the grid cascades in.
pub const CARD_STAGGER: Duration = Duration::from_millis(100);
/// Artificial latency of a contact submission.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(500);
/// How long the "message sent" banner stays up.
pub const SUCCESS_BANNER: Duration = Duration::from_secs(3);

/// Minimum number of characters in a contact message.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Fallback image for projects whose image cannot be shown.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub const CONTACT_LOCATION: &str = "Indonesia";
pub const AVAILABILITY_NOTE: &str = "I'm currently available for freelance projects and collaborations. \
     Response time is typically within 24 hours.";
