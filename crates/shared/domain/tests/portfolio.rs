use folio_domain::constants::{NAV_ITEMS, SUBMIT_DELAY, SUCCESS_BANNER};
use folio_domain::model::{PROFICIENCY_RANGE, ProjectEntry, SkillCategory, SocialIcon};
use folio_domain::portfolio::{self, ContentIssue};
use std::collections::HashSet;
use strum::IntoEnumIterator;

#[test]
fn built_in_content_is_valid() {
    let issues = portfolio::validate();
    assert!(issues.is_empty(), "content issues: {issues:?}");
}

#[test]
fn every_skill_is_rated_and_categorised() {
    let labels: HashSet<String> = SkillCategory::iter().map(|c| c.to_string()).collect();
    for skill in portfolio::skills() {
        assert!(PROFICIENCY_RANGE.contains(&skill.proficiency), "{}", skill.name);
        assert!(labels.contains(skill.category.as_ref()), "{}", skill.name);
    }
}

#[test]
fn project_ids_are_unique() {
    let ids: HashSet<&str> = portfolio::projects().iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), portfolio::projects().len());
}

#[test]
fn every_social_icon_resolves() {
    for link in portfolio::social_links() {
        assert!(link.icon().is_some(), "no icon for {}", link.platform);
    }
    let icons: HashSet<SocialIcon> =
        portfolio::social_links().iter().filter_map(|l| l.icon()).collect();
    assert_eq!(icons.len(), SocialIcon::iter().count());
}

#[test]
fn profile_matches_published_details() {
    let profile = portfolio::profile();
    assert_eq!(profile.name, "Ananda Firmansyah");
    assert_eq!(profile.first_name(), "Ananda");
    assert_eq!(profile.initials(), "AF");
    assert_eq!(profile.email, "firrthecreator@gmail.com");
}

#[test]
fn grouping_keeps_authoring_order() {
    let languages: Vec<&str> =
        portfolio::skills_in(SkillCategory::Languages).map(|s| s.name).collect();
    assert_eq!(languages, ["TypeScript", "JavaScript", "C++", "Rust"]);

    let total: usize =
        SkillCategory::DISPLAY_ORDER.iter().map(|c| portfolio::skills_in(*c).count()).sum();
    assert_eq!(total, portfolio::skills().len());
}

#[test]
fn check_reports_duplicates_and_ratings() {
    let project = portfolio::projects()[0];
    let twins: [ProjectEntry; 2] = [project, project];

    let mut skill = portfolio::skills()[0];
    skill.proficiency = 6;

    let issues = portfolio::check(portfolio::profile(), &[skill], &twins);
    assert_eq!(
        issues,
        [
            ContentIssue::ProficiencyOutOfRange { skill: "React", proficiency: 6 },
            ContentIssue::DuplicateProjectId("project-1"),
        ]
    );
}

#[test]
fn anchors_and_timings() {
    let hrefs: Vec<&str> = NAV_ITEMS.iter().map(|(_, href)| *href).collect();
    assert_eq!(hrefs, ["#about", "#skills", "#projects", "#contact"]);
    assert_eq!(SUBMIT_DELAY.as_millis(), 500);
    assert_eq!(SUCCESS_BANNER.as_millis(), 3000);
}
