use folio_domain::config::ImagesConfig;
use folio_domain::constants::PLACEHOLDER_IMAGE;
use folio_domain::{SkillCategory, portfolio};
use folio_kernel::ImagePolicy;
use folio_ui::render_page;

fn page() -> String {
    render_page(ImagePolicy::from_config(&ImagesConfig::default()))
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle).unwrap_or_else(|| panic!("`{needle}` missing from page"))
}

#[test]
fn document_shell_and_head() {
    let html = page();
    assert!(html.starts_with("<!DOCTYPE html><html"));
    assert!(html.contains("<title>Ananda Firmansyah | Full Stack Developer</title>"));
    assert!(html.contains(r#"content="@firrthecreator""#));
    assert!(html.contains(r#"href="/styles.css""#));
}

#[test]
fn hero_greets_by_first_name() {
    let html = page();
    assert!(html.contains(r#"<span class="text-gradient">Ananda</span>"#));
    assert!(html.contains("17 years old"));
}

#[test]
fn full_name_and_email_appear_verbatim() {
    let html = page();
    assert!(html.contains("Ananda Firmansyah. All rights reserved."));
    assert!(html.contains(r#"href="mailto:firrthecreator@gmail.com""#));
    assert!(html.contains(">firrthecreator@gmail.com<"));
}

#[test]
fn sections_render_in_page_order() {
    let html = page();
    let order: Vec<usize> = ["id=\"about\"", "id=\"skills\"", "id=\"projects\"", "id=\"contact\"", "<footer"]
        .iter()
        .map(|needle| position(&html, needle))
        .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]), "{order:?}");
}

#[test]
fn four_project_cards_in_document_order_and_collapsed() {
    let html = page();
    assert_eq!(html.matches("data-project=").count(), 4);

    let ids: Vec<usize> = portfolio::projects()
        .iter()
        .map(|p| position(&html, &format!(r#"data-project="{}""#, p.id)))
        .collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    assert_eq!(html.matches(">Details<").count(), 4);
    assert!(!html.contains("Key Features"));
    assert!(html.contains("transition-delay: 300ms"));
}

#[test]
fn skill_categories_follow_display_order() {
    let html = page();
    let headings: Vec<usize> = SkillCategory::DISPLAY_ORDER
        .iter()
        .filter(|c| portfolio::skills_in(**c).next().is_some())
        .map(|c| position(&html, &format!(">{c}</h3>")))
        .collect();
    assert!(headings.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn static_render_starts_revealed() {
    let html = page();
    assert!(html.contains("opacity-100"));
    assert!(!html.contains("opacity-0 translate-y-8"));
    assert!(!html.contains("opacity-0 -translate-x-8"));
}

#[test]
fn static_form_falls_back_to_mailto() {
    let html = page();
    assert!(html.contains(r#"action="mailto:firrthecreator@gmail.com""#));
    assert!(html.contains("Send Message"));
    assert!(!html.contains("Message sent successfully"));
}

#[test]
fn back_to_top_hidden_at_page_top() {
    assert!(!page().contains("Scroll to top"));
}

#[test]
fn social_icons_render_for_every_known_platform() {
    let html = page();
    for platform in ["GitHub", "LinkedIn", "Twitter", "Email"] {
        assert!(html.contains(&format!(r#"aria-label="{platform}""#)), "{platform}");
    }
    assert!(html.matches(r#"viewBox="0 0 24 24""#).count() >= 4);
}

#[test]
fn site_relative_images_pass_any_policy() {
    let html = render_page(ImagePolicy::default());
    assert!(html.contains(r#"src="/termipixel-interface.png""#));
    assert!(!html.contains(PLACEHOLDER_IMAGE));
}
