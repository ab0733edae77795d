//! Markup for the static parts of the page.
//!
//! Plain templating over the data tables. All text goes through
//! `escape_html`; the engine emits the strings and JS assigns them as
//! `innerHTML` of the matching container.

use std::fmt::Write;

use folio_shared::data::{self, AboutData, ContactData, HomeData, ProjectRecord, SkillCategory, SocialLink};
use folio_shared::escape_html as esc;

use crate::catalog::CardElement;

/// Page regions that JS asks for by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    HeroDescription,
    HeroButtons,
    AboutImage,
    AboutBio,
    AboutSocial,
    /// The resume link's `href` value rather than markup.
    ResumeButton,
    Skills,
    ContactDescription,
    ContactMethods,
    FooterSocial,
}

impl Section {
    pub fn parse(name: &str) -> Option<Section> {
        Some(match name {
            "hero" => Section::Hero,
            "heroDescription" => Section::HeroDescription,
            "heroButtons" => Section::HeroButtons,
            "aboutImage" => Section::AboutImage,
            "aboutBio" => Section::AboutBio,
            "aboutSocial" => Section::AboutSocial,
            "resumeButton" => Section::ResumeButton,
            "skills" => Section::Skills,
            "contactDescription" => Section::ContactDescription,
            "contactMethods" => Section::ContactMethods,
            "footerSocial" => Section::FooterSocial,
            _ => return None,
        })
    }
}

pub fn render_section(section: Section) -> String {
    match section {
        Section::Hero => render_hero_title(&data::home()),
        Section::HeroDescription => esc(data::home().description),
        Section::HeroButtons => render_hero_buttons(&data::home()),
        Section::AboutImage => render_about_image(&data::about(), data::home().name),
        Section::AboutBio => render_about_bio(&data::about()),
        Section::AboutSocial | Section::FooterSocial => render_social(&data::about().social),
        Section::ResumeButton => esc(data::about().resume_url),
        Section::Skills => render_skills(&data::skills()),
        Section::ContactDescription => esc(data::contact().description),
        Section::ContactMethods => render_contact_methods(&data::contact()),
    }
}

// ── Cards ──────────────────────────────────────────────────────────────────

pub fn render_card(card: &CardElement, record: &ProjectRecord, fallback_image: &str) -> String {
    let title = esc(&record.title);
    let cover = record.cover_image(fallback_image);

    let mut links = String::new();
    for link in &record.links {
        let _ = write!(
            links,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="card-link-item {}" aria-label="{}"><i class="{}" aria-hidden="true"></i></a>"#,
            esc(&link.url),
            link.icon_class(),
            esc(&link.aria_label(&record.title)),
            esc(&link.icon),
        );
    }

    format!(
        concat!(
            r#"<div class="card-item" data-card-id="{id}" data-category="{category}" data-project-slug="{slug}">"#,
            r#"<div class="card-image"><img src="{cover}" alt="{title}" loading="lazy" />"#,
            r#"<div class="card-overlay"><div class="card-links">{links}</div></div></div>"#,
            r#"<div class="card-info"><h3 class="card-title">{title}</h3>"#,
            r#"<p class="card-tags">{tags}</p>"#,
            r#"<p class="card-description">{description}</p>"#,
            r#"<button class="view-details-btn" data-card-id="{id}" aria-label="View details for {title}">View Details</button>"#,
            r#"</div></div>"#
        ),
        id = card.id,
        category = card.category.as_str(),
        slug = esc(&card.slug),
        cover = esc(cover),
        title = title,
        links = links,
        tags = esc(&record.tags),
        description = esc(&record.description),
    )
}

/// Heading and body copy for an empty filter result.
pub fn empty_message(filter: &str) -> (String, String) {
    if filter == folio_shared::FILTER_ALL {
        (
            "No Projects Found".to_string(),
            "There are currently no projects in the portfolio. Check back later!".to_string(),
        )
    } else {
        let name = folio_shared::capitalize(filter);
        (
            format!("No {name} Found"),
            format!("There are currently no projects in the {name} category. Check back later!"),
        )
    }
}

// ── Home ───────────────────────────────────────────────────────────────────

fn render_hero_title(home: &HomeData) -> String {
    format!(
        r#"{} <span class="highlight">{}</span>"#,
        esc(home.title),
        esc(home.name)
    )
}

fn render_hero_buttons(home: &HomeData) -> String {
    home.buttons
        .iter()
        .map(|b| {
            format!(
                r#"<a href="{}" class="hero-button {}">{}</a>"#,
                esc(b.href),
                esc(b.kind),
                esc(b.text)
            )
        })
        .collect()
}

// ── About ──────────────────────────────────────────────────────────────────

fn render_about_image(about: &AboutData, name: &str) -> String {
    format!(r#"<img src="{}" alt="{}" />"#, esc(about.image), esc(name))
}

fn render_about_bio(about: &AboutData) -> String {
    about
        .bio
        .iter()
        .map(|p| format!("<p>{}</p>", esc(p)))
        .collect()
}

fn render_social(social: &[SocialLink]) -> String {
    social
        .iter()
        .map(|s| {
            format!(
                r#"<a href="{url}" class="social-icon {platform}-icon" aria-label="{label}" target="_blank" rel="noopener noreferrer"><i class="{icon}" aria-hidden="true"></i></a>"#,
                url = esc(s.url),
                platform = esc(&s.platform.to_lowercase()),
                label = esc(s.platform),
                icon = esc(s.icon),
            )
        })
        .collect()
}

// ── Skills ─────────────────────────────────────────────────────────────────

fn render_skills(categories: &[SkillCategory]) -> String {
    let mut out = String::new();
    for category in categories {
        let _ = write!(
            out,
            r#"<div class="skills-category"><div class="skills-header"><h3 class="skills-category-title">{}</h3><div class="skills-category-icon"><i class="{}" aria-hidden="true"></i></div></div><div class="skills-grid">"#,
            esc(category.category),
            esc(category.icon),
        );
        for skill in &category.skills {
            let _ = write!(
                out,
                r#"<div class="skill-item" data-tooltip="{name}" aria-label="{name} skill"><i class="{icon}"></i></div>"#,
                name = esc(skill.name),
                icon = esc(skill.icon),
            );
        }
        out.push_str("</div></div>");
    }
    out
}

// ── Contact ────────────────────────────────────────────────────────────────

fn render_contact_methods(contact: &ContactData) -> String {
    contact
        .methods
        .iter()
        .map(|m| {
            let value = match m.href {
                Some(href) => format!(r#"<a href="{}">{}</a>"#, esc(href), esc(m.display)),
                None => format!("<p>{}</p>", esc(m.display)),
            };
            format!(
                r#"<div class="contact-item"><i class="{}" aria-hidden="true"></i><div class="contact-text"><h3>{}</h3>{}</div></div>"#,
                esc(m.icon),
                esc(m.kind),
                value
            )
        })
        .collect()
}
