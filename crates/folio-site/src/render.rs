//! Section renderers
//!
//! Pure functions from records to HTML fragments. Every plain-text field is
//! escaped; only URLs and pre-rendered Markdown pass through unescaped.

use folio_markup::{escape_html, render_markdown_inline, FrontMatter};
use serde::{Deserialize, Serialize};

use crate::icons::icon_for_label;
use crate::publication::{PubType, Publication};

/// One education timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub date: String,
    pub institution: String,
    pub degree: String,
    pub meta: Option<String>,
}

/// One experience timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub date: String,
    pub organization: String,
    pub role: String,
    pub meta: Option<String>,
    pub description: Option<String>,
}

/// One teaching appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingItem {
    pub role: String,
    pub course: String,
    pub institution: String,
}

/// One award line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardItem {
    pub title: String,
    pub detail: Option<String>,
    pub source: String,
}

/// One service entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
}

/// Render the hero card: photo, title/role, link buttons, then the bio body.
///
/// `body_html` is the hero body already run through the Markdown renderer.
pub fn render_hero(meta: &FrontMatter, body_html: &str) -> String {
    let mut h = String::from(r#"<div class="hero-card">"#);

    if let Some(photo) = meta.get_text("photo").filter(|p| !p.is_empty()) {
        let name = meta.get_text("name").unwrap_or("");
        h.push_str(&format!(
            r#"<div class="hero-photo"><img src="{}" alt="{}"></div>"#,
            escape_html(photo),
            escape_html(name)
        ));
    }

    h.push_str(r#"<div class="hero-info">"#);
    if let Some(title) = meta.get_text("title").filter(|t| !t.is_empty()) {
        h.push_str(&format!(
            r#"<p class="hero-title">{}</p>"#,
            render_markdown_inline(title)
        ));
    }
    if let Some(role) = meta.get_text("role").filter(|r| !r.is_empty()) {
        h.push_str(&format!(
            r#"<p class="hero-role">{}</p>"#,
            render_markdown_inline(role)
        ));
    }

    let links = meta.links();
    if !links.is_empty() {
        h.push_str(r#"<div class="hero-links">"#);
        for link in &links {
            let class = if link.style.as_deref() == Some("primary") {
                "btn"
            } else {
                "btn btn-outline btn-icon"
            };
            h.push_str(&format!(
                r#"<a href="{url}" class="{class}" aria-label="{label}" title="{label}">{icon}</a>"#,
                url = escape_html(&link.url),
                class = class,
                label = escape_html(&link.label),
                icon = icon_for_label(&link.label),
            ));
        }
        h.push_str("</div>");
    }
    h.push_str("</div>");
    h.push_str("</div>");

    h.push_str(r#"<hr class="hero-divider">"#);
    h.push_str(&format!(r#"<div class="tagline"><p>{}</p></div>"#, body_html));

    h
}

/// Render the publication list items.
pub fn render_publications(items: &[Publication]) -> String {
    items
        .iter()
        .map(|item| {
            let is_preprint = item.pub_type == PubType::Preprint;
            let tag_class = if is_preprint {
                "pub-tag tag-preprint"
            } else {
                "pub-tag"
            };
            let tag_label = if is_preprint {
                "Preprint"
            } else {
                item.venue_short.as_str()
            };
            let featured_attr = if item.featured { " data-featured" } else { "" };
            let featured_badge = if item.featured {
                r#"<span class="pub-featured-badge">Featured</span>"#
            } else {
                ""
            };
            let note = if item.note.is_empty() {
                String::new()
            } else {
                format!(r#"<p class="pub-note">{}</p>"#, escape_html(&item.note))
            };

            let links: String = [
                ("pdf", &item.pdf),
                ("code", &item.code),
                ("website", &item.website),
            ]
            .iter()
            .filter(|(_, url)| !url.is_empty())
            .map(|(label, url)| format!(r#"<a href="{}">{}</a>"#, escape_html(url), label))
            .collect();

            format!(
                concat!(
                    r#"<li class="pub-item" data-type="{ty}"{featured_attr}>"#,
                    r#"<span class="{tag_class}">{tag_label}</span>"#,
                    "{featured_badge}",
                    r#"<p class="pub-title">{title}</p>"#,
                    r#"<p class="pub-authors">{authors}</p>"#,
                    "{note}",
                    r#"<div class="pub-links">{links}</div>"#,
                    "</li>"
                ),
                ty = escape_html(item.pub_type.as_str()),
                featured_attr = featured_attr,
                tag_class = tag_class,
                tag_label = escape_html(tag_label),
                featured_badge = featured_badge,
                title = escape_html(&item.title),
                authors = render_markdown_inline(&item.authors),
                note = note,
                links = links,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render education timeline entries.
pub fn render_education(items: &[EducationItem]) -> String {
    items
        .iter()
        .map(|item| {
            let meta = match &item.meta {
                Some(m) => format!(r#"<p class="meta">{}</p>"#, escape_html(m)),
                None => String::new(),
            };
            format!(
                concat!(
                    r#"<div class="timeline-item">"#,
                    r#"<div class="timeline-date">{date}</div>"#,
                    r#"<div class="timeline-content">"#,
                    "<h3>{institution}</h3>",
                    "<p>{degree}</p>",
                    "{meta}",
                    "</div></div>"
                ),
                date = escape_html(&item.date),
                institution = escape_html(&item.institution),
                degree = escape_html(&item.degree),
                meta = meta,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render experience timeline entries.
pub fn render_experience(items: &[ExperienceItem]) -> String {
    items
        .iter()
        .map(|item| {
            let meta = match &item.meta {
                Some(m) => format!(r#"<p class="meta">{}</p>"#, escape_html(m)),
                None => String::new(),
            };
            let description = match &item.description {
                Some(d) => format!("<p>{}</p>", escape_html(d)),
                None => String::new(),
            };
            format!(
                concat!(
                    r#"<div class="timeline-item">"#,
                    r#"<div class="timeline-date">{date}</div>"#,
                    r#"<div class="timeline-content">"#,
                    r#"<h3>{organization} <span class="role">{role}</span></h3>"#,
                    "{meta}{description}",
                    "</div></div>"
                ),
                date = escape_html(&item.date),
                organization = escape_html(&item.organization),
                role = escape_html(&item.role),
                meta = meta,
                description = description,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render teaching entries.
pub fn render_teaching(items: &[TeachingItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                concat!(
                    r#"<div class="teaching-item">"#,
                    r#"<span class="teaching-role">{role}</span>"#,
                    "<div><h3>{course}</h3><p>{institution}</p></div>",
                    "</div>"
                ),
                role = escape_html(&item.role),
                course = escape_html(&item.course),
                institution = escape_html(&item.institution),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render award list items.
pub fn render_awards(items: &[AwardItem]) -> String {
    items
        .iter()
        .map(|item| {
            let detail = match &item.detail {
                Some(d) => format!(" — {}", escape_html(d)),
                None => String::new(),
            };
            format!(
                concat!(
                    "<li><strong>{title}</strong>{detail}",
                    r#"<span class="award-source">{source}</span></li>"#
                ),
                title = escape_html(&item.title),
                detail = detail,
                source = escape_html(&item.source),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render service entries.
pub fn render_service(items: &[ServiceItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="service-item"><h3>{}</h3><p>{}</p></div>"#,
                escape_html(&item.title),
                escape_html(&item.description),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_markup::parse_front_matter;
    use crate::publication::map_entry;
    use folio_bibtex::BibEntry;

    #[test]
    fn hero_escapes_text_and_keeps_markdown() {
        let fm = parse_front_matter(
            "---\nname: A & B\nphoto: assets/me.jpg\ntitle: PhD student at **USC**\n---\nHi there",
        );
        let html = render_hero(&fm, &render_markdown_inline(&fm.body));

        assert!(html.contains(r#"<img src="assets/me.jpg" alt="A &amp; B">"#));
        assert!(html.contains(r#"<p class="hero-title">PhD student at <strong>USC</strong></p>"#));
        assert!(html.contains(r#"<div class="tagline"><p>Hi there</p></div>"#));
    }

    #[test]
    fn hero_links_use_style_and_icons() {
        let fm = parse_front_matter(concat!(
            "---\n",
            "links:\n",
            "  - label: Email\n",
            "    url: mailto:x@y.com\n",
            "    style: primary\n",
            "  - label: GitHub\n",
            "    url: https://github.com/x\n",
            "---\n"
        ));
        let html = render_hero(&fm, "");

        assert!(html.contains(r#"<a href="mailto:x@y.com" class="btn" aria-label="Email""#));
        assert!(html.contains(r#"class="btn btn-outline btn-icon" aria-label="GitHub""#));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn hero_without_photo_has_no_photo_block() {
        let fm = parse_front_matter("---\nname: X\n---\n");
        assert!(!render_hero(&fm, "").contains("hero-photo"));
    }

    #[test]
    fn publication_item_markup() {
        let mut e = BibEntry::new("inproceedings", "K");
        e.set("title", "A <Paper>");
        e.set("author", "Liu, Ollie");
        e.set("abbr", "NeurIPS");
        e.set("year", "2024");
        e.set("booktitle", "[Oral] NeurIPS");
        e.set("selected", "true");
        e.set("code", "https://github.com/x/y");
        let html = render_publications(&[map_entry(&e)]);

        assert!(html.contains(r#"data-type="conference" data-featured"#));
        assert!(html.contains(r#"<span class="pub-tag">NeurIPS 2024</span>"#));
        assert!(html.contains(r#"<span class="pub-featured-badge">Featured</span>"#));
        assert!(html.contains(r#"<p class="pub-title">A &lt;Paper&gt;</p>"#));
        assert!(html.contains(r#"<p class="pub-authors"><strong>Ollie Liu</strong></p>"#));
        assert!(html.contains(r#"<p class="pub-note">Oral</p>"#));
        assert!(html.contains(r#"<a href="https://github.com/x/y">code</a>"#));
        assert!(!html.contains(">pdf</a>"));
    }

    #[test]
    fn preprint_tag_and_no_featured_attr() {
        let mut e = BibEntry::new("misc", "P");
        e.set("title", "Early Work");
        let html = render_publications(&[map_entry(&e)]);

        assert!(html.contains(r#"<span class="pub-tag tag-preprint">Preprint</span>"#));
        assert!(html.contains(r#"data-type="preprint">"#));
        assert!(!html.contains("data-featured"));
        assert!(!html.contains("pub-note"));
    }

    #[test]
    fn publication_links_in_fixed_order() {
        let mut e = BibEntry::new("misc", "P");
        e.set("website", "https://site");
        e.set("url", "https://pdf");
        e.set("code", "https://code");
        let html = render_publications(&[map_entry(&e)]);

        let pdf = html.find(">pdf<").unwrap();
        let code = html.find(">code<").unwrap();
        let website = html.find(">website<").unwrap();
        assert!(pdf < code && code < website);
    }

    #[test]
    fn education_timeline() {
        let items = vec![EducationItem {
            date: "2021 — 2026".into(),
            institution: "University of Somewhere".into(),
            degree: "PhD, Computer Science".into(),
            meta: Some("Advisor: A. Person".into()),
        }];
        let html = render_education(&items);
        assert!(html.contains(r#"<div class="timeline-date">2021 — 2026</div>"#));
        assert!(html.contains("<h3>University of Somewhere</h3>"));
        assert!(html.contains(r#"<p class="meta">Advisor: A. Person</p>"#));
    }

    #[test]
    fn experience_optional_fields_omitted() {
        let items = vec![ExperienceItem {
            date: "2024".into(),
            organization: "Lab".into(),
            role: "Intern".into(),
            meta: None,
            description: None,
        }];
        let html = render_experience(&items);
        assert!(html.contains(r#"<h3>Lab <span class="role">Intern</span></h3>"#));
        assert!(!html.contains(r#"class="meta""#));
    }

    #[test]
    fn awards_and_service_and_teaching() {
        let awards = render_awards(&[AwardItem {
            title: "Best Paper".into(),
            detail: Some("runner-up".into()),
            source: "NeurIPS".into(),
        }]);
        assert!(awards.contains("<strong>Best Paper</strong> — runner-up"));
        assert!(awards.contains(r#"<span class="award-source">NeurIPS</span>"#));

        let service = render_service(&[ServiceItem {
            title: "Reviewer".into(),
            description: "ICML, NeurIPS".into(),
        }]);
        assert!(service.contains("<h3>Reviewer</h3><p>ICML, NeurIPS</p>"));

        let teaching = render_teaching(&[TeachingItem {
            role: "TA".into(),
            course: "CS 101".into(),
            institution: "USC".into(),
        }]);
        assert!(teaching.contains(r#"<span class="teaching-role">TA</span>"#));
        assert!(teaching.contains("<h3>CS 101</h3><p>USC</p>"));
    }

    #[test]
    fn fragments_joined_with_newlines() {
        let items = vec![
            ServiceItem { title: "A".into(), description: "a".into() },
            ServiceItem { title: "B".into(), description: "b".into() },
        ];
        assert_eq!(render_service(&items).matches('\n').count(), 1);
    }
}
