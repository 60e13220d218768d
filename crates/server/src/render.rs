//! HTML for the projects and contact sections.

use catalog::{profile::PROFILE, CatalogView, EMPTY_STATE_MESSAGE};
use shared::{
    domain::{CategoryTag, ProjectStatus, SubmissionStatus},
    protocol::{ContactFields, ProjectCard},
};

const EXTERNAL_LINK_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn page(
    view: &CatalogView<'_>,
    status: SubmissionStatus,
    fields: &ContactFields,
) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{owner} | Portfolio</title>\n</head>\n<body>\n{projects}\n{contact}\n</body>\n</html>\n",
        owner = escape(PROFILE.owner),
        projects = projects_section(view),
        contact = contact_section(status, fields),
    )
}

pub(crate) fn projects_section(view: &CatalogView<'_>) -> String {
    let mut html = String::from(
        "<section id=\"projects\">\n<h2>My <span>Projects</span></h2>\n\
<p>A showcase of my recent work and personal projects that demonstrate my skills and creativity</p>\n",
    );
    html.push_str(&category_tabs(view.selected));

    if view.is_empty() {
        html.push_str(&format!(
            "<div class=\"empty-state\"><p>{}</p></div>\n",
            escape(EMPTY_STATE_MESSAGE)
        ));
    } else {
        html.push_str("<div class=\"project-grid\">\n");
        for card in view.cards() {
            html.push_str(&project_card(&card));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</section>");
    html
}

fn category_tabs(selected: CategoryTag) -> String {
    let mut html = String::from("<nav class=\"category-tabs\">\n");
    for tag in CategoryTag::ORDERED {
        let pressed = tag == selected;
        html.push_str(&format!(
            "<a href=\"/?category={id}#projects\" class=\"tab{active}\" aria-pressed=\"{pressed}\">{label}</a>\n",
            id = tag.as_str(),
            active = if pressed { " active" } else { "" },
            label = escape(tag.label()),
        ));
    }
    html.push_str("</nav>\n");
    html
}

fn project_card(card: &ProjectCard) -> String {
    let badge_class = match card.status {
        ProjectStatus::Completed => "badge completed",
        ProjectStatus::InProgress => "badge in-progress",
    };

    let mut html = format!(
        "<article class=\"project-card\" data-project-id=\"{id}\">\n\
<img src=\"{image}\" alt=\"{title}\" width=\"500\" height=\"300\">\n\
<span class=\"{badge_class}\">{status}</span>\n\
<h3>{title}</h3>\n<p>{description}</p>\n",
        id = card.id.0,
        image = escape(&card.image),
        title = escape(&card.title),
        status = escape(&card.status_label),
        description = escape(&card.description),
    );

    html.push_str("<ul class=\"technologies\">");
    for tech in &card.technologies {
        html.push_str(&format!("<li>{}</li>", escape(tech)));
    }
    html.push_str("</ul>\n<h4>Key Features:</h4>\n<ul class=\"features\">");
    for feature in &card.key_features {
        html.push_str(&format!("<li>{}</li>", escape(feature)));
    }
    html.push_str("</ul>\n<div class=\"actions\">");

    if let Some(live_url) = &card.live_url {
        html.push_str(&format!(
            "<a class=\"live-demo\" href=\"{}\" {EXTERNAL_LINK_ATTRS}>Live Demo</a>",
            escape(live_url)
        ));
    }
    html.push_str(&format!(
        "<a class=\"code\" href=\"{}\" {EXTERNAL_LINK_ATTRS}>Code</a>",
        escape(&card.github_url)
    ));
    html.push_str("</div>\n</article>\n");
    html
}

pub(crate) fn contact_section(status: SubmissionStatus, fields: &ContactFields) -> String {
    let sending = status == SubmissionStatus::Sending;
    let mut html = format!(
        "<section id=\"contact\" data-status=\"{status}\">\n\
<h2>Get In <span>Touch</span></h2>\n<div class=\"owner\">{owner}</div>\n\
<h3>Send Me a Message</h3>\n\
<form method=\"post\" action=\"/contact\">\n\
<label for=\"name\">Name</label>\n\
<input id=\"name\" name=\"name\" required value=\"{name}\">\n\
<label for=\"email\">Email</label>\n\
<input id=\"email\" name=\"email\" type=\"email\" required value=\"{email}\">\n\
<label for=\"title\">Subject</label>\n\
<input id=\"title\" name=\"title\" required value=\"{title}\">\n\
<label for=\"message\">Message</label>\n\
<textarea id=\"message\" name=\"message\" required rows=\"6\">{message}</textarea>\n\
<button type=\"submit\"{disabled}>{button}</button>\n",
        status = status_attr(status),
        owner = escape(PROFILE.owner),
        name = escape(&fields.name),
        email = escape(&fields.email),
        title = escape(&fields.title),
        message = escape(&fields.message),
        disabled = if sending { " disabled" } else { "" },
        button = if sending { "Sending…" } else { "Send Message" },
    );

    match status {
        SubmissionStatus::Sent => html.push_str("<p class=\"status sent\">Sent!</p>\n"),
        SubmissionStatus::Error => html.push_str("<p class=\"status error\">Error sending.</p>\n"),
        SubmissionStatus::Idle | SubmissionStatus::Sending => {}
    }
    html.push_str("</form>\n");

    html.push_str("<h3>Contact Information</h3>\n<ul class=\"contact-info\">\n");
    for info in PROFILE.contact_info {
        html.push_str(&format!(
            "<li><a href=\"{href}\"><span class=\"label\">{label}</span> <span class=\"value\">{value}</span></a></li>\n",
            href = escape(info.href),
            label = escape(info.label),
            value = escape(info.value),
        ));
    }
    html.push_str("</ul>\n<h3>Follow Me</h3>\n<ul class=\"social-links\">\n");
    for link in PROFILE.social_links {
        html.push_str(&format!(
            "<li><a href=\"{href}\" {EXTERNAL_LINK_ATTRS} aria-label=\"{label}\">{label}</a></li>\n",
            href = escape(link.href),
            label = escape(link.label),
        ));
    }
    html.push_str(&format!(
        "</ul>\n<h3>Let's Work Together</h3>\n<p>{}</p>\n<ul class=\"highlights\">\n",
        escape(PROFILE.pitch)
    ));
    for highlight in PROFILE.highlights {
        html.push_str(&format!("<li>{}</li>\n", escape(highlight)));
    }
    html.push_str("</ul>\n</section>");
    html
}

fn status_attr(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Idle => "idle",
        SubmissionStatus::Sending => "sending",
        SubmissionStatus::Sent => "sent",
        SubmissionStatus::Error => "error",
    }
}
