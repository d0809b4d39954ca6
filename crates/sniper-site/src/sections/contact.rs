//! Contact page sections.

use super::{html_escape, render_page_hero};
use crate::data::{ContactPageContent, WhatsAppInvite};
use crate::form::ContactFormView;

pub fn render_contact_hero(content: &ContactPageContent) -> String {
    render_page_hero("contact-hero", "Contact Us", &content.intro)
}

/// Form card beside the contact details column.
pub fn render_contact_main(
    content: &ContactPageContent,
    whatsapp: &WhatsAppInvite,
    form: &ContactFormView,
) -> String {
    let channels = content
        .business
        .channels()
        .iter()
        .map(|channel| {
            format!(
                r#"<div class="channel">
                <span class="feature-icon">{}</span>
                <div><h4>{}</h4><p class="channel-value">{}</p><p class="channel-note">{}</p></div>
            </div>"#,
                html_escape(&channel.icon),
                html_escape(&channel.title),
                html_escape(&channel.value),
                html_escape(&channel.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    let response_times = content
        .response_times
        .iter()
        .map(|t| format!("<li>{}</li>", html_escape(t)))
        .collect::<String>();

    format!(
        r#"<section class="contact-main" data-section="contact-form">
    <div class="container split">
        {form}
        <div class="contact-info">
            <div class="card">
                <h2>Get in Touch</h2>
                {channels}
            </div>
            <div class="card">
                <h3>{response_title}</h3>
                <p>{response_body}</p>
                <ul>{response_times}</ul>
            </div>
            <div class="card whatsapp-card">
                <h3>{wa_title}</h3>
                <p>{wa_body}</p>
                <a href="{wa_url}" class="btn-whatsapp" target="_blank" rel="noopener noreferrer">{wa_link}</a>
            </div>
        </div>
    </div>
</section>"#,
        form = form.render(&content.form_title),
        channels = channels,
        response_title = html_escape(&content.response_title),
        response_body = html_escape(&content.response_body),
        response_times = response_times,
        wa_title = html_escape(&whatsapp.title),
        wa_body = html_escape(&whatsapp.body),
        wa_url = html_escape(&whatsapp.url),
        wa_link = html_escape(&whatsapp.link_text),
    )
}

pub fn render_faq(content: &ContactPageContent) -> String {
    let items = content
        .faq
        .iter()
        .map(|q| {
            format!(
                r#"<details class="faq-item"><summary>{}</summary><p>{}</p></details>"#,
                html_escape(&q.title),
                html_escape(&q.body)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<section class="faq" data-section="faq">
    <div class="section-header"><h2>Frequently Asked Questions</h2></div>
    <div class="container faq-list">
        {}
    </div>
</section>"#,
        items
    )
}
