use crate::config::MailConfig;
use crate::types::mail::{MailTemplate, RequestMailData, SendEmail};
use reqwest::{Client, ClientBuilder};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail delivery is disabled (no API key configured)")]
    Disabled,
    #[error("build client failed: {0}")]
    Client(reqwest::Error),
    #[error("send failed: {0}")]
    Send(reqwest::Error),
    #[error("mail API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },
}

pub async fn send_email(cfg: &MailConfig, email: SendEmail) -> Result<String, MailError> {
    let api_key = cfg.api_key.as_deref().ok_or(MailError::Disabled)?;

    let client: Client = ClientBuilder::new()
        .user_agent("workshop-server/0.1 (+reqwest)")
        .tcp_nodelay(true)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(MailError::Client)?;

    debug!(endpoint = %cfg.endpoint, to = ?email.to, subject = %email.subject, "sending mail");

    let t0 = Instant::now();
    let res = client
        .post(&cfg.endpoint)
        .bearer_auth(api_key) // do NOT log the key
        .json(&email)
        .send()
        .await
        .map_err(MailError::Send)?;
    let dt = t0.elapsed();

    let status = res.status();
    let body = res.text().await.map_err(MailError::Send)?;

    if status.is_success() {
        info!(to = ?email.to, "mail accepted in {} ms", dt.as_millis());
        Ok(body)
    } else {
        warn!(status = status.as_u16(), "mail API rejected message");
        Err(MailError::Api { status: status.as_u16(), body })
    }
}

/// Renders `template` and sends it to `to`.
pub async fn send_template(cfg: &MailConfig, to: &str, template: &MailTemplate) -> Result<String, MailError> {
    let (subject, text, html) = render(template);
    send_email(cfg, SendEmail {
        from: cfg.from.clone(),
        to: vec![to.to_string()],
        subject,
        text: Some(text),
        html: Some(html),
        ..Default::default()
    }).await
}

/// Best-effort send: failures are logged and reported as `false`, never propagated.
pub async fn notify(cfg: &MailConfig, to: &str, template: &MailTemplate) -> bool {
    match send_template(cfg, to, template).await {
        Ok(_) => true,
        Err(e) => {
            warn!(request_id = %template.data().request_id, to = %to, "notification not sent: {e}");
            false
        }
    }
}

/// Returns `(subject, text, html)`.
pub fn render(template: &MailTemplate) -> (String, String, String) {
    match template {
        MailTemplate::AdminRequest(d) => {
            let subject = format!("New club admin request for {}", d.club_code);
            let text = format!(
                "{} ({}) asked to become the admin of club {}.\n\nRequest ID: {}\n\nApprove or reject it from the system admin dashboard.",
                d.username, d.email, d.club_code, d.request_id
            );
            (subject, text.clone(), html_paragraphs(&text))
        }
        MailTemplate::MemberRequest(d) => {
            let subject = format!("New member request for {}", d.club_code);
            let text = format!(
                "{} ({}) asked to join your club {}.\n\nRequest ID: {}\n\nApprove or reject it from your admin dashboard.",
                d.username, d.email, d.club_code, d.request_id
            );
            (subject, text.clone(), html_paragraphs(&text))
        }
        MailTemplate::ApprovalNotification(d) => {
            let subject = "Your registration was approved".to_string();
            let text = format!(
                "Hi {},\n\nYour request to register as {} of club {} was approved. You can now log in with your username, password and club code.",
                d.username, d.requested, d.club_code
            );
            (subject, text.clone(), html_paragraphs(&text))
        }
        MailTemplate::RejectionNotification { data: d, reason } => {
            let subject = "Your registration was not approved".to_string();
            let mut text = format!(
                "Hi {},\n\nYour request to register as {} of club {} was rejected.",
                d.username, d.requested, d.club_code
            );
            if let Some(reason) = reason.as_deref().filter(|r| !r.trim().is_empty()) {
                text.push_str(&format!("\n\nReason: {reason}"));
            }
            (subject, text.clone(), html_paragraphs(&text))
        }
    }
}

impl MailTemplate {
    pub fn data(&self) -> &RequestMailData {
        match self {
            MailTemplate::AdminRequest(d)
            | MailTemplate::MemberRequest(d)
            | MailTemplate::ApprovalNotification(d) => d,
            MailTemplate::RejectionNotification { data, .. } => data,
        }
    }
}

fn html_paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(|p| format!("<p>{}</p>", escape_html(p).replace('\n', "<br>")))
        .collect()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
