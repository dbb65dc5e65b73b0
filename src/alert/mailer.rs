//! SMTP delivery of alerts.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::info;

use super::AlertMessage;
use crate::config::{AlertConfig, FALLBACK_SENDER};
use crate::error_handling::AlertError;

/// Sends `message` through the configured relay using STARTTLS.
///
/// The SMTP exchange is blocking and runs on tokio's blocking pool.
///
/// # Errors
///
/// Returns an `AlertError` if an address does not parse, the message cannot be
/// built, or the relay rejects it.
pub async fn send_alert(config: &AlertConfig, message: &AlertMessage) -> Result<(), AlertError> {
    let email = build_email(config, message)?;

    let mut transport = SmtpTransport::starttls_relay(&config.smtp_server)?.port(config.smtp_port);
    if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_pass) {
        transport = transport.credentials(Credentials::new(user.clone(), pass.clone()));
    }
    let mailer = transport.build();

    tokio::task::spawn_blocking(move || mailer.send(&email)).await??;
    info!("Alert email sent to {}", config.to_email);
    Ok(())
}

fn build_email(config: &AlertConfig, message: &AlertMessage) -> Result<Message, AlertError> {
    let from: Mailbox = sender(config).parse()?;
    let to: Mailbox = config.to_email.parse()?;
    let email = Message::builder()
        .from(from)
        .to(to)
        .subject(message.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(message.body())?;
    Ok(email)
}

/// `--from-email`, else the SMTP user if it is an address, else a local fallback.
fn sender(config: &AlertConfig) -> &str {
    config
        .from_email
        .as_deref()
        .or_else(|| config.smtp_user.as_deref().filter(|user| user.contains('@')))
        .unwrap_or(FALLBACK_SENDER)
}
