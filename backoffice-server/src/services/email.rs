//! Transactional e-mail (AWS SES)

use aws_sdk_sesv2::Client as SesClient;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};

/// Send the password-reset e-mail with the one-hour reset link.
pub async fn send_password_reset_email(
    ses: &SesClient,
    from: &str,
    to: &str,
    reset_link: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let subject = Content::builder()
        .data("Восстановление пароля / Reset your password")
        .build()?;

    let body_text = format!(
        "Вы запросили восстановление пароля. Перейдите по ссылке, чтобы задать новый пароль:\n\
         {reset_link}\n\
         Ссылка действительна в течение 1 часа.\n\
         Если вы не запрашивали восстановление пароля, проигнорируйте это письмо.\n\n\
         You requested a password reset. Follow the link to set a new password:\n\
         {reset_link}\n\
         The link is valid for 1 hour.\n\
         If you did not request a reset, please ignore this message."
    );

    let body = Body::builder()
        .text(Content::builder().data(body_text).build()?)
        .build();

    let message = Message::builder().subject(subject).body(body).build();

    ses.send_email()
        .from_email_address(from)
        .destination(Destination::builder().to_addresses(to).build())
        .content(EmailContent::builder().simple(message).build())
        .send()
        .await?;

    tracing::info!(to = to, "Password reset e-mail sent");
    Ok(())
}
