use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use brickshare_mailer::config::Config;
use brickshare_mailer::mail::EmailSender;

const TEST_RECIPIENT: &str = "hola@brickshare.es";
const TEST_SUBJECT: &str = "Resend Python Service Ready";
const TEST_HTML: &str =
    "<strong>El servicio de Resend para Python ha sido configurado correctamente.</strong>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Fails fast when RESEND_API_KEY is absent
    let config = Config::from_env()?;
    tracing::debug!(
        from = %config.mail_from,
        base_url = %config.resend_base_url,
        "Configuration loaded"
    );

    let sender = EmailSender::resend(&config);

    if sender
        .send_email(TEST_RECIPIENT, TEST_SUBJECT, TEST_HTML, None)
        .await
        .is_ok()
    {
        println!("Test email sent successfully!");
    }

    Ok(())
}
