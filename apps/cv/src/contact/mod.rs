pub mod handlers;
pub mod mailer;
pub mod rate_limit;
pub mod validation;

use tracing::info;

use crate::errors::AppError;
use mailer::ContactMailer;
use rate_limit::RateLimiter;
use validation::ContactForm;

/// The contact-form action: validate, rate-limit, then deliver.
pub struct ContactService {
    limiter: RateLimiter,
    /// `None` when SMTP credentials are not configured.
    mailer: Option<ContactMailer>,
}

impl ContactService {
    pub fn new(limiter: RateLimiter, mailer: Option<ContactMailer>) -> Self {
        Self { limiter, mailer }
    }

    pub fn is_configured(&self) -> bool {
        self.mailer.is_some()
    }

    pub async fn submit(&self, form: ContactForm) -> Result<(), AppError> {
        let msg = form.validate()?;

        if self.limiter.check_and_record(&msg.sender) {
            return Err(AppError::RateLimited);
        }

        let Some(mailer) = &self.mailer else {
            return Err(AppError::NotConfigured);
        };

        mailer.deliver(&msg).await?;
        info!(category = %msg.safe_category, "contact message delivered");
        Ok(())
    }
}
