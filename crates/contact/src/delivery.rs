use async_trait::async_trait;

use crate::{Credentials, DeliveryError, TemplateParams};

/// Transactional email backend the contact form is delivered through.
///
/// Implementations resolve exactly once per call; the flow never retries.
#[async_trait]
pub trait EmailDelivery: Send + Sync + 'static {
    async fn deliver(
        &self,
        credentials: &Credentials,
        params: &TemplateParams,
    ) -> Result<(), DeliveryError>;
}
