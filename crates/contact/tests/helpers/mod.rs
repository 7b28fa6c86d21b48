use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fiverings_contact::{
    ContactFlow, ContactForm, Credentials, DeliveryError, EmailDelivery, TemplateParams,
};
use tokio::sync::Notify;

/// Delivery backend recording every call and answering with a fixed outcome.
pub struct MockDelivery {
    calls: Mutex<Vec<TemplateParams>>,
    reject: bool,
    gate: Option<Notify>,
}

#[allow(dead_code)]
impl MockDelivery {
    pub fn succeed() -> Arc<Self> {
        Self::build(false, None)
    }

    pub fn reject() -> Arc<Self> {
        Self::build(true, None)
    }

    /// Succeeds only once [`MockDelivery::release`] is called.
    pub fn held() -> Arc<Self> {
        Self::build(false, Some(Notify::new()))
    }

    fn build(reject: bool, gate: Option<Notify>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(vec![]),
            reject,
            gate,
        })
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> Vec<TemplateParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailDelivery for MockDelivery {
    async fn deliver(
        &self,
        _credentials: &Credentials,
        params: &TemplateParams,
    ) -> Result<(), DeliveryError> {
        self.calls.lock().unwrap().push(params.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.reject {
            return Err(DeliveryError::Rejected(
                "400: The service ID is invalid".to_owned(),
            ));
        }

        Ok(())
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("service_5rings", "template_contact", "pk_test_5rings")
}

pub fn flow(delivery: Arc<MockDelivery>) -> ContactFlow {
    ContactFlow::new(delivery, credentials())
}

pub fn form() -> ContactForm {
    ContactForm {
        user_name: "A".to_owned(),
        user_email: "a@x.com".to_owned(),
        user_phone: "123".to_owned(),
        sport: "Cricket".to_owned(),
        message: "hi".to_owned(),
    }
}

#[allow(dead_code)]
pub fn params() -> TemplateParams {
    TemplateParams {
        user_name: "A".to_owned(),
        user_email: "a@x.com".to_owned(),
        user_phone: "123".to_owned(),
        sport: "Cricket".to_owned(),
        message: "hi".to_owned(),
    }
}
