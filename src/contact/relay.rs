use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;

use super::error::SubmissionError;
use super::form::ContactMessage;
use crate::config::RelayConfig;

/// Outbound e-mail delivery for the contact form.
#[async_trait(?Send)]
pub trait MailRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), SubmissionError>;
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// Sends through the EmailJS REST API. Any 2xx reply counts as delivered.
#[derive(Clone, Debug)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    fn request_body<'a>(&'a self, message: &'a ContactMessage) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
        }
    }
}

#[async_trait(?Send)]
impl MailRelay for EmailJsRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), SubmissionError> {
        let response = Request::post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(&self.request_body(message))
            .map_err(|e| SubmissionError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(SubmissionError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_body_matches_emailjs_shape() {
        let relay = EmailJsRelay::new(RelayConfig {
            endpoint: "https://relay.test/send".into(),
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "key".into(),
        });
        let message = ContactMessage {
            from_name: "Ana".into(),
            from_email: "ana@savra.com".into(),
            message: "Quero um orçamento".into(),
        };

        let body = serde_json::to_value(relay.request_body(&message)).unwrap();

        assert_eq!(
            body,
            json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "key",
                "template_params": {
                    "from_name": "Ana",
                    "from_email": "ana@savra.com",
                    "message": "Quero um orçamento"
                }
            })
        );
    }
}
