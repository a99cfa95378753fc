use crate::content::SiteVariant;

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[cfg(debug_assertions)]
pub fn get_relay_endpoint() -> &'static str {
    option_env!("EMAILJS_ENDPOINT").unwrap_or(EMAILJS_ENDPOINT)  // Point at a local stub while developing
}

#[cfg(not(debug_assertions))]
pub fn get_relay_endpoint() -> &'static str {
    EMAILJS_ENDPOINT
}

/// Identifiers of the EmailJS service, template and public key, baked in at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

pub fn get_relay_config() -> RelayConfig {
    RelayConfig {
        endpoint: get_relay_endpoint().to_string(),
        service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or("YOUR_SERVICE_ID").to_string(),
        template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("YOUR_TEMPLATE_ID").to_string(),
        public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("YOUR_PUBLIC_KEY").to_string(),
    }
}

pub fn get_site_variant() -> SiteVariant {
    SiteVariant::from_name(option_env!("SITE_VARIANT").unwrap_or("classic"))
}

pub fn get_contact_email() -> &'static str {
    option_env!("CONTACT_EMAIL").unwrap_or("contato@savra.com")
}

pub fn get_whatsapp_number() -> &'static str {
    option_env!("WHATSAPP_NUMBER").unwrap_or("5567981775552")
}
