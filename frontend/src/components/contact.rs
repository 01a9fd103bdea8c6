use log::{info, warn};
use serde::Serialize;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
}

/// A filled-in contact form, ready to hand to whatever delivers inquiries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

impl ContactInquiry {
    pub fn from_fields(
        name: &str,
        email: &str,
        phone: &str,
        message: &str,
    ) -> Result<Self, ContactFormError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactFormError::MissingField("name"));
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(ContactFormError::MissingField("email"));
        }
        if !looks_like_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: optional(phone),
            message: optional(message),
        })
    }
}

/// Inquiries have nowhere to go yet, so they are logged and dropped.
pub fn discard_inquiry(inquiry: &ContactInquiry) {
    match serde_json::to_string(inquiry) {
        Ok(payload) => info!("Contact form submitted, discarding inquiry: {}", payload),
        Err(e) => warn!("Contact form submitted, inquiry not serializable: {}", e),
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match ContactInquiry::from_fields(&name, &email, &phone, &message) {
                Ok(inquiry) => discard_inquiry(&inquiry),
                Err(e) => warn!("Ignoring contact form submission: {}", e),
            }
        })
    };

    let on_input = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-group">
                <label for="name">{"Your Name"}</label>
                <input type="text" id="name" placeholder="Enter your name" required=true
                    value={(*name).clone()} oninput={on_input(&name)} />
            </div>
            <div class="form-group">
                <label for="email">{"Email Address"}</label>
                <input type="email" id="email" placeholder="Enter your email" required=true
                    value={(*email).clone()} oninput={on_input(&email)} />
            </div>
            <div class="form-group">
                <label for="phone">{"Phone Number"}</label>
                <input type="tel" id="phone" placeholder="Enter your phone number"
                    value={(*phone).clone()} oninput={on_input(&phone)} />
            </div>
            <div class="form-group">
                <label for="message">{"Your Message"}</label>
                <textarea id="message" placeholder="Tell us about your project..." rows="4"
                    value={(*message).clone()} oninput={on_message} />
            </div>
            <button type="submit" class="btn btn-primary">
                {"Send Message"}
                <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M22 2L11 13M22 2l-7 20-4-9-9-4 20-7z" />
                </svg>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn required_fields_only() {
        let inquiry = ContactInquiry::from_fields("  Neha Kapoor ", "neha@example.com", "", "   ").unwrap();
        assert_eq!(
            inquiry,
            ContactInquiry {
                name: "Neha Kapoor".into(),
                email: "neha@example.com".into(),
                phone: None,
                message: None,
            }
        );
    }

    #[test]
    fn optional_fields_are_kept_trimmed() {
        let inquiry = ContactInquiry::from_fields(
            "Anil",
            "anil@example.com",
            " +91 98765 43210 ",
            "Office fit-out in CP\n2,000 sq ft",
        )
        .unwrap();
        assert_eq!(inquiry.phone.as_deref(), Some("+91 98765 43210"));
        assert_eq!(inquiry.message.as_deref(), Some("Office fit-out in CP\n2,000 sq ft"));
    }

    #[test]
    fn empty_required_fields_are_rejected() {
        assert_eq!(
            ContactInquiry::from_fields("", "", "", ""),
            Err(ContactFormError::MissingField("name"))
        );
        assert_eq!(
            ContactInquiry::from_fields("Priya", "  ", "", ""),
            Err(ContactFormError::MissingField("email"))
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["priya", "@example.com", "priya@", "pri ya@example.com", "a@b@c"] {
            assert_eq!(
                ContactInquiry::from_fields("Priya", email, "", ""),
                Err(ContactFormError::InvalidEmail),
                "{}",
                email
            );
        }
    }

    #[test]
    fn serialized_payload_omits_blank_optionals() {
        let inquiry = ContactInquiry::from_fields("Priya", "priya@example.com", "", "").unwrap();
        assert_eq!(
            serde_json::to_string(&inquiry).unwrap(),
            r#"{"name":"Priya","email":"priya@example.com"}"#
        );
    }
}
