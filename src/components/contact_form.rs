use std::rc::Rc;

use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::error::{SubmissionError, SubmitRejected};
use crate::contact::form::{ContactForm, Field, SubmitOutcome};
use crate::contact::relay::{EmailJsRelay, MailRelay};

pub enum ContactMsg {
    Input(Field, String),
    Submit,
    Relayed(Result<(), SubmissionError>),
}

pub struct ContactFormView {
    form: ContactForm,
    relay: Rc<dyn MailRelay>,
    outcome: Option<SubmitOutcome>,
}

/// Banner class for the status line. Only a delivered message is shown as a success.
pub fn status_class(outcome: Option<SubmitOutcome>) -> &'static str {
    match outcome {
        Some(SubmitOutcome::Sent) => "form-status success",
        Some(SubmitOutcome::Failed) | None => "form-status error",
    }
}

impl ContactFormView {
    fn field_error(&self, field: Field) -> Html {
        let error = self.form.errors.get(field);
        if error.is_empty() {
            html! {}
        } else {
            html! { <p class="field-error">{ error }</p> }
        }
    }
}

impl Component for ContactFormView {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::new(),
            relay: Rc::new(EmailJsRelay::new(config::get_relay_config())),
            outcome: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Input(field, value) => {
                self.form.set_field(field, value);
                true
            }
            ContactMsg::Submit => match self.form.begin_submit() {
                Ok(message) => {
                    self.outcome = None;
                    info!("Sending contact message");
                    let relay = self.relay.clone();
                    ctx.link().send_future(async move {
                        ContactMsg::Relayed(relay.send(&message).await)
                    });
                    true
                }
                Err(SubmitRejected::Busy) => false,
                Err(SubmitRejected::Invalid(e)) => {
                    warn!("Contact form has invalid fields: {:?}", e.errors.invalid_fields());
                    self.outcome = None;
                    true
                }
            },
            ContactMsg::Relayed(result) => {
                self.outcome = Some(self.form.complete_submit(result));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = &self.form;

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        let banner_class = status_class(self.outcome);

        html! {
            <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                <label for="contact-name">{"Nome"}</label>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="Seu nome"
                    value={form.value(Field::Name).to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        ContactMsg::Input(Field::Name, input.value())
                    })}
                />
                { self.field_error(Field::Name) }

                <label for="contact-email">{"E-mail"}</label>
                <input
                    id="contact-email"
                    type="email"
                    placeholder="seu@email.com"
                    value={form.value(Field::Email).to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        ContactMsg::Input(Field::Email, input.value())
                    })}
                />
                { self.field_error(Field::Email) }

                <label for="contact-message">{"Mensagem"}</label>
                <textarea
                    id="contact-message"
                    rows="5"
                    placeholder="Conte um pouco sobre o seu projeto"
                    value={form.value(Field::Message).to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        ContactMsg::Input(Field::Message, input.value())
                    })}
                />
                { self.field_error(Field::Message) }

                <button type="submit" class="contact-submit" disabled={form.is_sending}>
                    { if form.is_sending { "Enviando..." } else { "Enviar Mensagem" } }
                </button>

                if !form.status.is_empty() {
                    <p class={banner_class}>{ &form.status }</p>
                }
            </form>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_delivered_messages_get_the_success_banner() {
        assert_eq!(status_class(Some(SubmitOutcome::Sent)), "form-status success");
        assert_eq!(status_class(Some(SubmitOutcome::Failed)), "form-status error");
        assert_eq!(status_class(None), "form-status error");
    }
}
