//! Contact Form Submitter
//!
//! Sends `#contact-form` to the form relay without leaving the page, then
//! swaps the inputs for `#success-message` or reports what went wrong.

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlButtonElement, HtmlFormElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::commands;
use crate::context::{use_page_context, PageContext};
use crate::dom::{set_display, set_style, Page};
use crate::error::SubmitError;
use crate::store;

const PENDING_LABEL: &str = "Sending...";

/// Message pre-filled when arriving from the pricing page with `?plan=`
pub fn plan_message(plan: &str) -> String {
    format!("Hi, I am interested in the {} Package.", plan)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Request in flight; the label to restore if it fails
    Submitting { original_label: String },
    /// Relay accepted; the form is gone
    Sent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Submit pressed while the button read `label`
    Submit { label: String },
    Finished(Result<(), SubmitError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    ButtonPending,
    RestoreButton { label: String },
    SendRequest,
    HideFields,
    HideButton,
    ShowSuccess,
    ResetForm,
    Alert(String),
    LogError(String),
}

impl SubmitPhase {
    pub fn step(self, event: FormEvent) -> (Self, Vec<FormEffect>) {
        match (self, event) {
            (SubmitPhase::Idle, FormEvent::Submit { label }) => (
                SubmitPhase::Submitting { original_label: label },
                vec![FormEffect::ButtonPending, FormEffect::SendRequest],
            ),
            (SubmitPhase::Submitting { .. }, FormEvent::Finished(Ok(()))) => (
                SubmitPhase::Sent,
                vec![
                    FormEffect::HideFields,
                    FormEffect::HideButton,
                    FormEffect::ShowSuccess,
                    FormEffect::ResetForm,
                ],
            ),
            (SubmitPhase::Submitting { original_label }, FormEvent::Finished(Err(err))) => {
                let mut effects = Vec::with_capacity(3);
                if err.is_connectivity() {
                    effects.push(FormEffect::LogError(err.to_string()));
                }
                effects.push(FormEffect::Alert(err.user_message()));
                effects.push(FormEffect::RestoreButton { label: original_label });
                (SubmitPhase::Idle, effects)
            }
            // A second submit while one is in flight, or after success, is dropped
            (phase, _) => (phase, Vec::new()),
        }
    }
}

/// Elements of the contact section
#[derive(Clone)]
struct ContactForm {
    page: Page,
    form: HtmlFormElement,
    fields: Option<Element>,
    success: Option<Element>,
    button: Option<HtmlButtonElement>,
}

impl ContactForm {
    fn find(page: &Page) -> Option<Self> {
        let form = page.by_id_as::<HtmlFormElement>("contact-form")?;
        let button = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        Some(Self {
            page: page.clone(),
            fields: page.by_id("form-fields"),
            success: page.by_id("success-message"),
            form,
            button,
        })
    }

    fn prefill_plan(&self, plan: &str) {
        let Some(message) = self
            .form
            .query_selector("textarea[name=\"message\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
        else {
            return;
        };
        message.set_value(&plan_message(plan));

        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Center);
        self.form.scroll_into_view_with_scroll_into_view_options(&opts);
    }

    fn button_label(&self) -> String {
        self.button
            .as_ref()
            .and_then(|b| b.text_content())
            .unwrap_or_default()
    }

    fn set_button(&self, label: &str, disabled: bool, opacity: &str) {
        if let Some(button) = &self.button {
            button.set_text_content(Some(label));
            button.set_disabled(disabled);
            set_style(button, "opacity", opacity);
        }
    }

    fn dispatch(&self, ctx: PageContext, event: FormEvent) {
        let (next, effects) = store::submission(&ctx.store).step(event);
        store::set_submission(&ctx.store, next);

        for effect in effects {
            match effect {
                FormEffect::ButtonPending => self.set_button(PENDING_LABEL, true, "0.7"),
                FormEffect::RestoreButton { label } => self.set_button(&label, false, "1"),
                FormEffect::SendRequest => {
                    let this = self.clone();
                    spawn_local(async move {
                        let result =
                            commands::submit_contact_form(ctx.config.form_endpoint, &this.form).await;
                        this.dispatch(ctx, FormEvent::Finished(result));
                    });
                }
                FormEffect::HideFields => {
                    if let Some(fields) = &self.fields {
                        set_display(fields, "none");
                    }
                }
                FormEffect::HideButton => {
                    if let Some(button) = &self.button {
                        set_display(button, "none");
                    }
                }
                FormEffect::ShowSuccess => {
                    if let Some(success) = &self.success {
                        set_display(success, "block");
                    }
                }
                FormEffect::ResetForm => self.form.reset(),
                FormEffect::Alert(message) => self.page.alert(&message),
                FormEffect::LogError(detail) => log::error!("[CONTACT] {}", detail),
            }
        }
    }
}

pub fn attach(page: &Page) {
    let Some(contact) = ContactForm::find(page) else {
        return;
    };
    let ctx = use_page_context();

    if let Some(plan) = page.query_param("plan") {
        contact.prefill_plan(&plan);
    }

    let target = contact.form.clone();
    dom_hooks::bind(&target, "submit", move |ev| {
        ev.prevent_default();
        let label = contact.button_label();
        contact.dispatch(ctx, FormEvent::Submit { label });
    });
}
