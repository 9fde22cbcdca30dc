use crate::constants::{CONTACT_STATUS_ID, EMAILJS_SEND_URL};
use crate::core::config::{ConfigError, EmailConfig, Recipient};
use crate::core::contact::{self, ContactError, ContactForm, EmailPayload, EmailTransport, Field};
use crate::dom::Listener;
use crate::net;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// EmailJS REST transport. A missing configuration only surfaces when a
/// message is actually sent.
pub struct EmailJs {
    config: Result<EmailConfig, ConfigError>,
}

impl EmailJs {
    pub fn new(config: Result<EmailConfig, ConfigError>) -> Self {
        if let Err(e) = &config {
            log::warn!("[contact] email disabled: {}", e);
        }
        Self { config }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

impl EmailTransport for EmailJs {
    async fn send(&self, payload: &EmailPayload) -> anyhow::Result<()> {
        let config = self.config.as_ref().map_err(|e| e.clone())?;
        let body = serde_json::to_string(&SendRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: payload,
        })?;
        net::post_json(EMAILJS_SEND_URL, &body).await
    }
}

/// The contact form bound to its DOM element.
pub struct ContactMount {
    state: Rc<RefCell<ContactForm>>,
    _input: Listener<web::Event>,
    _submit: Listener<web::Event>,
}

impl ContactMount {
    pub fn mount(
        document: &web::Document,
        element: web::HtmlFormElement,
        transport: EmailJs,
        recipient: Recipient,
    ) -> anyhow::Result<Self> {
        let state = Rc::new(RefCell::new(ContactForm::new()));
        let transport = Rc::new(transport);
        let recipient = Rc::new(recipient);
        let view = FormView {
            document: document.clone(),
            form: element.clone(),
        };
        // Pick up anything the browser restored into the controls.
        {
            let mut form = state.borrow_mut();
            for field in Field::ALL {
                if let Some(value) = view.control_value(field) {
                    form.set_field(field, value);
                }
            }
        }
        view.sync(&state.borrow());

        let weak_input = Rc::downgrade(&state);
        let input = Listener::new(&element, "input", move |ev: web::Event| {
            let Some(state) = weak_input.upgrade() else {
                return;
            };
            let Some((field, value)) = ev.target().and_then(|t| field_of(&t)) else {
                return;
            };
            state.borrow_mut().set_field(field, value);
        })?;

        let weak_submit = Rc::downgrade(&state);
        let submit = Listener::new(&element, "submit", move |ev: web::Event| {
            ev.prevent_default();
            let form = weak_submit.clone();
            let transport = transport.clone();
            let recipient = recipient.clone();
            let view = view.clone();
            spawn_local(async move {
                send(form, &transport, &recipient, &view).await;
            });
        })?;

        log::info!("[contact] form mounted");
        Ok(Self {
            state,
            _input: input,
            _submit: submit,
        })
    }

    pub fn is_sending(&self) -> bool {
        self.state.borrow().is_sending()
    }
}

impl Drop for ContactMount {
    fn drop(&mut self) {
        log::debug!("[contact] form released");
    }
}

/// Wraps the real transport so the DOM shows "Sending..." once the form has
/// flipped state and before the request leaves.
struct Reflecting<'a> {
    inner: &'a EmailJs,
    form: &'a Weak<RefCell<ContactForm>>,
    view: &'a FormView,
}

impl EmailTransport for Reflecting<'_> {
    async fn send(&self, payload: &EmailPayload) -> anyhow::Result<()> {
        if let Some(state) = self.form.upgrade() {
            self.view.sync(&state.borrow());
        }
        self.inner.send(payload).await
    }
}

async fn send(
    form: Weak<RefCell<ContactForm>>,
    transport: &EmailJs,
    recipient: &Recipient,
    view: &FormView,
) {
    let reflecting = Reflecting {
        inner: transport,
        form: &form,
        view,
    };
    match contact::submit(&form, &reflecting, recipient).await {
        Ok(()) => {
            if let Some(state) = form.upgrade() {
                view.sync(&state.borrow());
            }
        }
        Err(ContactError::Detached) => {
            log::debug!("[contact] form unmounted before the reply");
        }
        Err(ContactError::AlreadySending) => {
            log::debug!("[contact] submit ignored while sending");
        }
        Err(e) => log::warn!("[contact] {}", e),
    }
}

/// Handle on the form's DOM nodes.
#[derive(Clone)]
struct FormView {
    document: web::Document,
    form: web::HtmlFormElement,
}

impl FormView {
    fn control(&self, field: Field) -> Option<web::Element> {
        self.form
            .query_selector(&format!("[name=\"{}\"]", field.name()))
            .ok()
            .flatten()
    }

    fn control_value(&self, field: Field) -> Option<String> {
        self.control(field).and_then(|el| control_value(&el))
    }

    /// Push form state into the DOM: control values, the submit button and
    /// the status line.
    fn sync(&self, form: &ContactForm) {
        for field in Field::ALL {
            let Some(el) = self.control(field) else {
                continue;
            };
            let want = form.field(field);
            if control_value(&el).as_deref() != Some(want) {
                set_control_value(&el, want);
            }
        }

        if let Ok(Some(button)) = self.form.query_selector("button[type=\"submit\"], button") {
            if let Some(button) = button.dyn_ref::<web::HtmlButtonElement>() {
                button.set_disabled(form.is_sending());
                button.set_text_content(Some(form.submit_label()));
            }
        }

        if let Some(status) = self.document.get_element_by_id(CONTACT_STATUS_ID) {
            status.set_text_content(form.status_message());
            let classes = status.class_list();
            _ = classes.remove_2("success", "error");
            match (form.status_message(), form.is_error()) {
                (Some(_), true) => _ = classes.add_1("error"),
                (Some(_), false) => _ = classes.add_1("success"),
                (None, _) => {}
            }
        }
    }
}

fn field_of(target: &web::EventTarget) -> Option<(Field, String)> {
    let el = target.dyn_ref::<web::Element>()?;
    let field = Field::from_name(&el.get_attribute("name")?)?;
    Some((field, control_value(el)?))
}

fn control_value(el: &web::Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlTextAreaElement>().map(|t| t.value())
}

fn set_control_value(el: &web::Element, value: &str) {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_value(value);
    }
}
