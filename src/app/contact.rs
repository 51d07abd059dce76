//! Contact form overlay state.
//!
//! The form owns three text fields, a submitting flag, and the receiving end
//! of the submission channel. Submission is fire-and-forget: the background
//! POST reports back through the channel, polled from the app tick. The
//! submitting flag is cleared only when a result for the submission that set
//! it arrives, so an idle form is never "restored" spuriously.

use crate::services::form_post::{self, FormFields, SubmitOutcome};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

/// Which field has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }
}

#[derive(Debug)]
pub struct ContactForm {
    pub active: bool,
    pub field: FormField,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitting: bool,
    rx: Option<Receiver<SubmitOutcome>>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            active: false,
            field: FormField::Name,
            name: String::new(),
            email: String::new(),
            message: String::new(),
            submitting: false,
            rx: None,
        }
    }
}

impl ContactForm {
    pub fn open(&mut self) {
        self.active = true;
        self.field = FormField::Name;
    }

    /// Close the overlay. Field contents survive; an in-flight submission
    /// keeps running and its result is still collected.
    pub fn close(&mut self) {
        self.active = false;
    }

    pub fn focus_next(&mut self) {
        self.field = self.field.next();
    }

    pub fn focus_prev(&mut self) {
        self.field = self.field.prev();
    }

    pub fn insert_char(&mut self, c: char) {
        self.current_field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.current_field_mut().pop();
    }

    fn current_field_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    fn fields(&self, honeypot: bool) -> FormFields {
        FormFields {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            honeypot,
        }
    }

    /// Whether submit would do anything right now.
    pub fn can_submit(&self) -> bool {
        !self.submitting
            && !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Mark the form submitting and install the result channel; the caller
    /// hands the sender to whatever performs the request.
    pub fn begin_submit(&mut self) -> Sender<SubmitOutcome> {
        let (tx, rx) = channel();
        self.submitting = true;
        self.rx = Some(rx);
        tx
    }

    /// Kick off the background POST. No-op when a submission is already in
    /// flight or required fields are empty.
    pub fn submit(&mut self, formspree_id: &str, honeypot: bool) {
        if !self.can_submit() {
            return;
        }
        if formspree_id.is_empty() {
            tracing::warn!("Contact form submitted without a formspree id configured");
            let tx = self.begin_submit();
            let _ = tx.send(SubmitOutcome::Failure("Form is not configured".to_string()));
            return;
        }

        let fields = self.fields(honeypot);
        let tx = self.begin_submit();
        form_post::submit(formspree_id, fields, tx);
    }

    /// Collect a finished submission, if any. Clears the submitting flag and,
    /// on success, resets the fields and closes the overlay.
    pub fn poll(&mut self) -> Option<SubmitOutcome> {
        let outcome = match &self.rx {
            Some(rx) => match rx.try_recv() {
                Ok(outcome) => outcome,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    SubmitOutcome::Failure("Submission thread lost".to_string())
                }
            },
            None => return None,
        };

        self.rx = None;
        self.submitting = false;
        if outcome == SubmitOutcome::Success {
            self.name.clear();
            self.email.clear();
            self.message.clear();
            self.field = FormField::Name;
            self.active = false;
        }
        Some(outcome)
    }
}
