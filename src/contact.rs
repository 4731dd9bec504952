use crate::surface::PageSurface;

/// Subject used when the visitor leaves the subject field empty.
pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control `name` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// Read/clear access to the contact form controls.
pub trait ContactFields {
    /// Current value of a control, `None` when it is not mounted.
    fn value(&self, field: Field) -> Option<String>;
    fn clear(&self);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn read(fields: &impl ContactFields) -> Self {
        let get = |f| fields.value(f).unwrap_or_default();
        Self {
            name: get(Field::Name),
            email: get(Field::Email),
            subject: get(Field::Subject),
            message: get(Field::Message),
        }
    }

    pub fn subject(&self) -> &str {
        if self.subject.is_empty() {
            DEFAULT_SUBJECT
        } else {
            &self.subject
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }

    /// `mailto:` link pre-filled with subject and body.
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(self.subject()),
            urlencoding::encode(&self.body())
        )
    }
}

/// Hands the form contents to the visitor's mail client and clears the form.
///
/// Returns the link the browser was pointed at.
pub fn submit(
    fields: &impl ContactFields,
    surface: &impl PageSurface,
    recipient: &str,
) -> String {
    let link = ContactMessage::read(fields).mailto(recipient);
    if let Err(e) = surface.open_url(&link) {
        log::warn!("couldn't open mail client: {e}");
    }
    fields.clear();
    link
}
