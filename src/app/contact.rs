use leptos::{html, prelude::*};

use super::section::SectionHead;
use crate::contact::{submit, ContactFields, Field};
use crate::content::PROFILE;
use crate::surface::BrowserSurface;

#[derive(Clone, Copy)]
struct FormRefs {
    name: NodeRef<html::Input>,
    email: NodeRef<html::Input>,
    subject: NodeRef<html::Input>,
    message: NodeRef<html::Textarea>,
}

impl FormRefs {
    fn new() -> Self {
        Self {
            name: NodeRef::new(),
            email: NodeRef::new(),
            subject: NodeRef::new(),
            message: NodeRef::new(),
        }
    }
}

impl ContactFields for FormRefs {
    fn value(&self, field: Field) -> Option<String> {
        match field {
            Field::Name => self.name.get_untracked().map(|el| el.value()),
            Field::Email => self.email.get_untracked().map(|el| el.value()),
            Field::Subject => self.subject.get_untracked().map(|el| el.value()),
            Field::Message => self.message.get_untracked().map(|el| el.value()),
        }
    }

    fn clear(&self) {
        for input in [self.name, self.email, self.subject] {
            if let Some(el) = input.get_untracked() {
                el.set_value("");
            }
        }
        if let Some(el) = self.message.get_untracked() {
            el.set_value("");
        }
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let refs = FormRefs::new();

    view! {
        <section class="contact" id="contact">
            <SectionHead title="Contact" subtitle="Send a message directly to my inbox." />
            <form
                class="contact-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit(&refs, &BrowserSurface, PROFILE.email);
                    log::debug!("contact form handed to mail client");
                }
            >
                <div class="contact-grid">
                    <label>
                        <span>"Name"</span>
                        <input
                            node_ref=refs.name
                            name=Field::Name.name()
                            type="text"
                            placeholder="Your name"
                            required
                        />
                    </label>
                    <label>
                        <span>"Email"</span>
                        <input
                            node_ref=refs.email
                            name=Field::Email.name()
                            type="email"
                            placeholder="you@email.com"
                            required
                        />
                    </label>
                    <label class="full">
                        <span>"Subject"</span>
                        <input
                            node_ref=refs.subject
                            name=Field::Subject.name()
                            type="text"
                            placeholder="Project inquiry"
                        />
                    </label>
                    <label class="full">
                        <span>"Message"</span>
                        <textarea
                            node_ref=refs.message
                            name=Field::Message.name()
                            placeholder="Tell me about your project..."
                            rows="5"
                            required
                        ></textarea>
                    </label>
                </div>
                <button class="btn primary" type="submit">
                    "Send Message"
                </button>
            </form>
        </section>
    }
}
