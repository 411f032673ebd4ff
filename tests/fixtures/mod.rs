//! Test fixtures and sample data.
//!
//! Reusable form contents and backend stand-ins for integration tests.

#![allow(dead_code)]

use portfolio_contact::models::{ContactField, FormField};
use portfolio_contact::ContactForm;
use std::io::{self, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

pub const NAME: &str = "Ada Lovelace";
pub const EMAIL: &str = "ada@example.com";
pub const SUBJECT: &str = "Analytical engine";
pub const PHONE: &str = "+44 20 7946 0958";
pub const MESSAGE: &str = "I would love to collaborate on a project.";

/// A form carrying a subject field, filled with valid values.
pub fn valid_subject_form() -> ContactForm {
    let mut form = ContactForm::new(ContactField::Subject);
    form.set_field(FormField::Name, NAME);
    form.set_field(FormField::Email, EMAIL);
    form.set_field(FormField::Detail, SUBJECT);
    form.set_field(FormField::Message, MESSAGE);
    form
}

/// A form carrying a phone field, filled with valid values.
pub fn valid_phone_form() -> ContactForm {
    let mut form = ContactForm::new(ContactField::Phone);
    form.set_field(FormField::Name, NAME);
    form.set_field(FormField::Email, EMAIL);
    form.set_field(FormField::Detail, PHONE);
    form.set_field(FormField::Message, MESSAGE);
    form
}

/// A listener that accepts connections but never answers.
///
/// Keep the returned listener alive for the duration of the test.
pub fn silent_backend() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind silent backend");
    let url = format!("http://{}", listener.local_addr().unwrap());
    (listener, url)
}

/// A base URL nothing is listening on.
pub fn closed_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind closed backend");
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    url
}

/// In-memory log sink for `tracing_subscriber::fmt().with_writer(..)`.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// A plain-text subscriber writing every level down to DEBUG into this capture.
    pub fn subscriber(&self) -> tracing::Dispatch {
        tracing::Dispatch::new(
            tracing_subscriber::fmt()
                .with_writer(self.clone())
                .with_ansi(false)
                .with_max_level(tracing::Level::DEBUG)
                .finish(),
        )
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
