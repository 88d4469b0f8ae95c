//! Social contact extraction.

use crate::domain::entities::{Contact, HydrationDocument};

/// Maps each `socialLinks` entry to a [`Contact`], in document order.
pub fn extract_contacts(doc: &HydrationDocument) -> Vec<Contact> {
    doc.social_links
        .iter()
        .map(|social| Contact::new(social.url.clone(), social.kind.clone()))
        .collect()
}
