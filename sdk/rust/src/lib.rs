pub mod client;

pub use client::{Contact, ContactsClient, Created};
