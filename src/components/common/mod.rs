//! Reusable form controls shared across the app.

mod fields;

pub use fields::{TextAreaField, TextField};
