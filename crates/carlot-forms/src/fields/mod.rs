//! Field definition helpers.

mod checkbox;
mod select;
mod text;

pub use checkbox::consent_field;
pub use select::{choice_field, radio_field};
pub use text::{
    email_field, file_field, number_field, phone_field, text_field, textarea_field, year_field,
};
