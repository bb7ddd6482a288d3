mod contact;
mod health_check;
mod helpers;

pub use contact::{contact_form, submit_contact};
pub use health_check::health_check;
