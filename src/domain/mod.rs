mod contact_email;
mod contact_message;
mod domain_labels;
mod inquirer_name;
mod inquiry_message;
mod new_inquiry;

pub use contact_email::ContactEmail;
pub use contact_message::ContactMessage;
pub use domain_labels::{DomainLabels, DomainParseError};
pub use inquirer_name::InquirerName;
pub use inquiry_message::InquiryMessage;
pub use new_inquiry::NewInquiry;
