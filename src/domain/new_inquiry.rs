use super::{ContactEmail, InquirerName, InquiryMessage};

/// A validated contact-form submission.
pub struct NewInquiry {
    pub name: InquirerName,
    pub email: ContactEmail,
    pub message: InquiryMessage,
}

impl NewInquiry {
    pub fn parse(name: String, email: String, message: String) -> Result<Self, String> {
        let name = InquirerName::parse(name)?;
        let email = ContactEmail::parse(email)?;
        let message = InquiryMessage::parse(message)?;
        Ok(Self {
            name,
            email,
            message,
        })
    }
}
