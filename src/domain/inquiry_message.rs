#[derive(Debug, Clone)]
pub struct InquiryMessage(String);

impl InquiryMessage {
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            Err("An inquiry message cannot be empty.".into())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for InquiryMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
