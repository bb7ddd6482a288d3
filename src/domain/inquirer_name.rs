use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct InquirerName(String);

impl InquirerName {
    pub fn parse(s: String) -> Result<Self, String> {
        let is_empty_or_whitespace = s.trim().is_empty();
        let is_too_long = s.graphemes(true).count() > 256;

        if is_empty_or_whitespace || is_too_long {
            Err(format!("{} is not a valid inquirer name.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for InquirerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
