/// The outbound email composed for one form submission. Never persisted;
/// recipient fields are empty strings when no registrant row was found.
#[derive(Debug)]
pub struct ContactMessage {
    pub sender_name: String,
    pub sender_email: String,
    pub recipient_name: String,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
}
