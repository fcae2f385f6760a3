/// Suffix WhatsApp uses for individual (non-group) chat addresses
pub const CONTACT_SUFFIX: &str = "@c.us";

/// Strip everything but ASCII digits from a phone number
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Build the recipient address for a free-form phone number
pub fn chat_address(phone: &str) -> String {
    format!("{}{}", normalize_phone(phone), CONTACT_SUFFIX)
}
