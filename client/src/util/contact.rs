//! Deep links for the contact actions (phone, e-mail, Instagram).

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// `tel:` link keeping only a leading `+` and the digits.
#[must_use]
pub fn tel_href(phone: &str) -> String {
    let trimmed = phone.trim();
    let mut out = String::from("tel:");
    if trimmed.starts_with('+') {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(char::is_ascii_digit));
    out
}

#[must_use]
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// Profile URL for an Instagram handle, with or without the leading `@`.
#[must_use]
pub fn instagram_url(handle: &str) -> String {
    format!("https://instagram.com/{}", handle.trim().trim_start_matches('@'))
}
