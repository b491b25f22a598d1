use super::field_kind::FieldKind;

/// Placeholder for values that do not fit their field's expected shape
pub const GENERIC_MASK: &str = "[REDACTED_PII]";

/// Mask a raw value for the field named `field_name`.
///
/// Each recognized field keeps a small, fixed part of the value so the output
/// stays legible (`98XXXXXX10`, `asXXX@example.com`). Values that do not fit
/// the field's format, and unrecognized fields, become [`GENERIC_MASK`].
/// Empty values are returned unchanged.
pub fn mask_value(field_name: &str, value: &str) -> String {
    if value.is_empty() {
        return value.to_string();
    }

    let value = value.trim();
    let masked = match FieldKind::from_name(field_name) {
        FieldKind::Phone => mask_phone(value),
        FieldKind::Aadhar => mask_aadhar(value),
        FieldKind::Email => mask_email(value),
        FieldKind::Name => mask_name(value),
        FieldKind::Address => mask_address(value),
        FieldKind::UpiId => mask_upi(value),
        FieldKind::Passport => mask_passport(value),
        FieldKind::DeviceId | FieldKind::IpAddress | FieldKind::Other => None,
    };

    masked.unwrap_or_else(|| GENERIC_MASK.to_string())
}

/// Mask phone: 9876543210 -> 98XXXXXX10
fn mask_phone(phone: &str) -> Option<String> {
    if !is_digits(phone, 10) {
        return None;
    }
    Some(format!("{}XXXXXX{}", head(phone, 2), tail(phone, 2)))
}

/// Mask aadhar: 123456789012 -> 1234XXXX9012
fn mask_aadhar(aadhar: &str) -> Option<String> {
    if !is_digits(aadhar, 12) {
        return None;
    }
    Some(format!("{}XXXX{}", head(aadhar, 4), tail(aadhar, 4)))
}

/// Mask email: asha.rao@example.com -> asXXX@example.com
fn mask_email(email: &str) -> Option<String> {
    let (local, domain) = split_handle(email)?;
    Some(format!("{}@{}", keep_prefix(local, 2), domain))
}

/// Mask name: Asha Kumari Rao -> AXXX RXXXX
///
/// Middle names are dropped.
fn mask_name(name: &str) -> Option<String> {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }

    let first = head(parts[0], 1);
    let last = head(parts[parts.len() - 1], 1);
    Some(format!("{first}XXX {last}XXXX"))
}

/// Mask address: keep the first 10 characters
fn mask_address(address: &str) -> Option<String> {
    if address.chars().count() <= 15 {
        return None;
    }
    Some(format!("{}... [REDACTED]", head(address, 10)))
}

/// Mask UPI handle: asha.rao@okaxis -> ashXXX@okaxis
fn mask_upi(upi: &str) -> Option<String> {
    let (user, bank) = split_handle(upi)?;
    Some(format!("{}@{}", keep_prefix(user, 3), bank))
}

/// Mask passport: P1234567 -> PXXX4567
fn mask_passport(passport: &str) -> Option<String> {
    let mut chars = passport.chars();
    let letter = chars.next()?;
    let digits = chars.as_str();

    if !letter.is_alphabetic() || !is_digits(digits, 7) {
        return None;
    }
    Some(format!("{letter}XXX{}", tail(digits, 4)))
}

/// Split `user@domain`; anything other than exactly one `@` fails.
fn split_handle(value: &str) -> Option<(&str, &str)> {
    let (user, domain) = value.split_once('@')?;
    if domain.contains('@') {
        return None;
    }
    Some((user, domain))
}

/// First `keep` characters followed by XXX, or just XXX when the value is
/// too short to reveal anything.
fn keep_prefix(value: &str, keep: usize) -> String {
    if value.chars().count() > keep {
        format!("{}XXX", head(value, keep))
    } else {
        "XXX".to_string()
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

fn head(value: &str, count: usize) -> &str {
    match value.char_indices().nth(count) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

fn tail(value: &str, count: usize) -> &str {
    let total = value.chars().count();
    match value.char_indices().nth(total.saturating_sub(count)) {
        Some((idx, _)) => &value[idx..],
        None => value,
    }
}
