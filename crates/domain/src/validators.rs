use std::net::IpAddr;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Checks that `name` is a fully qualified domain name.
///
/// One trailing dot is accepted. At least two labels are required.
pub fn validate_fqdn(name: &str) -> Result<(), String> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Err("hostname cannot be empty".to_string());
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(format!("hostname cannot exceed {MAX_NAME_LEN} characters"));
    }

    let labels: Vec<&str> = trimmed.split('.').collect();
    if labels.len() < 2 {
        return Err(format!("{name} is not fully qualified"));
    }

    for label in &labels {
        validate_label(label).map_err(|e| format!("{name}: {e}"))?;
    }

    // an alphabetic TLD keeps IP literals out
    let tld = labels.last().copied().unwrap_or_default();
    if !tld.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(format!("{name}: top-level domain {tld} must start with a letter"));
    }
    Ok(())
}

fn validate_label(label: &str) -> Result<(), String> {
    if label.is_empty() {
        return Err("empty label".to_string());
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(format!("label {label} exceeds {MAX_LABEL_LEN} characters"));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(format!("label {label} starts or ends with a hyphen"));
    }
    if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(format!("label {label} contains invalid characters"));
    }
    Ok(())
}

pub fn validate_ip_addr(value: &str) -> Result<IpAddr, String> {
    value
        .parse::<IpAddr>()
        .map_err(|_| format!("{value} is not an IP address"))
}
