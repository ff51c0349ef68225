use tracing::trace;

use crate::core::types::DomainLabels;

/// Canonical form used by every comparison: trimmed, lowercased and
/// IDNA-encoded. Inputs that cannot be encoded keep their lowercase text.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_ascii() {
        return lowered;
    }
    match idna::domain_to_ascii(&lowered) {
        Ok(ascii) if !ascii.is_empty() => ascii,
        Ok(_) => lowered,
        Err(err) => {
            trace!("idna encoding failed for {:?}: {:?}", lowered, err);
            lowered
        }
    }
}

/// Reduce a pasted URL to its host part. Plain domains pass through.
pub fn extract_host(raw: &str) -> String {
    let mut rest = raw.trim();
    if let Some(idx) = rest.find("://") {
        rest = &rest[idx + 3..];
    }
    if let Some(idx) = rest.find(['/', '?', '#']) {
        rest = &rest[..idx];
    }
    if let Some(idx) = rest.rfind('@') {
        rest = &rest[idx + 1..];
    }
    if let Some(stripped) = rest.strip_prefix('[') {
        if let Some(end) = stripped.find(']') {
            return stripped[..end].to_string();
        }
    }
    if let Some((host, port)) = rest.rsplit_once(':') {
        if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) {
            rest = host;
        }
    }
    rest.to_string()
}

pub fn split_labels(domain: &str) -> DomainLabels {
    let labels: Vec<String> = domain
        .split('.')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    let n = labels.len();
    let top_level = labels.last().cloned().unwrap_or_default();
    let second_level = if n >= 2 {
        labels[n - 2].clone()
    } else {
        top_level.clone()
    };
    let subdomain = if n > 2 {
        labels[..n - 2].join(".")
    } else {
        String::new()
    };

    DomainLabels {
        labels,
        subdomain,
        second_level,
        top_level,
    }
}
