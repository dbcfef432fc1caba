/// Pragmatic well-formedness check. Says nothing about deliverability.
pub fn well_formed(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    local_ok(local) && domain_ok(domain)
}

/// Dot-atom local part: RFC 5322 atext runs joined by single dots.
fn local_ok(local: &str) -> bool {
    const ATEXT: &str = "!#$%&'*+/=?^_`{|}~-";
    local.len() <= 64
        && local.split('.').all(|atom| {
            !atom.is_empty()
                && atom
                    .chars()
                    .all(|c| c.is_alphanumeric() || ATEXT.contains(c))
        })
}

/// Dotted hostname with at least two labels and an alphabetic TLD.
fn domain_ok(domain: &str) -> bool {
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    domain.len() <= 255
        && domain.split('.').all(label_ok)
        && tld.chars().count() >= 2
        && tld.chars().all(char::is_alphabetic)
}

fn label_ok(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}
