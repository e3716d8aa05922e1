//! Relative-time resolution for announcement detail lines.
//!
//! Detail lines carry phrases like "33 minutes ago (06:51)" or
//! "15 minutes in". The resolver turns those into a signed offset in
//! minutes from "now": negative for the past, positive for the future.

/// Direction qualifier attached to a minute count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Qualifier {
    Ago,
    In,
}

/// Resolve a `<N> minute(s) <ago|in>` phrase to a signed minute offset.
///
/// Returns `None` when no minute count is present, or when a count is
/// present but neither qualifier can be found. Ambiguous input is
/// discarded rather than guessed; callers apply their own default.
pub fn resolve_offset(fragment: &str) -> Option<i64> {
    let lower = fragment.to_ascii_lowercase();
    let bytes = lower.as_bytes();

    let mut at = 0;
    while at < bytes.len() {
        if !bytes[at].is_ascii_digit() {
            at += 1;
            continue;
        }

        let start = at;
        while at < bytes.len() && bytes[at].is_ascii_digit() {
            at += 1;
        }

        // Count must be followed by "minute"/"minutes" to qualify.
        let rest = lower[at..].trim_start();
        let Some(rest) = rest.strip_prefix("minute") else {
            continue;
        };
        let rest = rest.strip_prefix('s').unwrap_or(rest);

        let value: i64 = lower[start..at].parse().ok()?;
        let qualifier =
            leading_qualifier(rest.trim_start()).or_else(|| fragment_qualifier(&lower));

        return match qualifier {
            Some(Qualifier::Ago) => Some(-value),
            Some(Qualifier::In) => Some(value),
            None => None,
        };
    }

    None
}

/// Qualifier taken from the word immediately following the minute count.
fn leading_qualifier(rest: &str) -> Option<Qualifier> {
    let word: &str = rest
        .split(|c: char| !c.is_ascii_alphabetic())
        .next()
        .unwrap_or("");
    match word {
        "ago" => Some(Qualifier::Ago),
        "in" => Some(Qualifier::In),
        _ => None,
    }
}

/// Fallback: scan the whole fragment for a standalone "ago"/"in" word.
/// "ago" wins over "in" when both appear.
fn fragment_qualifier(lower: &str) -> Option<Qualifier> {
    let mut saw_in = false;
    for word in lower.split(|c: char| !c.is_ascii_alphanumeric()) {
        match word {
            "ago" => return Some(Qualifier::Ago),
            "in" => saw_in = true,
            _ => {}
        }
    }
    saw_in.then_some(Qualifier::In)
}
