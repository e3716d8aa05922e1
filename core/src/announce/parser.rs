//! Header/detail scanner for announcement blobs.

use chrono::{DateTime, Duration, Utc};
use starwatch_types::{WaveRecord, WaveStatus};

use super::region::classify_region;
use super::reltime::resolve_offset;

/// A matched "Size N • World M" header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    size: u8,
    world: u32,
}

/// Parse one flattened announcement blob into wave records.
///
/// Scans for header lines of the form "Size `<N>` • World `<M>`" (bullet,
/// pipe, or hyphen separator; case-insensitive) and pairs each with the
/// line immediately following it, expected as "`<Region>` • `<reltime>`".
/// Lines that match nothing are skipped; zero records is a valid outcome.
/// The caller injects `now` so ETA computation is deterministic under test.
pub fn parse_announcement(text: &str, now: DateTime<Utc>) -> Vec<WaveRecord> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut records = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let Some(header) = match_header(line) else {
            continue;
        };

        // Detail is the next line, unless that line is itself a header
        // (back-to-back headers each emit their own record).
        let detail = lines
            .get(idx + 1)
            .copied()
            .filter(|next| match_header(next).is_none())
            .unwrap_or("");

        let mut parts = detail.split('•').map(str::trim);
        let region_part = parts.next().unwrap_or("");
        let time_part = parts.next().unwrap_or("");

        let region = classify_region(region_part);
        let offset = resolve_offset(time_part);

        // No resolvable offset means "now", not a failure. A count too
        // large for timestamp arithmetic is treated as unresolvable too.
        let eta = offset
            .and_then(Duration::try_minutes)
            .and_then(|delta| now.checked_add_signed(delta));
        let (offset, eta) = match (offset, eta) {
            (Some(minutes), Some(eta)) => (Some(minutes), eta),
            _ => (None, now),
        };
        let status = if offset.is_some_and(|minutes| minutes <= 0) {
            WaveStatus::Current
        } else {
            WaveStatus::Upcoming
        };

        tracing::debug!(
            world = header.world,
            size = header.size,
            region = %region,
            ?offset,
            "Matched wave header"
        );

        records.push(WaveRecord {
            world: header.world,
            size: header.size,
            region,
            eta,
            status,
        });
    }

    records
}

/// Match the header pattern anywhere in the line.
fn match_header(line: &str) -> Option<Header> {
    let lower = line.to_ascii_lowercase();
    let mut at = 0;
    while let Some(found) = lower[at..].find("size") {
        let after = at + found + "size".len();
        if let Some(header) = header_after_size(&lower[after..]) {
            return Some(header);
        }
        at = after;
    }
    None
}

/// Match `\s+<1-2 digits>\s*[•|-]\s*world\s*<1-3 digits>` after "size".
fn header_after_size(rest: &str) -> Option<Header> {
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        // Whitespace after "size" is mandatory.
        return None;
    }

    let (size, rest) = take_digits(trimmed, 2)?;
    let rest = rest.trim_start();

    let mut chars = rest.chars();
    if !matches!(chars.next(), Some('•' | '|' | '-')) {
        return None;
    }

    let rest = chars.as_str().trim_start();
    let rest = rest.strip_prefix("world")?;
    let (world, _) = take_digits(rest.trim_start(), 3)?;

    if size == 0 || world == 0 {
        // Positive identifiers only; a zero header is unparseable.
        return None;
    }

    Some(Header {
        size: size as u8,
        world,
    })
}

/// Take a leading run of 1..=`max` ASCII digits.
fn take_digits(s: &str, max: usize) -> Option<(u32, &str)> {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 || len > max {
        return None;
    }
    let value = s[..len].parse().ok()?;
    Some((value, &s[len..]))
}
