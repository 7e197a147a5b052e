use application_ports::rsvp::RsvpDto;
use std::borrow::Cow;

pub const CONTENT_TYPE: &str = "text/csv; charset=utf-8";

const HEADER: [&str; 3] = ["name", "attending", "created_at"];

fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains(['"', ',', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// One line per RSVP in the given order, without a trailing newline.
pub fn render_rsvps(rsvps: &[RsvpDto]) -> String {
    let mut lines = Vec::with_capacity(rsvps.len() + 1);
    lines.push(HEADER.join(","));

    for rsvp in rsvps {
        let created_at = rsvp.created_at.to_rfc3339();
        lines.push(
            [
                escape_field(&rsvp.name),
                Cow::Borrowed(if rsvp.attending { "yes" } else { "no" }),
                escape_field(&created_at),
            ]
            .join(","),
        );
    }

    lines.join("\n")
}

pub fn attachment_filename(slug: &str) -> String {
    let slug: String = slug
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
            _ => '_',
        })
        .collect();
    format!("rsvps-{}.csv", slug)
}
