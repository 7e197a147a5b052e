use crate::ports::random::SlugSuffixGenerator;
use domain_shared::invitation::Slug;
use std::future::Future;
use tracing::{debug, instrument, warn};

pub const FALLBACK_SLUG_BASE: &str = "invitation";
pub const MAX_SLUG_ATTEMPTS: usize = 5;
pub const SLUG_SUFFIX_LEN: usize = 4;

/// Turns a free-form title into a URL-safe slug body.
///
/// The result only contains `[a-z0-9-]`, never starts or ends with a hyphen
/// and never contains two hyphens in a row. It may be empty.
#[instrument(level = "trace")]
pub fn normalize_title(title: &str) -> String {
    let lowercase = title.to_lowercase();
    let mut slug = String::with_capacity(lowercase.len());

    for c in lowercase.trim_matches(is_space).chars() {
        let c = if is_space(c) {
            '-'
        } else {
            transliterate(c)
        };

        match c {
            'a'..='z' | '0'..='9' => slug.push(c),
            '-' if !slug.is_empty() && !slug.ends_with('-') => slug.push('-'),
            _ => {}
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Unicode whitespace plus U+FEFF.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn transliterate(c: char) -> char {
    match c {
        'ă' | 'â' => 'a',
        'î' => 'i',
        'ș' => 's',
        'ț' => 't',
        other => other,
    }
}

#[instrument(level = "trace")]
pub fn slug_base(title: &str) -> String {
    let normalized = normalize_title(title);
    if normalized.is_empty() {
        FALLBACK_SLUG_BASE.to_string()
    } else {
        normalized
    }
}

/// Picks a slug for `title` that `exists` does not report as taken.
///
/// The plain base is probed first, then up to four `base-xxxx` candidates.
/// When every probe collides the last probed candidate is returned anyway;
/// uniqueness is only best-effort here and has to be backed by the store.
#[instrument(level = "debug", skip(exists, suffix_generator))]
pub async fn allocate_slug<F, Fut, E, G>(
    title: &str,
    mut exists: F,
    suffix_generator: &G,
) -> Result<Slug, E>
where
    F: FnMut(Slug) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    G: SlugSuffixGenerator + ?Sized,
{
    let base = slug_base(title);
    let mut candidate = Slug(base.clone());

    for attempt in 1..=MAX_SLUG_ATTEMPTS {
        if !exists(candidate.clone()).await? {
            debug!(slug = %candidate, attempt, "Slug allocated");
            return Ok(candidate);
        }

        if attempt == MAX_SLUG_ATTEMPTS {
            break;
        }

        candidate = Slug(format!(
            "{}-{}",
            base,
            suffix_generator.random_suffix(SLUG_SUFFIX_LEN)
        ));
        debug!(slug = %candidate, attempt, "Slug collision, retrying with a random suffix");
    }

    warn!(
        slug = %candidate,
        "Every slug candidate collided, using the last one",
    );

    Ok(candidate)
}
