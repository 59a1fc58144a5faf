//! Text helpers for post content: slugs, read time, tag lists and body rendering.

pub const WORDS_PER_MINUTE: usize = 200;

/// Derive a URL-safe slug from a title.
///
/// Lower-cases, drops everything except ASCII letters, digits, spaces and
/// hyphens, turns spaces into hyphens, collapses hyphen runs and trims them
/// from both ends.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for c in title.to_lowercase().chars() {
        let c = match c {
            'a'..='z' | '0'..='9' => c,
            ' ' | '-' => '-',
            _ => continue,
        };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }

    slug.trim_matches('-').to_string()
}

/// Estimate reading time at a fixed 200 words per minute, rounded up.
///
/// An empty body still counts as one minute.
pub fn estimate_read_time(content: &str) -> String {
    let words = content.split_whitespace().count().max(1);
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    format!("{minutes} min read")
}

/// Trim entries, drop blanks and suppress duplicates while keeping first-seen order.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

/// Render a post body for display. Newlines become `<br>`; nothing else is touched.
pub fn render_body(content: &str) -> String {
    content.replace('\n', "<br>")
}
