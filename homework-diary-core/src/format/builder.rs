use crate::domain::{is_maths_subject, ActivityInput, ActivityKind};

use super::pack::{LanguagePack, ACTIVITY, LOCATION};

/// Render one sentence with the given language pack
pub fn build(input: &ActivityInput, pack: &LanguagePack) -> String {
    let label = pack.lesson_label(is_maths_subject(&input.subject_name));
    let location = location_phrase(input, pack, label);
    let location = location.as_deref();
    let activity = input.activity_type.trim();
    let description = input.description();

    let sentence = match ActivityKind::parse(activity) {
        Some(kind) => templated(pack, kind, location, description),
        None => match generic(pack, activity, location, description) {
            Some(sentence) => sentence,
            None => return pack.placeholder.to_string(),
        },
    };

    collapse_periods(&sentence)
}

/// Source, then "<label> <chapter>", then "<page-word> <page>"
pub fn location_phrase(input: &ActivityInput, pack: &LanguagePack, label: &str) -> Option<String> {
    let mut parts = Vec::with_capacity(3);

    if let Some(source) = input.source() {
        parts.push(source.to_string());
    }
    if let Some(chapter) = input.chapter() {
        parts.push(format!("{} {}", label, chapter));
    }
    if let Some(page) = input.page() {
        parts.push(format!("{} {}", pack.page_word, page));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(pack.separator))
    }
}

fn templated(
    pack: &LanguagePack,
    kind: ActivityKind,
    location: Option<&str>,
    description: Option<&str>,
) -> String {
    let template = pack.template(kind);

    let mut sentence = String::new();
    if template.marked {
        sentence.push_str(pack.test_marker);
        sentence.push(' ');
    }
    match location {
        Some(location) => sentence.push_str(&fill(template.located, "", location)),
        None => sentence.push_str(template.bare),
    }
    if let Some(description) = description {
        sentence.push_str(pack.lead_in(template.lead_in));
        sentence.push_str(description);
    }
    sentence.push_str(pack.terminator);
    sentence
}

/// Shape for activity types outside the vocabulary. `None` means there is
/// nothing to say at all.
fn generic(
    pack: &LanguagePack,
    activity: &str,
    location: Option<&str>,
    description: Option<&str>,
) -> Option<String> {
    let head = match (activity.is_empty(), location) {
        (false, Some(location)) => Some(fill(pack.generic_located, activity, location)),
        (false, None) => Some(activity.to_string()),
        (true, Some(location)) => Some(fill(pack.location_only, "", location)),
        (true, None) => None,
    };

    let mut sentence = match (head, description) {
        (Some(head), Some(description)) => {
            format!("{}{}{}", head, pack.plain_lead_in, description)
        }
        (Some(head), None) => head,
        (None, Some(description)) => description.to_string(),
        (None, None) => return None,
    };
    sentence.push_str(pack.terminator);
    Some(sentence)
}

/// Substitute placeholders in a single pass, so field text containing
/// `{loc}` or `{activity}` is never expanded again.
fn fill(template: &str, activity: &str, location: &str) -> String {
    let mut out = String::with_capacity(template.len() + activity.len() + location.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix(LOCATION) {
            out.push_str(location);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(ACTIVITY) {
            out.push_str(activity);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

/// Collapse every run of periods into one
pub fn collapse_periods(sentence: &str) -> String {
    let mut out = String::with_capacity(sentence.len());
    let mut previous_was_period = false;

    for c in sentence.chars() {
        if c == '.' {
            if previous_was_period {
                continue;
            }
            previous_was_period = true;
        } else {
            previous_was_period = false;
        }
        out.push(c);
    }

    out
}
