//! Source citations and reference links of a risk.
//!
//! Links are stored in one cell as `title | url` entries joined by ` || `.
//! A title may carry a `(public)` or `(internal)` tag, which is split off.

use serde::Serialize;

const ENTRY_SEPARATOR: &str = " || ";
const FIELD_SEPARATOR: &str = " | ";

/// Audience tag found in a link title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTag {
    Public,
    Internal,
}

impl LinkTag {
    pub fn label(self) -> &'static str {
        match self {
            LinkTag::Public => "PUBLIC",
            LinkTag::Internal => "INTERNAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLink {
    pub title: String,
    pub url: String,
    pub tag: Option<LinkTag>,
}

/// Parse a links cell. Entries without a usable url are dropped.
pub fn parse_links(raw: &str) -> Vec<SourceLink> {
    raw.split(ENTRY_SEPARATOR)
        .filter(|entry| !entry.trim().is_empty())
        .filter_map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> Option<SourceLink> {
    let parts: Vec<&str> = entry.split(FIELD_SEPARATOR).collect();

    let (title, url) = match parts.as_slice() {
        [only] => ("Reference Link", only.trim()),
        [title, url, ..] => {
            let title = match title.trim() {
                "" => "Source",
                t => t,
            };
            (title, url.trim())
        }
        [] => return None,
    };

    if url.is_empty() || url == "#" {
        return None;
    }

    let (title, tag) = split_tag(title);
    Some(SourceLink {
        title,
        url: url.to_string(),
        tag,
    })
}

/// Remove the first `(public)` / `(internal)` marker, any case.
fn split_tag(title: &str) -> (String, Option<LinkTag>) {
    let lower = title.to_ascii_lowercase();
    let found = [("(public)", LinkTag::Public), ("(internal)", LinkTag::Internal)]
        .into_iter()
        .filter_map(|(marker, tag)| lower.find(marker).map(|at| (at, marker.len(), tag)))
        .min_by_key(|(at, _, _)| *at);

    match found {
        Some((at, len, tag)) => {
            let stripped = format!("{}{}", &title[..at], &title[at + len..]);
            (stripped.trim().to_string(), Some(tag))
        }
        None => (title.to_string(), None),
    }
}

/// Non-blank lines of a citations cell, trimmed.
pub fn source_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
