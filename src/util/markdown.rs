//! Gallery and example document parsing.
//!
//! Gallery documents list cards in fenced ```` ```codecard ```` blocks, each
//! holding a JSON array and titled by the closest preceding level-2 heading.
//! Example documents carry their program in the first ```` ```blocks ```` or
//! ```` ```typescript ```` fence, with an optional ```` ```package ```` fence
//! listing `name=version` dependencies.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::net::types::{CodeCard, Gallery, MAIN_FILE, ProjectOptions};

/// A fenced code block with its info string.
struct Fence {
    lang: String,
    body: String,
    /// Ordinal and text of the last level-2 heading before the fence.
    heading: Option<(usize, String)>,
}

fn fences(md: &str) -> Vec<Fence> {
    let mut out = Vec::new();
    let mut heading: Option<(usize, String)> = None;
    let mut heading_count = 0usize;
    let mut heading_text: Option<String> = None;
    let mut current: Option<Fence> = None;

    for event in Parser::new(md) {
        match event {
            Event::Start(Tag::Heading { level: HeadingLevel::H2, .. }) => {
                heading_text = Some(String::new());
            }
            Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                if let Some(text) = heading_text.take() {
                    heading_count += 1;
                    heading = Some((heading_count, text.trim().to_owned()));
                }
            }
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                let lang = info.split_whitespace().next().unwrap_or_default().to_ascii_lowercase();
                current = Some(Fence { lang, body: String::new(), heading: heading.clone() });
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(fence) = current.take() {
                    out.push(fence);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(fence) = current.as_mut() {
                    fence.body.push_str(&text);
                } else if let Some(title) = heading_text.as_mut() {
                    title.push_str(&text);
                }
            }
            _ => {}
        }
    }
    out
}

/// Parse a gallery document into named card groups.
///
/// A `codecard` fence without a heading, with invalid JSON, or with an empty
/// array is skipped. Each heading titles only the first fence after it.
pub fn parse_gallery(md: &str) -> Vec<Gallery> {
    let mut galleries = Vec::new();
    let mut last_heading = 0usize;

    for fence in fences(md) {
        if fence.lang != "codecard" {
            continue;
        }
        let Some((ordinal, name)) = fence.heading.filter(|(_, h)| !h.is_empty()) else {
            continue;
        };
        if ordinal == last_heading {
            continue;
        }
        last_heading = ordinal;
        match serde_json::from_str::<Vec<CodeCard>>(&fence.body) {
            Ok(cards) if !cards.is_empty() => galleries.push(Gallery { name, cards }),
            Ok(_) => {}
            Err(e) => leptos::logging::warn!("invalid codecard block in gallery '{name}': {e}"),
        }
    }
    galleries
}

/// Parse an example document into project options named `name`.
///
/// Returns `None` when the document has no program.
pub fn parse_example(name: &str, md: &str) -> Option<ProjectOptions> {
    let fences = fences(md);
    let code = fences
        .iter()
        .find(|f| f.lang == "blocks" || f.lang == "typescript")?;

    let mut options = ProjectOptions::named(name);
    options
        .files
        .insert(MAIN_FILE.to_owned(), code.body.trim_end().to_owned());

    for fence in fences.iter().filter(|f| f.lang == "package") {
        for line in fence.body.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (package, version) = line.split_once('=').unwrap_or((line, "*"));
            options
                .dependencies
                .insert(package.trim().to_owned(), version.trim().to_owned());
        }
    }
    Some(options)
}
