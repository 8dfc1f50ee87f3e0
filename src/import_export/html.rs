//! Netscape bookmarks HTML codec
//!
//! Decodes browser-style `NETSCAPE-Bookmark-file-1` documents into raw
//! [`ImportedRecord`]s and encodes links back into the same dialect, one
//! folder per category.
//!
//! Decoding is tolerant: folders come from `H3` headings, links from `A`
//! anchors, and anything without a usable `HREF` (missing, empty,
//! `place:` or `javascript:` schemes) is silently dropped. Attribute
//! casing follows whatever the exporting browser used.

use std::collections::HashMap;

use chrono::Utc;

use crate::error::Result;
use crate::models::{ImportedRecord, Link};
use crate::tags;

/// Decode a bookmarks HTML document into raw imported records
///
/// Folder names become categories; a link outside any folder has no
/// category and picks up the configured default during normalization.
/// With nested folders the innermost named one wins.
pub fn decode(html: &str) -> Result<Vec<ImportedRecord>> {
    let dom = tl::parse(html, tl::ParserOptions::default())?;
    let parser = dom.parser();

    // Closing tags never surface as parsed nodes, so folder ends are
    // tracked by raw `</DL` offsets: once the walk reaches a tag past the
    // next closer, the innermost list scope pops. Every DL pushes exactly
    // one scope (the root and unnamed ones carry no folder name), keeping
    // pushes and pops paired even for folders with blank headings.
    let closers = list_closer_offsets(html);
    let mut next_closer = 0;

    let mut folder_stack: Vec<Option<String>> = Vec::new();
    let mut pending_folder: Option<String> = None;
    let mut records: Vec<ImportedRecord> = Vec::new();

    for node in dom.nodes() {
        if let Some(tag) = node.as_tag() {
            let (tag_start, _) = tag.boundaries(parser);
            while next_closer < closers.len() && closers[next_closer] < tag_start {
                folder_stack.pop();
                next_closer += 1;
            }

            let tag_name = tag.name().as_utf8_str();

            match tag_name.as_ref() {
                // H3 headings name the folder opened by the next DL
                "H3" | "h3" => {
                    let folder_name = unescape(tag.inner_text(parser).trim());
                    pending_folder = Some(folder_name).filter(|n| !n.is_empty());
                }
                // DL opens a list scope, folder-named or not
                "DL" | "dl" => {
                    folder_stack.push(pending_folder.take());
                }
                // A anchors are links
                "A" | "a" => {
                    let href = match attribute(tag, "HREF", "href") {
                        Some(href) => unescape(&href),
                        None => continue,
                    };
                    if href.is_empty()
                        || href.starts_with("place:")
                        || href.starts_with("javascript:")
                    {
                        continue;
                    }

                    let name = unescape(tag.inner_text(parser).trim());

                    records.push(ImportedRecord {
                        name: Some(name).filter(|n| !n.is_empty()),
                        description: attribute(tag, "DESCRIPTION", "description")
                            .map(|d| unescape(&d))
                            .filter(|d| !d.is_empty()),
                        category: innermost_folder(&folder_stack),
                        color: None,
                        tags: attribute(tag, "TAGS", "tags")
                            .map(|t| tags::parse_tags(&unescape(&t)))
                            .filter(|parsed| !parsed.is_empty()),
                        production_url: Some(href),
                        staging_url: None,
                        integration_url: None,
                    });
                }
                _ => {}
            }
        }
    }

    log::debug!("decoded {} record(s) from bookmarks document", records.len());
    Ok(records)
}

/// Byte offsets of every `</DL` closer (either case), in document order
fn list_closer_offsets(html: &str) -> Vec<usize> {
    let bytes = html.as_bytes();
    let mut offsets = Vec::new();
    let mut i = 0;
    while i + 4 <= bytes.len() {
        if bytes[i] == b'<'
            && bytes[i + 1] == b'/'
            && bytes[i + 2].eq_ignore_ascii_case(&b'd')
            && bytes[i + 3].eq_ignore_ascii_case(&b'l')
            && bytes
                .get(i + 4)
                .map_or(true, |b| *b == b'>' || b.is_ascii_whitespace())
        {
            offsets.push(i);
            i += 4;
        } else {
            i += 1;
        }
    }
    offsets
}

/// Innermost open folder that actually has a name
fn innermost_folder(stack: &[Option<String>]) -> Option<String> {
    stack.iter().rev().find_map(|folder| folder.clone())
}

/// Encode links as a bookmarks HTML document, stamped with the current time
pub fn encode(links: &[Link], default_category: &str) -> String {
    encode_at(links, default_category, Utc::now().timestamp())
}

/// Encode links as a bookmarks HTML document with an explicit `ADD_DATE`
/// epoch, one top-level folder per category in first-seen order
pub fn encode_at(links: &[Link], default_category: &str, add_date: i64) -> String {
    let mut output = String::new();
    output.push_str("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n");
    output.push_str("<!-- This is an automatically generated file.\n");
    output.push_str("     It will be read and overwritten.\n");
    output.push_str("     DO NOT EDIT! -->\n");
    output.push_str("<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n");
    output.push_str("<TITLE>Bookmarks</TITLE>\n");
    output.push_str("<H1>Bookmarks</H1>\n");
    output.push_str("<DL><p>\n");

    for (category, members) in group_by_category(links, default_category) {
        output.push_str(&format!("    <DT><H3>{}</H3>\n", escape_text(&category)));
        output.push_str("    <DL><p>\n");
        for link in members {
            output.push_str(&anchor_line(link, add_date));
        }
        output.push_str("    </DL><p>\n");
    }

    output.push_str("</DL><p>\n");
    output
}

/// Bucket links by category, preserving first-seen category order and
/// within-category input order. Blank categories map to the default.
pub(crate) fn group_by_category<'a>(
    links: &'a [Link],
    default_category: &str,
) -> Vec<(String, Vec<&'a Link>)> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<&Link>> = HashMap::new();

    for link in links {
        let category = if link.category.trim().is_empty() {
            default_category.to_string()
        } else {
            link.category.clone()
        };
        if !buckets.contains_key(&category) {
            order.push(category.clone());
        }
        buckets.entry(category).or_default().push(link);
    }

    order
        .into_iter()
        .map(|category| {
            let members = buckets.remove(&category).unwrap_or_default();
            (category, members)
        })
        .collect()
}

fn anchor_line(link: &Link, add_date: i64) -> String {
    let mut attrs = format!(
        "HREF=\"{}\" ADD_DATE=\"{}\"",
        escape_attr(&link.environments.production),
        add_date
    );
    if !link.description.is_empty() {
        attrs.push_str(&format!(
            " DESCRIPTION=\"{}\"",
            escape_attr(&link.description)
        ));
    }
    if !link.tags.is_empty() {
        attrs.push_str(&format!(
            " TAGS=\"{}\"",
            escape_attr(&tags::join_tags(&link.tags))
        ));
    }
    format!("        <DT><A {}>{}</A>\n", attrs, escape_text(&link.name))
}

/// Look up an attribute under both the uppercase and lowercase spellings;
/// a value-less attribute reads as an empty string
fn attribute(tag: &tl::HTMLTag<'_>, upper: &str, lower: &str) -> Option<String> {
    tag.attributes()
        .get(upper)
        .or_else(|| tag.attributes().get(lower))
        .map(|value| {
            value
                .map(|v| v.as_utf8_str().to_string())
                .unwrap_or_default()
        })
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
