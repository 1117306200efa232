//! Table of contents for article bodies.
//!
//! DESIGN
//! ======
//! Article HTML is trusted fixture/server content. Headings are anchored by
//! rewriting the markup before it is mounted, so the TOC and the ids are
//! produced in one pass instead of patching the live DOM afterwards.

#[cfg(test)]
#[path = "toc_test.rs"]
mod toc_test;

/// Extra offset applied when deciding which heading is being read.
pub const SCROLL_SPY_OFFSET: f64 = 120.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    /// 2 or 3.
    pub level: u8,
}

impl TocEntry {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.level == 2 { "toc-h2" } else { "toc-h3" }
    }
}

#[must_use]
pub fn heading_id(index: usize) -> String {
    format!("heading-{index}")
}

/// Give every `h2`/`h3` an `id="heading-{i}"` and collect the entries in order.
pub fn anchor_headings(html: &str) -> (String, Vec<TocEntry>) {
    let mut out = String::with_capacity(html.len() + 64);
    let mut entries = Vec::new();
    let mut rest = html;

    while let Some((start, level)) = next_heading(rest) {
        let tag_end = start + 3;
        out.push_str(&rest[..tag_end]);
        let id = heading_id(entries.len());
        out.push_str(&format!(" id=\"{id}\""));
        rest = &rest[tag_end..];

        let closing = if level == 2 { "</h2>" } else { "</h3>" };
        let text = rest
            .find('>')
            .and_then(|open_end| {
                let body = &rest[open_end + 1..];
                body.find(closing).map(|close| plain_text(&body[..close]))
            })
            .unwrap_or_default();
        entries.push(TocEntry { id, text, level });
    }
    out.push_str(rest);
    (out, entries)
}

/// Index of the last heading whose top is at or above the reading line.
pub fn active_heading(offsets: &[f64], scroll_y: f64) -> Option<usize> {
    let line = scroll_y + SCROLL_SPY_OFFSET;
    offsets.iter().rposition(|top| *top <= line)
}

fn next_heading(html: &str) -> Option<(usize, u8)> {
    let bytes = html.as_bytes();
    let mut from = 0;
    while let Some(pos) = html[from..].find("<h") {
        let at = from + pos;
        let level = bytes.get(at + 2).copied();
        let after = bytes.get(at + 3).copied();
        let is_boundary = matches!(after, Some(b'>' | b' ' | b'\t' | b'\n' | b'\r'));
        match level {
            Some(b'2') if is_boundary => return Some((at, 2)),
            Some(b'3') if is_boundary => return Some((at, 3)),
            _ => from = at + 2,
        }
    }
    None
}

fn plain_text(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_owned()
}
