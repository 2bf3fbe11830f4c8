use crate::domain::model::{Candidate, ItemElement};
use crate::utils::error::Result;
use regex::{Regex, RegexBuilder};

pub const ATTR_ADDR: &str = "data-addr";
pub const ATTR_TYPE: &str = "data-type";
pub const ATTR_VAL: &str = "data-val";

const PATTERN_META: &[char] = &[
    '-', '/', '\\', '^', '$', '*', '+', '?', '.', '(', ')', '|', '[', ']', '{', '}',
];

/// Backslash-escapes pattern metacharacters so the term only matches literally.
pub fn escape_search(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len());
    for c in search.chars() {
        if PATTERN_META.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive alternation of the space-separated pieces of an
/// already escaped term.
pub fn highlight_pattern(escaped: &str) -> Result<Regex> {
    let alternation = escaped.split(' ').collect::<Vec<_>>().join("|");
    let re = RegexBuilder::new(&format!("({})", alternation))
        .case_insensitive(true)
        .build()?;
    Ok(re)
}

/// Dropdown markup for one candidate.
///
/// The label is inserted as-is: only the highlight tags are added, nothing in
/// the label itself is escaped. `data-val` carries the escaped term.
pub fn render_item(item: &Candidate, search: &str) -> Result<String> {
    let escaped = escape_search(search);
    let re = highlight_pattern(&escaped)?;
    let highlighted = highlight(&re, &item.label);

    Ok(format!(
        r#"<div class="autocomplete-suggestion" {}="{}" {}="{}" {}="{}"><img src="static/{}.png"> {}</div>"#,
        ATTR_ADDR, item.label, ATTR_TYPE, item.tag, ATTR_VAL, escaped, item.tag, highlighted
    ))
}

/// Wraps every match of `re` in `<b>` tags.
///
/// An empty match directly after a non-empty one is still wrapped, and an
/// empty match advances the search by one char. `replace_all` skips such
/// matches, so the scan is done by hand.
fn highlight(re: &Regex, label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut last = 0;
    let mut pos = 0;

    while pos <= label.len() {
        let Some(m) = re.find_at(label, pos) else {
            break;
        };
        out.push_str(&label[last..m.start()]);
        out.push_str("<b>");
        out.push_str(m.as_str());
        out.push_str("</b>");
        last = m.end();

        pos = if m.is_empty() {
            match label[m.end()..].chars().next() {
                Some(c) => m.end() + c.len_utf8(),
                None => break,
            }
        } else {
            m.end()
        };
    }

    out.push_str(&label[last..]);
    out
}

/// Reads the `data-*` attributes back out of rendered suggestion markup.
/// The first occurrence of each attribute wins. Values are entity-decoded
/// like a DOM attribute read.
pub fn parse_item_element(markup: &str) -> Result<ItemElement> {
    let re = Regex::new(r#"(data-[a-z]+)="([^"]*)""#)?;

    let mut element = ItemElement::new();
    for caps in re.captures_iter(markup) {
        if element.attribute(&caps[1]).is_none() {
            element = element.with_attribute(&caps[1], decode_entities(&caps[2]));
        }
    }
    Ok(element)
}

/// Decodes the basic named entities plus `&#39;`. `&amp;` goes last so
/// `&amp;lt;` stays `&lt;`.
fn decode_entities(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
