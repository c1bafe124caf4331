//! Low-level helpers for scanning raw setup page markup
//!
//! The page mixes real form inputs with inline script that builds more inputs
//! from string templates (`'<input name="divisionName_' + id + '" ...>'`).
//! A plain DOM parse misses the script-declared state, so `<input>` tags are
//! located on the raw text. Each tag is then parsed on its own by the HTML
//! parser, which decodes character references the way a browser would before
//! posting the form.

use regex::Regex;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;

static INPUT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<input\b[^>]*>").expect("input tag regex is valid"));

// Raw attribute text, only consulted to recognize script templates
static RAW_NAME_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sname="([^"]+)""#).expect("name attribute regex is valid"));
static RAW_VALUE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\svalue="([^"]*)""#).expect("value attribute regex is valid")
});

/// Attributes of one `<input>` tag found in the markup
///
/// `name`, `input_type` and `value` are entity-decoded. `scripted` is set
/// when the raw name or value is a fragment of an inline script template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InputTag {
    pub name: Option<String>,
    pub input_type: Option<String>,
    pub value: Option<String>,
    pub checked: bool,
    pub scripted: bool,
}

impl InputTag {
    fn parse(tag: &str) -> Option<Self> {
        let fragment = Html::parse_fragment(tag);
        let input = fragment
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name() == "input")?;
        let attrs = input.value();

        let scripted = [&RAW_NAME_ATTR, &RAW_VALUE_ATTR]
            .into_iter()
            .filter_map(|re| capture(re, tag))
            .any(is_script_fragment);

        Some(Self {
            name: attrs.attr("name").map(str::to_string),
            input_type: attrs.attr("type").map(str::to_string),
            value: attrs.attr("value").map(str::to_string),
            checked: attrs.attr("checked").is_some(),
            scripted,
        })
    }

    pub fn is_type(&self, input_type: &str) -> bool {
        self.input_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(input_type))
    }
}

/// Every `<input>` tag in document order, including ones inside script text
pub(crate) fn input_tags(html: &str) -> impl Iterator<Item = InputTag> + '_ {
    INPUT_TAG
        .find_iter(html)
        .filter_map(|m| InputTag::parse(m.as_str()))
}

/// Whether a captured name or value is a fragment of an inline script template
///
/// Real field names and values on the page never contain quotes, while
/// template strings like `divisionName_' + tempId + '` always do. A
/// legitimate value containing a literal quote would be dropped too; an
/// encoded one (`&#39;`) is kept.
pub(crate) fn is_script_fragment(text: &str) -> bool {
    text.contains(['\'', '"'])
}

fn capture<'a>(re: &Regex, haystack: &'a str) -> Option<&'a str> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
