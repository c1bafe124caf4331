//! Form field extraction
//!
//! Collects the plain form fields the setup page posts back unchanged:
//! hidden inputs, selected `<select>` options, checked checkboxes and the
//! two editable date inputs. Every other text input is cosmetic.

use super::markup::{input_tags, is_script_fragment, InputTag};
use crate::{ParseError, ParseErrorKind, ParseResult, ParseStage};
use indexmap::IndexMap;
use scraper::{Html, Selector};

/// Hidden inputs with this prefix shadow a checkbox
const CHECKBOX_SHADOW_PREFIX: char = '_';

/// Text inputs that carry real configuration
const TEXT_FIELD_ALLOW_LIST: [&str; 2] = ["startDate", "endDate"];

/// Raw form fields scraped from the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Hidden inputs, checked checkboxes and allow-listed text inputs
    pub hidden: IndexMap<String, String>,

    /// Selected value per `<select>` name
    pub select: IndexMap<String, String>,

    /// Checkbox shadow inputs
    pub checkbox: IndexMap<String, String>,
}

/// Scans the page for every form field that must be echoed back
///
/// Names or values containing a quote are inline script fragments and are
/// skipped with a debug log.
///
/// # Errors
///
/// Fails when the page has no hidden inputs, which means it is not a setup
/// page (a login or error page, typically).
pub fn extract_form_fields(html: &str) -> ParseResult<FormFields> {
    let mut fields = FormFields::default();

    scan_hidden_inputs(html, &mut fields);
    if fields.hidden.is_empty() && fields.checkbox.is_empty() {
        return Err(ParseError::new(
            ParseStage::FormState,
            ParseErrorKind::NoMatches("hidden inputs"),
        ));
    }

    scan_selects(html, &mut fields);
    scan_checked_checkboxes(html, &mut fields);
    scan_allowed_text_inputs(html, &mut fields);

    tracing::debug!(
        "Extracted {} hidden, {} select, {} checkbox fields",
        fields.hidden.len(),
        fields.select.len(),
        fields.checkbox.len()
    );
    Ok(fields)
}

fn scan_hidden_inputs(html: &str, fields: &mut FormFields) {
    for tag in input_tags(html).filter(|tag| tag.is_type("hidden")) {
        let Some((name, value)) = accept_tag(tag, true) else {
            continue;
        };

        let bucket = if name.starts_with(CHECKBOX_SHADOW_PREFIX) {
            &mut fields.checkbox
        } else {
            &mut fields.hidden
        };
        bucket.insert(name, value);
    }
}

/// Reads selects through a DOM parse, which accepts every spelling of the
/// `selected` attribute (`selected`, `selected="selected"`, `selected="true"`)
/// in any attribute order
fn scan_selects(html: &str, fields: &mut FormFields) {
    let (Ok(select_selector), Ok(option_selector)) =
        (Selector::parse("select[name]"), Selector::parse("option[selected]"))
    else {
        return;
    };

    let document = Html::parse_document(html);
    for select in document.select(&select_selector) {
        let Some(name) = select.value().attr("name") else {
            continue;
        };
        let Some(value) = select
            .select(&option_selector)
            .find_map(|option| option.value().attr("value"))
        else {
            continue;
        };
        if is_script_fragment(name) || is_script_fragment(value) {
            tracing::debug!("Skipping scripted select '{}'", name);
            continue;
        }
        fields.select.insert(name.to_string(), value.to_string());
    }
}

fn scan_checked_checkboxes(html: &str, fields: &mut FormFields) {
    for tag in input_tags(html).filter(|tag| tag.is_type("checkbox") && tag.checked) {
        if let Some((name, value)) = accept_tag(tag, false) {
            fields.hidden.insert(name, value);
        }
    }
}

fn scan_allowed_text_inputs(html: &str, fields: &mut FormFields) {
    for tag in input_tags(html).filter(|tag| tag.is_type("text")) {
        let allowed = tag
            .name
            .as_deref()
            .is_some_and(|name| TEXT_FIELD_ALLOW_LIST.contains(&name));
        if !allowed {
            continue;
        }
        if let Some((name, value)) = accept_tag(tag, false) {
            fields.hidden.insert(name, value);
        }
    }
}

/// Decoded `(name, value)` of a tag that belongs to the real form
///
/// A missing value reads as empty only when `value_optional` is set.
fn accept_tag(tag: InputTag, value_optional: bool) -> Option<(String, String)> {
    let name = tag.name?;
    let value = match tag.value {
        Some(value) => value,
        None if value_optional => String::new(),
        None => return None,
    };
    if tag.scripted {
        tracing::debug!("Skipping scripted form field '{}'", name);
        return None;
    }
    Some((name, value))
}
