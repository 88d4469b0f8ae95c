//! Extraction of the Next.js hydration payload from server-rendered HTML.

use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;

use crate::domain::entities::HydrationDocument;
use crate::error::{AppError, map_schema_error};

/// Id attribute of the script element carrying the hydration data.
const NEXT_DATA_ID: &str = "__NEXT_DATA__";

static NEXT_DATA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"script[id="__NEXT_DATA__"]"#).unwrap());

/// Extracts and types the `props.pageProps` document from a profile page.
///
/// # Errors
///
/// - [`AppError::Extraction`] if there is no hydration script, or more than one
/// - [`AppError::MalformedPayload`] if the script text is not JSON
/// - [`AppError::Schema`] if `props.pageProps` or a required field is missing
pub fn extract_hydration(html: &str) -> Result<HydrationDocument, AppError> {
    let raw = extract_next_data(html)?;
    parse_page_props(&raw)
}

/// Returns the text content of the single `__NEXT_DATA__` script.
fn extract_next_data(html: &str) -> Result<String, AppError> {
    let document = Html::parse_document(html);
    let mut scripts = document.select(&NEXT_DATA_SELECTOR);

    let script = scripts.next().ok_or_else(|| {
        AppError::extraction(format!("hydration script `{NEXT_DATA_ID}` not found"))
    })?;

    let extra = scripts.count();
    if extra > 0 {
        return Err(AppError::extraction(format!(
            "found {} `{NEXT_DATA_ID}` scripts, expected exactly one",
            extra + 1
        )));
    }

    Ok(script.text().collect())
}

/// Parses hydration JSON and deserializes its `props.pageProps` sub-document.
fn parse_page_props(raw: &str) -> Result<HydrationDocument, AppError> {
    let mut root: Value = serde_json::from_str(raw)
        .map_err(|e| AppError::malformed(format!("hydration script is not valid JSON: {e}")))?;

    let page_props = root
        .pointer_mut("/props/pageProps")
        .map(Value::take)
        .ok_or_else(|| AppError::schema("props.pageProps", "path not found"))?;

    serde_json::from_value(page_props).map_err(|e| map_schema_error("props.pageProps", e))
}
