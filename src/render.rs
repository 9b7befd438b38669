use serde_json::Value;

use crate::error::ClientError;
use crate::messages::RECOMMENDATIONS_HEADING;
use crate::models::RecommendedBook;

/// Pretty-prints a backend document with two-space indentation, keeping the
/// backend's key order.
pub fn pretty_json(value: &Value) -> Result<String, ClientError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Builds the recommendations fragment: a heading, then one block per book.
///
/// Titles and authors are inserted verbatim, without HTML escaping. Whatever
/// markup the backend returns ends up in the page.
pub fn recommendations_html(books: &[RecommendedBook]) -> String {
    let mut html = format!("<h3>{RECOMMENDATIONS_HEADING}</h3>");
    for book in books {
        html.push_str(&format!(
            "\n            <div>\n                <strong>{}</strong> - {} (Rating: {})\n            </div>\n        ",
            display_text(book.title.as_ref()),
            display_text(book.author.as_ref()),
            display_text(book.rating.as_ref())
        ));
    }
    html
}

/// Text a page shows for a JSON value placed into markup: strings bare,
/// `null` and absent fields spelled out, arrays comma-joined.
pub fn display_text(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_text(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// Whether a value counts as present when falling back to a default text.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
