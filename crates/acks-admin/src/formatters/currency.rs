use acks_core::{Markup, Model, Value};

use super::column_value;
use crate::context::{AdminView, RenderContext};
use crate::error::{RenderError, Result};

/// Decimal digits grouped by thousands: `-1234567` -> `-1,234,567`
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Accounting format: negatives in parentheses, `-1500` -> `(1,500)`
pub fn currency_string(amount: i64) -> String {
    let grouped = group_thousands(amount);
    match grouped.strip_prefix('-') {
        Some(magnitude) => format!("({})", magnitude),
        None => grouped,
    }
}

/// Right-aligned amount, or a centered dash for nothing/zero
pub fn format_amount(amount: Option<i64>) -> Markup {
    match amount {
        Some(n) if n != 0 => Markup::raw(format!(
            r#"<div style="text-align: right;">{}</div>"#,
            currency_string(n)
        )),
        _ => Markup::raw(r#"<div style="text-align: center;">-</div>"#),
    }
}

/// Satoshi amount column
pub fn satoshi<M: Model>(
    _view: &dyn AdminView,
    _ctx: &RenderContext<'_>,
    model: &M,
    name: &str,
) -> Result<Markup> {
    match column_value("satoshi", model, name)? {
        Value::Int(n) => Ok(format_amount(Some(n))),
        Value::Null => Ok(format_amount(None)),
        other => Err(RenderError::contract(
            "satoshi",
            format!("{} is not an amount: {:?}", name, other),
        )),
    }
}
