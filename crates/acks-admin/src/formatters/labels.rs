//! Colored label pills that filter the list by label

use acks_core::{escape, Label, Markup, PullRequest};

use super::NOWRAP;
use crate::context::{AdminView, RenderContext};
use crate::error::Result;

/// Blue channel above which white pill text becomes hard to read
const LIGHT_BLUE_THRESHOLD: u8 = 200;
const DARKEN_FACTOR: f64 = 0.6;

fn parse_hex_color(color: &str) -> Option<[u8; 3]> {
    let hex = color.trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// CSS background for a label. Colors with a light blue channel are darkened
/// so the white text stays legible; unparseable colors yield `None`.
pub fn label_background(color: &str) -> Option<String> {
    let [r, g, b] = parse_hex_color(color)?;
    if b > LIGHT_BLUE_THRESHOLD {
        let darken = |c: u8| (c as f64 * DARKEN_FACTOR) as u8;
        Some(format!("#{:02x}{:02x}{:02x}", darken(r), darken(g), darken(b)))
    } else {
        Some(format!("#{}", color.trim_start_matches('#')))
    }
}

fn label_pill(ctx: &RenderContext<'_>, label: &Label) -> Markup {
    let url = ctx.query.with_filter("labels", "in_list", &label.name);
    let style = match label_background(&label.color) {
        Some(background) => format!(r#" style="background-color: {};""#, background),
        None => {
            tracing::warn!("label '{}' has unparseable color '{}'", label.name, label.color);
            String::new()
        }
    };
    Markup::raw(format!(
        concat!(
            r#"<a href="{}" style="color: #FFFFFF; text-decoration: none;">"#,
            r#"<div style="{}"> <span class="label"{} >{}</span></div></a>"#
        ),
        escape(&url),
        NOWRAP,
        style,
        escape(&label.name)
    ))
}

pub fn labels(
    _view: &dyn AdminView,
    ctx: &RenderContext<'_>,
    pull_request: &PullRequest,
    _name: &str,
) -> Result<Markup> {
    Ok(pull_request
        .labels
        .iter()
        .map(|label| label_pill(ctx, label))
        .collect())
}
