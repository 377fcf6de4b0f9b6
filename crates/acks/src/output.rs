use crate::cli::OutputFormat;
use acks_admin::ViewSummary;
use colored::Colorize;
use serde::Serialize;
use serde_json::json;

/// Print a value as pretty JSON or as its text rendering
pub fn output_result<T: Serialize + Displayable + ?Sized>(result: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("failed to serialize output: {}", e),
        },
        OutputFormat::Text => println!("{}", result.display()),
    }
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let body = json!({ "error": true, "message": format!("{:#}", err) });
            serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string())
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

pub trait Displayable {
    fn display(&self) -> String;
}

/// Lists print one item per paragraph
impl<T: Displayable> Displayable for [T] {
    fn display(&self) -> String {
        self.iter()
            .map(Displayable::display)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Displayable for ViewSummary {
    fn display(&self) -> String {
        let mut output = format!(
            "{} ({})\n  {}: {}",
            self.name.cyan().bold(),
            self.entity,
            "Endpoint".dimmed(),
            self.endpoint
        );

        if let Some((column, descending)) = self.default_sort {
            let direction = if descending { "desc" } else { "asc" };
            output.push_str(&format!("\n  {}: {} {}", "Sort".dimmed(), column, direction));
        }
        if !self.searchable.is_empty() {
            output.push_str(&format!(
                "\n  {}: {}",
                "Search".dimmed(),
                self.searchable.join(", ")
            ));
        }
        if !self.filters.is_empty() {
            output.push_str(&format!(
                "\n  {}: {}",
                "Filters".dimmed(),
                self.filters.join(", ")
            ));
        }

        let pages: Vec<&str> = [
            (self.actions.details, "details"),
            (self.actions.create, "create"),
            (self.actions.edit, "edit"),
            (self.actions.delete, "delete"),
        ]
        .into_iter()
        .filter_map(|(enabled, page)| enabled.then_some(page))
        .collect();
        output.push_str(&format!("\n  {}: list", "Pages".dimmed()));
        for page in pages {
            output.push_str(&format!(", {}", page));
        }

        output.push_str(&format!("\n  {}:", "Columns".dimmed()));
        for column in &self.columns {
            let label = format!("\"{}\"", column.label);
            output.push_str(&format!("\n    {} {}", column.name, label.dimmed()));
            if let Some(formatter) = column.formatter {
                output.push_str(&format!(" [{}]", formatter.magenta()));
            }
        }

        output
    }
}
