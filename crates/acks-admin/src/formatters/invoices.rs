use acks_core::{escape, Bounty, Invoice, Markup};

use super::NOWRAP;
use crate::context::{AdminView, RenderContext};
use crate::error::Result;

/// One badge per settled invoice, then a count of the pending ones
pub fn invoices(
    _view: &dyn AdminView,
    _ctx: &RenderContext<'_>,
    bounty: &Bounty,
    _name: &str,
) -> Result<Markup> {
    let (settled, pending): (Vec<&Invoice>, Vec<&Invoice>) = bounty
        .invoices
        .iter()
        .partition(|invoice| invoice.status.is_settled());

    let mut output = Markup::empty();
    for invoice in &settled {
        output.push_raw(&format!(
            r#"<div style="{}"><span class="label label-success">{} {}</span></div>"#,
            NOWRAP,
            escape(&invoice.id),
            invoice.status
        ));
    }
    if !pending.is_empty() {
        output.push_raw(&format!(
            r#"<div style="{}">{} unpaid invoices</div>"#,
            NOWRAP,
            pending.len()
        ));
    }

    tracing::debug!(
        "bounty {}: {} settled, {} pending invoices ({} bytes)",
        bounty.id,
        settled.len(),
        pending.len(),
        output.as_str().len()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RenderMode;
    use crate::test_support::*;
    use acks_core::InvoiceStatus;

    fn render(bounty: &Bounty) -> String {
        let view = TestView::default();
        invoices(&view, &view.context(RenderMode::List), bounty, "invoices")
            .unwrap()
            .into_string()
    }

    #[test]
    fn no_invoices_no_output() {
        assert!(render(&bounty("B1", pull_request(1))).is_empty());
    }

    #[test]
    fn settled_badges_then_pending_count() {
        let mut bounty = bounty("B1", pull_request(1));
        bounty.invoices = vec![
            invoice("I1", "B1", InvoiceStatus::New),
            invoice("I2", "B1", InvoiceStatus::Paid),
            invoice("I3", "B1", InvoiceStatus::Expired),
        ];
        assert_eq!(
            render(&bounty),
            concat!(
                r#"<div style="white-space: nowrap; overflow: hidden;"><span class="label label-success">I2 paid</span></div>"#,
                r#"<div style="white-space: nowrap; overflow: hidden;">2 unpaid invoices</div>"#
            )
        );
    }

    #[test]
    fn settled_keep_original_order() {
        let mut bounty = bounty("B1", pull_request(1));
        bounty.invoices = vec![
            invoice("I9", "B1", InvoiceStatus::Complete),
            invoice("I2", "B1", InvoiceStatus::Paid),
        ];
        let html = render(&bounty);
        assert!(html.find("I9 complete").unwrap() < html.find("I2 paid").unwrap());
        assert!(!html.contains("unpaid"));
    }
}
