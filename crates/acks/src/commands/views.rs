use crate::cli::OutputFormat;
use crate::output::output_result;
use acks_admin::views;
use anyhow::Result;

pub fn handle_views(format: OutputFormat) -> Result<()> {
    let summaries = vec![
        views::pull_requests()?.summary(),
        views::bounties_payable()?.summary(),
        views::invoices()?.summary(),
    ];

    output_result(summaries.as_slice(), format);
    Ok(())
}
