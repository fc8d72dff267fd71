use std::io::Write;

use crate::{
    config::Config,
    error::OrderError,
    orders::{process_orders, ProcessedOrder},
    records::read_orders,
    report,
};

/// Runs one batch: load, price, write the output file, print the summary.
///
/// Console text goes to `out`. Nothing is written to the output path when
/// the input is missing, unreadable, undecodable or empty.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Vec<ProcessedOrder>, OrderError> {
    let orders = read_orders(&config.input_path)?;
    tracing::info!(
        path = %config.input_path.display(),
        count = orders.len(),
        "loaded orders"
    );

    let mut console_err = None;
    let processed = process_orders(&orders, |order| {
        if console_err.is_none() {
            console_err = report::print_skip_notice(out, order).err();
        }
    });
    if let Some(e) = console_err {
        return Err(OrderError::Console(e));
    }

    report::write_processed_orders(&config.output_path, &processed)?;

    report::print_summary(out, &processed).map_err(OrderError::Console)?;
    report::print_confirmation(out, &config.output_path).map_err(OrderError::Console)?;

    Ok(processed)
}
