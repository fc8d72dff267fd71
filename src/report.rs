use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{error::OrderError, orders::ProcessedOrder, records::Order};

const SEPARATOR: &str = "-------------------------------------------------------------";
const HEADER: &str = "Order ID | Customer Name | Subtotal  | Discount | Final Total";

/// Writes `orders` to `path` as an indented JSON array, replacing any
/// existing file.
pub fn write_processed_orders<P: AsRef<Path>>(
    path: P,
    orders: &[ProcessedOrder],
) -> Result<(), OrderError> {
    let path = path.as_ref();
    let write_err = |source: io::Error| OrderError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut wtr = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut wtr, orders).map_err(|e| {
        if e.is_io() {
            write_err(e.into())
        } else {
            OrderError::Encode(e)
        }
    })?;
    wtr.flush().map_err(write_err)?;

    tracing::info!(path = %path.display(), count = orders.len(), "wrote processed orders");
    Ok(())
}

pub fn print_skip_notice<W: Write>(out: &mut W, order: &Order) -> io::Result<()> {
    writeln!(
        out,
        "Order {} has no items and will be skipped.",
        order.order_id
    )
}

pub fn print_summary<W: Write>(out: &mut W, orders: &[ProcessedOrder]) -> io::Result<()> {
    writeln!(out, "Order Summary:")?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "{HEADER}")?;
    for order in orders {
        writeln!(
            out,
            "{:<9} | {:<14} | {:>10} | {:<8} | {:>11}",
            order.order_id,
            order.customer_name,
            format_currency(order.subtotal),
            if order.discount_applied { "True" } else { "False" },
            format_currency(order.final_total),
        )?;
    }
    writeln!(out, "{SEPARATOR}")
}

pub fn print_confirmation<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Processed orders saved to '{}'.", path.display())
}

/// Formats an amount as dollars with two decimals and thousands separators.
/// Cents are rounded half away from zero.
pub fn format_currency(amount: f64) -> String {
    let cents_rounded = (amount.abs() * 100.0).round() / 100.0;
    let fixed = format!("{cents_rounded:.2}");
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.004 prints as $0.00, not -$0.00
    let sign = if amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}
