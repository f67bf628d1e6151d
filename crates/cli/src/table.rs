//! Fixed-width text tables for items, sales and the session summary.

use std::io::{self, Write};

use cashreg_register::{ItemRow, RegisterSummary, SaleRow};

/// Timestamp layout used in sales tables (rendered in UTC).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn write_items(out: &mut impl Write, rows: &[ItemRow]) -> io::Result<()> {
    writeln!(out, "ITEM ID   |QUANTITY   |PRICE      |")?;
    for row in rows {
        writeln!(
            out,
            "{:>10}| {:>10}| {:>10}|",
            row.id, row.quantity, row.unit_price
        )?;
    }
    Ok(())
}

pub fn write_sales(out: &mut impl Write, title: &str, rows: &[SaleRow]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "Item Number | Quantity Sold | Total Amount| Date                |")?;
    for row in rows {
        writeln!(
            out,
            "{:<11} | {:>13} | {:>12}| {:<20}|",
            row.item_id,
            row.quantity_sold,
            row.total_amount,
            row.sold_at.format(DATE_FORMAT).to_string()
        )?;
    }
    Ok(())
}

pub fn write_summary(out: &mut impl Write, summary: &RegisterSummary) -> io::Result<()> {
    writeln!(
        out,
        "Items in catalog:    {} (capacity {})",
        summary.items, summary.catalog_capacity
    )?;
    writeln!(out, "Units in stock:      {}", summary.units_in_stock)?;
    writeln!(out, "Sales recorded:      {}", summary.sales)?;
    writeln!(out, "Total revenue:       {}", summary.revenue)?;
    writeln!(out, "Ledger slots left:   {}", summary.ledger_remaining)?;
    Ok(())
}
