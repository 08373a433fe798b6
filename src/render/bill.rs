//! Bill Document
//!
//! Maps the two field collections to the printable HTML bill. Deterministic
//! and order-preserving; all field text is HTML-encoded before interpolation.

use html_escape::encode_text;

use crate::domain::seed::BASE_DETAILS;
use crate::domain::{Field, FieldValue};

const STYLE: &str = "\
.invoice-box { max-width: 800px; margin: auto; padding: 30px; border: 1px solid #eee; \
box-shadow: 0 0 10px rgba(0, 0, 0, 0.15); font-size: 16px; line-height: 24px; \
font-family: 'Helvetica Neue', 'Helvetica', Helvetica, Arial, sans-serif; color: #555; }\n\
.invoice-box table { width: 100%; line-height: inherit; text-align: left; }\n\
.invoice-box table td { padding: 5px; vertical-align: top; }\n\
.invoice-box table tr td:nth-child(2) { text-align: right; }\n\
.invoice-box table tr.heading td { background: #eee; border-bottom: 1px solid #ddd; font-weight: bold; }\n\
.invoice-box table tr.item td { border-bottom: 1px solid #eee; }\n\
.details { text-align: center; }";

fn value_text(value: &Option<FieldValue>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Two-cell item row with encoded label and value (plus unit suffix, if any)
fn item_row(field: &Field) -> String {
    let mut value = value_text(&field.value);
    if let Some(unit) = &field.unit {
        if !value.is_empty() {
            value.push(' ');
            value.push_str(unit);
        }
    }
    format!(
        "<tr class=\"item\">\n\t<td>{}</td>\n\t<td>{}</td>\n</tr>",
        encode_text(&field.label),
        encode_text(&value)
    )
}

/// Label-only row for the static detail lines
fn detail_row(label: &str) -> String {
    format!(
        "<tr class=\"item\">\n\t<td>{}</td>\n</tr>",
        encode_text(label)
    )
}

/// Render the printable bill for a worksheet. Rows appear in collection
/// order; empty collections still produce the full document shell.
pub fn bill_html(price_fields: &[Field], wire_fields: &[Field]) -> String {
    let price_rows: String = price_fields.iter().map(item_row).collect();
    let wire_rows: String = wire_fields.iter().map(item_row).collect();
    let detail_rows: String = BASE_DETAILS.iter().map(|label| detail_row(label)).collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n<title>Patel Electric</title>\n\
         <style>\n{STYLE}\n</style>\n</head>\n<body>\n<div class=\"invoice-box\">\n\
         <p style=\"text-align: center;\">।। શ્રી સ્વામિનારાયણ ।।</p>\n\
         <p style=\"text-align: right\">Himatbhai Faldu</p>\n\
         <p style=\"text-align: right\">Mobile No. : 9879337870</p>\n\
         <table cellpadding=\"0\" cellspacing=\"0\">\n\
         <tr class=\"top\"><td colspan=\"2\"><h3 style=\"color: #967D6B;margin:0px\">Patel Electric</h3></td></tr>\n\
         <tr class=\"heading\"><td colspan=\"2\" class=\"details\">Details</td></tr>\n\
         {detail_rows}\n\
         <tr class=\"heading\"><td>Item</td><td></td></tr>\n\
         {wire_rows}\n\
         <tr class=\"heading\"><td>Item</td><td>Price</td></tr>\n\
         {price_rows}\n\
         </table>\n</div>\n</body>\n</html>"
    )
}
