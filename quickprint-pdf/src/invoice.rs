//! Full invoice renderer
//!
//! Lays out one order onto a single A4 page: shop identity, invoice
//! metadata, customer block, item table and totals block.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::draw::{self, palette};
use crate::error::RenderResult;
use crate::format::{format_date, format_pkr};
use shared::{Order, ShopSettings};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const RIGHT_EDGE: f32 = 190.0;

/// Table column x positions (mm)
const COL_ITEM: f32 = MARGIN;
const COL_QTY: f32 = 110.0;
const COL_UNIT: f32 = 130.0;
const COL_TOTAL: f32 = 165.0;

const ROW_HEIGHT: f32 = 7.0;
/// Lowest y the item table may reach before truncating
const TABLE_FLOOR: f32 = 70.0;

/// Render an order and the shop settings into a single-page A4 invoice.
///
/// Pure function over its inputs; the order is never mutated.
pub fn render_invoice(order: &Order, shop: &ShopSettings) -> RenderResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Invoice {}", order.invoice_number),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    // Shop identity block
    draw::set_color(&layer, palette::ACCENT);
    draw::text(&layer, &bold, &shop.name, 22.0, MARGIN, 267.0);

    draw::set_color(&layer, palette::MUTED);
    draw::text(&layer, &font, &shop.address, 10.0, MARGIN, 259.0);
    draw::text(
        &layer,
        &font,
        &format!("Phone: {} | Email: {}", shop.phone, shop.email),
        10.0,
        MARGIN,
        253.0,
    );

    draw::hline(&layer, MARGIN, RIGHT_EDGE, 242.0);

    // Invoice metadata (left column)
    draw::set_color(&layer, palette::BLACK);
    draw::text(&layer, &bold, "INVOICE", 16.0, MARGIN, 227.0);
    draw::text(
        &layer,
        &font,
        &format!("Invoice #: {}", order.invoice_number),
        10.0,
        MARGIN,
        217.0,
    );
    draw::text(
        &layer,
        &font,
        &format!("Date: {}", format_date(order.created_at)),
        10.0,
        MARGIN,
        211.0,
    );
    draw::text(
        &layer,
        &font,
        &format!("Delivery Date: {}", format_date(order.delivery_date)),
        10.0,
        MARGIN,
        205.0,
    );
    draw::text(
        &layer,
        &font,
        &format!("Status: {}", order.status.label()),
        10.0,
        MARGIN,
        199.0,
    );

    // Customer block (right column)
    let col2 = 120.0;
    draw::text(&layer, &bold, "BILL TO:", 12.0, col2, 227.0);
    draw::text(&layer, &font, &order.customer_name, 10.0, col2, 217.0);
    draw::text(&layer, &font, &order.customer_phone, 10.0, col2, 211.0);
    if let Some(address) = &order.customer_address {
        draw::text(&layer, &font, address, 10.0, col2, 205.0);
    }

    // Item table
    let mut y = 185.0;
    draw::set_color(&layer, palette::ACCENT);
    draw::text(&layer, &bold, "Item / Service", 10.0, COL_ITEM, y);
    draw::text(&layer, &bold, "Qty", 10.0, COL_QTY, y);
    draw::text(&layer, &bold, "Unit Price", 10.0, COL_UNIT, y);
    draw::text(&layer, &bold, "Total", 10.0, COL_TOTAL, y);
    y -= 3.0;
    draw::hline(&layer, MARGIN, RIGHT_EDGE, y);
    y -= ROW_HEIGHT;

    draw::set_color(&layer, palette::BLACK);
    let mut rendered = 0usize;
    for item in &order.items {
        if y < TABLE_FLOOR {
            break;
        }
        draw::text(&layer, &font, &item.name, 10.0, COL_ITEM, y);
        draw::text(&layer, &font, &item.qty.to_string(), 10.0, COL_QTY, y);
        draw::text(&layer, &font, &format_pkr(item.unit_price), 10.0, COL_UNIT, y);
        draw::text(&layer, &font, &format_pkr(item.line_total), 10.0, COL_TOTAL, y);
        y -= ROW_HEIGHT;
        rendered += 1;
    }
    if rendered < order.items.len() {
        let remaining = order.items.len() - rendered;
        draw::set_color(&layer, palette::MUTED);
        draw::text(
            &layer,
            &font,
            &format!("... and {} more item(s)", remaining),
            9.0,
            COL_ITEM,
            y,
        );
        y -= ROW_HEIGHT;
    }
    draw::hline(&layer, MARGIN, RIGHT_EDGE, y + 3.0);

    // Totals block
    let label_x = 130.0;
    let value_x = 165.0;
    y -= 7.0;
    draw::set_color(&layer, palette::BLACK);
    draw::text(&layer, &font, "Subtotal:", 10.0, label_x, y);
    draw::text(&layer, &font, &format_pkr(order.subtotal), 10.0, value_x, y);
    y -= 6.0;
    draw::text(&layer, &font, "Discount:", 10.0, label_x, y);
    draw::text(&layer, &font, &format_pkr(order.discount), 10.0, value_x, y);
    if order.tax != 0.0 {
        y -= 6.0;
        draw::text(&layer, &font, "Tax:", 10.0, label_x, y);
        draw::text(&layer, &font, &format_pkr(order.tax), 10.0, value_x, y);
    }
    y -= 8.0;
    draw::text(&layer, &bold, "Grand Total:", 12.0, label_x, y);
    draw::text(&layer, &bold, &format_pkr(order.total), 12.0, value_x, y);
    y -= 8.0;
    draw::text(&layer, &font, "Paid Amount:", 10.0, label_x, y);
    draw::set_color(&layer, palette::PAID);
    draw::text(&layer, &font, &format_pkr(order.paid), 10.0, value_x, y);
    y -= 6.0;
    draw::set_color(&layer, palette::BLACK);
    draw::text(&layer, &font, "Balance Due:", 10.0, label_x, y);
    // Balance due only gets the warning colour when something is owed
    if order.due != 0.0 {
        draw::set_color(&layer, palette::DUE);
    }
    draw::text(&layer, &bold, &format_pkr(order.due), 10.0, value_x, y);

    // Footer
    draw::set_color(&layer, palette::MUTED);
    draw::text_centered(
        &layer,
        &font,
        &format!("Thank you for choosing {}!", shop.name),
        8.0,
        PAGE_WIDTH / 2.0,
        17.0,
    );
    draw::text_centered(
        &layer,
        &font,
        "This is a computer generated invoice.",
        8.0,
        PAGE_WIDTH / 2.0,
        12.0,
    );

    let mut writer = std::io::BufWriter::new(Vec::<u8>::new());
    doc.save(&mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| crate::RenderError::Pdf(e.to_string()))?;

    tracing::debug!(
        invoice = %order.invoice_number,
        bytes = bytes.len(),
        "invoice rendered"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{OrderItem, OrderStatus, PaymentMethod, Priority};

    fn sample_order() -> Order {
        Order {
            id: Some("ord-1".to_string()),
            invoice_number: "RT-2024-00042".to_string(),
            created_at: 1_705_912_335_000,
            updated_at: 1_705_912_335_000,
            customer_name: "Sana Javed".to_string(),
            customer_phone: "0321-4455667".to_string(),
            customer_address: Some("House 9, Model Town".to_string()),
            items: vec![OrderItem {
                id: "i1".to_string(),
                name: "ID Passport Photos".to_string(),
                qty: 2,
                unit_price: 150.0,
                line_total: 300.0,
            }],
            subtotal: 300.0,
            discount: 50.0,
            tax: 0.0,
            total: 250.0,
            paid: 100.0,
            due: 150.0,
            payment_method: PaymentMethod::Easypaisa,
            delivery_date: 1_705_998_735_000,
            priority: Priority::Urgent,
            notes: "For visa application".to_string(),
            status: OrderStatus::Processing,
            completion_date: None,
        }
    }

    #[test]
    fn test_render_invoice_is_valid_pdf() {
        let bytes = render_invoice(&sample_order(), &ShopSettings::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_invoice_does_not_mutate_order() {
        let order = sample_order();
        let before = order.clone();
        render_invoice(&order, &ShopSettings::default()).unwrap();
        assert_eq!(order, before);
    }

    #[test]
    fn test_render_invoice_many_items_truncates_not_fails() {
        let mut order = sample_order();
        let item = order.items[0].clone();
        order.items = (0..40)
            .map(|i| OrderItem {
                id: format!("i{}", i),
                ..item.clone()
            })
            .collect();
        let bytes = render_invoice(&order, &ShopSettings::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
