//! Pickup token renderer
//!
//! A narrow 80x150mm slip the customer brings back at pickup time:
//! token number, delivery date and a condensed payment summary.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::draw::{self, palette};
use crate::error::RenderResult;
use crate::format::{format_date, format_datetime, format_pkr};
use shared::{Order, ShopSettings};

const PAGE_WIDTH: f32 = 80.0;
const PAGE_HEIGHT: f32 = 150.0;
const MARGIN: f32 = 5.0;
const CENTER: f32 = PAGE_WIDTH / 2.0;

/// Render the pickup token slip for an order.
///
/// `issued_at` is the generation timestamp printed under the token
/// number (epoch millis).
pub fn render_token(order: &Order, shop: &ShopSettings, issued_at: i64) -> RenderResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Token {}", order.invoice_number),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    // Header
    draw::set_color(&layer, palette::BLACK);
    draw::text_centered(&layer, &bold, &shop.name, 14.0, CENTER, 140.0);
    draw::text_centered(
        &layer,
        &font,
        &format!("Token: {}", order.invoice_number),
        8.0,
        CENTER,
        134.0,
    );
    draw::text_centered(&layer, &font, &format_datetime(issued_at), 8.0, CENTER, 130.0);

    draw::hline(&layer, MARGIN, PAGE_WIDTH - MARGIN, 127.0);

    // Customer block
    draw::text(&layer, &bold, "CUSTOMER INFO", 10.0, MARGIN, 122.0);
    draw::text(
        &layer,
        &font,
        &format!("Name: {}", order.customer_name),
        10.0,
        MARGIN,
        117.0,
    );
    draw::text(
        &layer,
        &font,
        &format!("Phone: {}", order.customer_phone),
        10.0,
        MARGIN,
        112.0,
    );

    draw::hline(&layer, MARGIN, PAGE_WIDTH - MARGIN, 109.0);

    // Delivery date
    draw::text(&layer, &bold, "DELIVERY ON:", 10.0, MARGIN, 104.0);
    draw::text(&layer, &bold, &format_date(order.delivery_date), 12.0, MARGIN, 98.0);

    draw::hline(&layer, MARGIN, PAGE_WIDTH - MARGIN, 95.0);

    // Payment summary, due emphasized
    draw::text(&layer, &bold, "PAYMENT SUMMARY", 10.0, MARGIN, 90.0);
    draw::text(
        &layer,
        &font,
        &format!("Total: {}", format_pkr(order.total)),
        10.0,
        MARGIN,
        85.0,
    );
    draw::text(
        &layer,
        &font,
        &format!("Paid: {}", format_pkr(order.paid)),
        10.0,
        MARGIN,
        80.0,
    );

    draw::set_color(&layer, palette::DUE);
    draw::text(
        &layer,
        &bold,
        &format!("DUE: {}", format_pkr(order.due)),
        14.0,
        MARGIN,
        70.0,
    );

    draw::set_color(&layer, palette::BLACK);
    draw::text_centered(
        &layer,
        &font,
        "Please bring this slip for pickup",
        8.0,
        CENTER,
        55.0,
    );

    let mut writer = std::io::BufWriter::new(Vec::<u8>::new());
    doc.save(&mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| crate::RenderError::Pdf(e.to_string()))?;

    tracing::debug!(
        invoice = %order.invoice_number,
        bytes = bytes.len(),
        "pickup token rendered"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{OrderItem, OrderStatus, PaymentMethod, Priority};

    fn sample_order() -> Order {
        Order {
            id: Some("ord-2".to_string()),
            invoice_number: "RT-2024-00007".to_string(),
            created_at: 1_705_912_335_000,
            updated_at: 1_705_912_335_000,
            customer_name: "Imran Khan".to_string(),
            customer_phone: "0300-1122334".to_string(),
            customer_address: None,
            items: vec![OrderItem {
                id: "i1".to_string(),
                name: "Photo Printing 4x6".to_string(),
                qty: 20,
                unit_price: 25.0,
                line_total: 500.0,
            }],
            subtotal: 500.0,
            discount: 0.0,
            tax: 0.0,
            total: 500.0,
            paid: 200.0,
            due: 300.0,
            payment_method: PaymentMethod::Cash,
            delivery_date: 1_705_998_735_000,
            priority: Priority::Normal,
            notes: String::new(),
            status: OrderStatus::Pending,
            completion_date: None,
        }
    }

    #[test]
    fn test_render_token_is_valid_pdf() {
        let bytes =
            render_token(&sample_order(), &ShopSettings::default(), 1_705_912_335_000).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 300);
    }

    #[test]
    fn test_render_token_does_not_mutate_order() {
        let order = sample_order();
        let before = order.clone();
        render_token(&order, &ShopSettings::default(), 0).unwrap();
        assert_eq!(order, before);
    }
}
