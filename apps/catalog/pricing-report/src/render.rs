//! Console rendering. Amounts are rounded to two decimals here and nowhere else.

use domain_catalog::PricedProduct;
use std::fmt::Write;

pub fn render_text(products: &[PricedProduct]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let mut out = String::new();
    for (index, priced) in products.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        render_one(&mut out, priced);
    }
    out
}

fn render_one(out: &mut String, priced: &PricedProduct) {
    let product = &priced.product;
    let pricing = &priced.pricing;
    let brand = if product.brand().is_empty() {
        "-"
    } else {
        product.brand()
    };

    // Writing into a String cannot fail.
    let _ = writeln!(out, "#{} {}", product.id(), product.title());
    let _ = writeln!(out, "  Category:     {}", product.category());
    let _ = writeln!(out, "  Brand:        {brand}");
    let _ = writeln!(out, "  Price:        {:.2}", pricing.original_price);
    let _ = writeln!(
        out,
        "  Discount:     {:.2}% (-{:.2})",
        pricing.discount_percentage, pricing.discount_amount
    );
    let _ = writeln!(out, "  Final price:  {:.2}", pricing.final_price);
    let _ = writeln!(
        out,
        "  Tax ({:.2}%):  {:.2}",
        pricing.tax_rate * 100.0,
        pricing.tax_amount
    );
    let _ = writeln!(out, "  Total:        {:.2}", pricing.total_with_tax);
}

pub fn render_json(products: &[PricedProduct]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(products)
}
