use rusty_money::iso::Currency;
use storefront::prelude::{InventoryRecord, Order, Page, Product, format_amount};
use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

fn table(builder: Builder, right_aligned: std::ops::Range<usize>) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(right_aligned), Alignment::right());

    table
}

fn or_dash(value: Option<impl ToString>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}

pub(crate) fn page_footer<T>(page: &Page<T>, noun: &str) -> String {
    format!(
        "Page {} of {} ({} {noun})",
        page.page_number,
        page.total_pages,
        page.total_elements
    )
}

pub(crate) fn products(page: &Page<Product>, currency: &'static Currency) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Code", "Name", "Price", "In Stock"]);

    for product in &page.data {
        builder.push_record([
            product.product_code.clone(),
            product.product_name.clone(),
            format_amount(product.price, currency),
            if product.in_stock { "yes" } else { "no" }.to_string(),
        ]);
    }

    format!(
        "{}\n{}",
        table(builder, 2..3),
        page_footer(page, "products")
    )
}

pub(crate) fn inventory(page: &Page<InventoryRecord>) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Code", "Available", "Reserved"]);

    for record in &page.data {
        builder.push_record([
            record.id.to_string(),
            record.product_code.clone(),
            record.available_quantity.to_string(),
            record.reserved_items.to_string(),
        ]);
    }

    format!(
        "{}\n{}",
        table(builder, 2..4),
        page_footer(page, "records")
    )
}

pub(crate) fn orders(page: &Page<Order>, currency: &'static Currency) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Order", "Status", "Created", "Items", "Total"]);

    for order in &page.data {
        builder.push_record([
            order.order_id.to_string(),
            or_dash(order.status.as_deref()),
            or_dash(order.created_date),
            order.items.len().to_string(),
            or_dash(order.total_price.map(|total| format_amount(total, currency))),
        ]);
    }

    format!("{}\n{}", table(builder, 3..5), page_footer(page, "orders"))
}

pub(crate) fn order(order: &Order, currency: &'static Currency) -> String {
    let mut lines = vec![
        format!("order_id: {}", order.order_id),
        format!("status: {}", or_dash(order.status.as_deref())),
        format!("created: {}", or_dash(order.created_date)),
    ];

    if let Some(customer) = &order.customer {
        lines.push(format!("customer: {} <{}>", customer.name, customer.email));
    }

    if let Some(address) = &order.delivery_address {
        lines.push(format!(
            "deliver_to: {}, {} {} {}, {}",
            address.address_line1, address.city, address.state, address.zip_code, address.country
        ));
    }

    let mut builder = Builder::default();

    builder.push_record(["Code", "Quantity", "Price"]);

    for item in &order.items {
        builder.push_record([
            item.product_code.clone(),
            item.quantity.to_string(),
            or_dash(item.product_price.map(|price| format_amount(price, currency))),
        ]);
    }

    lines.push(table(builder, 1..3).to_string());
    lines.push(format!(
        "Total: {}",
        or_dash(order.total_price.map(|total| format_amount(total, currency)))
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso;

    use super::*;

    fn page() -> Page<Product> {
        Page {
            data: vec![Product {
                id: Some(1),
                product_code: "P100".to_string(),
                product_name: "Kettle".to_string(),
                description: None,
                image_url: None,
                price: Decimal::new(3_499, 2),
                in_stock: true,
            }],
            total_elements: 11,
            page_number: 1,
            total_pages: 2,
            is_first: true,
            is_last: false,
            has_next: true,
            has_previous: false,
        }
    }

    #[test]
    fn products_table_lists_prices_and_footer() {
        let output = products(&page(), iso::USD);

        assert!(output.contains("Kettle"), "missing product in {output}");
        assert!(output.contains("$34.99"), "missing price in {output}");
        assert!(output.ends_with("Page 1 of 2 (11 products)"), "bad footer in {output}");
    }
}
