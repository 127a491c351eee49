//! Product listing with category and stock filtering.

use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

use cachelab_data::{category_options, fetch_products, fetch_user, Product, ProductFilter, User};

use super::{back_link, escape_html, page};

/// Query parameters carrying the filter selection.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    category: Option<String>,
    in_stock: Option<String>,
}

/// GET /products
pub async fn products(Query(query): Query<ProductsQuery>) -> Html<String> {
    let filter = ProductFilter::from_query(query.category.as_deref(), query.in_stock.as_deref());

    // Products and user load concurrently, like the container component
    // this page descends from.
    let (products, user) = futures::join!(fetch_products(), fetch_user());
    let shown = filter.apply(&products);

    let mut body = String::new();
    body.push_str(&back_link("/", "Home"));
    body.push_str("<h1>Products</h1>\n");
    body.push_str(&render_user_box(&user));
    body.push_str(&render_filter_row(&products, &filter));

    if shown.is_empty() {
        body.push_str(r#"<p class="empty">No matching products</p>"#);
    } else {
        body.push_str("<div class=\"product-grid\">\n");
        for product in &shown {
            body.push_str(&render_product_card(product));
        }
        body.push_str("</div>\n");
    }

    Html(page("Products | cachelab", &body))
}

fn render_user_box(user: &User) -> String {
    format!(
        r#"<div class="card"><p>Signed in: <strong>{}</strong> ({})</p></div>
"#,
        escape_html(&user.name),
        user.role
    )
}

fn render_filter_row(products: &[Product], filter: &ProductFilter) -> String {
    let mut html = String::from("<div class=\"filter-row\">\n");

    let stock_param = if filter.in_stock_only { "1" } else { "0" };
    for option in category_options(products) {
        let active = if option == filter.category { " class=\"active\"" } else { "" };
        html.push_str(&format!(
            r#"<a{active} href="/products?category={}&in_stock={stock_param}">{}</a>
"#,
            escape_html(option.query_value()),
            escape_html(option.label()),
        ));
    }
    html.push_str("</div>\n");

    let (toggle_target, toggle_label) = if filter.in_stock_only {
        ("0", "Showing in-stock only &mdash; show all stock states")
    } else {
        ("1", "Show in-stock only")
    };
    html.push_str(&format!(
        r#"<p><a href="/products?category={}&in_stock={toggle_target}">{toggle_label}</a></p>
"#,
        escape_html(filter.category.query_value()),
    ));

    html
}

fn render_product_card(product: &Product) -> String {
    let (badge_class, badge_label) = if product.in_stock {
        ("stock-badge stock-in", "In stock")
    } else {
        ("stock-badge stock-out", "Out of stock")
    };

    format!(
        r#"<div class="product-card">
    <h3>{name}</h3>
    <p>{description}</p>
    <p class="mono">{category}</p>
    <p><strong>{price}</strong> <span class="{badge_class}">{badge_label}</span></p>
</div>
"#,
        name = escape_html(&product.name),
        description = escape_html(&product.description),
        category = escape_html(&product.category),
        price = product.display_price(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cachelab_data::{sample_products, CategoryFilter};

    #[test]
    fn test_filter_row_marks_the_active_category() {
        let products = sample_products();
        let filter = ProductFilter {
            category: CategoryFilter::Category("Audio".to_string()),
            in_stock_only: false,
        };

        let html = render_filter_row(&products, &filter);
        assert!(html.contains(r#"<a class="active" href="/products?category=Audio&in_stock=0">Audio</a>"#));
    }

    #[test]
    fn test_product_card_shows_stock_state() {
        let products = sample_products();
        let out_of_stock = products.iter().find(|p| !p.in_stock).unwrap();
        assert!(render_product_card(out_of_stock).contains("Out of stock"));
    }
}
