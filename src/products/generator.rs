use std::collections::HashSet;

use rand::Rng;

use super::lookup;
use super::repo::NewProduct;

/// Synthesize `count` pseudo-random products with unique SKUs.
///
/// SKU collisions inside the batch are retried up to `3 * count` attempts;
/// if the budget runs out, fewer than `count` records come back. Callers must
/// not assume the requested count is met exactly.
pub fn generate_products(count: usize) -> Vec<NewProduct> {
    let mut rng = rand::thread_rng();
    let mut products = Vec::with_capacity(count);
    let mut skus: HashSet<String> = HashSet::with_capacity(count);

    let mut attempts = 0;
    let max_attempts = count * 3;

    while products.len() < count && attempts < max_attempts {
        attempts += 1;
        let product = synthesize(&mut rng);
        if skus.insert(product.sku.clone()) {
            products.push(product);
        }
    }

    products
}

fn synthesize<R: Rng>(rng: &mut R) -> NewProduct {
    let category = lookup::CATEGORIES[rng.gen_range(0..lookup::CATEGORIES.len())];
    let brand = lookup::BRANDS[rng.gen_range(0..lookup::BRANDS.len())];
    let names = lookup::base_names(category);
    let base_name = names[rng.gen_range(0..names.len())];
    let adjective = lookup::ADJECTIVES[rng.gen_range(0..lookup::ADJECTIVES.len())];

    let price = (rng.gen_range(9.99f64..=500.0) * 100.0).round() / 100.0;

    NewProduct {
        name: format!("{adjective} {base_name}"),
        description: synthesize_description(rng, category, base_name, brand),
        category: category.to_string(),
        brand: brand.to_string(),
        price,
        stock_quantity: rng.gen_range(0..1000),
        sku: synthesize_sku(rng),
    }
}

// Format: ABC-12345
fn synthesize_sku<R: Rng>(rng: &mut R) -> String {
    let mut sku = String::with_capacity(9);
    for _ in 0..3 {
        sku.push(rng.gen_range(b'A'..=b'Z') as char);
    }
    sku.push('-');
    for _ in 0..5 {
        sku.push(rng.gen_range(b'0'..=b'9') as char);
    }
    sku
}

fn synthesize_description<R: Rng>(rng: &mut R, category: &str, name: &str, brand: &str) -> String {
    match rng.gen_range(0..10) {
        0 => format!("High-quality {name} from {brand}. Perfect for everyday use."),
        1 => format!("Experience excellence with this {name} by {brand}. Built to last."),
        2 => format!("{brand}'s {name} offers superior performance and reliability."),
        3 => format!("Discover the perfect {name} for your needs. Made by {brand}."),
        4 => format!("Premium {name} designed with care by {brand}. Exceptional value."),
        5 => format!("Get the best {name} on the market from {brand}. Customer favorite."),
        6 => format!("{brand} brings you an outstanding {name}. Quality guaranteed."),
        7 => format!(
            "Transform your {} experience with this {name} from {brand}.",
            category.to_lowercase()
        ),
        8 => format!("Innovative {name} by {brand}. The smart choice for quality."),
        _ => format!("Trusted {name} from {brand}. Loved by thousands of customers."),
    }
}
