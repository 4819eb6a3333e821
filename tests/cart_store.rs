//! Integration tests for the cart store over file-backed storage.
//!
//! Drives long sequences of add/update/remove operations and checks the cart invariants
//! after every step, both on the returned cart and on what a fresh store reads back.

use rust_decimal::Decimal;
use testresult::TestResult;

use storefront::{
    cart::{Cart, CartProduct, CartStore},
    pricing::round_amount,
    storage::FileStorage,
};

const CODES: [&str; 5] = ["A1", "B2", "C3", "D4", "E5"];

fn product(index: usize) -> CartProduct {
    let code = CODES.get(index % CODES.len()).copied().unwrap_or("A1");

    CartProduct {
        product_code: code.to_string(),
        product_name: format!("Product {code}"),
        // 1.99, 3.98, 5.97, ...
        price: Decimal::new(199, 2) * Decimal::from(index % CODES.len() + 1),
    }
}

/// Small deterministic generator so failures are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }
}

fn assert_invariants(cart: &Cart) {
    let expected = round_amount(
        cart.items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum(),
    );

    assert_eq!(cart.total_amount, expected, "total out of sync in {cart:?}");

    assert!(
        cart.items.iter().all(|item| item.quantity >= 1),
        "non-positive quantity in {cart:?}"
    );

    for (i, item) in cart.items.iter().enumerate() {
        assert!(
            cart.items
                .iter()
                .skip(i + 1)
                .all(|other| other.product_code != item.product_code),
            "duplicate product code {} in {cart:?}",
            item.product_code
        );
    }
}

#[test]
fn random_operation_sequences_keep_invariants() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = CartStore::new(FileStorage::new(dir.path()));
    let mut rng = Lcg(7);

    for _ in 0..500 {
        let index = usize::try_from(rng.next_u64() % 5)?;
        let code = product(index).product_code;

        let cart = match rng.next_u64() % 4 {
            0 | 1 => store.add_product_to_cart(&product(index))?,
            2 => store.update_product_quantity(&code, i64::try_from(rng.next_u64() % 6)? - 1)?,
            _ => store.update_product_quantity(&code, 0)?,
        };

        assert_invariants(&cart);

        let reread = CartStore::new(FileStorage::new(dir.path())).get_cart();

        assert_eq!(reread, cart);
    }

    Ok(())
}

#[test]
fn cart_persists_across_store_instances() -> TestResult {
    let dir = tempfile::tempdir()?;

    {
        let store = CartStore::new(FileStorage::new(dir.path()));

        store.add_product_to_cart(&product(0))?;
        store.add_product_to_cart(&product(0))?;
        store.add_product_to_cart(&product(1))?;
    }

    let store = CartStore::new(FileStorage::new(dir.path()));
    let cart = store.get_cart();

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.item("A1").map(|item| item.quantity), Some(2));
    assert_eq!(cart.total_amount, Decimal::new(796, 2));

    store.delete_cart()?;

    assert!(!dir.path().join("RETAILSTORE_STATE.json").exists());

    Ok(())
}

#[test]
fn add_twice_then_zero_quantity_example() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = CartStore::new(FileStorage::new(dir.path()));
    let a1 = CartProduct {
        product_code: "A1".to_string(),
        product_name: "Widget".to_string(),
        price: Decimal::TEN,
    };

    store.add_product_to_cart(&a1)?;
    let cart = store.add_product_to_cart(&a1)?;

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.item("A1").map(|item| item.quantity), Some(2));
    assert_eq!(cart.total_amount, Decimal::new(2_000, 2));

    let cart = store.update_product_quantity("A1", 0)?;

    assert!(cart.items.is_empty());
    assert_eq!(cart.total_amount, Decimal::ZERO);

    Ok(())
}
