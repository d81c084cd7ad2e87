//! End-to-end menu and cart behaviour over the public API.

use flame_cache::Cache;
use flame_commerce::cart::{cart_slot, CartStore, MemoryPersistence, Selection, CART_STORAGE_KEY};
use flame_commerce::catalog::{self, MenuCategory, MenuItem, SideItem, SpiceLevel};
use flame_commerce::search::{filter, MenuQuery};
use flame_commerce::{Currency, MenuItemId, Money};

fn rupees(amount: i64) -> Money {
    Money::from_major(amount, Currency::INR)
}

fn chicken() -> MenuItem {
    MenuItem::new("1", "1/4 Chicken", "Flame-grilled quarter", rupees(349), MenuCategory::Chicken)
}

fn veggie_burger() -> MenuItem {
    MenuItem::new("2", "Veggie Burger", "Chickpea patty", rupees(299), MenuCategory::BurgersWraps)
        .vegetarian()
        .with_spice_level(SpiceLevel::Mild)
}

fn fries() -> SideItem {
    SideItem::new("fries", "PERi-Peri Fries", rupees(99))
}

#[test]
fn menu_and_cart_walkthrough() {
    let catalog = vec![chicken(), veggie_burger()];

    let veg = filter(&catalog, &MenuQuery::new().vegetarian_only());
    assert_eq!(veg, vec![veggie_burger()]);

    let mut store = CartStore::open(MemoryPersistence::new());

    store.add_item(&chicken(), Selection::new());
    store.add_item(&chicken(), Selection::new());
    assert_eq!(store.lines()[0].quantity, 2);
    assert_eq!(store.lines()[0].total_price, rupees(698));

    store.add_item(&veggie_burger(), Selection::new().with_side(fries()));
    store.add_item(&veggie_burger(), Selection::new().with_side(fries()));
    assert_eq!(store.unique_item_count(), 2);
    assert_eq!(store.lines()[1].quantity, 2);
    assert_eq!(store.lines()[1].total_price, rupees(796));

    store.remove_item(&MenuItemId::new("1"));
    assert_eq!(store.unique_item_count(), 1);
    assert_eq!(store.lines()[0].item.id.as_str(), "2");
    assert_eq!(store.total_price(), rupees(796));
    assert_eq!(store.total_items(), 2);
}

#[test]
fn clear_zeroes_totals() {
    let mut store = CartStore::open(MemoryPersistence::new());
    store.add_item(&chicken(), Selection::new());
    store.add_item(&veggie_burger(), Selection::new().with_side(fries()));

    store.clear_cart();
    assert_eq!(store.total_items(), 0);
    assert!(store.total_price().is_zero());
}

#[test]
fn totals_stay_consistent_across_mutations() {
    let mut store = CartStore::open(MemoryPersistence::new());
    let hot = Selection::new().with_spice_level(SpiceLevel::Hot);

    let first = store.add_item(&chicken(), hot.clone()).unwrap();
    store.add_item(&chicken(), Selection::new().with_sauce("garlic"));
    store.add_item_quantity(&veggie_burger(), Selection::new().with_side(fries()), 4);
    store.update_line_quantity(&first, 7);
    store.update_quantity(&MenuItemId::new("2"), 3);
    store.add_item(&chicken(), hot);

    let line_sum = Money::sum(store.lines().iter().map(|line| &line.total_price), Currency::INR);
    assert_eq!(store.total_price(), line_sum);
    for line in store.lines() {
        assert!(line.quantity >= 1);
        assert_eq!(line.total_price, line.unit_price().times(line.quantity));
    }
    assert_eq!(store.line(&first).map(|line| line.quantity), Some(8));
}

#[test]
fn pick_order_of_sides_and_sauces_is_part_of_the_line() {
    let mut store = CartStore::open(MemoryPersistence::new());
    let item = catalog::find_item("1").unwrap();
    let fries = catalog::find_side("fries").unwrap().clone();
    let corn = catalog::find_side("corn").unwrap().clone();

    store.add_item(item, Selection::new().with_sides([fries.clone(), corn.clone()]));
    store.add_item(item, Selection::new().with_sides([corn, fries]));
    assert_eq!(store.unique_item_count(), 2);

    store.add_item(item, Selection::new().with_sauces(["mild", "garlic"]));
    store.add_item(item, Selection::new().with_sauces(["garlic", "mild"]));
    assert_eq!(store.unique_item_count(), 4);
    assert_eq!(store.total_items(), 4);
}

#[test]
fn file_backed_cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let line_id = {
        let mut store = CartStore::open(cart_slot(Cache::open(dir.path()).unwrap()));
        let item = catalog::find_item("1").unwrap();
        let side = catalog::find_side("corn").unwrap();
        let line_id = store.add_item(
            item,
            Selection::new()
                .with_spice_level(SpiceLevel::ExtraHot)
                .with_side(side.clone())
                .with_instructions("well done"),
        )
        .unwrap();
        store.add_item(catalog::find_item("11").unwrap(), Selection::new());
        assert!(store.toggle_cart());
        line_id
    };

    let store = CartStore::open(cart_slot(Cache::open(dir.path()).unwrap()));
    assert_eq!(store.unique_item_count(), 2);
    assert!(!store.is_open());

    let line = store.line(&line_id).unwrap();
    assert_eq!(line.selected_spice_level, Some(SpiceLevel::ExtraHot));
    assert_eq!(line.special_instructions.as_deref(), Some("well done"));
    assert_eq!(line.total_price, rupees(349 + 89));
    assert_eq!(store.total_price(), rupees(349 + 89 + 149));

    let raw = std::fs::read_to_string(dir.path().join(format!("{CART_STORAGE_KEY}.json"))).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["version"], 0);
    assert_eq!(json["state"]["items"].as_array().map(Vec::len), Some(2));
}

#[test]
fn corrupt_file_loads_as_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{CART_STORAGE_KEY}.json")), "{\"state\": 42").unwrap();

    let mut store = CartStore::open(cart_slot(Cache::open(dir.path()).unwrap()));
    assert!(store.is_empty());

    store.add_item(&chicken(), Selection::new());
    let reopened = CartStore::open(cart_slot(Cache::open(dir.path()).unwrap()));
    assert_eq!(reopened.total_items(), 1);
}
