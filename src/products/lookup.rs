use std::collections::HashMap;

use lazy_static::lazy_static;

pub const CATEGORIES: [&str; 10] = [
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Sports & Outdoors",
    "Books",
    "Toys & Games",
    "Food & Beverages",
    "Health & Beauty",
    "Automotive",
    "Office Supplies",
];

pub const BRANDS: [&str; 15] = [
    "TechPro",
    "SmartHome",
    "EcoLife",
    "ActiveGear",
    "ComfortZone",
    "PureNature",
    "UrbanStyle",
    "PowerMax",
    "VitalHealth",
    "CreativeMinds",
    "GreenChoice",
    "ProFit",
    "EliteQuality",
    "SwiftTech",
    "BrightFuture",
];

pub const ADJECTIVES: [&str; 10] = [
    "Premium",
    "Deluxe",
    "Professional",
    "Ultimate",
    "Essential",
    "Compact",
    "Portable",
    "Advanced",
    "Classic",
    "Modern",
];

lazy_static! {
    static ref BASE_NAMES: HashMap<&'static str, &'static [&'static str]> = {
        let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        m.insert("Electronics", &[
            "Wireless Mouse", "Bluetooth Speaker", "Smart Watch", "USB Cable", "Power Bank",
            "Earbuds", "Keyboard", "Monitor", "Laptop Stand", "Webcam",
        ]);
        m.insert("Clothing", &[
            "T-Shirt", "Jeans", "Sneakers", "Jacket", "Dress",
            "Hoodie", "Socks", "Cap", "Scarf", "Gloves",
        ]);
        m.insert("Home & Garden", &[
            "Plant Pot", "Lamp", "Cushion", "Rug", "Curtains",
            "Wall Art", "Vase", "Candle", "Storage Box", "Clock",
        ]);
        m.insert("Sports & Outdoors", &[
            "Yoga Mat", "Dumbbell", "Water Bottle", "Tent", "Backpack",
            "Sleeping Bag", "Hiking Boots", "Bike Helmet", "Running Shoes", "Fitness Band",
        ]);
        m.insert("Books", &[
            "Mystery Novel", "Cookbook", "Self-Help Guide", "Biography", "Science Fiction",
            "History Book", "Travel Guide", "Poetry Collection", "Art Book", "Technical Manual",
        ]);
        m.insert("Toys & Games", &[
            "Board Game", "Puzzle", "Action Figure", "Building Blocks", "Doll",
            "RC Car", "Card Game", "Educational Toy", "Sports Ball", "Craft Kit",
        ]);
        m.insert("Food & Beverages", &[
            "Organic Coffee", "Green Tea", "Protein Bar", "Dried Fruits", "Nuts Mix",
            "Chocolate", "Honey", "Olive Oil", "Spice Set", "Energy Drink",
        ]);
        m.insert("Health & Beauty", &[
            "Moisturizer", "Shampoo", "Sunscreen", "Face Mask", "Lip Balm",
            "Hand Cream", "Body Lotion", "Essential Oil", "Vitamin Supplement", "Face Serum",
        ]);
        m.insert("Automotive", &[
            "Car Charger", "Air Freshener", "Phone Mount", "Seat Cover", "Floor Mat",
            "Cleaning Kit", "Tool Set", "Emergency Kit", "Dash Cam", "Tire Gauge",
        ]);
        m.insert("Office Supplies", &[
            "Notebook", "Pen Set", "Desk Organizer", "Stapler", "Paper Clips",
            "Folder", "Planner", "Sticky Notes", "Calculator", "Tape Dispenser",
        ]);
        m
    };
}

/// Base item names for a category; empty for a category outside [`CATEGORIES`].
pub fn base_names(category: &str) -> &'static [&'static str] {
    BASE_NAMES.get(category).copied().unwrap_or_default()
}
