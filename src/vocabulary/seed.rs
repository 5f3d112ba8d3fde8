use lazy_static::lazy_static;

use super::domain::Domain;

lazy_static! {
    pub static ref SEED_CATEGORIES: Vec<&'static str> = vec![
        "shoes", "phone", "earphone", "shirts", "watches", "laptop",
        // footwear
        "sandals", "boots", "heels", "flats", "slippers", "sneakers",
        // clothing
        "pants", "jeans", "jackets", "dresses",
        // electronics
        "mobile", "smartphone", "tablet", "camera",
        // accessories
        "bags", "wallets", "belts",
    ];

    pub static ref SEED_BRANDS: Vec<&'static str> = vec![
        "nike", "adidas", "puma", "reebok", "campus", "sparx", "bata", "woodland",
        "apple", "samsung", "oneplus", "xiaomi", "realme", "vivo", "oppo", "motorola",
        "sony", "boat", "jbl", "noise", "boult",
        "allen solly", "peter england", "van heusen", "louis philippe", "arrow", "ucb",
        "titan", "fastrack", "casio", "fossil", "sonata", "timex",
        "hp", "dell", "lenovo", "asus", "acer", "msi",
        "skechers", "new balance", "asics", "fila", "converse", "vans", "red tape", "h&m",
        "zara", "crocs",
    ];

    pub static ref SEED_COLORS: Vec<&'static str> = vec![
        "red", "blue", "black", "white", "green", "yellow", "pink", "brown", "grey", "gray",
        "orange", "purple", "silver", "gold", "navy", "maroon", "beige",
    ];

    pub static ref SEED_GENDERS: Vec<&'static str> = vec![
        "men", "women", "boys", "girls", "unisex", "male", "female", "mens", "womens", "kids",
    ];

    pub static ref SEED_SYNONYMS: Vec<(Domain, &'static str, Vec<&'static str>)> = vec![
        (Domain::Category, "shoes", vec![
            "footwear", "sneakers", "kicks", "trainers", "runners", "sports shoes", "running shoes",
        ]),
        (Domain::Category, "shirts", vec![
            "shirt", "tshirt", "t-shirt", "top", "tee", "polo", "formal shirt", "casual shirt",
            "shirst", "shirsts",
        ]),
        (Domain::Category, "phone", vec![
            "mobile", "smartphone", "cellphone", "handset", "iphone", "android",
        ]),
        (Domain::Category, "earphone", vec![
            "earphones", "earbuds", "headphones", "headset", "airpods", "tws", "wireless earbuds",
        ]),
        (Domain::Category, "laptop", vec![
            "laptops", "notebook", "computer", "macbook", "chromebook", "ultrabook",
        ]),
        (Domain::Category, "watches", vec![
            "watch", "smartwatch", "wristwatch", "timepiece", "fitness band",
        ]),
        (Domain::Brand, "nike", vec!["nikes"]),
        (Domain::Brand, "adidas", vec!["addidas", "adiddas"]),
        (Domain::Brand, "samsung", vec!["samung", "samsng"]),
        (Domain::Brand, "apple", vec!["iphone", "macbook", "airpods"]),
        (Domain::Brand, "oneplus", vec!["one plus", "1+"]),
        (Domain::Brand, "xiaomi", vec!["mi", "redmi", "poco"]),
    ];
}

pub fn seed_terms(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Category => &SEED_CATEGORIES,
        Domain::Brand => &SEED_BRANDS,
        Domain::Color => &SEED_COLORS,
        Domain::Gender => &SEED_GENDERS,
    }
}
