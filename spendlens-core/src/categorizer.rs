//! Ordered keyword rules mapping statement descriptions to categories.
//!
//! First matching rule wins, so rule order is load-bearing: a description
//! holding both a transport and a food keyword resolves to transport.

use crate::transaction::Category;

struct CategoryRule {
    category: Category,
    keywords: &'static [&'static str],
}

/// Evaluated top to bottom; keep the priority order intact when extending.
static RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::PublicTransport,
        keywords: &["bus/mrt", "transit"],
    },
    CategoryRule {
        category: Category::OtherTransport,
        keywords: &["grab", "gojek", "tada", "ryde", "transport"],
    },
    CategoryRule {
        category: Category::Subscriptions,
        keywords: &[
            "spotify",
            "amazon prime",
            "amzn",
            "chatgpt",
            "netflix",
            "youtube",
            "google one",
        ],
    },
    CategoryRule {
        category: Category::Games,
        keywords: &[
            "clash of clans",
            "riot games",
            "epic games",
            "steam",
            "playstation",
            "xbox",
        ],
    },
    CategoryRule {
        category: Category::Groceries,
        keywords: &[
            "ntuc",
            "fairprice",
            "supermarket",
            "shengsiong",
            "giant",
            "cold storage",
            "phoon huat",
        ],
    },
    CategoryRule {
        category: Category::FoodAndDining,
        keywords: &[
            "food",
            "restaurant",
            "cafe",
            "mcdonald",
            "kfc",
            "burger",
            "pizza",
            "starbucks",
            "wokhey",
            "wok hey",
            "subway",
            "jollibee",
            "wingstop",
            "tori-q",
            "nalan",
            "ijooz",
            "four leaves",
            "lavi-maxwell",
            "7-eleven",
            "mr coconut",
            "a hot hideout",
            "din tai fung",
            "astons",
            "ts/udon don bar",
        ],
    },
    CategoryRule {
        category: Category::OverseasExpenditure,
        keywords: &["revolut"],
    },
    CategoryRule {
        category: Category::Transfers,
        keywords: &["paynow", "transfer", "fast payment"],
    },
    CategoryRule {
        category: Category::Income,
        keywords: &["salary", "interest", "dividend"],
    },
];

/// Categorize a statement description. Case-insensitive substring match.
pub fn categorize(description: &str) -> Category {
    let desc = description.to_lowercase();

    for rule in RULES {
        if rule.keywords.iter().any(|kw| desc.contains(kw)) {
            return rule.category;
        }
    }

    Category::Uncategorized
}
