use serde::Deserialize;

/// The catalog list endpoints for museums and products share one
/// filter/sort path; anything listed publicly implements this.
pub trait CatalogItem {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn seller(&self) -> Option<&str> {
        None
    }
    fn price(&self) -> Option<f64> {
        None
    }
    fn quantity(&self) -> Option<i64> {
        None
    }
    fn rating(&self) -> Option<f64> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Price,
    Rating,
}

/// Filter criteria as they arrive on the query string. All fields are
/// optional; bounds supplied together are ANDed.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub price_max: Option<f64>,
    pub quantity_min: Option<i64>,
    pub rating_min: Option<f64>,
    pub sort: Option<SortKey>,
}

impl CatalogQuery {
    /// Case-insensitive substring search over name/description/seller
    /// (a hit on any field matches), plus the single-bound numeric
    /// criteria. An item lacking a bounded attribute fails that bound.
    pub fn matches<T: CatalogItem>(&self, item: &T) -> bool {
        if let Some(term) = self.search.as_deref() {
            let term = term.to_lowercase();
            let hit = item.name().to_lowercase().contains(&term)
                || item.description().to_lowercase().contains(&term)
                || item
                    .seller()
                    .map(|s| s.to_lowercase().contains(&term))
                    .unwrap_or(false);
            if !hit {
                return false;
            }
        }

        if let Some(max) = self.price_max {
            match item.price() {
                Some(price) if price <= max => {}
                _ => return false,
            }
        }

        if let Some(min) = self.quantity_min {
            match item.quantity() {
                Some(quantity) if quantity >= min => {}
                _ => return false,
            }
        }

        if let Some(min) = self.rating_min {
            match item.rating() {
                Some(rating) if rating >= min => {}
                _ => return false,
            }
        }

        true
    }

    /// Filters and sorts the full fetched collection in memory. Name and
    /// price sort ascending, rating descending; unrated/unpriced items go
    /// last either way.
    pub fn apply<T: CatalogItem>(&self, items: Vec<T>) -> Vec<T> {
        let mut items: Vec<T> = items.into_iter().filter(|item| self.matches(item)).collect();

        match self.sort {
            Some(SortKey::Name) => {
                items.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
            }
            Some(SortKey::Price) => items.sort_by(|a, b| {
                a.price()
                    .unwrap_or(f64::INFINITY)
                    .total_cmp(&b.price().unwrap_or(f64::INFINITY))
            }),
            Some(SortKey::Rating) => items.sort_by(|a, b| {
                b.rating()
                    .unwrap_or(f64::NEG_INFINITY)
                    .total_cmp(&a.rating().unwrap_or(f64::NEG_INFINITY))
            }),
            None => {}
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: &'static str,
        description: &'static str,
        seller: Option<&'static str>,
        price: Option<f64>,
        quantity: Option<i64>,
        rating: Option<f64>,
    }

    impl Item {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                description: "",
                seller: None,
                price: None,
                quantity: None,
                rating: None,
            }
        }
    }

    impl CatalogItem for Item {
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> &str {
            self.description
        }
        fn seller(&self) -> Option<&str> {
            self.seller
        }
        fn price(&self) -> Option<f64> {
            self.price
        }
        fn quantity(&self) -> Option<i64> {
            self.quantity
        }
        fn rating(&self) -> Option<f64> {
            self.rating
        }
    }

    #[test]
    fn price_bound_keeps_only_items_at_or_below() {
        let items = vec![
            Item {
                price: Some(9.99),
                ..Item::new("cap")
            },
            Item {
                price: Some(25.0),
                ..Item::new("mug")
            },
            Item {
                price: Some(10.0),
                ..Item::new("pin")
            },
        ];
        let query = CatalogQuery {
            price_max: Some(10.0),
            ..Default::default()
        };

        let result = query.apply(items);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|i| i.price.unwrap() <= 10.0));
    }

    #[test]
    fn search_combined_with_price_bound_requires_both() {
        let items = vec![
            Item {
                description: "a blue shirt",
                price: Some(8.0),
                ..Item::new("tee")
            },
            Item {
                description: "a blue shirt",
                price: Some(80.0),
                ..Item::new("premium tee")
            },
            Item {
                description: "a straw hat",
                price: Some(8.0),
                ..Item::new("hat")
            },
        ];
        let query = CatalogQuery {
            search: Some("SHIRT".to_string()),
            price_max: Some(10.0),
            ..Default::default()
        };

        let result = query.apply(items);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "tee");
    }

    #[test]
    fn search_matches_any_of_name_description_seller() {
        let by_name = Item::new("Shirt Deluxe");
        let by_description = Item {
            description: "best shirt in town",
            ..Item::new("wearable")
        };
        let by_seller = Item {
            seller: Some("ShirtCo"),
            ..Item::new("wearable")
        };
        let miss = Item::new("mug");

        let query = CatalogQuery {
            search: Some("shirt".to_string()),
            ..Default::default()
        };
        assert!(query.matches(&by_name));
        assert!(query.matches(&by_description));
        assert!(query.matches(&by_seller));
        assert!(!query.matches(&miss));
    }

    #[test]
    fn rating_sort_is_descending() {
        let items = vec![
            Item {
                rating: Some(4.5),
                ..Item::new("a")
            },
            Item {
                rating: Some(2.0),
                ..Item::new("b")
            },
            Item {
                rating: Some(5.0),
                ..Item::new("c")
            },
        ];
        let query = CatalogQuery {
            sort: Some(SortKey::Rating),
            ..Default::default()
        };

        let ratings: Vec<f64> = query.apply(items).iter().map(|i| i.rating.unwrap()).collect();
        assert_eq!(ratings, vec![5.0, 4.5, 2.0]);
    }

    #[test]
    fn name_sort_is_case_insensitive_ascending() {
        let items = vec![Item::new("pin"), Item::new("Cap"), Item::new("mug")];
        let query = CatalogQuery {
            sort: Some(SortKey::Name),
            ..Default::default()
        };

        let names: Vec<&str> = query.apply(items).iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Cap", "mug", "pin"]);
    }

    #[test]
    fn quantity_bound_excludes_items_without_quantity() {
        let stocked = Item {
            quantity: Some(12),
            ..Item::new("stocked")
        };
        let unstocked = Item::new("museum-like");

        let query = CatalogQuery {
            quantity_min: Some(1),
            ..Default::default()
        };
        assert!(query.matches(&stocked));
        assert!(!query.matches(&unstocked));
    }
}
