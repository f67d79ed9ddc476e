#[cfg(test)]
mod matcher_tests {
    use alertino::matcher::{listing_matches, match_listings, normalize};
    use alertino::models::{filter::Filter, listing::Listing};
    use chrono::Utc;

    fn test_filter(city: &str, max_price: i32, min_rooms: i32) -> Filter {
        Filter {
            id: 1,
            user_id: 7,
            city: city.to_string(),
            max_price,
            min_rooms,
            is_active: true,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    fn test_listing(city: &str, price: i32, rooms: i32, link: &str) -> Listing {
        Listing {
            title: format!("Flat in {city}"),
            price,
            rooms,
            city: city.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn normalize_strips_diacritics_and_case() {
        assert_eq!(normalize("Kraków"), "krakow");
        assert_eq!(normalize("POZNAŃ"), "poznan");
        assert_eq!(normalize("  Warszawa  "), "warszawa");
        assert_eq!(normalize("Gdańsk"), "gdansk");
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        let filter = test_filter("warszawa", 3000, 1);
        assert!(listing_matches(&test_listing("warszawa", 3000, 1, "L1"), &filter));
        assert!(!listing_matches(&test_listing("warszawa", 3001, 1, "L2"), &filter));
    }

    #[test]
    fn room_floor_is_inclusive() {
        let filter = test_filter("warszawa", 3000, 2);
        assert!(listing_matches(&test_listing("warszawa", 2000, 2, "L1"), &filter));
        assert!(!listing_matches(&test_listing("warszawa", 2000, 1, "L2"), &filter));
    }

    #[test]
    fn city_comparison_ignores_diacritics() {
        let filter = test_filter("Kraków", 3000, 1);
        assert!(listing_matches(&test_listing("krakow", 2000, 2, "L1"), &filter));
        assert!(!listing_matches(&test_listing("warszawa", 2000, 2, "L2"), &filter));
    }

    #[test]
    fn matches_example_scenario() {
        let filter = test_filter("warszawa", 3000, 2);
        let listings = vec![
            Listing {
                title: "A".to_string(),
                price: 2500,
                rooms: 3,
                city: "warszawa".to_string(),
                link: "L1".to_string(),
            },
            Listing {
                title: "B".to_string(),
                price: 5000,
                rooms: 2,
                city: "warszawa".to_string(),
                link: "L2".to_string(),
            },
        ];

        let matched = match_listings(&listings, &filter);

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "A");
    }

    #[test]
    fn preserves_input_order() {
        let filter = test_filter("warszawa", 3000, 1);
        let listings = vec![
            test_listing("warszawa", 1000, 1, "L1"),
            test_listing("warszawa", 9000, 1, "L2"),
            test_listing("warszawa", 2000, 1, "L3"),
            test_listing("warszawa", 3000, 1, "L4"),
        ];

        let matched = match_listings(&listings, &filter);

        let links: Vec<&str> = matched.iter().map(|l| l.link.as_str()).collect();
        assert_eq!(links, vec!["L1", "L3", "L4"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let filter = test_filter("warszawa", 3000, 1);
        assert!(match_listings(&[], &filter).is_empty());
    }
}
