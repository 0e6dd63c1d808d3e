//! Property tests over generated route tables

use orbit_core::{ConfigurationError, NavigationError, Route, Router};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Unique segment names give unique paths and names
fn route_table() -> impl Strategy<Value = Vec<Route>> {
    prop::collection::btree_set("[a-z]{1,8}", 1..12).prop_map(|segments: BTreeSet<String>| {
        segments
            .into_iter()
            .map(|segment| {
                let name = format!("{}Route", segment.to_uppercase());
                Route::new(format!("/{}", segment), name, format!("{}View", segment))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn unique_tables_register_and_resolve_by_name(routes in route_table()) {
        let mut router = Router::register(routes.clone()).unwrap();

        for route in &routes {
            let resolved = router.navigate(route.name.as_str()).unwrap();
            prop_assert_eq!(resolved, route);
        }
    }

    #[test]
    fn duplicate_path_fails(routes in route_table(), pick in any::<prop::sample::Index>()) {
        let original = pick.get(&routes).clone();
        let mut routes = routes;
        routes.push(Route::new(original.path.as_str(), "Duplicate-Path", "View"));

        let is_duplicate_path = matches!(
            Router::register(routes),
            Err(ConfigurationError::DuplicatePath { .. })
        );
        prop_assert!(is_duplicate_path);
    }

    #[test]
    fn duplicate_name_fails(routes in route_table(), pick in any::<prop::sample::Index>()) {
        let original = pick.get(&routes).clone();
        let mut routes = routes;
        routes.push(Route::new("/duplicate/name", original.name.as_str(), "View"));

        let is_duplicate_name = matches!(
            Router::register(routes),
            Err(ConfigurationError::DuplicateName { .. })
        );
        prop_assert!(is_duplicate_name);
    }

    #[test]
    fn unknown_path_leaves_state(
        routes in route_table(),
        first in any::<prop::sample::Index>(),
        missing in "/[0-9]{1,6}",
    ) {
        let mut router = Router::register(routes.clone()).unwrap();
        let start = first.get(&routes).path.clone();
        router.navigate(start.as_str()).unwrap();

        let err = router.navigate(missing.as_str()).unwrap_err();
        prop_assert_eq!(err, NavigationError::NotFound { target: missing.clone() });
        prop_assert_eq!(router.current().map(|r| r.path.clone()), Some(start));
        prop_assert_eq!(router.history().count(), 1);
    }

    #[test]
    fn navigate_sets_current_path(routes in route_table(), picks in prop::collection::vec(any::<prop::sample::Index>(), 1..10)) {
        let mut router = Router::register(routes.clone()).unwrap();

        for pick in picks {
            let path = pick.get(&routes).path.clone();
            let first = router.navigate(path.as_str()).unwrap().clone();
            let second = router.navigate(path.as_str()).unwrap().clone();

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(router.current().map(|r| &r.path), Some(&path));
        }
    }

    #[test]
    fn back_after_first_navigation_fails(routes in route_table(), pick in any::<prop::sample::Index>()) {
        let mut router = Router::register(routes.clone()).unwrap();
        router.navigate(pick.get(&routes).name.as_str()).unwrap();

        prop_assert_eq!(router.back().unwrap_err(), NavigationError::NoHistory);
    }
}
