//! Resolution behaviour of the customer/order routing table.

use trie_router::routing::{Router, RoutingError};

mod common;

use common::{customer_router, dynamic, lit, template, Resource};

#[test]
fn test_all_customers() {
    let router = customer_router();
    assert_eq!(router.resolve("/customers"), Ok(Resource::AllCustomers));
    assert_eq!(router.resolve("/customers/"), Ok(Resource::AllCustomers));
    assert_eq!(router.resolve("customers"), Ok(Resource::AllCustomers));
}

#[test]
fn test_customer() {
    let router = customer_router();
    assert_eq!(
        router.resolve("/customers/33245"),
        Ok(Resource::Customer {
            customer_id: "33245".into()
        })
    );
}

#[test]
fn test_customer_orders() {
    let router = customer_router();
    assert_eq!(
        router.resolve("/customers/33245/orders"),
        Ok(Resource::AllCustomerOrders {
            customer_id: "33245".into()
        })
    );
}

#[test]
fn test_customer_order() {
    let router = customer_router();
    assert_eq!(
        router.resolve("/customers/33245/orders/8769"),
        Ok(Resource::CustomerOrder {
            customer_id: "33245".into(),
            order_id: "8769".into(),
        })
    );
}

#[test]
fn test_customer_order_lineitems() {
    let router = customer_router();
    assert_eq!(
        router.resolve("/customers/33245/orders/8769/lineitems"),
        Ok(Resource::AllCustomerOrderLineitems {
            customer_id: "33245".into(),
            order_id: "8769".into(),
        })
    );
}

#[test]
fn test_unknown_path() {
    let router = customer_router();
    assert_eq!(
        router.resolve("/unknown"),
        Err(RoutingError::RouteNotFound {
            path: "/unknown".into()
        })
    );
}

#[test]
fn test_delimiter_insensitivity() {
    let router = customer_router();
    for path in [
        "/customers/7/orders/9",
        "/customers/7/orders/9/",
        "customers/7/orders/9",
        "//customers/7/orders/9//",
    ] {
        assert_eq!(
            router.resolve(path),
            Ok(Resource::CustomerOrder {
                customer_id: "7".into(),
                order_id: "9".into(),
            }),
            "path {path}"
        );
    }
}

#[test]
fn test_diverging_prefix_fails_closed() {
    let router = customer_router();
    // Typo after a valid prefix.
    assert!(router.resolve("/customers/33245/order").unwrap_err().is_not_found());
    assert!(router.resolve("/customers/33245/orderz").unwrap_err().is_not_found());
    assert!(router.resolve("/customer").unwrap_err().is_not_found());
    // Extra trailing segment.
    assert!(router
        .resolve("/customers/1/orders/2/lineitems/3")
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_resolution_is_total() {
    let router = customer_router();
    for path in ["", "/", "//", "{", "customers/\u{1F600}", "\u{0}", "customers/a/b/c/d/e"] {
        let _ = router.resolve(path);
    }
    assert_eq!(
        router.resolve("customers/\u{1F600}"),
        Ok(Resource::Customer {
            customer_id: "\u{1F600}".into()
        })
    );
}

#[test]
fn test_empty_segment_is_captured_speculatively() {
    let router = customer_router();
    // The character after `customers/` opens a capture even when it is a
    // separator, so the capture swallows the rest of the segment.
    assert_eq!(
        router.resolve("/customers//orders"),
        Ok(Resource::Customer {
            customer_id: "/orders".into()
        })
    );
}

#[test]
fn test_reregistration_keeps_last_factory() {
    let mut router: Router<&'static str> = Router::new();
    let customer = || template(vec![lit("customers/"), dynamic()]);

    router.register(customer(), |_| "first").unwrap();
    router.register(customer(), |_| "second").unwrap();

    assert_eq!(router.len(), 1);
    assert_eq!(router.resolve("/customers/1"), Ok("second"));
}

#[test]
fn test_captures_in_order_of_appearance() {
    let mut router: Router<Vec<String>> = Router::new();
    router
        .register_pattern("a/{x}/b/{y}/c/{z}", |c| c.to_vec())
        .unwrap();

    assert_eq!(
        router.resolve("/a/1/b/22/c/333").unwrap(),
        vec!["1".to_string(), "22".to_string(), "333".to_string()]
    );
}

#[test]
fn test_invalid_templates_are_rejected() {
    let mut router: Router<()> = Router::new();
    assert!(matches!(
        router.register(template(vec![]), |_| ()),
        Err(RoutingError::InvalidTemplate { .. })
    ));
    assert!(matches!(
        router.register(template(vec![lit("customers"), dynamic()]), |_| ()),
        Err(RoutingError::InvalidTemplate { .. })
    ));
    assert!(router.is_empty());
    assert!(router.resolve("/customers").unwrap_err().is_not_found());
}
