//! Shared fixtures for integration tests.

use trie_router::routing::{Router, Segment, Template};

/// Resources of the customer/order routing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    AllCustomers,
    Customer { customer_id: String },
    AllCustomerOrders { customer_id: String },
    CustomerOrder { customer_id: String, order_id: String },
    AllCustomerOrderLineitems { customer_id: String, order_id: String },
}

pub fn lit(text: &str) -> Segment {
    Segment::literal(text)
}

pub fn dynamic() -> Segment {
    Segment::placeholder()
}

pub fn template(segments: Vec<Segment>) -> Template {
    Template::new(segments)
}

/// The five customer routes, registered as segment lists.
pub fn customer_router() -> Router<Resource> {
    let mut router = Router::new();
    router
        .register(template(vec![lit("customers")]), |_| Resource::AllCustomers)
        .unwrap();
    router
        .register(template(vec![lit("customers/"), dynamic()]), |c| {
            Resource::Customer {
                customer_id: c[0].clone(),
            }
        })
        .unwrap();
    router
        .register(
            template(vec![lit("customers/"), dynamic(), lit("/orders")]),
            |c| Resource::AllCustomerOrders {
                customer_id: c[0].clone(),
            },
        )
        .unwrap();
    router
        .register(
            template(vec![lit("customers/"), dynamic(), lit("/orders/"), dynamic()]),
            |c| Resource::CustomerOrder {
                customer_id: c[0].clone(),
                order_id: c[1].clone(),
            },
        )
        .unwrap();
    router
        .register(
            template(vec![
                lit("customers/"),
                dynamic(),
                lit("/orders/"),
                dynamic(),
                lit("/lineitems"),
            ]),
            |c| Resource::AllCustomerOrderLineitems {
                customer_id: c[0].clone(),
                order_id: c[1].clone(),
            },
        )
        .unwrap();
    router
}
