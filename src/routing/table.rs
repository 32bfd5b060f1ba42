//! Routing table built from configuration.
//!
//! Each configured route becomes a template whose factory produces a
//! [`RouteHit`]: the route name plus its captures keyed by placeholder name.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::RouterConfig;
use crate::routing::router::Router;
use crate::routing::types::RoutingResult;

/// Resource produced by a config-built router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteHit {
    pub route: String,
    pub params: BTreeMap<String, String>,
}

/// Build a router from `config`, registering routes in file order.
pub fn build_router(config: &RouterConfig) -> RoutingResult<Router<RouteHit>> {
    let mut router = Router::with_separator(config.separator);

    for route in &config.routes {
        let template = route.template.to_template(config.separator)?;
        let name = route.name.clone();
        let params = template.param_names();

        router.register(template, move |captures| RouteHit {
            route: name.clone(),
            params: params.iter().cloned().zip(captures.iter().cloned()).collect(),
        })?;
    }

    tracing::info!(routes = router.len(), "Routing table built");
    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_build_from_config() {
        let config = parse_config(
            r#"
            [[routes]]
            name = "customers"
            template = "customers"

            [[routes]]
            name = "order"
            template = "customers/{id}/orders/{oid}"

            [[routes]]
            name = "lineitems"
            template = ["customers/", ["dynamic"], "/orders/", ["dynamic"], "/lineitems"]
            "#,
        )
        .unwrap();
        let router = build_router(&config).unwrap();
        assert_eq!(router.len(), 3);

        let hit = router.resolve("/customers/33245/orders/8769").unwrap();
        assert_eq!(hit.route, "order");
        assert_eq!(hit.params["id"], "33245");
        assert_eq!(hit.params["oid"], "8769");

        let hit = router.resolve("/customers/1/orders/2/lineitems").unwrap();
        assert_eq!(hit.route, "lineitems");
        assert_eq!(hit.params["param0"], "1");
        assert_eq!(hit.params["param1"], "2");

        let hit = router.resolve("customers/").unwrap();
        assert!(hit.params.is_empty());
    }

    #[test]
    fn test_build_rejects_unvalidated_template() {
        let mut config = RouterConfig::default();
        config.routes.push(crate::config::RouteConfig {
            name: "bad".into(),
            template: crate::config::TemplateSource::Pattern("{id}".into()),
        });
        assert!(build_router(&config).is_err());
    }
}
