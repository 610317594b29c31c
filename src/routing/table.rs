//! Compiled routing table.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::schema::{Method, MockConfig, ResponseSpec};

/// Immutable mapping from path to method-indexed response specs.
///
/// Built once per (re)load and never mutated; a reload builds a brand-new
/// table and atomically replaces the published one. Requests that captured
/// the old table keep it alive until they finish.
#[derive(Debug, Default)]
pub struct RouteTable {
    pub(crate) routes: HashMap<String, HashMap<Method, Arc<ResponseSpec>>>,
}

impl RouteTable {
    /// Compile a validated configuration into a table.
    ///
    /// Pure function of its input; validation has already guaranteed unique
    /// paths and unique methods per path, so compilation cannot fail.
    pub fn build(config: &MockConfig) -> Self {
        let mut routes: HashMap<String, HashMap<Method, Arc<ResponseSpec>>> =
            HashMap::with_capacity(config.routes.len());

        for route in &config.routes {
            let methods = routes.entry(route.path.clone()).or_default();
            for spec in &route.responses {
                let spec = Arc::new(spec.clone());
                for method in &spec.methods {
                    methods.insert(*method, Arc::clone(&spec));
                }
            }
        }

        Self { routes }
    }

    /// Number of configured paths.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ResponsePayload, RouteSpec};
    use std::collections::BTreeMap;

    fn sample_config() -> MockConfig {
        MockConfig {
            port: 8888,
            routes: vec![RouteSpec {
                path: "/x".into(),
                responses: vec![ResponseSpec {
                    methods: vec![Method::Get, Method::Head],
                    headers: BTreeMap::new(),
                    payload: ResponsePayload::Static { body: "hello".into() },
                }],
            }],
        }
    }

    #[test]
    fn build_indexes_every_declared_method() {
        let table = RouteTable::build(&sample_config());
        assert_eq!(table.len(), 1);
        let methods = &table.routes["/x"];
        assert_eq!(methods.len(), 2);
        // Both methods share one spec instance.
        assert!(Arc::ptr_eq(&methods[&Method::Get], &methods[&Method::Head]));
    }

    #[test]
    fn empty_config_builds_an_empty_table() {
        let table = RouteTable::build(&MockConfig { port: 8888, routes: vec![] });
        assert!(table.is_empty());
    }
}
