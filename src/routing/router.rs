//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Look up the route for a (method, path) pair
//! - Return matched route, method-not-allowed, or explicit not-found
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan, first match wins
//! - A path known under another method reports the allowed methods

use axum::http::Method;

use crate::routing::matcher::{PathParams, PathPattern, PatternError};

/// Handler selected by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Utc,
    ListPhones,
    GetPhone,
    PhonesByMake,
    PhonesByOs,
    CreatePhone,
}

impl Endpoint {
    /// Stable label for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Health => "health",
            Endpoint::Utc => "utc",
            Endpoint::ListPhones => "list_phones",
            Endpoint::GetPhone => "get_phone",
            Endpoint::PhonesByMake => "phones_by_make",
            Endpoint::PhonesByOs => "phones_by_os",
            Endpoint::CreatePhone => "create_phone",
        }
    }
}

/// A single entry of the route table.
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub pattern: PathPattern,
    pub endpoint: Endpoint,
}

impl Route {
    pub fn new(method: Method, pattern: &str, endpoint: Endpoint) -> Result<Self, PatternError> {
        Ok(Self {
            method,
            pattern: PathPattern::parse(pattern)?,
            endpoint,
        })
    }
}

/// Outcome of a route lookup.
#[derive(Debug)]
pub enum Dispatch<'a> {
    Matched { route: &'a Route, params: PathParams },
    /// The path exists, but not for this method.
    MethodNotAllowed { allowed: Vec<Method> },
    NotFound,
}

/// Ordered, immutable route table.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Build a router from routes, in evaluation order.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The phone catalog route table.
    pub fn catalog() -> Result<Self, PatternError> {
        Ok(Self::new(vec![
            Route::new(Method::GET, "/health", Endpoint::Health)?,
            Route::new(Method::GET, "/utc", Endpoint::Utc)?,
            Route {
                pattern: PathPattern::parse("/api/phones")?.with_optional_trailing_slash(),
                method: Method::GET,
                endpoint: Endpoint::ListPhones,
            },
            Route::new(Method::GET, "/api/phones/{id:[0-9]+}", Endpoint::GetPhone)?,
            Route::new(Method::GET, "/api/phones/make/{make:[a-zA-Z]+}", Endpoint::PhonesByMake)?,
            Route::new(Method::GET, "/api/phones/os/{os:[a-zA-Z]+}", Endpoint::PhonesByOs)?,
            Route::new(Method::POST, "/api/phones", Endpoint::CreatePhone)?,
        ]))
    }

    /// All routes in evaluation order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Select the route for a request.
    pub fn dispatch(&self, method: &Method, path: &str) -> Dispatch<'_> {
        let mut allowed: Vec<Method> = Vec::new();

        for route in &self.routes {
            let Some(params) = route.pattern.matches(path) else {
                continue;
            };
            if route.method == *method {
                return Dispatch::Matched { route, params };
            }
            if !allowed.contains(&route.method) {
                allowed.push(route.method.clone());
            }
        }

        if allowed.is_empty() {
            Dispatch::NotFound
        } else {
            Dispatch::MethodNotAllowed { allowed }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::catalog().unwrap()
    }

    fn endpoint(method: Method, path: &str) -> Option<Endpoint> {
        match router().dispatch(&method, path) {
            Dispatch::Matched { route, .. } => Some(route.endpoint),
            _ => None,
        }
    }

    #[test]
    fn test_route_table_order() {
        let table: Vec<_> = router()
            .routes()
            .iter()
            .map(|r| (r.method.clone(), r.pattern.as_str().to_string(), r.endpoint))
            .collect();

        assert_eq!(table.len(), 7);
        assert_eq!(table[0], (Method::GET, "/health".to_string(), Endpoint::Health));
        assert_eq!(table[3].2, Endpoint::GetPhone);
        assert_eq!(table[6], (Method::POST, "/api/phones".to_string(), Endpoint::CreatePhone));
    }

    #[test]
    fn test_get_routes() {
        assert_eq!(endpoint(Method::GET, "/health"), Some(Endpoint::Health));
        assert_eq!(endpoint(Method::GET, "/utc"), Some(Endpoint::Utc));
        assert_eq!(endpoint(Method::GET, "/api/phones"), Some(Endpoint::ListPhones));
        assert_eq!(endpoint(Method::GET, "/api/phones/"), Some(Endpoint::ListPhones));
        assert_eq!(endpoint(Method::GET, "/api/phones/0"), Some(Endpoint::GetPhone));
        assert_eq!(endpoint(Method::GET, "/api/phones/make/Apple"), Some(Endpoint::PhonesByMake));
        assert_eq!(endpoint(Method::GET, "/api/phones/os/ios"), Some(Endpoint::PhonesByOs));
    }

    #[test]
    fn test_params_extracted() {
        let router = router();
        match router.dispatch(&Method::GET, "/api/phones/17") {
            Dispatch::Matched { params, .. } => assert_eq!(params.get("id"), Some("17")),
            other => panic!("unexpected dispatch: {:?}", other),
        }
        match router.dispatch(&Method::GET, "/api/phones/os/android") {
            Dispatch::Matched { params, .. } => assert_eq!(params.get("os"), Some("android")),
            other => panic!("unexpected dispatch: {:?}", other),
        }
    }

    #[test]
    fn test_post_route() {
        assert_eq!(endpoint(Method::POST, "/api/phones"), Some(Endpoint::CreatePhone));
    }

    #[test]
    fn test_not_found() {
        let router = router();
        for path in ["/", "/api", "/api/phones/make/", "/api/phones/os/io5", "/api/phones/x1", "/healthz"] {
            assert!(
                matches!(router.dispatch(&Method::GET, path), Dispatch::NotFound),
                "{} should not match",
                path
            );
        }
    }

    #[test]
    fn test_method_not_allowed() {
        let router = router();
        match router.dispatch(&Method::DELETE, "/api/phones") {
            Dispatch::MethodNotAllowed { allowed } => {
                assert_eq!(allowed, vec![Method::GET, Method::POST]);
            }
            other => panic!("unexpected dispatch: {:?}", other),
        }
        match router.dispatch(&Method::POST, "/health") {
            Dispatch::MethodNotAllowed { allowed } => assert_eq!(allowed, vec![Method::GET]),
            other => panic!("unexpected dispatch: {:?}", other),
        }
    }
}
