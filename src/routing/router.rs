//! Route lookup and dispatch.

use axum::http::{Method, StatusCode};

/// A (method, path) pair mapped to a fixed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub status: StatusCode,
    pub body: &'static str,
}

impl Route {
    /// True when both the method and the full request target are equal.
    pub fn matches(&self, method: &Method, target: &str) -> bool {
        self.method == *method && self.path == target
    }
}

/// Every route the server answers.
pub static ROUTES: &[Route] = &[
    Route {
        method: Method::GET,
        path: "/hello",
        status: StatusCode::OK,
        body: "OK",
    },
    Route {
        method: Method::GET,
        path: "/health",
        status: StatusCode::OK,
        body: "healthy",
    },
];

/// Outcome of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Found(&'static Route),
    NotFound,
}

impl RouteMatch {
    pub const NOT_FOUND_BODY: &'static str = "Not Found";

    pub fn status(&self) -> StatusCode {
        match self {
            RouteMatch::Found(route) => route.status,
            RouteMatch::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            RouteMatch::Found(route) => route.body,
            RouteMatch::NotFound => Self::NOT_FOUND_BODY,
        }
    }
}

/// Immutable route table. Cheap to copy and share between connections.
#[derive(Debug, Clone, Copy)]
pub struct Router {
    routes: &'static [Route],
}

impl Router {
    pub fn new() -> Self {
        Self { routes: ROUTES }
    }

    /// Find the route for `method` and `target`, first match wins.
    pub fn dispatch(&self, method: &Method, target: &str) -> RouteMatch {
        self.routes
            .iter()
            .find(|route| route.matches(method, target))
            .map(RouteMatch::Found)
            .unwrap_or(RouteMatch::NotFound)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
