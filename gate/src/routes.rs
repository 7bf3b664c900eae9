//! Application route table.
//!
//! Every routed path belongs to one access class. Public pages are never
//! gated; everything else is wrapped in a gate whose requirements come from
//! this table. Paths that match no entry are treated as member-only.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::GateError;
use crate::decide::{RouteRequirements, same_path, strip_query};

/// Access class of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// No gate at all (landing page, token-addressed views).
    Public,
    /// Gated with no requirements (sign-in pages bounce signed-in users).
    AuthPage,
    /// Authenticated users, profile not needed (registration).
    AuthOnly,
    /// Authenticated users with a completed profile.
    Member,
}

impl Access {
    /// Gate requirements for this class, `None` for public routes.
    #[must_use]
    pub fn requirements(self) -> Option<RouteRequirements> {
        match self {
            Self::Public => None,
            Self::AuthPage => Some(RouteRequirements::none()),
            Self::AuthOnly => Some(RouteRequirements::auth_only()),
            Self::Member => Some(RouteRequirements::member()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// One route pattern and its access class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    pattern: String,
    segments: Vec<Segment>,
    access: Access,
    redirect_to: Option<String>,
}

impl RouteSpec {
    /// Parse a pattern such as `/contracts/:id`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidPattern`] for relative patterns, empty
    /// inner segments, or unnamed parameters.
    pub fn new(pattern: &str, access: Access) -> Result<Self, GateError> {
        let invalid = |reason| GateError::InvalidPattern { pattern: pattern.to_owned(), reason };
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(invalid("pattern must start with '/'"));
        };

        let mut segments = Vec::new();
        for raw in rest.trim_end_matches('/').split('/').filter(|s| !s.is_empty() || !rest.is_empty()) {
            if raw.is_empty() {
                return Err(invalid("empty segment"));
            }
            match raw.strip_prefix(':') {
                Some("") => return Err(invalid("parameter needs a name")),
                Some(name) => segments.push(Segment::Param(name.to_owned())),
                None => segments.push(Segment::Static(raw.to_owned())),
            }
        }
        Ok(Self { pattern: pattern.to_owned(), segments, access, redirect_to: None })
    }

    /// Send unauthenticated visitors somewhere other than the login page.
    #[must_use]
    pub fn with_redirect(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn access(&self) -> Access {
        self.access
    }

    /// Gate requirements for this route, `None` for public routes.
    #[must_use]
    pub fn requirements(&self) -> Option<RouteRequirements> {
        let reqs = self.access.requirements()?;
        Some(match &self.redirect_to {
            Some(target) => reqs.with_redirect(target.clone()),
            None => reqs,
        })
    }

    /// Match `path` (query and fragment ignored) against the pattern.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let path = strip_query(path);
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        parts.len() == self.segments.len()
            && self.segments.iter().zip(parts).all(|(segment, part)| match segment {
                Segment::Static(expected) => expected == part,
                Segment::Param(_) => true,
            })
    }

    /// Extract a named parameter from a matching `path`.
    #[must_use]
    pub fn param<'a>(&self, path: &'a str, name: &str) -> Option<&'a str> {
        if !self.matches(path) {
            return None;
        }
        let parts = strip_query(path).split('/').filter(|s| !s.is_empty());
        self.segments.iter().zip(parts).find_map(|(segment, part)| match segment {
            Segment::Param(param) if param == name => Some(part),
            _ => None,
        })
    }
}

/// Ordered set of routes; the first matching entry wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteSpec>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RouteTable {
    #[must_use]
    pub fn new(routes: Vec<RouteSpec>) -> Self {
        Self { routes }
    }

    /// The product's route table.
    #[must_use]
    pub fn standard() -> Self {
        let entries = [
            ("/", Access::Public),
            ("/client/:token", Access::Public),
            ("/payment/:token", Access::Public),
            ("/login", Access::AuthPage),
            ("/web3-login", Access::AuthPage),
            ("/register", Access::AuthOnly),
            ("/dashboard", Access::Member),
            ("/contracts", Access::Member),
            ("/contracts/new", Access::Member),
            ("/clients", Access::Member),
        ];
        // Built-in patterns always parse; a dropped entry would fall back to
        // member-only access rather than opening a route.
        let routes = entries
            .into_iter()
            .filter_map(|(pattern, access)| RouteSpec::new(pattern, access).ok())
            .collect();
        Self::new(routes)
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteSpec] {
        &self.routes
    }

    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&RouteSpec> {
        self.routes.iter().find(|route| route.matches(path))
    }

    /// Access class for `path`; unknown paths are member-only.
    #[must_use]
    pub fn access_for(&self, path: &str) -> Access {
        self.lookup(path).map_or(Access::Member, RouteSpec::access)
    }

    /// Whether `a` and `b` are served by the same route entry. Paths that
    /// match no entry only share a route with themselves.
    #[must_use]
    pub fn same_route(&self, a: &str, b: &str) -> bool {
        match (self.lookup(a), self.lookup(b)) {
            (Some(left), Some(right)) => left.pattern == right.pattern,
            (None, None) => same_path(a, b),
            _ => false,
        }
    }

    /// Gate requirements for `path`, `None` when the route is public.
    #[must_use]
    pub fn requirements_for(&self, path: &str) -> Option<RouteRequirements> {
        match self.lookup(path) {
            Some(route) => route.requirements(),
            None => Access::Member.requirements(),
        }
    }
}
