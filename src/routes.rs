//! The route table: which view is mounted for which path.
//!
//! Matching is a pure function of the path and the ordered table. The first route whose pattern
//! matches wins, so a catch-all declared before other routes hides them. Construction reports
//! such shadowed routes but still accepts the table.

use std::fmt;
use std::sync::LazyLock;

use dioxus::logger::tracing::warn;
use thiserror::Error;

/// An error produced while building a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A pattern could not be parsed.
    #[error("invalid route pattern \"{pattern}\": {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    /// The last route is not a catch-all, so some paths would match nothing.
    #[error("route table must end with a \"/*\" catch-all route")]
    MissingFallback,
}

/// A parsed path pattern.
///
/// Leading and trailing slashes are not significant: `random`, `/random` and `/random/` are the
/// same pattern, and `/` is the pattern with no segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches paths made of exactly these segments.
    Exact(Vec<String>),
    /// Matches every path that starts with these segments, including the prefix itself.
    Splat(Vec<String>),
}

impl Pattern {
    /// Parse a pattern such as `/`, `random` or `/*`.
    ///
    /// A `*` is only allowed as the whole final segment.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let invalid = |reason| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        let mut segments: Vec<String> = split_segments(pattern).map(str::to_string).collect();
        let splat = segments.last().is_some_and(|last| last == "*");
        if splat {
            segments.pop();
        }

        for segment in &segments {
            if segment == "*" {
                return Err(invalid("`*` must be the last segment"));
            }
            if segment.contains('*') {
                return Err(invalid("`*` must be a segment of its own"));
            }
        }

        Ok(if splat {
            Pattern::Splat(segments)
        } else {
            Pattern::Exact(segments)
        })
    }

    /// Check whether `path` matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let path = normalize(path);
        match self {
            Pattern::Exact(segments) => {
                path.len() == segments.len() && starts_with(&path, segments)
            }
            Pattern::Splat(prefix) => starts_with(&path, prefix),
        }
    }

    /// Whether this pattern matches every path that `other` matches.
    fn covers(&self, other: &Pattern) -> bool {
        match (self, other) {
            (Pattern::Splat(prefix), Pattern::Exact(segments) | Pattern::Splat(segments)) => {
                starts_with(segments, prefix)
            }
            (Pattern::Exact(a), Pattern::Exact(b)) => a.len() == b.len() && starts_with(a, b),
            (Pattern::Exact(_), Pattern::Splat(_)) => false,
        }
    }

    fn is_catch_all(&self) -> bool {
        matches!(self, Pattern::Splat(prefix) if prefix.is_empty())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Exact(segments) => write!(f, "/{}", segments.join("/")),
            Pattern::Splat(prefix) if prefix.is_empty() => f.write_str("/*"),
            Pattern::Splat(prefix) => write!(f, "/{}/*", prefix.join("/")),
        }
    }
}

/// The page views a route can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Random,
}

impl View {
    /// The canonical path of this view.
    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::Random => "/random",
        }
    }
}

/// The wrappers a route can mount its view in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    #[default]
    Default,
}

/// A pattern paired with the view it mounts and the layout that wraps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: Pattern,
    pub view: View,
    pub layout: Layout,
}

impl Route {
    /// Create a route using the default layout.
    pub fn new(pattern: &str, view: View) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: Pattern::parse(pattern)?,
            view,
            layout: Layout::Default,
        })
    }
}

/// Select the first route in `routes` whose pattern matches `path`.
///
/// Returns `None` only if no route matches, which cannot happen for a table ending in `/*`.
pub fn select_route<'a>(path: &str, routes: &'a [Route]) -> Option<&'a Route> {
    routes.iter().find(|route| route.pattern.matches(path))
}

/// An ordered, immutable list of routes that ends with a catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from routes in declaration order.
    ///
    /// Fails if the last route is not `/*`. Routes hidden behind an earlier route are logged but
    /// accepted; see [`RouteTable::shadowed`].
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        if !routes.last().is_some_and(|route| route.pattern.is_catch_all()) {
            return Err(RouteError::MissingFallback);
        }

        let table = Self { routes };
        for index in table.shadowed() {
            warn!(
                pattern = %table.routes[index].pattern,
                "route can never match, an earlier route covers every path it accepts"
            );
        }

        Ok(table)
    }

    /// The table the app is launched with.
    pub fn app() -> Result<Self, RouteError> {
        Self::new(vec![
            Route::new("/", View::Home)?,
            Route::new("random", View::Random)?,
            Route::new("/*", View::Home)?,
        ])
    }

    /// Select the route for `path`. Always succeeds because the table ends with a catch-all.
    pub fn select(&self, path: &str) -> &Route {
        select_route(path, &self.routes).unwrap_or_else(|| self.fallback())
    }

    /// The catch-all route.
    pub fn fallback(&self) -> &Route {
        // `new` rejects empty tables
        &self.routes[self.routes.len() - 1]
    }

    /// Indices of routes that an earlier route fully covers.
    pub fn shadowed(&self) -> Vec<usize> {
        self.routes
            .iter()
            .enumerate()
            .filter(|(index, route)| {
                self.routes[..*index]
                    .iter()
                    .any(|earlier| earlier.pattern.covers(&route.pattern))
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// The routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

static APP_ROUTES: LazyLock<Result<RouteTable, RouteError>> = LazyLock::new(RouteTable::app);

/// The app's route table, built on first use and shared for the rest of the process.
pub fn app_routes() -> Result<&'static RouteTable, RouteError> {
    APP_ROUTES.as_ref().map_err(Clone::clone)
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Reduce a location to its path segments: no fragment marker, no query, no empty segments.
fn normalize(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('#').unwrap_or(path);
    let path = path.split_once('?').map_or(path, |(path, _query)| path);
    split_segments(path).collect()
}

fn starts_with<A: AsRef<str>, B: AsRef<str>>(path: &[A], prefix: &[B]) -> bool {
    path.len() >= prefix.len()
        && path
            .iter()
            .zip(prefix)
            .all(|(a, b)| a.as_ref().eq_ignore_ascii_case(b.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn exact(segments: &[&str]) -> Pattern {
        Pattern::Exact(segments.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn parses_patterns() {
        assert_eq!(Pattern::parse("/").unwrap(), exact(&[]));
        assert_eq!(Pattern::parse("").unwrap(), exact(&[]));
        assert_eq!(Pattern::parse("random").unwrap(), exact(&["random"]));
        assert_eq!(Pattern::parse("/random/").unwrap(), exact(&["random"]));
        assert_eq!(Pattern::parse("/*").unwrap(), Pattern::Splat(vec![]));
        assert_eq!(
            Pattern::parse("docs/*").unwrap(),
            Pattern::Splat(vec!["docs".to_string()])
        );
    }

    #[test]
    fn rejects_misplaced_splats() {
        assert!(matches!(
            Pattern::parse("/*/random"),
            Err(RouteError::InvalidPattern { .. })
        ));
        assert!(matches!(
            Pattern::parse("/rand*"),
            Err(RouteError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn exact_patterns() {
        let root = Pattern::parse("/").unwrap();
        assert!(root.matches("/"));
        assert!(root.matches(""));
        assert!(root.matches("#/"));
        assert!(!root.matches("/random"));

        let random = Pattern::parse("random").unwrap();
        assert!(random.matches("random"));
        assert!(random.matches("/random"));
        assert!(random.matches("/random/"));
        assert!(random.matches("/Random"));
        assert!(random.matches("/random?seed=4"));
        assert!(!random.matches("/random/extra"));
        assert!(!random.matches("/randomly"));
    }

    #[test]
    fn splat_patterns() {
        let all = Pattern::parse("/*").unwrap();
        for path in ["", "/", "/random", "/a/b/c", "???", "#/x"] {
            assert!(all.matches(path), "{path:?} should match /*");
        }

        let docs = Pattern::parse("/docs/*").unwrap();
        assert!(docs.matches("/docs"));
        assert!(docs.matches("/docs/intro"));
        assert!(!docs.matches("/doc"));
    }

    #[test]
    fn displays_canonical_form() {
        assert_eq!(Pattern::parse("random").unwrap().to_string(), "/random");
        assert_eq!(Pattern::parse("").unwrap().to_string(), "/");
        assert_eq!(Pattern::parse("/*").unwrap().to_string(), "/*");
        assert_eq!(Pattern::parse("docs/*").unwrap().to_string(), "/docs/*");
    }

    #[test]
    fn first_match_wins() {
        let routes = vec![
            Route::new("/random", View::Random).unwrap(),
            Route::new("/random", View::Home).unwrap(),
            Route::new("/*", View::Home).unwrap(),
        ];
        assert_eq!(select_route("/random", &routes).unwrap().view, View::Random);
    }

    #[test]
    fn select_route_without_fallback() {
        let routes = vec![Route::new("/", View::Home).unwrap()];
        assert!(select_route("/missing", &routes).is_none());
        assert!(select_route("/missing", &[]).is_none());
    }

    #[test]
    fn table_requires_fallback() {
        assert_eq!(RouteTable::new(vec![]), Err(RouteError::MissingFallback));
        assert_eq!(
            RouteTable::new(vec![Route::new("/", View::Home).unwrap()]),
            Err(RouteError::MissingFallback)
        );
        assert_eq!(
            RouteTable::new(vec![Route::new("/docs/*", View::Home).unwrap()]),
            Err(RouteError::MissingFallback)
        );
    }

    #[test]
    fn app_table_declaration_order() {
        let table = RouteTable::app().unwrap();
        let declared: Vec<_> = table
            .routes()
            .iter()
            .map(|route| (route.pattern.to_string(), route.view, route.layout))
            .collect();

        assert_eq!(
            declared,
            vec![
                ("/".to_string(), View::Home, Layout::Default),
                ("/random".to_string(), View::Random, Layout::Default),
                ("/*".to_string(), View::Home, Layout::Default),
            ]
        );
        assert!(table.shadowed().is_empty());
    }

    #[test]
    fn early_catch_all_shadows_later_routes() {
        let table = RouteTable::new(vec![
            Route::new("/*", View::Home).unwrap(),
            Route::new("/", View::Home).unwrap(),
            Route::new("random", View::Random).unwrap(),
            Route::new("/*", View::Home).unwrap(),
        ])
        .unwrap();

        assert_eq!(table.shadowed(), vec![1, 2, 3]);
        assert_eq!(table.select("/random").view, View::Home);
    }

    #[test]
    fn duplicate_exact_routes_are_shadowed() {
        let table = RouteTable::new(vec![
            Route::new("random", View::Random).unwrap(),
            Route::new("/Random/", View::Home).unwrap(),
            Route::new("/*", View::Home).unwrap(),
        ])
        .unwrap();

        assert_eq!(table.shadowed(), vec![1]);
    }

    #[test]
    fn nested_splat_does_not_shadow_siblings() {
        let table = RouteTable::new(vec![
            Route::new("/docs/*", View::Random).unwrap(),
            Route::new("/docs/intro", View::Home).unwrap(),
            Route::new("/random", View::Random).unwrap(),
            Route::new("/*", View::Home).unwrap(),
        ])
        .unwrap();

        assert_eq!(table.shadowed(), vec![1]);
    }

    #[test]
    fn layout_is_carried_through_selection() {
        let table = RouteTable::new(vec![
            Route::new("/", View::Home).unwrap(),
            Route::new("/*", View::Home).unwrap(),
        ])
        .unwrap();

        assert_eq!(table.select("/").layout, Layout::Default);
        assert_eq!(table.fallback().pattern, Pattern::Splat(vec![]));
    }

    #[test]
    fn view_paths_select_their_view() {
        let table = app_routes().unwrap();
        for view in [View::Home, View::Random] {
            assert_eq!(table.select(view.path()).view, view);
        }
    }
}
