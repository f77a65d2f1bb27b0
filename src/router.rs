//! Page routing: the listing page and per-project detail pages.

use serde::Serialize;
use std::fmt;

use crate::content::Project;

/// A parsed page address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Route {
    /// `/`
    Home,
    /// `/project/{index}`; the index is kept signed so bad input survives
    /// parsing and resolves to the not-found page
    Project(i64),
    /// Anything else
    Unknown(String),
}

impl Route {
    /// Parses a path such as `/project/3`.
    ///
    /// A trailing slash and surrounding whitespace are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        if normalized.is_empty() {
            return Self::Home;
        }
        if let Some(index) = normalized.strip_prefix("/project/") {
            if let Ok(index) = index.parse::<i64>() {
                return Self::Project(index);
            }
        }
        Self::Unknown(trimmed.to_string())
    }

    /// Path form of the route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Project(index) => format!("/project/{index}"),
            Self::Unknown(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// The only way out of the not-found page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecoveryAction {
    /// Navigate to the listing page
    BackToHome,
}

impl RecoveryAction {
    /// Where the action leads.
    pub const fn target(self) -> Route {
        match self {
            Self::BackToHome => Route::Home,
        }
    }

    /// Label key under the `not_found` namespace.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::BackToHome => "back_to_home",
        }
    }
}

/// Presentation of an address that does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFound {
    /// The path that was requested
    pub requested: String,
}

impl NotFound {
    /// Recovery actions offered. Always exactly one.
    pub const fn actions(&self) -> &'static [RecoveryAction] {
        &[RecoveryAction::BackToHome]
    }
}

/// What a route resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Listing page
    Home,
    /// Detail page of one project
    ProjectDetail {
        /// Position in the content table
        index: usize,
        /// The project
        project: &'static Project,
    },
    /// Address does not exist
    NotFound(NotFound),
}

/// Resolves `route` against the project table. Never fails.
pub fn resolve(route: &Route, projects: &'static [Project]) -> Page {
    match route {
        Route::Home => Page::Home,
        Route::Project(index) => usize::try_from(*index)
            .ok()
            .and_then(|i| projects.get(i).map(|project| (i, project)))
            .map_or_else(
                || {
                    tracing::debug!(index, "No project at index");
                    Page::NotFound(NotFound {
                        requested: route.path(),
                    })
                },
                |(index, project)| Page::ProjectDetail { index, project },
            ),
        Route::Unknown(path) => Page::NotFound(NotFound {
            requested: path.clone(),
        }),
    }
}

/// Receives page navigations.
pub trait Navigator {
    /// Switches to `route`.
    fn navigate(&mut self, route: Route);
}

/// Current route plus the history needed for "back".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    /// Router starting at `initial`.
    pub const fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    /// Current route.
    pub const fn current(&self) -> &Route {
        &self.current
    }

    /// Returns to the previous route, or home if there is none.
    ///
    /// Returns `false` when already home with empty history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None if self.current != Route::Home => {
                self.current = Route::Home;
                true
            }
            None => false,
        }
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        tracing::info!(from = %self.current, to = %route, "Navigating");
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/project/3"), Route::Project(3));
        assert_eq!(Route::parse("/project/3/"), Route::Project(3));
        assert_eq!(Route::parse("/project/-1"), Route::Project(-1));
        assert_eq!(
            Route::parse("/project/abc"),
            Route::Unknown("/project/abc".to_string())
        );
        assert_eq!(Route::parse("/blog"), Route::Unknown("/blog".to_string()));
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Home, Route::Project(7)] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_resolve_valid_index() {
        match resolve(&Route::Project(0), PROJECTS) {
            Page::ProjectDetail { index, project } => {
                assert_eq!(index, 0);
                assert_eq!(project.key, PROJECTS[0].key);
            }
            other => panic!("unexpected page {other:?}"),
        }
    }

    #[test]
    fn test_resolve_out_of_range() {
        let len = i64::try_from(PROJECTS.len()).unwrap();
        for index in [-1, len, len + 10, i64::MAX, i64::MIN] {
            let Page::NotFound(not_found) = resolve(&Route::Project(index), PROJECTS) else {
                panic!("index {index} should not resolve");
            };
            assert_eq!(not_found.actions(), &[RecoveryAction::BackToHome]);
            assert_eq!(not_found.actions()[0].target(), Route::Home);
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert!(matches!(
            resolve(&Route::parse("/nope"), PROJECTS),
            Page::NotFound(_)
        ));
    }

    #[test]
    fn test_router_history() {
        let mut router = Router::new(Route::Home);
        router.navigate(Route::Project(2));
        router.navigate(Route::Project(2));
        assert_eq!(router.current(), &Route::Project(2));

        assert!(router.back());
        assert_eq!(router.current(), &Route::Home);
        assert!(!router.back());
    }

    #[test]
    fn test_back_from_deep_link_goes_home() {
        let mut router = Router::new(Route::Project(4));
        assert!(router.back());
        assert_eq!(router.current(), &Route::Home);
    }
}
