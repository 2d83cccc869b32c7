//! Route table lookup.
//!
//! # Responsibilities
//! - Hold the ordered route surface as immutable data
//! - Look up the first entry matching a path
//! - Guarantee a terminal not-found entry so lookup is total
//!
//! # Design Decisions
//! - Built once at startup, immutable afterwards
//! - First match wins; source order is the tie-break for patterns that
//!   could both match, so more-specific entries are listed first
//! - The catch-all lives in its own field: it cannot be reordered away
//!   from the end of the table

use crate::routing::matcher::{PathParams, PathPattern};

/// Views the navigation layer can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    About,
    RoutineList,
    RoutineDetail,
    GuideList,
    GuideDetail,
    Contact,
    Faq,
    Login,
    Register,
    Dashboard,
    NewReview,
    ReviewDetail,
    StartRoutine,
    StartChange,
    PrivacyPolicy,
    Terms,
    NotFound,
}

/// One path-pattern-to-view binding.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Stable identifier for logging and navigation.
    pub name: &'static str,
    pub pattern: PathPattern,
    pub view: View,
    /// Parameter names the pattern declares, in path order. Values are
    /// extracted by the matcher and passed opaquely to the view.
    pub params: &'static [&'static str],
}

/// Result of a route lookup.
#[derive(Debug)]
pub struct Resolved<'a> {
    pub entry: &'a RouteEntry,
    pub params: PathParams,
}

/// Ordered, immutable route surface.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    not_found: RouteEntry,
}

impl RouteTable {
    /// Build a table from ordered entries. The terminal not-found
    /// catch-all is supplied by the constructor and always matches last.
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self {
            entries,
            not_found: entry("not-found", "*", View::NotFound, &[]),
        }
    }

    /// The catalog's route surface.
    pub fn catalog() -> Self {
        Self::new(vec![
            entry("home", "/", View::Home, &[]),
            entry("about", "/nosotros", View::About, &[]),
            entry("routines", "/rutinas", View::RoutineList, &[]),
            entry(
                "routines-by-category",
                "/rutinas/categoria/:category",
                View::RoutineList,
                &["category"],
            ),
            entry(
                "routine-detail",
                "/rutinas/:routine/:id",
                View::RoutineDetail,
                &["routine", "id"],
            ),
            entry("guides", "/guias", View::GuideList, &[]),
            entry(
                "guides-by-category",
                "/guias/:category",
                View::GuideList,
                &["category"],
            ),
            entry(
                "guide-detail",
                "/guias/:category/:id",
                View::GuideDetail,
                &["category", "id"],
            ),
            entry("contact", "/contacto", View::Contact, &[]),
            entry("faq", "/FAQ", View::Faq, &[]),
            entry("login", "/login", View::Login, &[]),
            entry("register", "/sign-in", View::Register, &[]),
            entry("dashboard", "/dashboard", View::Dashboard, &[]),
            entry("new-review", "/dashboard/newReview", View::NewReview, &[]),
            // The literal segment must be tried before the two-parameter
            // review entry or it would never be reachable.
            entry(
                "start-routine",
                "/user/:userId/iniciar-rutina",
                View::StartRoutine,
                &["userId"],
            ),
            entry(
                "review-detail",
                "/user/:userId/:reviewId",
                View::ReviewDetail,
                &["userId", "reviewId"],
            ),
            entry(
                "start-change",
                "/empezar/:suscriptionPlan",
                View::StartChange,
                &["suscriptionPlan"],
            ),
            entry(
                "privacy-policy",
                "/politica-privacidad",
                View::PrivacyPolicy,
                &[],
            ),
            entry("terms", "/terminos-y-condiciones", View::Terms, &[]),
        ])
    }

    /// Resolve a path to the first matching entry.
    ///
    /// Total: an unmatched path resolves to the not-found entry.
    pub fn resolve(&self, path: &str) -> Resolved<'_> {
        self.entries
            .iter()
            .find_map(|entry| {
                entry
                    .pattern
                    .matches(path)
                    .map(|params| Resolved { entry, params })
            })
            .unwrap_or(Resolved {
                entry: &self.not_found,
                params: PathParams::default(),
            })
    }

    /// All entries in match order, terminal catch-all last.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter().chain(std::iter::once(&self.not_found))
    }
}

fn entry(
    name: &'static str,
    pattern: &str,
    view: View,
    params: &'static [&'static str],
) -> RouteEntry {
    RouteEntry {
        name,
        pattern: PathPattern::parse(pattern),
        view,
        params,
    }
}
