//! Route-based navigation between the menu, cart, and profile views.

/// The three fixed destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Menu,
    Cart,
    EditProfile,
}

impl Route {
    /// The fixed path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Menu => "/menu",
            Self::Cart => "/cart",
            Self::EditProfile => "/edit_profile",
        }
    }
}

/// Output surface navigation changes are pushed to (section toggling or a
/// location change, depending on the host page).
pub trait NavigationSurface: Send {
    /// Make `route` the visible view.
    fn navigate(&mut self, route: Route);
}

/// Tracks the active route. No state machine beyond that.
pub struct Navigator {
    current: Route,
    surface: Box<dyn NavigationSurface>,
}

impl Navigator {
    /// Start on the menu.
    pub fn new(surface: Box<dyn NavigationSurface>) -> Self {
        Self {
            current: Route::Menu,
            surface,
        }
    }

    /// The currently visible route.
    #[must_use]
    pub fn current(&self) -> Route {
        self.current
    }

    /// Switch to `route`. Pushing the already-active route is allowed and
    /// re-applies it, matching how navigation clicks behave.
    pub fn go(&mut self, route: Route) {
        self.current = route;
        self.surface.navigate(route);
    }
}
