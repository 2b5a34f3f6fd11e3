// Navigation seam
//
// Workflows never touch the host router directly; they call the injected
// navigator with a logical destination after their store calls settle.

use std::fmt;

/// Logical destinations reachable from the employee workflows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Bills,
    NewBill,
}

impl Route {
    /// Hash path the host router maps this destination to
    pub fn path(&self) -> &'static str {
        match self {
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Host-provided navigation callback
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Closures over `Route` act as navigators
impl<F> Navigator for F
where
    F: Fn(Route) + Send + Sync,
{
    fn navigate(&self, route: Route) {
        self(route)
    }
}
