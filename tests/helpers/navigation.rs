// Recording Navigator
//
// Captures every destination the workflows navigate to so tests can
// assert on call count and order.

use std::sync::Mutex;

use billed::core::{Navigator, Route};

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destinations seen so far, in call order
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }

    pub fn navigation_count(&self) -> usize {
        self.routes.lock().unwrap().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}
