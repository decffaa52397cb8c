use std::path::Path;

use catalyst_core::{CatalystResult, Clock, SystemClock};

use crate::{ApplicationTracker, Finance, JsonStore, Planner, Wellness};

/// Store and clock shared by every tracker. Front ends (MCP server, CLI)
/// hold one of these and borrow a tracker per call.
pub struct Toolbox {
    store: JsonStore,
    clock: Box<dyn Clock>,
}

impl Toolbox {
    pub fn open(data_dir: &Path) -> CatalystResult<Self> {
        Ok(Self::with_clock(JsonStore::new(data_dir)?, Box::new(SystemClock)))
    }

    pub fn with_clock(store: JsonStore, clock: Box<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn applications(&self) -> ApplicationTracker<'_, JsonStore> {
        ApplicationTracker::new(&self.store, self.clock.as_ref())
    }

    pub fn planner(&self) -> Planner<'_, JsonStore> {
        Planner::new(&self.store, self.clock.as_ref())
    }

    pub fn finance(&self) -> Finance<'_, JsonStore> {
        Finance::new(&self.store, self.clock.as_ref())
    }

    pub fn wellness(&self) -> Wellness<'_, JsonStore> {
        Wellness::new(&self.store, self.clock.as_ref())
    }
}
