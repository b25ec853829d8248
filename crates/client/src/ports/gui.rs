//! GUI Port - on-screen panels fed by server snapshots.

use meridian_protocol::{Inventory, Stats};

/// Port for the GUI layer: stat and inventory panels.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait GuiPort: Send + Sync {
    /// Show a new hero stat snapshot.
    fn set_stats(&self, stats: &Stats);

    /// Show a new inventory snapshot.
    fn set_inventory(&self, inventory: &Inventory);
}
