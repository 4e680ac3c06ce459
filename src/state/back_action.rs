//! Back-Action Interceptor.
//!
//! Resyncs the indicator on every system back action and reports the
//! action as unhandled, so the host's default back behavior still runs.
//! It never touches navigation.
//!
//! This fires for every back action the host reports, including ones that
//! have nothing to do with the tab bar (a back press deep inside a screen's
//! own stack). The extra resync is harmless, but the trigger is broader
//! than it needs to be.

use super::animate::ResyncHandle;

pub struct BackActionInterceptor {
    resync: ResyncHandle,
}

impl BackActionInterceptor {
    pub fn new(resync: ResyncHandle) -> Self {
        Self { resync }
    }

    /// Always returns false ("not handled").
    pub fn handle_back_action(&self) -> bool {
        log::debug!("back action: resyncing indicator");
        self.resync.resync();
        false
    }
}
