//! Bookkeeping for the flags that share the configuration register.

use crate::{AlertMode, AlertStatus, Configuration};

/// Flags observed through configuration register reads.
///
/// In alert mode every configuration read clears the alert flags on the
/// device, so flags seen by reads that only poll data ready are kept until
/// the next alert status read reports them.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StatusTracker {
    data_ready: bool,
    missed: AlertStatus,
}

impl StatusTracker {
    /// Record a read made to poll data ready. Returns the data ready flag.
    pub(crate) fn poll(&mut self, config: &Configuration) -> bool {
        self.data_ready = config.data_ready();
        if config.alert_mode() == AlertMode::Alert {
            self.missed = self.missed | config.alert_status();
        }
        self.data_ready
    }

    /// Record an alert status read and return the flags to report.
    pub(crate) fn report(&mut self, config: &Configuration) -> AlertStatus {
        self.data_ready = config.data_ready();
        let status = config.alert_status() | self.missed;
        self.missed = AlertStatus::default();
        status
    }

    pub(crate) fn data_ready(&self) -> bool {
        self.data_ready
    }

    pub(crate) fn clear_data_ready(&mut self) {
        self.data_ready = false;
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
