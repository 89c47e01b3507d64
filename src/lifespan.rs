//! Startup and shutdown logging around the serving loop.
//!
//! [`Lifespan`] logs startup when created and shutdown when dropped, so the
//! shutdown lines are written exactly once whichever way `main` exits.

use std::net::SocketAddr;

use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Serving,
    Stopped,
}

#[derive(Debug)]
pub struct Lifespan {
    service_name: String,
    phase: Phase,
}

impl Lifespan {
    pub fn start(settings: &Settings) -> Self {
        tracing::info!(
            version = %settings.service_version,
            environment = %settings.environment,
            log_level = %settings.log_level,
            "Starting {}",
            settings.service_name
        );

        Self {
            service_name: settings.service_name.clone(),
            phase: Phase::Starting,
        }
    }

    /// Records that the listener is bound and requests are being answered.
    pub fn serving(&mut self, addrs: &[SocketAddr]) {
        if self.phase != Phase::Starting {
            return;
        }

        self.phase = Phase::Serving;
        tracing::info!(addrs = ?addrs, "{} is serving", self.service_name);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn stop(&mut self) -> bool {
        if self.phase == Phase::Stopped {
            return false;
        }

        tracing::info!("Shutting down {}", self.service_name);
        self.phase = Phase::Stopped;
        tracing::info!("Shut down of {} completed", self.service_name);
        true
    }
}

impl Drop for Lifespan {
    fn drop(&mut self) {
        self.stop();
    }
}
