use std::collections::HashSet;

use catwalk_core::error::{CatwalkError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub throttle: ThrottleSection,

    #[serde(default)]
    pub auth: AuthSection,
}

impl ApiConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CatwalkError::UnsupportedVersion);
        }

        self.throttle.validate()?;
        self.auth.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThrottleSection {
    #[serde(default)]
    pub working_hours: WorkingHoursSection,

    #[serde(default = "default_scopes")]
    pub scopes: Vec<ScopeSection>,
}

impl Default for ThrottleSection {
    fn default() -> Self {
        Self {
            working_hours: WorkingHoursSection::default(),
            scopes: default_scopes(),
        }
    }
}

impl ThrottleSection {
    pub fn validate(&self) -> Result<()> {
        self.working_hours.validate()?;

        let mut seen = HashSet::new();
        for s in &self.scopes {
            s.validate()?;
            if !seen.insert(s.name.as_str()) {
                return Err(CatwalkError::BadRequest(format!(
                    "duplicate throttle scope: {}",
                    s.name
                )));
            }
        }
        Ok(())
    }
}

/// Permitted request window, UTC hours. Requests outside [open, close) are
/// denied before any other check runs.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkingHoursSection {
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
}

impl Default for WorkingHoursSection {
    fn default() -> Self {
        Self {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
        }
    }
}

impl WorkingHoursSection {
    pub fn validate(&self) -> Result<()> {
        if self.close_hour > 24 {
            return Err(CatwalkError::BadRequest(
                "throttle.working_hours.close_hour must be at most 24".into(),
            ));
        }
        if self.open_hour >= self.close_hour {
            return Err(CatwalkError::BadRequest(
                "throttle.working_hours.open_hour must be before close_hour".into(),
            ));
        }
        Ok(())
    }
}

fn default_open_hour() -> u32 {
    0
}
fn default_close_hour() -> u32 {
    24
}

/// A named rate-limit bucket with its own budget.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeSection {
    pub name: String,
    pub budget: u32,
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl ScopeSection {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(CatwalkError::BadRequest(
                "throttle scope name must not be empty".into(),
            ));
        }
        if self.budget == 0 {
            return Err(CatwalkError::BadRequest(format!(
                "throttle scope {} budget must be at least 1",
                self.name
            )));
        }
        if self.window_secs == 0 {
            return Err(CatwalkError::BadRequest(format!(
                "throttle scope {} window_secs must be at least 1",
                self.name
            )));
        }
        Ok(())
    }
}

fn default_window_secs() -> u64 {
    60
}

fn default_scopes() -> Vec<ScopeSection> {
    vec![ScopeSection {
        name: "low_request".into(),
        budget: 10,
        window_secs: 60,
    }]
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    #[serde(default)]
    pub tickets: Vec<TicketEntry>,
}

impl AuthSection {
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for t in &self.tickets {
            if t.ticket.is_empty() || t.username.is_empty() {
                return Err(CatwalkError::BadRequest(
                    "auth.tickets entries must carry a ticket and a username".into(),
                ));
            }
            if !seen.insert(t.ticket.as_str()) {
                return Err(CatwalkError::BadRequest(format!(
                    "duplicate auth ticket for user {}",
                    t.username
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicketEntry {
    pub ticket: String,
    pub username: String,
}
