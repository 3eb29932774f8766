use std::path::PathBuf;

use thiserror::Error;

use crate::domain::purchase::{PurchaseRules, MAX_TICKETS};

pub const MAX_TICKETS_VAR: &str = "MAX_TICKETS_PER_PURCHASE";
pub const ORDER_FILE_VAR: &str = "ORDER_FILE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be a positive integer, got '{1}'")]
    InvalidMaxTickets(&'static str, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_tickets: u32,
    /// Read the order from this file; stdin when unset.
    pub order_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_tickets: MAX_TICKETS,
            order_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so tests don't have to mutate the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_tickets = match lookup(MAX_TICKETS_VAR) {
            None => MAX_TICKETS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxTickets(MAX_TICKETS_VAR, raw)),
            },
        };
        let order_file = lookup(ORDER_FILE_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            max_tickets,
            order_file,
        })
    }

    pub fn purchase_rules(&self) -> PurchaseRules {
        PurchaseRules {
            max_tickets: self.max_tickets,
        }
    }
}
