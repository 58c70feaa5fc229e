use std::fmt::{self, Display};

use super::*;
use crate::diagnostics::Diagnostics;
use crate::tokens::Tokens;

pub const REUSED_PREFIX: &str = "reused-";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Intersection {
    name: Option<String>,
}

impl Intersection {
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }

    /// A name already taken in `network` is replaced with `reused-<name>`.
    pub fn parse(tokens: &mut Tokens, network: &Network, diagnostics: &mut Diagnostics) -> Self {
        let name = tokens.next().map(str::to_string);

        let name = match name {
            None => {
                diagnostics.warn("Intersection has missing name");
                None
            }
            Some(name) if network.find_intersection(Some(name.as_str())).is_some() => {
                diagnostics.warn(format!("Name reused for intersection {name}"));
                Some(format!("{REUSED_PREFIX}{name}"))
            }
            name => name,
        };

        Self::new(name)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Intersection {}", self.name().unwrap_or(UNKNOWN_NAME))
    }
}
