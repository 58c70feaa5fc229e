use std::fmt::{self, Display};

use super::*;
use crate::diagnostics::Diagnostics;
use crate::tokens::Tokens;

#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    source: Option<Rc<Intersection>>,
    destination: Option<Rc<Intersection>>,
    travel_time: f32,
}

impl Road {
    pub const DEFAULT_TRAVEL_TIME: f32 = 0.0;

    pub fn new(
        source: Option<Rc<Intersection>>,
        destination: Option<Rc<Intersection>>,
        travel_time: f32,
    ) -> Self {
        Self {
            source,
            destination,
            travel_time,
        }
    }

    /// Reads `source destination travel-time` after the `road` keyword.
    pub fn parse(tokens: &mut Tokens, network: &Network, diagnostics: &mut Diagnostics) -> Self {
        let source_name = tokens.next();
        let destination_name = tokens.next();

        let mut road = Self::new(
            network.find_intersection(source_name),
            network.find_intersection(destination_name),
            Self::DEFAULT_TRAVEL_TIME,
        );

        if road.source.is_none() {
            diagnostics.warn(format!("{road}ill defined source"));
        }
        if road.destination.is_none() {
            diagnostics.warn(format!("{road}ill defined destination"));
        }

        match tokens.next_travel_time() {
            Some(travel_time) => road.travel_time = travel_time,
            None => diagnostics.warn(format!("{road} delay expected")),
        }

        tracing::trace!(
            ?source_name,
            ?destination_name,
            travel_time = road.travel_time,
            "road parsed"
        );

        road
    }

    pub fn source(&self) -> Option<&Intersection> {
        self.source.as_deref()
    }

    pub fn destination(&self) -> Option<&Intersection> {
        self.destination.as_deref()
    }

    pub fn travel_time(&self) -> f32 {
        self.travel_time
    }

    pub fn is_well_defined(&self) -> bool {
        self.source.is_some() && self.destination.is_some()
    }
}

fn endpoint_name(endpoint: Option<&Intersection>) -> &str {
    endpoint
        .and_then(|intersection| intersection.name())
        .unwrap_or(UNKNOWN_NAME)
}

// whole numbers keep a fractional digit, `5.0` not `5`
fn format_travel_time(travel_time: f32) -> String {
    let formatted = travel_time.to_string();

    if travel_time.is_finite() && !formatted.contains('.') {
        format!("{formatted}.0")
    } else {
        formatted
    }
}

impl Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Road {} {} {}",
            endpoint_name(self.source()),
            endpoint_name(self.destination()),
            format_travel_time(self.travel_time)
        )
    }
}
