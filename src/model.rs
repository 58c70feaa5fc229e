use std::fmt::{self, Display};
use std::io::{self, Write};
use std::rc::Rc;

pub mod builder;
pub mod intersection;
pub mod road;

pub use builder::build_network;
pub use intersection::Intersection;
pub use road::Road;

pub const UNKNOWN_NAME: &str = "???";

#[derive(Debug, Clone, Default)]
pub struct Network {
    intersections: Vec<Rc<Intersection>>,
    roads: Vec<Road>,
}

impl Network {
    /// An absent name never matches, not even an unnamed intersection.
    pub fn find_intersection(&self, name: Option<&str>) -> Option<Rc<Intersection>> {
        let name = name?;

        self.intersections
            .iter()
            .find(|intersection| intersection.name() == Some(name))
            .cloned()
    }

    pub fn add_intersection(&mut self, intersection: Intersection) -> Rc<Intersection> {
        let intersection = Rc::new(intersection);

        self.intersections.push(intersection.clone());

        intersection
    }

    pub fn add_road(&mut self, road: Road) {
        self.roads.push(road);
    }

    pub fn intersections(&self) -> &[Rc<Intersection>] {
        &self.intersections
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn print(&self) {
        self.print_to(io::stdout().lock());
    }

    pub fn print_to(&self, mut writer: impl Write) {
        // a closed pipe ends the output early, it is not an error
        if let Err(error) = write!(writer, "{self}").and_then(|_| writer.flush()) {
            tracing::debug!(%error, "network output cut short");
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for intersection in &self.intersections {
            writeln!(f, "{intersection}")?;
        }

        for road in &self.roads {
            writeln!(f, "{road}")?;
        }

        Ok(())
    }
}
