use super::*;
use crate::diagnostics::Diagnostics;
use crate::tokens::Tokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intersection,
    Road,
}

impl Command {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "intersection" => Some(Command::Intersection),
            "road" => Some(Command::Road),
            _ => None,
        }
    }
}

/// Builds a network from every record left in `tokens`. Malformed records
/// are reported to `diagnostics` and never stop the scan.
pub fn build_network(tokens: &mut Tokens, diagnostics: &mut Diagnostics) -> Network {
    let mut network = Network::default();

    while let Some(keyword) = tokens.next() {
        match Command::from_keyword(keyword) {
            Some(Command::Intersection) => {
                let intersection = Intersection::parse(tokens, &network, diagnostics);

                tracing::debug!(%intersection, "registered");

                network.add_intersection(intersection);
            }
            Some(Command::Road) => {
                let road = Road::parse(tokens, &network, diagnostics);

                tracing::debug!(%road, well_defined = road.is_well_defined(), "registered");

                network.add_road(road);
            }
            None => diagnostics.warn(format!("invalid command {keyword}")),
        }
    }

    tracing::debug!(
        intersections = network.intersections().len(),
        roads = network.roads().len(),
        warnings = diagnostics.count(),
        "network built"
    );

    network
}

#[cfg(test)]
pub mod test {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::diagnostics::test::quiet;

    fn build(input: &str) -> (Network, Diagnostics) {
        let mut diagnostics = quiet();

        let network = build_network(&mut Tokens::new(input), &mut diagnostics);

        (network, diagnostics)
    }

    fn lines(network: &Network) -> Vec<String> {
        network.to_string().lines().map(str::to_string).collect_vec()
    }

    #[test]
    fn command_keywords_are_case_sensitive() {
        assert_eq!(
            Command::from_keyword("intersection"),
            Some(Command::Intersection)
        );
        assert_eq!(Command::from_keyword("road"), Some(Command::Road));
        assert_eq!(Command::from_keyword("Road"), None);
        assert_eq!(Command::from_keyword("INTERSECTION"), None);
    }

    #[test]
    fn well_formed_input_builds_one_entity_per_record() {
        let (network, diagnostics) = build(case::TRIANGLE);

        assert!(diagnostics.is_clean());
        assert_eq!(network.intersections().len(), 3);
        assert_eq!(network.roads().len(), 3);
        assert!(network.roads().iter().all(Road::is_well_defined));
    }

    #[test]
    fn single_road() {
        let (network, diagnostics) = build(case::SINGLE_ROAD);

        assert!(diagnostics.is_clean());
        assert_eq!(
            lines(&network),
            vec!["Intersection A", "Intersection B", "Road A B 5.0"]
        );
    }

    #[test]
    fn duplicate_intersection_is_renamed_and_kept() {
        let (network, diagnostics) = build(case::DUPLICATE);

        assert_eq!(diagnostics.warnings(), ["Name reused for intersection X"]);
        assert_eq!(
            lines(&network),
            vec!["Intersection X", "Intersection reused-X"]
        );
    }

    #[test]
    fn roads_resolve_original_name_to_first_duplicate() {
        let (network, diagnostics) = build("intersection X intersection X road X reused-X 1");

        assert_eq!(diagnostics.count(), 1);

        let road = &network.roads()[0];

        assert!(std::ptr::eq(
            road.source().unwrap(),
            network.intersections()[0].as_ref()
        ));
        assert!(std::ptr::eq(
            road.destination().unwrap(),
            network.intersections()[1].as_ref()
        ));
    }

    #[test]
    fn forward_reference_does_not_resolve() {
        let (network, diagnostics) = build(case::FORWARD_REFERENCE);

        assert_eq!(
            diagnostics.warnings(),
            ["Road A ??? 0.0ill defined destination"]
        );
        assert_eq!(
            lines(&network),
            vec!["Intersection A", "Intersection B", "Road A ??? 1.0"]
        );
    }

    #[test]
    fn invalid_command_skips_single_token() {
        let (network, diagnostics) = build("bridge intersection A");

        assert_eq!(diagnostics.warnings(), ["invalid command bridge"]);
        assert_eq!(lines(&network), vec!["Intersection A"]);
    }

    #[test]
    fn garbled_delay_is_rescanned_as_command() {
        let (network, diagnostics) = build("intersection A intersection B road A B fast road B A 3");

        assert_eq!(
            diagnostics.warnings(),
            ["Road A B 0.0 delay expected", "invalid command fast"]
        );
        assert_eq!(
            lines(&network),
            vec![
                "Intersection A",
                "Intersection B",
                "Road A B 0.0",
                "Road B A 3.0"
            ]
        );
    }

    #[test]
    fn negative_delay_is_kept() {
        let (network, diagnostics) = build("intersection A intersection B road A B -1.5");

        assert!(diagnostics.is_clean());
        assert_eq!(
            lines(&network),
            vec!["Intersection A", "Intersection B", "Road A B -1.5"]
        );
    }

    #[test]
    fn missing_delay_before_next_record() {
        let (network, diagnostics) = build("intersection A intersection B road A B road B A 1.5");

        assert_eq!(
            diagnostics.warnings(),
            ["Road A B 0.0 delay expected"]
        );
        assert_eq!(network.roads().len(), 2);
        assert_eq!(network.roads()[1].travel_time(), 1.5);
    }

    #[test]
    fn road_keywords_swallowed_as_names() {
        // a road short of names takes the following keyword as one
        let (network, diagnostics) = build("intersection A road A intersection B");

        assert_eq!(
            diagnostics.warnings(),
            [
                "Road A ??? 0.0ill defined destination",
                "Road A ??? 0.0 delay expected",
                "invalid command B"
            ]
        );
        assert_eq!(network.intersections().len(), 1);
        assert_eq!(network.roads().len(), 1);
    }

    #[test]
    fn trailing_keyword_without_attributes() {
        let (network, diagnostics) = build("intersection");

        assert_eq!(diagnostics.warnings(), ["Intersection has missing name"]);
        assert_eq!(lines(&network), vec!["Intersection ???"]);
    }

    #[test]
    fn empty_input_builds_empty_network() {
        let (network, diagnostics) = build("");

        assert!(diagnostics.is_clean());
        assert!(network.intersections().is_empty());
        assert!(network.roads().is_empty());
    }
}
