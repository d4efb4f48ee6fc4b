//! Grouping of venues by `(city, state)`.

use std::collections::BTreeMap;

use serde::Serialize;

/// A row that has a city and a state.
pub trait Located {
    fn city(&self) -> &str;
    fn state(&self) -> &str;
}

/// All venues sharing one `(city, state)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationGroup<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group rows by their distinct `(city, state)` pairs.
///
/// Groups are ordered by city, then state. Within a group, rows keep the
/// order in which they were supplied. Matching is exact: "Austin" and
/// "austin" are different cities.
pub fn group_by_location<T: Located>(rows: Vec<T>) -> Vec<LocationGroup<T>> {
    let mut groups: BTreeMap<(String, String), Vec<T>> = BTreeMap::new();
    for row in rows {
        let key = (row.city().to_string(), row.state().to_string());
        groups.entry(key).or_default().push(row);
    }

    groups
        .into_iter()
        .map(|((city, state), venues)| LocationGroup {
            city,
            state,
            venues,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Place {
        id: i64,
        city: &'static str,
        state: &'static str,
    }

    impl Located for Place {
        fn city(&self) -> &str {
            self.city
        }
        fn state(&self) -> &str {
            self.state
        }
    }

    fn place(id: i64, city: &'static str, state: &'static str) -> Place {
        Place { id, city, state }
    }

    fn sample() -> Vec<Place> {
        vec![
            place(1, "San Francisco", "CA"),
            place(2, "New York", "NY"),
            place(3, "San Francisco", "CA"),
            place(4, "Portland", "OR"),
            place(5, "Portland", "ME"),
        ]
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_location(Vec::<Place>::new()).is_empty());
    }

    #[test]
    fn groups_sorted_by_city_then_state() {
        let groups = group_by_location(sample());
        let keys: Vec<(&str, &str)> = groups
            .iter()
            .map(|g| (g.city.as_str(), g.state.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("New York", "NY"),
                ("Portland", "ME"),
                ("Portland", "OR"),
                ("San Francisco", "CA"),
            ]
        );
    }

    #[test]
    fn venues_keep_input_order_within_group() {
        let groups = group_by_location(sample());
        let sf = groups.iter().find(|g| g.city == "San Francisco").unwrap();
        let ids: Vec<i64> = sf.venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn every_pair_once_and_every_venue_in_exactly_one_group() {
        let input = sample();
        let distinct: HashSet<(&str, &str)> = input.iter().map(|p| (p.city, p.state)).collect();
        let groups = group_by_location(input.clone());

        assert_eq!(groups.len(), distinct.len());
        let keys: HashSet<(&str, &str)> = groups
            .iter()
            .map(|g| (g.city.as_str(), g.state.as_str()))
            .collect();
        assert_eq!(keys, distinct);

        let mut seen: Vec<i64> = groups
            .iter()
            .flat_map(|g| g.venues.iter().map(|v| v.id))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);

        for group in &groups {
            assert!(group
                .venues
                .iter()
                .all(|v| v.city == group.city && v.state == group.state));
        }
    }

    #[test]
    fn city_matching_is_case_sensitive() {
        let groups = group_by_location(vec![place(1, "Austin", "TX"), place(2, "austin", "TX")]);
        assert_eq!(groups.len(), 2);
    }
}
