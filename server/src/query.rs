//! Free-text vehicle search.
//!
//! A vehicle matches a query when at least one [`MatchReason`] fires for it.
//! Text reasons are case-insensitive substring checks; numeric reasons only
//! apply when the whole query is an integer.

use crate::vehicle::Vehicle;

pub const DEFAULT_PRICE_WINDOW: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    Vrm,
    Make,
    Model,
    Variant,
    Colour,
    BodyType,
    ExactPrice,
    ExactMileage,
    NearPrice,
    RegistrationDate,
}

impl MatchReason {
    /// Evaluation order.
    pub const ALL: [MatchReason; 10] = [
        MatchReason::Vrm,
        MatchReason::Make,
        MatchReason::Model,
        MatchReason::Variant,
        MatchReason::Colour,
        MatchReason::BodyType,
        MatchReason::ExactPrice,
        MatchReason::ExactMileage,
        MatchReason::NearPrice,
        MatchReason::RegistrationDate,
    ];
}

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    number: Option<i64>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self {
            text: trimmed.to_lowercase(),
            number: trimmed.parse::<i64>().ok(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn number(&self) -> Option<i64> {
        self.number
    }
}

/// Tunables for the heuristic rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRules {
    /// Largest absolute price difference a numeric query still matches on.
    pub price_window: u64,
    /// Whether `DateOfRegistration` takes part as raw text.
    pub match_registration_date: bool,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            price_window: DEFAULT_PRICE_WINDOW,
            match_registration_date: true,
        }
    }
}

fn contains_text(field: &str, query: &Query) -> bool {
    field.to_lowercase().contains(query.text())
}

impl MatchRules {
    pub fn check(&self, reason: MatchReason, vehicle: &Vehicle, query: &Query) -> bool {
        match reason {
            MatchReason::Vrm => contains_text(&vehicle.vrm, query),
            MatchReason::Make => contains_text(&vehicle.make, query),
            MatchReason::Model => contains_text(&vehicle.model, query),
            MatchReason::Variant => contains_text(&vehicle.variant, query),
            MatchReason::Colour => contains_text(&vehicle.colour, query),
            MatchReason::BodyType => contains_text(&vehicle.body_type, query),
            MatchReason::ExactPrice => query.number() == Some(vehicle.price),
            MatchReason::ExactMileage => query.number() == Some(vehicle.mileage),
            MatchReason::NearPrice => query
                .number()
                .is_some_and(|n| vehicle.price.abs_diff(n) <= self.price_window),
            MatchReason::RegistrationDate => {
                self.match_registration_date && contains_text(&vehicle.date_of_registration, query)
            }
        }
    }

    /// Every reason the vehicle matches on, in [`MatchReason::ALL`] order.
    pub fn reasons(&self, vehicle: &Vehicle, query: &Query) -> Vec<MatchReason> {
        MatchReason::ALL
            .into_iter()
            .filter(|reason| self.check(*reason, vehicle, query))
            .collect()
    }

    pub fn matches(&self, vehicle: &Vehicle, query: &Query) -> bool {
        MatchReason::ALL
            .into_iter()
            .any(|reason| self.check(reason, vehicle, query))
    }

    /// Matching vehicles, in their original order.
    pub fn search(&self, query: &str, all: Vec<Vehicle>) -> Vec<Vehicle> {
        let query = Query::parse(query);
        all.into_iter()
            .filter(|vehicle| self.matches(vehicle, &query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(vrm: &str, make: &str, model: &str, price: i64, mileage: i64) -> Vehicle {
        Vehicle {
            vrm: vrm.to_string(),
            make: make.to_string(),
            model: model.to_string(),
            variant: "SE".to_string(),
            colour: "Silver".to_string(),
            body_type: "Hatchback".to_string(),
            price,
            mileage,
            date_of_registration: "2018-03-01".to_string(),
        }
    }

    fn fleet() -> Vec<Vehicle> {
        vec![
            vehicle("AB12CDE", "BMW", "3 Series", 12995, 45000),
            vehicle("XY19ZZZ", "Ford", "Fiesta", 8495, 12000),
            vehicle("LM68PQR", "Audi", "A4", 21500, 23000),
        ]
    }

    fn vrms(found: &[Vehicle]) -> Vec<&str> {
        found.iter().map(|v| v.vrm.as_str()).collect()
    }

    #[test]
    fn query_is_trimmed_and_lowercased() {
        let query = Query::parse("  BmW ");
        assert_eq!(query.text(), "bmw");
        assert_eq!(query.number(), None);
        assert_eq!(Query::parse(" 12000 ").number(), Some(12000));
        assert_eq!(Query::parse("12000abc").number(), None);
    }

    #[test]
    fn each_text_field_is_its_own_reason() {
        let rules = MatchRules::default();
        let mut v = vehicle("AB12CDE", "BMW", "3 Series", 1, 1);
        v.variant = "320d M Sport".to_string();
        v.colour = "Mineral Grey".to_string();
        v.body_type = "Saloon".to_string();

        let cases = [
            ("ab12", MatchReason::Vrm),
            ("bmw", MatchReason::Make),
            ("series", MatchReason::Model),
            ("m sport", MatchReason::Variant),
            ("grey", MatchReason::Colour),
            ("saloon", MatchReason::BodyType),
        ];
        for (text, expected) in cases {
            assert_eq!(
                rules.reasons(&v, &Query::parse(text)),
                vec![expected],
                "query {text:?}"
            );
        }
    }

    #[test]
    fn exact_price_and_mileage_need_a_numeric_query() {
        let rules = MatchRules {
            price_window: 0,
            ..MatchRules::default()
        };
        let v = vehicle("AB12CDE", "BMW", "3 Series", 12995, 45000);
        assert!(rules.check(MatchReason::ExactPrice, &v, &Query::parse("12995")));
        assert!(!rules.check(MatchReason::ExactPrice, &v, &Query::parse("12996")));
        assert!(rules.check(MatchReason::ExactMileage, &v, &Query::parse("45000")));
        assert!(!rules.check(MatchReason::ExactMileage, &v, &Query::parse("45k")));
    }

    #[test]
    fn near_price_uses_the_window() {
        let rules = MatchRules::default();
        let v = vehicle("AB12CDE", "BMW", "3 Series", 12995, 45000);
        assert!(rules.check(MatchReason::NearPrice, &v, &Query::parse("12000")));
        assert!(rules.check(MatchReason::NearPrice, &v, &Query::parse("13995")));
        assert!(!rules.check(MatchReason::NearPrice, &v, &Query::parse("11994")));
        assert!(!rules.check(MatchReason::NearPrice, &v, &Query::parse("10000")));

        let wide = MatchRules {
            price_window: 3000,
            ..MatchRules::default()
        };
        assert!(wide.check(MatchReason::NearPrice, &v, &Query::parse("10000")));
    }

    #[test]
    fn numeric_query_reports_every_numeric_reason_once() {
        let rules = MatchRules::default();
        let mut v = vehicle("AB12CDE", "BMW", "3 Series", 12995, 12995);
        v.date_of_registration = "2018-03-01".to_string();
        assert_eq!(
            rules.reasons(&v, &Query::parse("12995")),
            vec![
                MatchReason::ExactPrice,
                MatchReason::ExactMileage,
                MatchReason::NearPrice
            ]
        );
        assert_eq!(rules.search("12995", vec![v]).len(), 1);
    }

    #[test]
    fn registration_date_is_raw_text_and_can_be_disabled() {
        let v = vehicle("AB12CDE", "BMW", "3 Series", 1, 1);
        let rules = MatchRules::default();
        assert!(rules.check(MatchReason::RegistrationDate, &v, &Query::parse("2018-03")));
        assert!(!rules.check(MatchReason::RegistrationDate, &v, &Query::parse("March 2018")));

        let off = MatchRules {
            match_registration_date: false,
            ..MatchRules::default()
        };
        assert!(!off.check(MatchReason::RegistrationDate, &v, &Query::parse("2018-03")));
    }

    #[test]
    fn search_is_case_insensitive() {
        let rules = MatchRules::default();
        assert_eq!(
            rules.search("bmw", fleet()),
            rules.search("BMW", fleet())
        );
        assert_eq!(vrms(&rules.search("bmw", fleet())), ["AB12CDE"]);
    }

    #[test]
    fn fuzzy_price_selects_nearby_vehicles_only() {
        let rules = MatchRules::default();
        // 12000 is also XY19ZZZ's mileage
        assert_eq!(vrms(&rules.search("12000", fleet())), ["AB12CDE", "XY19ZZZ"]);
        assert!(rules.search("10000", fleet()).is_empty());
    }

    #[test]
    fn search_preserves_original_order() {
        let rules = MatchRules::default();
        assert_eq!(
            vrms(&rules.search("silver", fleet())),
            ["AB12CDE", "XY19ZZZ", "LM68PQR"]
        );
    }

    #[test]
    fn results_match_and_the_rest_do_not() {
        let rules = MatchRules::default();
        for raw in ["a", "fiesta", "8495", "2018", "zz", "hatch", "99999"] {
            let query = Query::parse(raw);
            let found = rules.search(raw, fleet());
            for v in fleet() {
                let listed = found.contains(&v);
                assert_eq!(listed, !rules.reasons(&v, &query).is_empty(), "query {raw:?}");
            }
        }
    }

    #[test]
    fn unknown_vrm_matches_nothing() {
        let rules = MatchRules::default();
        assert!(rules.search("QQ00QQQ", fleet()).is_empty());
    }
}
