//! Vehicle-type detection.
//!
//! Each [`VehicleType`] owns one case-insensitive whole-word pattern
//! listing its Italian synonyms. A type is reported when any synonym
//! occurs anywhere in the text; occurrence counts are irrelevant.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use road_watch_incident_models::VehicleType;

/// Synonym patterns in vocabulary order.
static VEHICLE_PATTERNS: LazyLock<Vec<(VehicleType, Regex)>> = LazyLock::new(|| {
    [
        (VehicleType::Car, r"(?i)\b(?:auto|automobile|vettura|macchina)\b"),
        (
            VehicleType::Motorcycle,
            r"(?i)\b(?:moto|motociclo|motocicletta|scooter)\b",
        ),
        (VehicleType::Bicycle, r"(?i)\b(?:bici|bicicletta|ciclista)\b"),
        (
            VehicleType::Truck,
            r"(?i)\b(?:tir|camion|mezzo\s+pesante|autocarro)\b",
        ),
        (VehicleType::Van, r"(?i)\b(?:furgone|van)\b"),
        (VehicleType::Bus, r"(?i)\b(?:bus|autobus|pullman)\b"),
    ]
    .into_iter()
    .map(|(vehicle, pattern)| (vehicle, Regex::new(pattern).expect("valid regex")))
    .collect()
});

/// Returns the set of vehicle types mentioned in `text`.
///
/// Iterating the returned set yields types in vocabulary order.
#[must_use]
pub fn classify_vehicles(text: &str) -> BTreeSet<VehicleType> {
    VEHICLE_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(vehicle, _)| *vehicle)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_motorcycle_and_car() {
        let found = classify_vehicles("Scontro tra moto e auto, 2 feriti");
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            vec![VehicleType::Car, VehicleType::Motorcycle]
        );
    }

    #[test]
    fn empty_text_has_no_vehicles() {
        assert!(classify_vehicles("").is_empty());
        assert!(
            classify_vehicles(
                "Un morto nell'incidente sulla provinciale, due feriti trasportati in ospedale"
            )
            .is_empty()
        );
    }

    #[test]
    fn matching_is_case_insensitive_and_whole_word() {
        let found = classify_vehicles("AUTOBUS fermo, il TIR ha sbandato");
        assert!(found.contains(&VehicleType::Bus));
        assert!(found.contains(&VehicleType::Truck));
        // "autostrada" and "motore" contain synonyms only as prefixes.
        assert!(classify_vehicles("autostrada chiusa, motore in panne").is_empty());
    }

    #[test]
    fn repeated_mentions_are_reported_once() {
        let found = classify_vehicles("bici, bicicletta, un ciclista e un'altra bici");
        assert_eq!(found.len(), 1);
        assert!(found.contains(&VehicleType::Bicycle));
    }

    #[test]
    fn multi_word_synonym_matches_across_whitespace() {
        let found = classify_vehicles("coinvolto un mezzo  pesante e un furgone");
        assert!(found.contains(&VehicleType::Truck));
        assert!(found.contains(&VehicleType::Van));
    }

    #[test]
    fn result_is_subset_of_vocabulary() {
        let text = "auto moto bici tir furgone pullman van scooter camion";
        let found = classify_vehicles(text);
        assert_eq!(found.len(), VehicleType::all().len());
        assert!(found.iter().all(|v| VehicleType::all().contains(v)));
    }
}
