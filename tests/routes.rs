use electric_airplane_sizer::config::RouteConfig;
use electric_airplane_sizer::routes::catalog::AirportCatalog;
use electric_airplane_sizer::routes::{
    LocationSearch, MissionLeg, RouteError, Waypoint, from_config, governing_leg,
    great_circle_distance_km, resolve_leg,
};

#[test]
fn haversine_matches_known_city_pairs() {
    // Bangalore to Kochi.
    let d = great_circle_distance_km(13.1939, 77.7064, 10.1924, 76.2597);
    assert!((d - 369.0).abs() < 1.0, "BLR-COK = {}", d);

    // Bangalore to Hyderabad.
    let d = great_circle_distance_km(13.1939, 77.7064, 17.3850, 78.4867);
    assert!((d - 473.5).abs() < 1.0, "BLR-HYD = {}", d);

    // Coincident points.
    assert_eq!(great_circle_distance_km(13.0, 77.0, 13.0, 77.0), 0.0);
}

#[test]
fn leg_between_derives_the_great_circle_distance() {
    let origin = Waypoint {
        name: "Bangalore".to_string(),
        latitude_deg: 13.1939,
        longitude_deg: 77.7064,
    };
    let destination = Waypoint {
        name: "Kochi".to_string(),
        latitude_deg: 10.1924,
        longitude_deg: 76.2597,
    };
    let leg = MissionLeg::between(origin, destination);
    assert!((leg.distance_km - 369.0).abs() < 1.0);
    assert_eq!(leg.label(), "Bangalore → Kochi");
}

#[test]
fn explicit_catalog_distance_wins_over_the_derived_one() {
    let config = RouteConfig {
        origin_name: "Bengaluru".to_string(),
        origin_lat: 13.1939,
        origin_lon: 77.7064,
        dest_name: "Kochi".to_string(),
        dest_lat: 10.1924,
        dest_lon: 76.2597,
        dist_km: Some(350.0),
    };
    assert_eq!(from_config(&config).distance_km, 350.0);

    let mut derived = config;
    derived.dist_km = None;
    assert!((from_config(&derived).distance_km - 369.0).abs() < 1.0);
}

#[test]
fn governing_leg_is_the_longest() {
    let legs: Vec<MissionLeg> = [("Kochi", 350.0), ("Hyderabad", 560.0), ("Coimbatore", 270.0)]
        .into_iter()
        .map(|(name, distance_km)| MissionLeg {
            origin: Waypoint {
                name: "Bengaluru".to_string(),
                latitude_deg: 13.1939,
                longitude_deg: 77.7064,
            },
            destination: Waypoint {
                name: name.to_string(),
                latitude_deg: 0.0,
                longitude_deg: 0.0,
            },
            distance_km,
        })
        .collect();
    let governing = governing_leg(&legs).unwrap();
    assert_eq!(governing.destination.name, "Hyderabad");
    assert_eq!(governing.distance_km, 560.0);

    assert!(governing_leg(&[]).is_none());
}

#[test]
fn catalog_resolves_codes_and_city_names() {
    let catalog = AirportCatalog;

    let blr = catalog.by_code("blr").unwrap();
    assert_eq!(blr.name, "Bangalore");
    assert!((blr.latitude_deg - 13.1939).abs() < 1e-9);

    // Free-text search: exact code first, then city-name substrings.
    let results = catalog.search("BLR");
    assert_eq!(results[0].name, "Bangalore");
    let results = catalog.search("kochi");
    assert_eq!(results[0].name, "Kochi");

    assert!(catalog.by_code("ZZZ").is_none());
    assert!(catalog.search("x").is_empty());
    assert!(catalog.search("nairobi somewhere").is_empty());
}

#[test]
fn resolve_leg_builds_from_code_pairs() {
    let catalog = AirportCatalog;
    let leg = resolve_leg(&catalog, "BLR:COK").unwrap();
    assert_eq!(leg.origin.name, "Bangalore");
    assert_eq!(leg.destination.name, "Kochi");
    assert!((leg.distance_km - 369.0).abs() < 1.0);
}

#[test]
fn resolve_leg_rejects_malformed_and_unknown_specs() {
    let catalog = AirportCatalog;
    assert!(matches!(
        resolve_leg(&catalog, "BLRCOK"),
        Err(RouteError::MalformedLeg(_))
    ));
    assert!(matches!(
        resolve_leg(&catalog, "QQQQ:COK"),
        Err(RouteError::UnknownLocation(_))
    ));
}
