use forage::domain::{CustomerRecord, HubRecord};
use forage::evaluation::run_episode;
use forage::policy::NearestNeighbour;
use forage::{haversine_km, Candidate, EpisodeStatus, ForageError, ForagingEnv, GeoPoint};

const TOL: f64 = 1e-6;

fn customer(id: &str, lat: f64, lon: f64, importance: f64, hub: &str) -> CustomerRecord {
    CustomerRecord {
        customer_id: id.to_string(),
        lat,
        lon,
        importance,
        assigned_hub: hub.to_string(),
    }
}

fn tables() -> (Vec<CustomerRecord>, Vec<HubRecord>) {
    let customers = vec![
        customer("a", 0.0, 0.1, 5.0, "H1"),
        customer("b", -5.20, -80.60, 9.0, "H2"),
        customer("c", 0.0, 50.0, 100.0, "H1"),
        customer("d", -5.10, -80.70, 2.0, "H2"),
    ];
    let hubs = vec![
        HubRecord {
            hub_id: "H1".into(),
            lat: 0.0,
            lon: 0.0,
        },
        HubRecord {
            hub_id: "H2".into(),
            lat: -5.1945,
            lon: -80.6328,
        },
    ];
    (customers, hubs)
}

#[test]
fn budget_exhaustion_scenario() {
    let (customers, hubs) = tables();
    let mut env = ForagingEnv::from_records(&customers, &hubs, "H1", "dist_km", 100.0).unwrap();
    assert_eq!(env.distance_col(), Some("dist_km"));

    let start = env.reset();
    assert_eq!((start.current_lat, start.current_lon), (0.0, 0.0));
    assert_eq!(start.remaining_km, 100.0);
    assert_eq!(start.total_reward, 0.0);
    assert_eq!(start.total_distance, 0.0);

    let first = env.step(0).unwrap();
    assert_eq!(first.reward, 5.0);
    assert!(!first.done);
    assert!((first.info.travel_km.unwrap() - 11.119).abs() < 1e-3);
    assert!((first.observation.remaining_km - 88.88).abs() < 1e-2);

    let second = env.step(1).unwrap();
    assert_eq!(second.reward, 0.0);
    assert!(second.done);
    assert_eq!(second.info.message, "budget exhausted");
    assert_eq!(second.observation, first.observation);
    assert_eq!(env.status(), EpisodeStatus::Exhausted);
}

#[test]
fn from_records_keeps_only_the_hubs_customers_in_order() {
    let (customers, hubs) = tables();
    let env = ForagingEnv::from_records(&customers, &hubs, "H2", "dist_km", 400.0).unwrap();
    let importances: Vec<f64> = env.candidates().iter().map(|c| c.importance).collect();
    assert_eq!(importances, vec![9.0, 2.0]);
    assert_eq!(env.hub(), GeoPoint::new(-5.1945, -80.6328));
    let ids: Vec<Option<&str>> = env.candidates().iter().map(|c| c.id.as_deref()).collect();
    assert_eq!(ids, vec![Some("b"), Some("d")]);
}

#[test]
fn unknown_hub_is_a_fault() {
    let (customers, hubs) = tables();
    let err = ForagingEnv::from_records(&customers, &hubs, "H9", "dist_km", 400.0).unwrap_err();
    assert!(matches!(err, ForageError::HubNotFound(ref id) if id == "H9"));
}

#[test]
fn instances_do_not_share_visited_flags() {
    let (customers, hubs) = tables();
    let mut a = ForagingEnv::from_records(&customers, &hubs, "H2", "dist_km", 400.0).unwrap();
    let b = ForagingEnv::from_records(&customers, &hubs, "H2", "dist_km", 400.0).unwrap();

    a.step(0).unwrap();
    assert_eq!(a.is_visited(0), Some(true));
    assert_eq!(b.is_visited(0), Some(false));

    let mut cloned = a.clone();
    cloned.step(1).unwrap();
    assert_eq!(a.is_visited(1), Some(false));
}

#[test]
fn termination_matches_the_two_conditions() {
    let hub = GeoPoint::new(-5.1945, -80.6328);
    let candidates = vec![
        Candidate::new(-5.24, -80.60, 1.0),
        Candidate::new(-5.10, -80.67, 2.0),
        Candidate::new(-5.26, -80.50, 3.0),
    ];
    let mut env = ForagingEnv::new(candidates.clone(), hub, 40.0);

    for idx in [0, 1, 2] {
        let before = env.observation();
        let here = GeoPoint::new(before.current_lat, before.current_lon);
        let needed = haversine_km(here, candidates[idx].location);
        let res = env.step(idx).unwrap();

        let exhausted = needed > before.remaining_km;
        let all_visited = (0..3).all(|i| env.is_visited(i) == Some(true));
        assert_eq!(res.done, exhausted || all_visited);
        assert!((res.observation.remaining_km + res.observation.total_distance - 40.0).abs() < TOL);
        if res.done {
            break;
        }
    }
}

#[test]
fn reset_after_terminal_episode() {
    let mut env = ForagingEnv::new(
        vec![Candidate::new(0.0, 0.1, 5.0)],
        GeoPoint::new(0.0, 0.0),
        50.0,
    );
    let initial = env.observation();
    assert!(env.step(0).unwrap().done);
    assert_eq!(env.status(), EpisodeStatus::Complete);

    assert_eq!(env.reset(), initial);
    assert_eq!(env.is_visited(0), Some(false));
    assert!(env.path().is_empty());

    let again = env.step(0).unwrap();
    assert_eq!(again.reward, 5.0);
    assert!(again.done);
}

#[test]
fn summary_route_names_customers() {
    let (customers, hubs) = tables();
    let mut env = ForagingEnv::from_records(&customers, &hubs, "H2", "dist_km", 400.0).unwrap();
    let summary = run_episode(&mut env, &mut NearestNeighbour, "H2", 10).unwrap();

    assert_eq!(summary.status, EpisodeStatus::Complete);
    assert_eq!(summary.path.len(), 2);
    let expected: Vec<String> = summary
        .path
        .iter()
        .map(|&i| ["b", "d"][i].to_string())
        .collect();
    assert_eq!(summary.route, expected);
}
