use approx::assert_relative_eq;
use rust_nbody::astro::OrbitType;
use rust_nbody::clock::SimDate;
use rust_nbody::file::read_file;
use rust_nbody::nbody::Simulation;

const INNER_PLANETS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/inner-planets.jdf");

#[test]
fn test_load_inner_planets() {
    let scenario = read_file(INNER_PLANETS).unwrap();
    assert_eq!(scenario.bodies.len(), 8);
    assert_eq!(scenario.central_index(), Some(0));
    assert_eq!(scenario.params.julian, Some(2451545.0));

    let sim = Simulation::new(scenario).unwrap();
    let clone = sim.find_body("Apophis[2]").unwrap();
    assert!(clone.info.is_clone);
    assert_eq!(clone.info.base_name, "Apophis");
    assert!(!clone.info.show_trail);
    assert_eq!(sim.find_body("Sun").unwrap().info.base_name, "Sun");
}

#[test]
fn test_planets_keep_their_orbits() {
    let mut sim = Simulation::new(read_file(INNER_PLANETS).unwrap()).unwrap();
    for _ in 0..60 {
        sim.elements_for_all();
        sim.advance(1.0);
    }
    sim.elements_for_all();

    let date = SimDate::new(sim.scenario().params.julian);
    assert_eq!(date.label(sim.elapsed()), "2000-3-01.50");

    // Only gently perturbed over two months
    let expected = [
        ("Mercury", 0.387098, 0.205630, 7.005),
        ("Venus", 0.723332, 0.006772, 3.3946),
        ("Earth", 1.000001, 0.016709, 0.00005),
        ("Mars", 1.523679, 0.0934, 1.850),
        ("Jupiter", 5.2044, 0.0489, 1.303),
    ];
    for (name, a, e, incl) in expected {
        let elements = sim.find_body(name).unwrap().elements.unwrap();
        assert_eq!(elements.orbit_type, OrbitType::Elliptical, "{}", name);
        assert_relative_eq!(elements.a, a, max_relative = 5e-3);
        assert_relative_eq!(elements.e, e, epsilon = 5e-3);
        assert_relative_eq!(elements.incl.to_degrees(), incl, epsilon = 0.05);
    }

    // Noorbit: the sun never gets elements
    assert!(sim.find_body("Sun").unwrap().elements.is_none());
}
