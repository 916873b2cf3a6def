use std::collections::HashSet;

use boatga::{
    evolution::{EvolutionLauncher, EvolutionOptions, FitnessFormula, MemorySink},
    individual::IdGenerator,
    item::Category,
    pool::ItemPool,
    population::PopulationInitializer,
    rng::RandomNumberGenerator,
    stash::{generate_stash, StashConfig},
    RouletteWheelSelection, SinglePointCrossover,
};

fn mixed_config() -> StashConfig {
    StashConfig::new(vec![
        (Category::Wood, 200),
        (Category::Rope, 500),
        (Category::Leaf, 2000),
        (Category::Metal, 50),
    ])
}

#[test]
fn test_mixed_stash_has_unique_ids() {
    let mut rng = RandomNumberGenerator::from_seed(21);
    let stash = generate_stash(&mixed_config(), &mut rng);

    assert_eq!(stash.len(), 2750);
    let ids: HashSet<u64> = stash.iter().map(|item| item.id).collect();
    assert_eq!(ids.len(), stash.len());
    assert!(ItemPool::new(stash).is_ok());
}

#[test]
fn test_initializer_on_generated_stash() {
    let mut rng = RandomNumberGenerator::from_seed(22);
    let mut pool = ItemPool::new(generate_stash(&mixed_config(), &mut rng)).unwrap();
    let mut ids = IdGenerator::new();
    let initializer = PopulationInitializer::new(1000.0);

    let population = initializer
        .create_population(8, &mut pool, &mut ids, &mut rng)
        .unwrap();

    let mut seen = HashSet::new();
    for individual in &population {
        assert!(individual.total_area() >= 1000.0);
        for item in individual.items() {
            assert!(seen.insert(item.id));
            assert!(!pool.contains(item.id));
        }
    }
    assert_eq!(pool.len() + seen.len(), 2750);
}

#[test]
fn test_inverse_density_run_on_mixed_stash() {
    let mut rng = RandomNumberGenerator::from_seed(23);
    let mut pool = ItemPool::new(generate_stash(&mixed_config(), &mut rng)).unwrap();
    let mut sink = MemorySink::default();
    let options = EvolutionOptions::builder()
        .min_area(400.0)
        .max_density(5.0)
        .population_size(6)
        .required_improvements(2)
        .max_generations(Some(500))
        .build();
    let launcher = EvolutionLauncher::new(
        SinglePointCrossover::new(),
        RouletteWheelSelection::new(),
        FitnessFormula::InverseDensity,
    );

    let result = launcher.run(&options, &mut pool, &mut sink, &mut rng).unwrap();

    let metrics = result.best.metrics().unwrap();
    assert!((metrics.fitness - 1.0 / metrics.density).abs() < 1e-9);
    assert!(sink.records().len() >= 2);
}

#[cfg(feature = "serde")]
#[test]
fn test_saved_stash_feeds_a_pool() {
    use boatga::stash::{load_stash, save_stash};

    let mut rng = RandomNumberGenerator::from_seed(24);
    let stash = generate_stash(&mixed_config(), &mut rng);
    let path = std::env::temp_dir().join(format!("boatga-it-stash-{}.json", std::process::id()));

    save_stash(&path, &stash).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    let loaded = load_stash(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["type"], "wood");
    assert_eq!(json[0]["id"], 0);
    assert_eq!(loaded, stash);
    assert_eq!(ItemPool::new(loaded).unwrap().len(), 2750);
}

#[cfg(feature = "serde")]
#[test]
fn test_stash_file_to_output_log() {
    use boatga::evolution::{EvolutionLauncherBuilder, FileSink, Tee, TracingSink};
    use boatga::stash::{load_stash, save_stash};

    let dir = std::env::temp_dir();
    let stash_path = dir.join(format!("boatga-flow-stash-{}.json", std::process::id()));
    let output_path = dir.join(format!("boatga-flow-output-{}.txt", std::process::id()));
    let _ = std::fs::remove_file(&output_path);

    let mut rng = RandomNumberGenerator::from_seed(25);
    save_stash(&stash_path, &generate_stash(&mixed_config(), &mut rng)).unwrap();

    let mut pool = ItemPool::new(load_stash(&stash_path).unwrap()).unwrap();
    let options = EvolutionOptions::builder()
        .min_area(400.0)
        .max_density(50.0)
        .population_size(6)
        .required_improvements(1)
        .max_generations(Some(200))
        .build();
    let launcher = EvolutionLauncherBuilder::standard().build().unwrap();
    let mut sink = Tee::new(TracingSink, FileSink::append(&output_path).unwrap());
    let result = launcher.run(&options, &mut pool, &mut sink, &mut rng).unwrap();
    drop(sink);

    let log = std::fs::read_to_string(&output_path).unwrap();
    std::fs::remove_file(&stash_path).unwrap();
    std::fs::remove_file(&output_path).unwrap();

    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), result.improvements + 2);
    assert!(lines[0].starts_with("[i] "));
    assert!(lines[lines.len() - 1].starts_with(&format!("[!] {} ", result.best.id())));
}
