use randnet_evolve::{RewireStrategy, RunConfig, TraceFormat};

#[test]
fn minimal_yaml_fills_in_defaults() {
    let config = RunConfig::from_yaml("step_count: 10").unwrap();

    assert_eq!(config.step_count, 10);
    assert_eq!(config.nu, 1.0);
    assert_eq!(config.strategy, RewireStrategy::DegreePreservingSwap);
    assert_eq!(config.sampling.max_swap_attempts, 10_000);
    assert_eq!(config.trace.interval, 0);
    assert_eq!(config.trace.format, TraceFormat::Matrix);
}

#[test]
fn explicit_yaml_overrides_every_field() {
    let yaml = "
step_count: 500
nu: 0.25
strategy: edge-exchange
sampling:
  max_swap_attempts: 128
trace:
  interval: 50
  format: neighbour-pairs
seed_policy:
  master_seed: 42
";
    let config = RunConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.step_count, 500);
    assert_eq!(config.nu, 0.25);
    assert_eq!(config.strategy, RewireStrategy::EdgeExchange);
    assert_eq!(config.sampling.max_swap_attempts, 128);
    assert_eq!(config.trace.interval, 50);
    assert_eq!(config.trace.format, TraceFormat::NeighbourPairs);
    assert_eq!(config.seed_policy.master_seed, 42);
}

#[test]
fn yaml_roundtrip_preserves_the_configuration() {
    let mut config = RunConfig::default();
    config.step_count = 77;
    config.nu = 2.5;
    config.strategy = RewireStrategy::EdgeExchange;
    config.trace.interval = 7;

    let yaml = config.to_yaml().unwrap();
    let restored = RunConfig::from_yaml(&yaml).unwrap();

    assert_eq!(restored.step_count, 77);
    assert_eq!(restored.nu, 2.5);
    assert_eq!(restored.strategy, RewireStrategy::EdgeExchange);
    assert_eq!(restored.trace.interval, 7);
}

#[test]
fn malformed_yaml_is_a_typed_error() {
    let err = RunConfig::from_yaml("step_count: [not a number]").unwrap_err();
    assert_eq!(err.info().code, "config-parse");
}
