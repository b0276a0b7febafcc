use crate::config::{AeroConfig, ConfigError, SimulationConfig};
use crate::constants::{EVASION_ACCELERATION_LIMIT_G, FREEFALL_ACC};
use crate::enums::{EvasionPolicy, SimStatus};
use crate::state::StepResult;
use crate::types::{KinematicState, SimTime, Vector};

#[test]
fn test_default_config_is_valid() {
    assert!(SimulationConfig::default().validate().is_ok());
}

#[test]
fn test_stationary_target_is_valid() {
    let config = SimulationConfig {
        target_initial_speed: 0.0,
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_every_violation_is_reported() {
    let config = SimulationConfig {
        missile_initial_speed: 0.0,
        target_initial_speed: -1.0,
        navigation_constant: -3.0,
        initial_separation_distance: 0.0,
        time_step: 0.0,
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    let fields: Vec<&str> = err.violations().iter().map(|v| v.field).collect();
    assert_eq!(
        fields,
        vec![
            "missile_initial_speed",
            "target_initial_speed",
            "navigation_constant",
            "initial_separation_distance",
            "time_step",
        ]
    );
}

#[test]
fn test_nan_is_rejected() {
    let config = SimulationConfig {
        time_step: f64::NAN,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidConfiguration(ref v)) if v.len() == 1
    ));
}

#[test]
fn test_evasion_checked_only_when_enabled() {
    let mut config = SimulationConfig::default();
    config.evasion.policy = EvasionPolicy::Random {
        min_duration: 5.0,
        max_duration: 1.0,
    };
    assert!(config.validate().is_ok());

    config.evasive_enabled = true;
    let err = config.validate().unwrap_err();
    assert_eq!(err.violations()[0].field, "evasion.max_duration");
}

#[test]
fn test_evasion_acceleration_is_capped() {
    let mut config = SimulationConfig {
        evasive_enabled: true,
        ..Default::default()
    };
    config.evasion.max_acceleration = EVASION_ACCELERATION_LIMIT_G * FREEFALL_ACC;
    assert!(config.validate().is_ok());

    config.evasion.max_acceleration = 1e308;
    let err = config.validate().unwrap_err();
    assert_eq!(err.violations().len(), 1);
    assert_eq!(err.violations()[0].field, "evasion.max_acceleration");
    assert_eq!(err.violations()[0].requirement, "<= 100 g");
}

#[test]
fn test_seeker_and_delay_validated() {
    let config = SimulationConfig {
        guidance_delay: Some(0.5),
        seeker_max_off_boresight: Some(1.0),
        ..Default::default()
    };
    assert!(config.validate().is_ok());

    let config = SimulationConfig {
        guidance_delay: Some(-0.1),
        seeker_max_off_boresight: Some(4.0),
        ..Default::default()
    };
    let fields: Vec<&str> = config
        .validate()
        .unwrap_err()
        .violations()
        .iter()
        .map(|v| v.field)
        .collect();
    assert_eq!(fields, vec!["guidance_delay", "seeker_max_off_boresight"]);

    let config = SimulationConfig {
        seeker_max_off_boresight: Some(0.0),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_aero_fields_validated() {
    let config = SimulationConfig {
        aero: Some(AeroConfig {
            empty_mass: 0.0,
            ..Default::default()
        }),
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.violations()[0].field, "aero.empty_mass");
    assert!(err.to_string().contains("aero.empty_mass"));
}

#[test]
fn test_partial_json_config_fills_defaults() {
    let json = r#"{ "missile_initial_speed": 600.0, "evasive_enabled": true,
                    "evasion": { "policy": { "type": "Weave", "period": 1.5 } } }"#;
    let config: SimulationConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.missile_initial_speed, 600.0);
    assert_eq!(config.navigation_constant, SimulationConfig::default().navigation_constant);
    assert_eq!(config.evasion.policy, EvasionPolicy::Weave { period: 1.5 });
    assert_eq!(
        config.evasion.max_acceleration,
        SimulationConfig::default().evasion.max_acceleration
    );
}

#[test]
fn test_status_terminality() {
    assert!(!SimStatus::Running.is_terminal());
    assert!(SimStatus::InterceptedMissileHit.is_terminal());
    assert!(SimStatus::MissileTooSlow.is_terminal());
    assert!(SimStatus::NumericalDivergence.is_terminal());
}

#[test]
fn test_heading_convention() {
    // Heading 0 = North (+y), PI/2 = East (+x)
    let north = KinematicState::with_heading(Vector::ZERO, 100.0, 0.0);
    assert!((north.velocity - Vector::new(0.0, 100.0)).length() < 1e-9);

    let east = KinematicState::with_heading(Vector::ZERO, 100.0, std::f64::consts::FRAC_PI_2);
    assert!((east.velocity - Vector::new(100.0, 0.0)).length() < 1e-9);
}

#[test]
fn test_kinematic_state_finiteness() {
    let mut state = KinematicState::new(Vector::new(1.0, 2.0), Vector::new(3.0, 4.0));
    assert!(state.is_finite());
    assert_eq!(state.speed(), 5.0);

    state.velocity.x = f64::INFINITY;
    assert!(!state.is_finite());
}

#[test]
fn test_sim_time_accumulates() {
    let mut time = SimTime::default();
    let mut expected = 0.0;
    for _ in 0..10 {
        time.advance(0.1);
        expected += 0.1;
    }
    assert_eq!(time.tick, 10);
    assert_eq!(time.elapsed_secs, expected);
}

#[test]
fn test_step_result_serde() {
    let result = StepResult {
        tick: 3,
        elapsed_time: 0.15,
        missile_position: Vector::new(0.0, 45.0),
        target_position: Vector::new(0.0, 5000.0),
        missile_velocity: Vector::new(0.0, 300.0),
        status: SimStatus::MissileTooSlow,
        ..Default::default()
    };
    let json = serde_json::to_string(&result).unwrap();
    let back: StepResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
    assert_eq!(back.missile_speed(), 300.0);
}
