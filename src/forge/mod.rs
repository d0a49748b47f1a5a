pub mod config;
pub mod export;
pub mod naming;
pub mod orbit;
pub mod planet;
pub mod system;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// A count is below 1 or a range violates min <= max. Raised before any
    /// system is generated.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::config::{BatchConfig, StartingConfig};
    use super::export;
    use super::naming::sanitize_filename;
    use super::orbit;
    use super::system::SystemForge;
    use super::GenerationError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn forge(seed: u64, config: BatchConfig) -> SystemForge {
        SystemForge::with_config(seed, config).expect("config should be valid")
    }

    #[test]
    fn batch_is_deterministic_for_same_seed() {
        let b1 = forge(42, BatchConfig::default()).generate();
        let b2 = forge(42, BatchConfig::default()).generate();

        let j1 = export::batch_json(&b1).expect("serializable");
        let j2 = export::batch_json(&b2).expect("serializable");
        assert_eq!(j1, j2);
    }

    #[test]
    fn generates_requested_system_count() {
        let config = BatchConfig {
            system_count: 5,
            ..BatchConfig::default()
        };
        let batch = forge(7, config).generate();
        assert_eq!(batch.systems.len(), 5);
    }

    #[test]
    fn fixed_count_range_yields_exact_resource_count() {
        let config = BatchConfig {
            planet_count_range: 2..=2,
            ..BatchConfig::default()
        };
        let batch = forge(11, config).generate();
        for system in &batch.systems {
            assert_eq!(system.resource_planets().count(), 2, "in {}", system.name);
        }
    }

    #[test]
    fn planet_stats_stay_within_configured_bounds() {
        let config = BatchConfig {
            system_count: 8,
            planet_count_range: 1..=6,
            planet_size_range: 150.0..=600.0,
            metal_density_range: 20.0..=100.0,
            starting: StartingConfig {
                players: 2,
                size_range: 300.0..=500.0,
                metal_density_range: 80.0..=120.0,
            },
            name_base: None,
        };
        let batch = forge(123, config.clone()).generate();

        for system in &batch.systems {
            let extra = system.resource_planets().count();
            assert!(config.planet_count_range.contains(&extra), "in {}", system.name);

            for planet in system.resource_planets() {
                assert!(config.planet_size_range.contains(&planet.surface.radius));
                assert!(config
                    .metal_density_range
                    .contains(&planet.surface.metal_density));
            }
            for planet in system.starting_planets() {
                assert!(config.starting.size_range.contains(&planet.surface.radius));
                assert!(config
                    .starting
                    .metal_density_range
                    .contains(&planet.surface.metal_density));
            }
        }
    }

    #[test]
    fn starting_planets_are_one_per_player_and_lead_the_list() {
        let config = BatchConfig {
            starting: StartingConfig {
                players: 4,
                ..StartingConfig::default()
            },
            ..BatchConfig::default()
        };
        let batch = forge(5, config).generate();

        for system in &batch.systems {
            assert_eq!(system.starting_planets().count(), 4);
            for planet in system.planets.iter().take(4) {
                assert!(planet.starting, "{} should lead with spawns", system.name);
                let distance = planet.position.0.hypot(planet.position.1);
                assert!(
                    (distance - orbit::STARTING_ORBIT).abs() < 1.0,
                    "spawn off the shared orbit in {}",
                    system.name
                );
            }
        }
    }

    #[test]
    fn starting_planets_share_the_stat_envelope() {
        // Degenerate ranges pin the stats, so every spawn must match exactly.
        let config = BatchConfig {
            starting: StartingConfig {
                players: 3,
                size_range: 450.0..=450.0,
                metal_density_range: 90.0..=90.0,
            },
            ..BatchConfig::default()
        };
        let batch = forge(9, config).generate();

        for system in &batch.systems {
            for planet in system.starting_planets() {
                assert_eq!(planet.surface.radius, 450.0);
                assert_eq!(planet.surface.metal_density, 90.0);
            }
        }
    }

    #[test]
    fn invalid_configurations_are_rejected() {
        let cases = [
            BatchConfig {
                system_count: 0,
                ..BatchConfig::default()
            },
            BatchConfig {
                planet_count_range: 5..=2,
                ..BatchConfig::default()
            },
            BatchConfig {
                planet_size_range: 400.0..=200.0,
                ..BatchConfig::default()
            },
            BatchConfig {
                metal_density_range: -5.0..=10.0,
                ..BatchConfig::default()
            },
            BatchConfig {
                starting: StartingConfig {
                    players: 0,
                    ..StartingConfig::default()
                },
                ..BatchConfig::default()
            },
        ];

        for config in cases {
            let result = SystemForge::with_config(1, config);
            assert!(matches!(
                result.err(),
                Some(GenerationError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn name_base_numbers_systems_in_order() {
        let config = BatchConfig {
            system_count: 3,
            name_base: Some("Duel Ring".to_string()),
            ..BatchConfig::default()
        };
        let batch = forge(2, config).generate();
        let names: Vec<&str> = batch.systems.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Duel Ring 1", "Duel Ring 2", "Duel Ring 3"]);
    }

    #[test]
    fn procedural_names_are_unique_within_a_batch() {
        let config = BatchConfig {
            system_count: 20,
            ..BatchConfig::default()
        };
        let batch = forge(77, config).generate();

        let mut seen = HashSet::new();
        for system in &batch.systems {
            assert!(seen.insert(system.name.clone()), "duplicate {}", system.name);
        }
    }

    #[test]
    fn sanitize_filename_replaces_unsafe_characters() {
        assert_eq!(sanitize_filename("My System: Alpha/1"), "My_System__Alpha_1");
        assert_eq!(sanitize_filename("plain_name-2"), "plain_name-2");
    }

    #[test]
    fn perp_velocity_is_orthogonal_to_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (px, py) = (25_000.0, -14_000.0);
        let (vx, vy) = orbit::perp_velocity(&mut rng, px, py, 1.0);
        let dot = px * vx + py * vy;
        assert!(dot.abs() < 1e-6, "dot product was {}", dot);
        assert!(vx.hypot(vy) > 0.0);
    }

    #[test]
    fn export_follows_server_mod_layout() {
        let config = BatchConfig {
            system_count: 2,
            name_base: Some("Test Map".to_string()),
            ..BatchConfig::default()
        };
        let batch = forge(4, config).generate();
        let files = export::batch_files(&batch).expect("export should succeed");

        assert_eq!(files.len(), 4);
        assert_eq!(files[0].path, "pa/maps/Test_Map_1_1.pas");
        assert_eq!(files[1].path, "pa/maps/Test_Map_2_2.pas");
        assert_eq!(files[2].path, "modinfo.json");
        assert_eq!(files[3].path, "README.txt");

        // The game only loads a .pas whose body is a one-element array.
        let pas: serde_json::Value =
            serde_json::from_str(&files[0].contents).expect("valid json");
        let wrapped = pas.as_array().expect("array wrapper");
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped[0]["name"], "Test Map 1");

        let modinfo: serde_json::Value =
            serde_json::from_str(&files[2].contents).expect("valid json");
        assert_eq!(modinfo["identifier"], "generated_maps");
        assert_eq!(modinfo["context"], "server");
    }

    #[test]
    fn records_use_the_pa_field_names() {
        let batch = forge(6, BatchConfig::default()).generate();
        let json = export::system_json(&batch.systems[0]).expect("serializable");
        let record: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(record["version"], "1.0");
        let planet = &record["planets"][0];
        for key in [
            "mass",
            "position_x",
            "velocity_y",
            "required_thrust_to_move",
            "starting_planet",
            "respawn",
            "start_destroyed",
            "min_spawn_delay",
        ] {
            assert!(planet.get(key).is_some(), "missing {}", key);
        }
        let surface = &planet["planet"];
        for key in [
            "seed",
            "radius",
            "heightRange",
            "waterHeight",
            "waterDepth",
            "temperature",
            "metalDensity",
            "metalClusters",
            "biomeScale",
            "biome",
        ] {
            assert!(surface.get(key).is_some(), "missing {}", key);
        }
        assert!(planet["starting_planet"].is_boolean());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = BatchConfig::default();
        let json = serde_json::to_string(&config).expect("serializable");
        let parsed: BatchConfig = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(parsed.system_count, config.system_count);
        assert_eq!(parsed.planet_count_range, config.planet_count_range);
        assert_eq!(parsed.starting.players, config.starting.players);
    }
}
