use crate::forge::config::BatchConfig;
use crate::forge::naming::generate_system_name;
use crate::forge::orbit::{perp_velocity, resource_position, starting_positions};
use crate::forge::planet::{Biome, Planet, Surface};
use crate::forge::GenerationError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Write;
use std::ops::RangeInclusive;

pub const PAS_VERSION: &str = "1.0";

const STARTING_MASS: u32 = 10_000;
const RESOURCE_MASS: u32 = 5_000;
const STARTING_METAL_CLUSTERS: u32 = 50;
const RESOURCE_METAL_CLUSTERS: u32 = 40;
const STARTING_TEMPERATURE: f64 = 50.0;

/// A generated star system. Starting planets come first, in player order.
#[derive(Clone, Debug)]
pub struct System {
    pub name: String,
    pub description: String,
    pub planets: Vec<Planet>,
}

impl System {
    pub fn starting_planets(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter().filter(|p| p.starting)
    }

    pub fn resource_planets(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter().filter(|p| !p.starting)
    }
}

#[derive(Clone, Debug)]
pub struct Batch {
    pub systems: Vec<System>,
}

pub struct SystemForge {
    seed: u64,
    config: BatchConfig,
    used_names: HashSet<String>,
}

impl SystemForge {
    pub fn new(seed: u64) -> Result<Self, GenerationError> {
        Self::with_config(seed, BatchConfig::default())
    }

    /// Validates the configuration up front; an invalid config never produces
    /// a partial batch.
    pub fn with_config(seed: u64, config: BatchConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self {
            seed,
            config,
            used_names: HashSet::new(),
        })
    }

    pub fn generate(&mut self) -> Batch {
        let mut systems = Vec::with_capacity(self.config.system_count);
        for index in 0..self.config.system_count {
            systems.push(self.generate_system(index));
        }
        Batch { systems }
    }

    fn generate_system(&mut self, index: usize) -> System {
        // Each system runs on a stream derived from the batch seed, so a
        // batch is reproducible and any one system can be regenerated alone.
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed.wrapping_add(index as u64));
        let name = self.system_name(&mut rng, index);

        let players = self.config.starting.players;
        let mut planets = Vec::new();
        for (slot, (px, py)) in starting_positions(players).into_iter().enumerate() {
            planets.push(self.make_starting_planet(&mut rng, slot, px, py));
        }

        let extra = rng.gen_range(self.config.planet_count_range.clone());
        for slot in 0..extra {
            planets.push(self.make_resource_planet(&mut rng, slot));
        }

        let description = format!(
            "Procedural system with {} starting planets and {} additional",
            players, extra
        );

        System {
            name,
            description,
            planets,
        }
    }

    fn system_name(&mut self, rng: &mut ChaCha8Rng, index: usize) -> String {
        match &self.config.name_base {
            Some(base) => format!("{} {}", base, index + 1),
            None => generate_system_name(rng, &mut self.used_names),
        }
    }

    fn make_starting_planet(
        &self,
        rng: &mut ChaCha8Rng,
        slot: usize,
        px: f64,
        py: f64,
    ) -> Planet {
        // Every starting planet samples the same ranges; spawns are
        // statistically equivalent rather than bit-identical.
        let radius = sample(rng, &self.config.starting.size_range);
        let metal = sample(rng, &self.config.starting.metal_density_range);
        let velocity = perp_velocity(rng, px, py, 1.0);

        Planet {
            name: format!("Starting Planet {}", slot + 1),
            mass: STARTING_MASS,
            position: (px, py),
            velocity,
            starting: true,
            surface: Surface {
                seed: rng.gen_range(0..=100_000),
                radius,
                temperature: STARTING_TEMPERATURE,
                metal_density: metal,
                metal_clusters: STARTING_METAL_CLUSTERS,
                biome: pick_biome(rng),
            },
        }
    }

    fn make_resource_planet(&self, rng: &mut ChaCha8Rng, slot: usize) -> Planet {
        let radius = sample(rng, &self.config.planet_size_range);
        let metal = sample(rng, &self.config.metal_density_range);
        let (px, py) = resource_position(rng);
        let speed_scale = rng.gen_range(0.8..=1.2);
        let velocity = perp_velocity(rng, px, py, speed_scale);

        Planet {
            name: format!("Resource Planet {}", slot + 1),
            mass: RESOURCE_MASS,
            position: (px, py),
            velocity,
            starting: false,
            surface: Surface {
                seed: rng.gen_range(0..=100_000),
                radius,
                temperature: rng.gen_range(0.0..=100.0),
                metal_density: metal,
                metal_clusters: RESOURCE_METAL_CLUSTERS,
                biome: pick_biome(rng),
            },
        }
    }
}

fn sample(rng: &mut ChaCha8Rng, range: &RangeInclusive<f64>) -> f64 {
    rng.gen_range(range.clone())
}

fn pick_biome(rng: &mut ChaCha8Rng) -> Biome {
    Biome::ALL[rng.gen_range(0..Biome::ALL.len())]
}

/// Plain-text preview of a batch, for the configuration summary pane.
pub fn batch_report(batch: &Batch, seed: u64) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Batch of {} systems (seed {})",
        batch.systems.len(),
        seed
    );

    for system in &batch.systems {
        let _ = writeln!(output, "System: {}", system.name);
        for planet in &system.planets {
            let role = if planet.starting { "starting" } else { "resource" };
            let _ = writeln!(
                output,
                "  - {} [{}] radius={:.0} metal={:.0} biome={:?} pos=({:.0}, {:.0})",
                planet.name,
                role,
                planet.surface.radius,
                planet.surface.metal_density,
                planet.surface.biome,
                planet.position.0,
                planet.position.1
            );
        }
    }

    output
}

// ---------------------------------------------------------------------------
// Serialized views in the exact `.pas` schema the game reads. Numeric fields
// the game treats as integers are rounded on the way out.
// ---------------------------------------------------------------------------

const HEIGHT_RANGE: i64 = 50;
const WATER_HEIGHT: i64 = 0;
const WATER_DEPTH: i64 = 0;
const BIOME_SCALE: i64 = 50;

#[derive(Serialize)]
pub struct SurfaceView {
    seed: u32,
    radius: i64,
    #[serde(rename = "heightRange")]
    height_range: i64,
    #[serde(rename = "waterHeight")]
    water_height: i64,
    #[serde(rename = "waterDepth")]
    water_depth: i64,
    temperature: i64,
    #[serde(rename = "metalDensity")]
    metal_density: i64,
    #[serde(rename = "metalClusters")]
    metal_clusters: u32,
    #[serde(rename = "biomeScale")]
    biome_scale: i64,
    biome: Biome,
}

#[derive(Serialize)]
pub struct PlanetView {
    name: String,
    mass: u32,
    position_x: i64,
    position_y: i64,
    velocity_x: i64,
    velocity_y: i64,
    required_thrust_to_move: u32,
    starting_planet: bool,
    respawn: bool,
    start_destroyed: bool,
    min_spawn_delay: u32,
    max_spawn_delay: u32,
    planet: SurfaceView,
}

#[derive(Serialize)]
pub struct SystemView {
    name: String,
    description: String,
    version: &'static str,
    planets: Vec<PlanetView>,
}

#[derive(Serialize)]
pub struct BatchView {
    systems: Vec<SystemView>,
}

impl From<&Planet> for PlanetView {
    fn from(planet: &Planet) -> Self {
        Self {
            name: planet.name.clone(),
            mass: planet.mass,
            position_x: planet.position.0.round() as i64,
            position_y: planet.position.1.round() as i64,
            velocity_x: planet.velocity.0.round() as i64,
            velocity_y: planet.velocity.1.round() as i64,
            required_thrust_to_move: 0,
            starting_planet: planet.starting,
            respawn: false,
            start_destroyed: false,
            min_spawn_delay: 0,
            max_spawn_delay: 0,
            planet: SurfaceView {
                seed: planet.surface.seed,
                radius: planet.surface.radius.round() as i64,
                height_range: HEIGHT_RANGE,
                water_height: WATER_HEIGHT,
                water_depth: WATER_DEPTH,
                temperature: planet.surface.temperature.round() as i64,
                metal_density: planet.surface.metal_density.round() as i64,
                metal_clusters: planet.surface.metal_clusters,
                biome_scale: BIOME_SCALE,
                biome: planet.surface.biome,
            },
        }
    }
}

impl From<&System> for SystemView {
    fn from(system: &System) -> Self {
        Self {
            name: system.name.clone(),
            description: system.description.clone(),
            version: PAS_VERSION,
            planets: system.planets.iter().map(PlanetView::from).collect(),
        }
    }
}

impl From<&Batch> for BatchView {
    fn from(batch: &Batch) -> Self {
        Self {
            systems: batch.systems.iter().map(SystemView::from).collect(),
        }
    }
}
