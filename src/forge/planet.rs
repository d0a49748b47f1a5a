use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    Earth,
    Desert,
    Lava,
    Moon,
    Tropical,
    Ice,
    Metal,
}

impl Biome {
    pub const ALL: [Biome; 7] = [
        Biome::Earth,
        Biome::Desert,
        Biome::Lava,
        Biome::Moon,
        Biome::Tropical,
        Biome::Ice,
        Biome::Metal,
    ];
}

/// Terrain parameters fed to the in-game planet builder.
#[derive(Clone, Debug)]
pub struct Surface {
    pub seed: u32,
    pub radius: f64,
    pub temperature: f64,
    pub metal_density: f64,
    pub metal_clusters: u32,
    pub biome: Biome,
}

#[derive(Clone, Debug)]
pub struct Planet {
    pub name: String,
    pub mass: u32,
    pub position: (f64, f64),
    pub velocity: (f64, f64),
    pub starting: bool,
    pub surface: Surface,
}
