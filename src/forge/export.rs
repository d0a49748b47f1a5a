use crate::forge::naming::sanitize_filename;
use crate::forge::system::{Batch, BatchView, System, SystemView};
use crate::forge::GenerationError;
use serde::Serialize;

/// One entry of the bundle handed to the download collaborator. Archiving and
/// disk I/O stay outside this crate.
#[derive(Clone, Debug, Serialize)]
pub struct ExportFile {
    pub path: String,
    pub contents: String,
}

#[derive(Serialize)]
struct ModInfo {
    context: &'static str,
    identifier: &'static str,
    display_name: &'static str,
    description: &'static str,
    author: &'static str,
    version: &'static str,
    priority: u32,
}

impl Default for ModInfo {
    fn default() -> Self {
        Self {
            context: "server",
            identifier: "generated_maps",
            display_name: "Generated Maps",
            description: "Custom systems produced by pas-forge",
            author: "PA Titans Community",
            version: "1.0",
            priority: 100,
        }
    }
}

const INSTALL_NOTES: &str = "\
# PA Titans Generated Systems

Copy the 'generated_maps' folder into your Planetary Annihilation
server_mods directory:

Windows: %LOCALAPPDATA%\\Uber Entertainment\\Planetary Annihilation\\server_mods\\
Linux:   ~/.local/Uber Entertainment/Planetary Annihilation/server_mods/
Mac:     ~/Library/Application Support/Uber Entertainment/Planetary Annihilation/server_mods/

Then launch PA Titans, open Community Mods and enable 'Generated Maps'.
";

/// JSON body of a single `.pas` file. The game only loads systems wrapped in
/// a one-element array.
pub fn pas_contents(system: &System) -> Result<String, GenerationError> {
    Ok(serde_json::to_string_pretty(&[SystemView::from(system)])?)
}

/// Standalone system record without the array wrapper, for individual
/// downloads and previews.
pub fn system_json(system: &System) -> Result<String, GenerationError> {
    Ok(serde_json::to_string_pretty(&SystemView::from(system))?)
}

pub fn batch_json(batch: &Batch) -> Result<String, GenerationError> {
    Ok(serde_json::to_string(&BatchView::from(batch))?)
}

/// Maps every generated system to its `.pas` record under `pa/maps/`, plus
/// the server-mod manifest and install notes.
pub fn batch_files(batch: &Batch) -> Result<Vec<ExportFile>, GenerationError> {
    let mut files = Vec::with_capacity(batch.systems.len() + 2);

    for (index, system) in batch.systems.iter().enumerate() {
        let safe_name = sanitize_filename(&system.name);
        files.push(ExportFile {
            path: format!("pa/maps/{}_{}.pas", safe_name, index + 1),
            contents: pas_contents(system)?,
        });
    }

    files.push(ExportFile {
        path: "modinfo.json".to_string(),
        contents: serde_json::to_string_pretty(&ModInfo::default())?,
    });
    files.push(ExportFile {
        path: "README.txt".to_string(),
        contents: INSTALL_NOTES.to_string(),
    });

    Ok(files)
}
