use wasm_bindgen::prelude::*;

pub mod forge;

use forge::config::BatchConfig;
use forge::export;
use forge::system::{self, Batch, SystemForge};
use forge::GenerationError;

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn forge_batch(config_json: &str, seed: u64) -> Result<Batch, GenerationError> {
    let config: BatchConfig = serde_json::from_str(config_json)?;
    let mut forge = SystemForge::with_config(seed, config)?;
    Ok(forge.generate())
}

#[cfg(target_arch = "wasm32")]
fn console_note(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn console_note(_message: &str) {}

/// Default configuration for the form UI to prefill.
#[wasm_bindgen]
pub fn default_config() -> String {
    serde_json::to_string_pretty(&BatchConfig::default()).unwrap_or_else(|_| "{}".to_string())
}

/// Generates a batch and returns it as `{"systems": [...]}` in the `.pas`
/// record schema. On failure the error message is returned instead.
#[wasm_bindgen]
pub fn generate_batch(config_json: &str, seed: u64) -> String {
    match forge_batch(config_json, seed).and_then(|batch| export::batch_json(&batch)) {
        Ok(json) => {
            console_note("pas-forge: batch generated");
            json
        }
        Err(e) => e.to_string(),
    }
}

/// Returns the server-mod bundle as a JSON array of `{path, contents}`
/// entries for the download collaborator to archive.
#[wasm_bindgen]
pub fn export_files(config_json: &str, seed: u64) -> String {
    let files = forge_batch(config_json, seed)
        .and_then(|batch| export::batch_files(&batch))
        .and_then(|files| serde_json::to_string(&files).map_err(GenerationError::from));
    match files {
        Ok(json) => json,
        Err(e) => e.to_string(),
    }
}

/// Human-readable preview of a batch for the summary pane.
#[wasm_bindgen]
pub fn batch_report(config_json: &str, seed: u64) -> String {
    match forge_batch(config_json, seed) {
        Ok(batch) => system::batch_report(&batch, seed),
        Err(e) => e.to_string(),
    }
}
