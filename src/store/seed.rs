//! Seed dataset for the dog record store.
//!
//! Seeding is an explicit collaborator: the store starts empty and a
//! caller (startup, tests) decides when to load the dataset. The built-in
//! dataset can be replaced with a JSON file via `SEED_PATH`.

use std::fs;

use once_cell::sync::Lazy;
use tracing::info;

use crate::config::Config;
use crate::error::{Result, ServiceError};

use super::memory::MemoryStore;
use super::types::NewDog;

/// Built-in seed dataset. After seeding an empty store these records get
/// ids 1..=4 in order.
pub static DEFAULT_SEED: Lazy<Vec<NewDog>> = Lazy::new(|| {
    vec![
        NewDog {
            breed: "Labrador Retriever".to_string(),
            name: "Buddy".to_string(),
            color: "yellow".to_string(),
            description: "Buddy loves fetch and will greet every visitor at the gate."
                .to_string(),
        },
        NewDog {
            breed: "German Shepherd".to_string(),
            name: "Rex".to_string(),
            color: "black and tan".to_string(),
            description: "Rex is a retired working dog looking for a quiet home."
                .to_string(),
        },
        NewDog {
            breed: "Poodle".to_string(),
            name: "Luna".to_string(),
            color: "white".to_string(),
            description: "Luna is a gentle poodle who gets along with cats.".to_string(),
        },
        NewDog {
            breed: "Beagle".to_string(),
            name: "Daisy".to_string(),
            color: "tricolor".to_string(),
            description: "Daisy follows her nose everywhere and naps in sunbeams."
                .to_string(),
        },
    ]
});

/// Load seed entries from a JSON file.
pub fn load_seed(path: &str) -> Result<Vec<NewDog>> {
    let raw = fs::read_to_string(path).map_err(|e| ServiceError::Seed {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&raw).map_err(|e| ServiceError::Seed {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Resolve the seed dataset the configuration asks for.
pub fn effective_seed(config: &Config) -> Result<Vec<NewDog>> {
    match &config.seed_path {
        Some(path) => load_seed(path),
        None => Ok(DEFAULT_SEED.clone()),
    }
}

/// Reset the store and load the configured dataset into it.
pub fn seed_store(store: &MemoryStore, config: &Config) -> Result<usize> {
    let entries = effective_seed(config)?;
    store.reset();
    let count = store.seed(&entries);
    info!("Seeded store with {} dogs", count);
    Ok(count)
}
