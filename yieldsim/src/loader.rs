use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use yieldsim_core::state::PlayerId;
use yieldsim_core::{GameSnapshot, ResolverConfig, Subject, SubjectTable};
use yieldsim_data::{GameData, GameDataFile, Modifier, ModifierId, ModifierRegistry};

/// One modifier to resolve against an explicit subject list.
#[derive(Debug, Clone, Deserialize)]
pub struct Evaluation {
    pub modifier: ModifierId,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

/// On-disk scenario file.
#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    player: PlayerId,
    #[serde(default)]
    config: ResolverConfig,
    #[serde(default)]
    game_data: GameDataFile,
    #[serde(default)]
    state: GameSnapshot,
    #[serde(default)]
    modifiers: Vec<Modifier>,
    #[serde(default)]
    subjects: SubjectTable,
    evaluate: Vec<Evaluation>,
}

pub struct Scenario {
    pub player: PlayerId,
    pub config: ResolverConfig,
    pub data: GameData,
    pub state: GameSnapshot,
    pub registry: ModifierRegistry,
    pub subjects: SubjectTable,
    pub evaluate: Vec<Evaluation>,
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    log::info!("Loading scenario from {:?}", path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario {}", path.display()))?;
    let file: ScenarioFile = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse scenario {}", path.display()))?;

    let data = GameData::from_file(file.game_data).context("Invalid game data")?;
    let registry = ModifierRegistry::from_modifiers(file.modifiers).context("Invalid modifiers")?;
    log::info!(
        "Loaded {} modifiers, {} players, {} evaluations",
        registry.len(),
        file.state.players.len(),
        file.evaluate.len()
    );

    Ok(Scenario {
        player: file.player,
        config: file.config,
        data,
        state: file.state,
        registry,
        subjects: file.subjects,
        evaluate: file.evaluate,
    })
}
