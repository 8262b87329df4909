//! Admin-managed voice command catalog.
//!
//! Custom entries extend the built-in tables without code changes: PIECE and
//! ACTION entries add phonetic variants for a canonical word, the other
//! categories add trigger phrases to an existing intent. The catalog is an
//! in-memory registry persisted as a JSON array.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use crate::error::CatalogError;
use crate::intent::{Intent, IntentCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandCategory {
    Piece,
    Action,
    GameControl,
    TimeControl,
    Navigation,
    Voice,
}

impl CommandCategory {
    /// Intent category a trigger entry must belong to; `None` for vocabulary
    /// entries (pieces and actions) that only add phonetic variants.
    pub fn intent_category(self) -> Option<IntentCategory> {
        match self {
            CommandCategory::Piece | CommandCategory::Action => None,
            CommandCategory::GameControl => Some(IntentCategory::GameControl),
            CommandCategory::TimeControl => Some(IntentCategory::TimeControl),
            CommandCategory::Navigation => Some(IntentCategory::Navigation),
            CommandCategory::Voice => Some(IntentCategory::Voice),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCommandDef {
    #[serde(default)]
    pub id: u64,
    pub command_name: String,
    pub patterns: Vec<String>,
    #[serde(alias = "intent")]
    pub category: CommandCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// Create/update payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCommandRequest {
    #[validate(length(min = 1, max = 64))]
    pub command_name: String,
    #[validate(length(min = 1))]
    pub patterns: Vec<String>,
    pub category: CommandCategory,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl VoiceCommandRequest {
    pub fn new(command_name: &str, category: CommandCategory, patterns: &[&str]) -> Self {
        Self {
            command_name: command_name.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            category,
            description: None,
            active: true,
        }
    }

    /// Trim the name and patterns, then validate.
    fn cleaned(mut self) -> Result<Self, CatalogError> {
        self.command_name = self.command_name.trim().to_string();
        self.patterns = self.patterns.iter().map(|p| p.trim().to_string()).collect();
        self.validate()?;
        if self.patterns.iter().any(|p| p.is_empty()) {
            return Err(CatalogError::BlankPattern(self.command_name));
        }
        Ok(self)
    }
}

/// Table additions derived from the active catalog entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogExtensions {
    /// (variant, canonical) pairs for the phonetic table
    pub phonetic: Vec<(String, String)>,
    /// Extra raw trigger phrases per intent, in catalog order
    pub triggers: Vec<(Intent, Vec<String>)>,
}

#[derive(Debug, Clone, Default)]
pub struct CommandCatalog {
    commands: Vec<VoiceCommandDef>,
    next_id: u64,
}

impl CommandCatalog {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            next_id: 1,
        }
    }

    pub fn create(&mut self, req: VoiceCommandRequest) -> Result<&VoiceCommandDef, CatalogError> {
        let req = req.cleaned()?;
        self.ensure_unique_name(&req.command_name, None)?;

        let now = Utc::now();
        let id = self.allocate_id();
        info!("Created voice command {} ({:?}) with id {}", req.command_name, req.category, id);
        self.commands.push(VoiceCommandDef {
            id,
            command_name: req.command_name,
            patterns: req.patterns,
            category: req.category,
            description: req.description,
            active: req.active,
            created_at: now,
            updated_at: now,
        });
        Ok(&self.commands[self.commands.len() - 1])
    }

    pub fn update(&mut self, id: u64, req: VoiceCommandRequest) -> Result<&VoiceCommandDef, CatalogError> {
        let req = req.cleaned()?;
        let index = self.index_of(id)?;
        self.ensure_unique_name(&req.command_name, Some(id))?;

        let def = &mut self.commands[index];
        def.command_name = req.command_name;
        def.patterns = req.patterns;
        def.category = req.category;
        def.description = req.description;
        def.active = req.active;
        def.updated_at = Utc::now();
        info!("Updated voice command {}", id);
        Ok(def)
    }

    pub fn delete(&mut self, id: u64) -> Result<VoiceCommandDef, CatalogError> {
        let index = self.index_of(id)?;
        info!("Deleted voice command {}", id);
        Ok(self.commands.remove(index))
    }

    pub fn toggle_active(&mut self, id: u64) -> Result<&VoiceCommandDef, CatalogError> {
        let index = self.index_of(id)?;
        let def = &mut self.commands[index];
        def.active = !def.active;
        def.updated_at = Utc::now();
        info!("Voice command {} is now {}", id, if def.active { "active" } else { "inactive" });
        Ok(def)
    }

    pub fn get(&self, id: u64) -> Option<&VoiceCommandDef> {
        self.commands.iter().find(|c| c.id == id)
    }

    pub fn list(&self) -> &[VoiceCommandDef] {
        &self.commands
    }

    pub fn list_active(&self) -> Vec<&VoiceCommandDef> {
        self.commands.iter().filter(|c| c.active).collect()
    }

    pub fn by_category(&self, category: CommandCategory) -> Vec<&VoiceCommandDef> {
        self.commands.iter().filter(|c| c.category == category).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Parse a JSON array of definitions. Entries are validated like `create`;
    /// missing or repeated ids are reassigned.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let defs: Vec<VoiceCommandDef> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        catalog.next_id = defs.iter().map(|d| d.id).max().unwrap_or(0) + 1;

        for def in defs {
            let req = VoiceCommandRequest {
                command_name: def.command_name,
                patterns: def.patterns,
                category: def.category,
                description: def.description,
                active: def.active,
            }
            .cleaned()?;
            catalog.ensure_unique_name(&req.command_name, None)?;

            let id = if def.id == 0 || catalog.get(def.id).is_some() {
                catalog.allocate_id()
            } else {
                def.id
            };
            catalog.commands.push(VoiceCommandDef {
                id,
                command_name: req.command_name,
                patterns: req.patterns,
                category: req.category,
                description: req.description,
                active: req.active,
                created_at: def.created_at,
                updated_at: def.updated_at,
            });
        }
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.commands)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let catalog = Self::from_json(&fs::read_to_string(path)?)?;
        info!("Loaded {} voice commands from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Phonetic and trigger additions from the active entries. Entries that
    /// cannot apply (multi-word variants, unknown intents, category mismatch)
    /// are skipped with a warning.
    pub fn extensions(&self) -> CatalogExtensions {
        let mut ext = CatalogExtensions::default();

        for def in self.commands.iter().filter(|c| c.active) {
            match def.category.intent_category() {
                None => {
                    let canonical = def.command_name.to_lowercase();
                    if canonical.contains(char::is_whitespace) {
                        warn!("Skipping voice command {}: canonical word must be a single token", def.command_name);
                        continue;
                    }
                    for pattern in &def.patterns {
                        let variant = pattern.to_lowercase();
                        if variant == canonical {
                            continue;
                        }
                        if variant.contains(char::is_whitespace) {
                            warn!("Skipping pattern '{}' of {}: variants are single tokens", pattern, def.command_name);
                            continue;
                        }
                        ext.phonetic.push((variant, canonical.clone()));
                    }
                }
                Some(expected) => match def.command_name.parse::<Intent>() {
                    Ok(intent) if intent.category() == expected => {
                        ext.triggers.push((intent, def.patterns.clone()));
                    }
                    Ok(intent) => {
                        warn!(
                            "Skipping voice command {}: intent {} is not in category {:?}",
                            def.command_name, intent, def.category
                        );
                    }
                    Err(e) => warn!("Skipping voice command {}: {}", def.command_name, e),
                },
            }
        }

        ext
    }

    fn index_of(&self, id: u64) -> Result<usize, CatalogError> {
        self.commands
            .iter()
            .position(|c| c.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    fn ensure_unique_name(&self, name: &str, except: Option<u64>) -> Result<(), CatalogError> {
        let taken = self
            .commands
            .iter()
            .any(|c| Some(c.id) != except && c.command_name.eq_ignore_ascii_case(name));
        if taken {
            return Err(CatalogError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }
}
