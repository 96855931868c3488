//! Engine configuration: the catalog, the requirement table, and the
//! alias table.
//!
//! All three are supplied once at startup and are immutable thereafter.
//! The on-disk form is TOML:
//!
//! ```toml
//! [catalog]
//! variables = ["rooms.Cellar", "tools.Crowbar", "tools.Pry Bar"]
//!
//! [catalog.display_names]
//! "rooms.Cellar" = "The Cellar"
//!
//! [[requirement]]
//! requirement = "tools.Crowbar"
//! dependent = "rooms.Cellar"
//!
//! [[alias]]
//! alias = "tools.Pry Bar"
//! ground_truth = "tools.Crowbar"
//! ```
//!
//! Validation is strict and happens on construction: every edge and alias
//! endpoint must belong to the catalog, an identifier may alias at most one
//! ground truth, and a ground truth must not itself be an alias. A broken
//! configuration is a fatal startup error, never a per-user error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tritrack_kernel::{Catalog, VarId};

/// A directed requirement edge.
///
/// Read "`dependent` cannot be true unless `requirement` is true."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Requirement {
    pub requirement: VarId,
    pub dependent: VarId,
}

impl Requirement {
    pub fn new(requirement: impl Into<VarId>, dependent: impl Into<VarId>) -> Self {
        Self {
            requirement: requirement.into(),
            dependent: dependent.into(),
        }
    }
}

/// An alias declaration: `alias` must always mirror `ground_truth` and is
/// never edited independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasDef {
    pub alias: VarId,
    pub ground_truth: VarId,
}

impl AliasDef {
    pub fn new(alias: impl Into<VarId>, ground_truth: impl Into<VarId>) -> Self {
        Self {
            alias: alias.into(),
            ground_truth: ground_truth.into(),
        }
    }
}

/// Errors raised while loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("requirement edge {requirement} -> {dependent} references a variable outside the catalog")]
    EdgeOutsideCatalog {
        requirement: VarId,
        dependent: VarId,
    },

    #[error("alias {alias} -> {ground_truth} references a variable outside the catalog")]
    AliasOutsideCatalog { alias: VarId, ground_truth: VarId },

    #[error("variable {0} is declared as an alias more than once")]
    DuplicateAlias(VarId),

    #[error("alias {alias} resolves to {ground_truth}, which is itself an alias")]
    AliasChain { alias: VarId, ground_truth: VarId },
}

/// Validated engine configuration.
///
/// Construction checks catalog membership and the alias invariants; the
/// acyclicity of the requirement table is checked when the graph is built
/// (see [`crate::engine::Engine::new`]).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    catalog: Catalog,
    requirements: Vec<Requirement>,
    aliases: BTreeMap<VarId, VarId>,
}

impl EngineConfig {
    pub fn new(
        catalog: Catalog,
        requirements: Vec<Requirement>,
        aliases: Vec<AliasDef>,
    ) -> Result<Self, ConfigError> {
        for edge in &requirements {
            if !catalog.contains(&edge.requirement) || !catalog.contains(&edge.dependent) {
                return Err(ConfigError::EdgeOutsideCatalog {
                    requirement: edge.requirement.clone(),
                    dependent: edge.dependent.clone(),
                });
            }
        }

        let mut alias_map = BTreeMap::new();
        for def in aliases {
            if !catalog.contains(&def.alias) || !catalog.contains(&def.ground_truth) {
                return Err(ConfigError::AliasOutsideCatalog {
                    alias: def.alias,
                    ground_truth: def.ground_truth,
                });
            }
            if alias_map.insert(def.alias.clone(), def.ground_truth).is_some() {
                return Err(ConfigError::DuplicateAlias(def.alias));
            }
        }

        // No chains: a ground truth must be a real variable, not an alias.
        for (alias, ground_truth) in &alias_map {
            if alias_map.contains_key(ground_truth) {
                return Err(ConfigError::AliasChain {
                    alias: alias.clone(),
                    ground_truth: ground_truth.clone(),
                });
            }
        }

        Ok(Self {
            catalog,
            requirements,
            aliases: alias_map,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The requirement table as supplied, aliases unresolved.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Iterate `(alias, ground_truth)` pairs in canonical order.
    pub fn aliases(&self) -> impl Iterator<Item = (&VarId, &VarId)> {
        self.aliases.iter()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_alias(&self, id: &VarId) -> bool {
        self.aliases.contains_key(id)
    }

    /// Resolve `id` through the alias table to its ground truth.
    ///
    /// Non-aliases resolve to themselves. Single-step by the no-chain
    /// invariant.
    pub fn resolve_alias<'a>(&'a self, id: &'a VarId) -> &'a VarId {
        self.aliases.get(id).unwrap_or(id)
    }

    /// The requirement table with both endpoints alias-resolved.
    ///
    /// This runs before graph construction so alias identifiers never
    /// appear as graph nodes.
    pub fn resolved_requirements(&self) -> Vec<Requirement> {
        self.requirements
            .iter()
            .map(|edge| Requirement {
                requirement: self.resolve_alias(&edge.requirement).clone(),
                dependent: self.resolve_alias(&edge.dependent).clone(),
            })
            .collect()
    }
}

/// On-disk configuration layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub catalog: CatalogSection,
    #[serde(default, rename = "requirement")]
    pub requirements: Vec<Requirement>,
    #[serde(default, rename = "alias")]
    pub aliases: Vec<AliasDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSection {
    pub variables: Vec<VarId>,
    #[serde(default)]
    pub display_names: BTreeMap<VarId, String>,
}

impl ConfigFile {
    pub fn into_config(self) -> Result<EngineConfig, ConfigError> {
        let catalog =
            Catalog::new(self.catalog.variables).with_display_names(self.catalog.display_names);
        EngineConfig::new(catalog, self.requirements, self.aliases)
    }
}

/// Load and validate a TOML configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<EngineConfig, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    file.into_config()
}
