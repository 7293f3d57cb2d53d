//! Layer controller: turns a normalized spec into the full set of planned
//! units.
//!
//! Order of the plan:
//! 1. every layer, outer to inner: interface file, then one implementation
//!    per model in declaration order
//! 2. shared storage structs, configuration, defaults and module file
//! 3. routers for the first http and first telebot layer
//! 4. the infrastructure manifest when postgres is present
//! 5. the entry point

use std::path::PathBuf;

use super::{entrypoint, layer_unit, routers, shared};
use crate::domain::{
    DomainValidator, FileContent, LayerChain, LayerKind, ProjectSpec, ProjectStructure,
    RelativePath,
};
use crate::error::ForgeResult;

pub const MODULE_FILE: &str = "go.mod";
pub const ENTRY_FILE: &str = "main.go";
pub const COMPOSE_FILE: &str = "docker-compose.yaml";

pub struct LayerController {
    module: String,
    root: PathBuf,
    chain: LayerChain,
}

impl LayerController {
    /// `spec` is expected to be normalized already.
    pub fn new(spec: &ProjectSpec) -> Self {
        Self {
            module: spec.module().to_string(),
            root: spec.output_root(),
            chain: LayerChain::build(&spec.layers, spec.models.clone()),
        }
    }

    pub fn chain(&self) -> &LayerChain {
        &self.chain
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn plan(&self) -> ForgeResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(&self.root);
        let module = self.module.as_str();

        // ── Layers ───────────────────────────────────────────────────────
        for layer in self.chain.iter() {
            let dir = RelativePath::try_new(layer.name())?;
            structure.add_directory(dir.clone());
            structure.add_file(
                format!("{} interfaces", layer.name()),
                dir.join(format!("{}.go", layer.name()))?,
                FileContent::Source(layer_unit::interface_unit(module, layer)),
            );

            for model in layer.models().iter() {
                structure.add_file(
                    format!("{} {}", layer.name(), model.name),
                    dir.join(model.file_name())?,
                    FileContent::Source(layer_unit::model_unit(module, &self.chain, layer, model)),
                );
            }
        }

        // ── Shared ───────────────────────────────────────────────────────
        let models_dir = RelativePath::try_new("models")?;
        structure.add_directory(models_dir.clone());
        for model in self.chain.models().iter() {
            structure.add_file(
                format!("models {}", model.name),
                models_dir.join(model.file_name())?,
                FileContent::Source(shared::storage_unit(module, model)),
            );
        }

        let kinds = self.chain.kinds();
        let config_dir = RelativePath::try_new("config")?;
        structure.add_directory(config_dir.clone());
        structure.add_file(
            "config",
            config_dir.join("config.go")?,
            FileContent::Source(shared::config_unit(module, &kinds)),
        );
        structure.add_file(
            "config defaults",
            RelativePath::try_new(shared::CONFIG_FILE)?,
            FileContent::Json(shared::config_defaults(&kinds)),
        );
        structure.add_file(
            "module file",
            RelativePath::try_new(MODULE_FILE)?,
            FileContent::Text(shared::go_mod(module)),
        );

        // ── Routers ──────────────────────────────────────────────────────
        if let Some(layer) = self.chain.first_of_kind(LayerKind::Http) {
            let dir = RelativePath::try_new(routers::HTTP_PACKAGE)?;
            structure.add_directory(dir.clone());
            structure.add_file(
                "router",
                dir.join(format!("{}.go", routers::HTTP_PACKAGE))?,
                FileContent::Source(routers::http_router_unit(module, layer)),
            );
        }

        if let Some(layer) = self.chain.first_of_kind(LayerKind::Telebot) {
            let dir = RelativePath::try_new(routers::BOT_PACKAGE)?;
            structure.add_directory(dir.clone());
            structure.add_file(
                "telerouter",
                dir.join(format!("{}.go", routers::BOT_PACKAGE))?,
                FileContent::Source(routers::bot_router_unit(module, layer)),
            );
        }

        if self.chain.has_kind(LayerKind::Postgres) {
            structure.add_file(
                "docker compose manifest",
                RelativePath::try_new(COMPOSE_FILE)?,
                FileContent::Text(shared::compose_manifest()),
            );
        }

        structure.add_file(
            "entry point",
            RelativePath::try_new(ENTRY_FILE)?,
            FileContent::Source(entrypoint::main_unit(module, &self.chain)),
        );

        DomainValidator::validate_project_structure(&structure)?;
        Ok(structure)
    }
}
