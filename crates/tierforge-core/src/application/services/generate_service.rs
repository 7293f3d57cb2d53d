//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Normalize and validate the project description
//! 2. Plan every unit through the layer controller
//! 3. Render all units to text
//! 4. Write to the filesystem
//! 5. Run post-generation tooling

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        generator::LayerController,
        ports::{Filesystem, SourceRenderer, Toolchain},
    },
    domain::{DomainValidator as validator, FsEntry, ProjectSpec, ProjectStructure},
    error::{ForgeError, ForgeResult},
};

/// Per-run switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Reject unknown layer tags instead of treating them as generic.
    pub strict: bool,
    pub run_toolchain: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            strict: false,
            run_toolchain: true,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub id: Uuid,
    pub module: String,
    pub root: PathBuf,
    pub files_written: usize,
    pub directories_created: usize,
    /// Chain layer names, outer to inner.
    pub layers: Vec<String>,
    /// Tool invocations that ran after writing, in order.
    pub tooling: Vec<String>,
}

/// Main generation service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn SourceRenderer>,
    toolchain: Box<dyn Toolchain>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use tierforge_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     filesystem, // impl Filesystem
    ///     renderer,   // impl SourceRenderer
    ///     toolchain,  // impl Toolchain
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn SourceRenderer>,
        toolchain: Box<dyn Toolchain>,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            toolchain,
        }
    }

    /// Normalize and validate `spec`, then build the controller for it.
    pub fn prepare(&self, spec: ProjectSpec, options: GenerateOptions) -> ForgeResult<LayerController> {
        let spec = spec.normalized();
        validator::validate_spec(&spec, options.strict).map_err(ForgeError::Domain)?;

        for decl in spec.unrecognized_layers() {
            warn!(
                layer = %decl.name,
                tag = %decl.tag,
                "Unknown layer tag, using the generic passthrough strategy"
            );
        }

        Ok(LayerController::new(&spec))
    }

    /// Plan the tree without rendering or writing anything.
    pub fn plan(&self, spec: ProjectSpec, options: GenerateOptions) -> ForgeResult<ProjectStructure> {
        self.prepare(spec, options)?.plan()
    }

    /// Generate the project described by `spec`.
    #[instrument(
        skip_all,
        fields(
            project = %spec.project_name,
            layers = spec.layers.len(),
            models = spec.models.len(),
        )
    )]
    pub fn generate(
        &self,
        spec: ProjectSpec,
        options: GenerateOptions,
    ) -> ForgeResult<GenerationReport> {
        let controller = self.prepare(spec, options)?;
        let layers: Vec<String> = controller.chain().iter().map(|l| l.name().to_string()).collect();
        info!(chain = %layers.join(" -> "), "Layer chain built");

        let structure = controller.plan()?;
        info!(
            files = structure.file_count(),
            directories = structure.directory_count(),
            "Project planned"
        );

        // Render everything up front so a rendering bug never leaves a
        // half-written tree behind.
        let rendered = self.render_all(&structure)?;

        if self.filesystem.exists(structure.root()) {
            info!(root = %structure.root().display(), "Overwriting existing tree");
        }
        self.write_all(&structure, &rendered)?;

        let tooling = if options.run_toolchain {
            let ran = self.toolchain.run(structure.root())?;
            info!(steps = ran.len(), "Tooling finished");
            ran
        } else {
            debug!("Tooling skipped");
            Vec::new()
        };

        info!("Generation completed successfully");
        Ok(GenerationReport {
            id: Uuid::new_v4(),
            module: controller.module().to_string(),
            root: structure.root().to_path_buf(),
            files_written: structure.file_count(),
            directories_created: structure.directory_count(),
            layers,
            tooling,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Text of every planned file, in plan order.
    fn render_all(&self, structure: &ProjectStructure) -> ForgeResult<Vec<String>> {
        structure
            .files()
            .map(|file| {
                self.renderer.render(&file.content).map_err(|e| {
                    ForgeError::from(ApplicationError::RenderingFailed {
                        artifact: file.artifact.clone(),
                        reason: e.to_string(),
                    })
                })
            })
            .collect()
    }

    /// Write all entries in the structure. The first failure aborts the run.
    fn write_all(&self, structure: &ProjectStructure, rendered: &[String]) -> ForgeResult<()> {
        let root = structure.root();
        self.filesystem
            .create_dir_all(root)
            .map_err(|e| artifact_failed("output root", root, e))?;

        let mut texts = rendered.iter();
        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = root.join(&dir.path);
                    self.filesystem
                        .create_dir_all(&path)
                        .map_err(|e| artifact_failed(&format!("{} directory", dir.path), &path, e))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);
                    let text = texts.next().ok_or_else(|| ForgeError::Internal {
                        message: format!("no rendered text for {}", file.artifact),
                    })?;

                    if let Some(parent) = path.parent() {
                        self.filesystem
                            .create_dir_all(parent)
                            .map_err(|e| artifact_failed(&file.artifact, &path, e))?;
                    }
                    self.filesystem
                        .write_file(&path, text)
                        .map_err(|e| artifact_failed(&file.artifact, &path, e))?;
                    debug!(artifact = %file.artifact, path = %path.display(), "Wrote");
                }
            }
        }

        Ok(())
    }
}

fn artifact_failed(artifact: &str, path: &Path, cause: ForgeError) -> ForgeError {
    ApplicationError::ArtifactFailed {
        artifact: artifact.to_string(),
        path: path.to_path_buf(),
        reason: cause.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockToolchain};
    use crate::domain::{FieldType, FileContent, LayerDecl, Model, SourceFile};
    use mockall::Predicate;
    use mockall::predicate::{always, function};
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    // ========================================================================
    // Test doubles
    // ========================================================================

    /// Renders sources as their package clause and other content verbatim.
    struct StubRenderer;

    impl SourceRenderer for StubRenderer {
        fn render(&self, content: &FileContent) -> ForgeResult<String> {
            Ok(match content {
                FileContent::Source(SourceFile { package, items, .. }) => {
                    format!("package {package} // {} items", items.len())
                }
                FileContent::Json(pairs) => format!("{pairs:?}"),
                FileContent::Text(text) => text.clone(),
            })
        }
    }

    #[derive(Clone, Default)]
    struct RecordingFs(Arc<Mutex<BTreeMap<PathBuf, String>>>);

    impl Filesystem for RecordingFs {
        fn create_dir_all(&self, _path: &Path) -> ForgeResult<()> {
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
            self.0
                .lock()
                .map_err(|_| ApplicationError::StoreLockError)?
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.0.lock().is_ok_and(|files| files.keys().any(|p| p.starts_with(path)))
        }
    }

    fn at(expected: &'static str) -> impl Predicate<Path> + Send {
        function(move |p: &Path| p == Path::new(expected))
    }

    fn no_tooling() -> Box<MockToolchain> {
        let mut toolchain = MockToolchain::new();
        toolchain.expect_run().never();
        Box::new(toolchain)
    }

    fn skip_tooling() -> GenerateOptions {
        GenerateOptions {
            run_toolchain: false,
            ..Default::default()
        }
    }

    fn user_spec() -> ProjectSpec {
        ProjectSpec {
            project_name: "shop".into(),
            models: vec![
                Model::new("User")
                    .with_field("name", FieldType::String)
                    .with_method("create")
                    .with_method("read"),
            ],
            ..Default::default()
        }
    }

    // ========================================================================
    // Planning
    // ========================================================================

    #[test]
    fn user_with_default_layers_plans_the_documented_tree() {
        let service = GenerateService::new(
            Box::new(RecordingFs::default()),
            Box::new(StubRenderer),
            no_tooling(),
        );
        let structure = service.plan(user_spec(), skip_tooling()).unwrap();
        let source = |path: &str| -> SourceFile {
            structure
                .file(path)
                .and_then(|f| f.content.as_source())
                .cloned()
                .unwrap()
        };

        // transport delegates to service
        let controller = source("controller/user.go");
        for name in ["CreateUser", "ReadUser"] {
            let body = &controller.func(name).unwrap().body;
            assert!(body.contains(&format!("u.service.{name}(&req)")), "{body}");
        }

        // service delegates to repository
        let service_unit = source("service/user.go");
        assert_eq!(
            service_unit.func("ReadUser").unwrap().body,
            "return u.repository.ReadUser(userModel)"
        );

        // repository inserts and queries
        let repository = source("repository/user.go");
        assert!(repository.func("CreateUser").unwrap().body.contains("u.db.Create(userModel)"));
        assert!(repository.func("ReadUser").unwrap().body.contains(".Where(userModel).Find("));

        // shared struct with one tagged field
        let models = source("models/user.go");
        let user = models.structs().next().unwrap();
        assert_eq!(user.fields.len(), 1);
        assert_eq!(user.fields[0].tag.as_deref(), Some("json:\"name\""));

        // http + postgres option groups
        let config = source("config/config.go");
        assert_eq!(
            config.structs().next().unwrap().field_names(),
            vec![
                "HttpHost",
                "HttpPort",
                "PostgresHost",
                "PostgresPort",
                "PostgresDb",
                "PostgresUser",
                "PostgresPassword"
            ]
        );

        // wired repository -> service -> controller, router started
        let main = source("main.go").func("main").unwrap().body.clone();
        let order: Vec<usize> = ["userRepository :=", "userService :=", "userController :=", "r.Run()"]
            .iter()
            .map(|needle| main.find(needle).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unknown_tag_is_rejected_in_strict_mode() {
        let service = GenerateService::new(
            Box::new(RecordingFs::default()),
            Box::new(StubRenderer),
            no_tooling(),
        );
        let mut spec = user_spec();
        spec.layers = vec![LayerDecl::new("api", "htp"), LayerDecl::new("store", "postgres")];

        assert!(service.plan(spec.clone(), skip_tooling()).is_ok());

        let strict = GenerateOptions {
            strict: true,
            ..skip_tooling()
        };
        let err = service.plan(spec, strict).unwrap_err();
        assert!(matches!(err, ForgeError::Domain(_)));
    }

    // ========================================================================
    // Writing
    // ========================================================================

    #[test]
    fn generate_writes_every_planned_file() {
        let fs = RecordingFs::default();
        let service = GenerateService::new(Box::new(fs.clone()), Box::new(StubRenderer), no_tooling());

        let report = service.generate(user_spec(), skip_tooling()).unwrap();

        let files = fs.0.lock().unwrap();
        assert_eq!(report.files_written, files.len());
        assert_eq!(report.files_written, 13);
        assert_eq!(report.layers, vec!["controller", "service", "repository"]);
        assert_eq!(report.module, "shop");
        assert!(report.tooling.is_empty());
        assert_eq!(
            files.get(Path::new("generated/shop/go.mod")).map(String::as_str),
            Some("module shop\n\ngo 1.21\n")
        );
    }

    #[test]
    fn write_failure_aborts_and_names_the_artifact() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .with(at("generated/shop/controller/controller.go"), always())
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .with(at("generated/shop/controller/user.go"), always())
            .times(1)
            .returning(|path, _| {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            });

        let service = GenerateService::new(Box::new(fs), Box::new(StubRenderer), no_tooling());
        let err = service.generate(user_spec(), skip_tooling()).unwrap_err();

        assert_eq!(err.artifact(), Some("controller User"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn toolchain_runs_once_in_the_output_root() {
        let mut toolchain = MockToolchain::new();
        toolchain
            .expect_run()
            .with(at("generated/shop"))
            .times(1)
            .returning(|_| Ok(vec!["go mod tidy".into(), "go fmt ./...".into()]));

        let service = GenerateService::new(
            Box::new(RecordingFs::default()),
            Box::new(StubRenderer),
            Box::new(toolchain),
        );
        let report = service.generate(user_spec(), GenerateOptions::default()).unwrap();
        assert_eq!(report.tooling, vec!["go mod tidy", "go fmt ./..."]);
    }

    #[test]
    fn invalid_spec_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = GenerateService::new(Box::new(fs), Box::new(StubRenderer), no_tooling());
        let mut spec = user_spec();
        spec.models.push(Model::new("lowercase"));

        assert!(service.generate(spec, skip_tooling()).is_err());
    }

    #[test]
    fn regenerating_over_an_existing_tree_is_byte_identical() {
        let fs = RecordingFs::default();
        let service = GenerateService::new(Box::new(fs.clone()), Box::new(StubRenderer), no_tooling());

        service.generate(user_spec(), skip_tooling()).unwrap();
        let first = fs.0.lock().unwrap().clone();
        service.generate(user_spec(), skip_tooling()).unwrap();
        let second = fs.0.lock().unwrap().clone();

        assert_eq!(first, second);
    }
}
