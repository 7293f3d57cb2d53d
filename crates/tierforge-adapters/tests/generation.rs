//! Full pipeline: description text → plan → Go text in an in-memory tree.

use std::path::Path;

use tierforge_adapters::{GoRenderer, MemoryFilesystem, NoopToolchain, SpecFormat, parse_spec};
use tierforge_core::prelude::*;

const SHOP: &str = r#"
project_name: shop
layers:
  - { layer: controller, tag: http }
  - { layer: service }
  - { layer: repository, tag: postgres }
models:
  - name: User
    fields:
      - { name: id, type: id }
      - { name: name, type: string }
    methods: [create, read, update, delete]
"#;

fn generate(text: &str) -> (MemoryFilesystem, ForgeResult<GenerationReport>) {
    let fs = MemoryFilesystem::new();
    let service = GenerateService::new(
        Box::new(fs.clone()),
        Box::new(GoRenderer::new()),
        Box::new(NoopToolchain),
    );
    let spec = parse_spec(text, SpecFormat::Yaml).unwrap();
    let report = service.generate(spec, GenerateOptions::default());
    (fs, report)
}

fn read(fs: &MemoryFilesystem, relative: &str) -> String {
    let path = Path::new("generated/shop").join(relative);
    fs.read_file(&path)
        .unwrap_or_else(|| panic!("{} was not written", path.display()))
}

#[test]
fn shop_tree_is_complete() {
    let (fs, report) = generate(SHOP);
    let report = report.unwrap();

    assert_eq!(report.module, "shop");
    assert_eq!(report.layers, vec!["controller", "service", "repository"]);
    assert_eq!(report.files_written, fs.list_files().len());
    assert!(report.tooling.is_empty());

    for file in [
        "go.mod",
        "main.go",
        "config.json",
        "config/config.go",
        "models/user.go",
        "controller/controller.go",
        "controller/user.go",
        "service/service.go",
        "service/user.go",
        "repository/repository.go",
        "repository/user.go",
        "router/router.go",
        "docker-compose.yaml",
    ] {
        read(&fs, file);
    }
    assert!(!fs.has_directory("generated/shop/telerouter"));
}

#[test]
fn controller_delegates_to_service() {
    let (fs, report) = generate(SHOP);
    report.unwrap();

    let text = read(&fs, "controller/user.go");
    assert!(text.starts_with("package controller\n\nimport (\n"));
    assert!(text.contains("\t\"github.com/gin-gonic/gin\"\n"));
    assert!(text.contains("\t\"shop/service\"\n"));
    assert!(text.contains("func NewUserController("));
    assert!(text.contains("// @Router /user [post]\n"));
    assert!(text.contains("func (u *user) CreateUser(ctx *gin.Context) {\n"));
    assert!(text.contains("\tres, err := u.service.CreateUser(&req)\n"));
    assert!(text.contains("\terr = u.service.DeleteUser(&req)\n"));
}

#[test]
fn repository_talks_to_gorm_only() {
    let (fs, report) = generate(SHOP);
    report.unwrap();

    let text = read(&fs, "repository/user.go");
    assert!(text.contains("\"gorm.io/gorm\""));
    assert!(text.contains("result := u.db.Create(userModel)\n"));
    assert!(text.contains("result := u.db.Where(userModel).Find(&userModelList)\n"));
    assert!(!text.contains("u.service"));
}

#[test]
fn interfaces_list_every_operation() {
    let (fs, report) = generate(SHOP);
    report.unwrap();

    let text = read(&fs, "service/service.go");
    assert!(text.contains("type User interface {\n"));
    for op in ["CreateUser", "ReadUser", "UpdateUser", "DeleteUser"] {
        assert!(text.contains(&format!("\t{op}(")), "{op} missing");
    }
}

#[test]
fn main_wires_the_chain_and_starts_the_router() {
    let (fs, report) = generate(SHOP);
    report.unwrap();

    let text = read(&fs, "main.go");
    assert!(text.starts_with("package main\n"));
    assert!(text.contains("\tcfg, err := config.NewConfig()\n"));
    assert!(text.contains("\t\t&models.User{},\n"));
    assert!(text.contains("\tr := router.NewRouter(userController, cfg)\n"));

    let repo = text.find("repository.NewUserRepository").unwrap();
    let controller = text.find("controller.NewUserController").unwrap();
    assert!(repo < controller);
}

#[test]
fn config_documents_carry_defaults() {
    let (fs, report) = generate(SHOP);
    report.unwrap();

    assert_eq!(read(&fs, "go.mod"), "module shop\n\ngo 1.21\n");

    let json = read(&fs, "config.json");
    assert!(json.contains("\"http_port\": \"8080\""));
    assert!(json.contains("\"postgres_host\": \"localhost\""));
    assert!(!json.contains("telebot_token"));

    let compose = read(&fs, "docker-compose.yaml");
    assert!(compose.contains("postgres:latest"));
    assert!(compose.contains("5432:5432"));
}

#[test]
fn chat_bot_chain_gets_a_telerouter() {
    let (fs, report) = generate(
        "project_name: shop\n\
         layers:\n  - { layer: chat, tag: telebot }\n  - { layer: store, tag: postgres }\n\
         models:\n  - { name: Note, fields: [{ name: id, type: id }], methods: [create, delete] }\n",
    );
    report.unwrap();

    let router = read(&fs, "telerouter/telerouter.go");
    assert!(router.contains("r.Bot.Handle(\"/create_note\", r.Note.CreateNote)"));
    assert!(read(&fs, "config.json").contains("\"telebot_token\": \"\""));
    assert!(read(&fs, "main.go").contains("\ttr.Run()\n"));
    assert!(!fs.has_directory("generated/shop/router"));
}

#[test]
fn regeneration_is_byte_identical() {
    let (first, report) = generate(SHOP);
    report.unwrap();
    let (second, report) = generate(SHOP);
    report.unwrap();

    assert_eq!(first.snapshot(), second.snapshot());
}

#[test]
fn invalid_description_writes_nothing() {
    let (fs, report) = generate(
        "project_name: shop\nmodels:\n  - { name: User }\n  - { name: User }\n",
    );

    let err = report.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(fs.list_files().is_empty());
}

#[test]
fn models_named_after_imported_packages_are_rejected() {
    for name in ["Gin", "Gorm", "Telebot", "Json", "Strings", "Models"] {
        let (fs, report) = generate(&format!(
            "project_name: shop\nmodels:\n  - {{ name: {name}, methods: [create] }}\n"
        ));

        let err = report.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation, "{name}");
        assert!(err.to_string().contains(name), "{err}");
        assert!(fs.list_files().is_empty());
    }
}

#[test]
fn constructor_literals_are_column_aligned() {
    let (fs, report) = generate(SHOP);
    report.unwrap();

    let controller = read(&fs, "controller/user.go");
    assert!(
        controller.contains("return &user{\n\t\tconfig:  cfg,\n\t\tservice: service,\n\t}"),
        "{controller}"
    );
}
