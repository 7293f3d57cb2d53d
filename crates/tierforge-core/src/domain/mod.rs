// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for tierforge.
//!
//! Pure logic only: the model/method vocabulary, the layer chain, the layer
//! kind registry and the structured Go source model.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, process or network calls
//! - **No logging**: Callers decide what is worth reporting
//! - **Immutable inputs**: Models are never mutated once loaded
//!
// Public API - what the world sees
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;
pub mod vocabulary;

mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    layer::{DEFAULT_LAYERS, Layer, LayerChain, LayerDecl, LayerId, default_layers},
    model::{Field, Model},
    project_spec::{DEFAULT_PROJECT_NAME, ProjectSpec, SANDBOX_DIR},
    project_structure::{DirectoryToCreate, FileContent, FileToWrite, FsEntry, ProjectStructure},
    source::{
        GoFunc, GoImport, GoInterface, GoStruct, ImportSet, Item, Param, Receiver, Signature,
        SourceFile, StructField,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{FieldType, HttpVerb, LayerKind, MethodType, ReturnShape};

pub use validation::{DomainValidator, RESERVED_MODELS, RESERVED_PACKAGES};

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Arc;

    use super::*;

    fn decls(pairs: &[(&str, &str)]) -> Vec<LayerDecl> {
        pairs.iter().map(|(n, t)| LayerDecl::new(*n, *t)).collect()
    }

    fn user() -> Model {
        Model::new("User")
            .with_field("name", FieldType::String)
            .with_method("create")
            .with_method("read")
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn method_type_parses_case_insensitively() {
        assert_eq!(MethodType::parse("CREATE"), MethodType::Create);
        assert_eq!(MethodType::parse("Read"), MethodType::Read);
        assert_eq!(MethodType::parse("uPdAtE"), MethodType::Update);
        assert_eq!(MethodType::parse("delete"), MethodType::Delete);
        assert_eq!(
            MethodType::parse("export"),
            MethodType::Custom("export".into())
        );
    }

    #[test]
    fn method_display_names() {
        assert_eq!(MethodType::parse("create").display_name(), "Create");
        assert_eq!(MethodType::parse("DELETE").display_name(), "Delete");
        assert_eq!(MethodType::parse("export").display_name(), "Export");
        assert_eq!(MethodType::parse("bulkExport").display_name(), "BulkExport");
    }

    #[test]
    fn method_http_verbs() {
        assert_eq!(MethodType::Create.http_verb(), HttpVerb::Post);
        assert_eq!(MethodType::Read.http_verb(), HttpVerb::Get);
        assert_eq!(MethodType::Update.http_verb(), HttpVerb::Patch);
        assert_eq!(MethodType::Delete.http_verb(), HttpVerb::Delete);
        assert_eq!(MethodType::parse("export").http_verb(), HttpVerb::Post);
    }

    #[test]
    fn method_route_suffixes() {
        assert_eq!(MethodType::Create.route_suffix(), "");
        assert_eq!(MethodType::Delete.route_suffix(), "");
        assert_eq!(MethodType::parse("BulkExport").route_suffix(), "bulkexport");
    }

    #[test]
    fn field_type_parses_aliases() {
        assert_eq!(FieldType::from_str("float64").unwrap(), FieldType::Float);
        assert_eq!(FieldType::from_str("ID").unwrap(), FieldType::Id);
        assert!(matches!(
            FieldType::from_str("decimal"),
            Err(DomainError::UnknownFieldType(_))
        ));
    }

    #[test]
    fn field_names_are_case_converted() {
        let field = Field::new("createdAt", FieldType::Int);
        assert_eq!(field.go_name(), "CreatedAt");
        assert_eq!(field.json_name(), "created_at");
        assert_eq!(field.struct_tag(), "json:\"created_at\"");

        let id = Field::new("id", FieldType::Id);
        assert_eq!(id.struct_tag(), "json:\"id\" gorm:\"primaryKey\"");
    }

    #[test]
    fn unknown_layer_tags_fall_back_to_generic() {
        let decl = LayerDecl::new("svc", "htp");
        assert_eq!(decl.kind(), LayerKind::Generic);
        assert!(!decl.is_recognized());
        assert!(LayerDecl::new("svc", "").is_recognized());
    }

    // ========================================================================
    // Chain Tests
    // ========================================================================

    #[test]
    fn chain_links_each_node_to_the_next() {
        for n in 1..=5 {
            let names: Vec<String> = (0..n).map(|i| format!("layer{i}")).collect();
            let decls: Vec<LayerDecl> =
                names.iter().map(|name| LayerDecl::new(name.clone(), "")).collect();

            let chain = LayerChain::build(&decls, vec![user()]);
            assert_eq!(chain.len(), n);

            let layers: Vec<&Layer> = chain.iter().collect();
            for (i, layer) in layers.iter().enumerate() {
                assert_eq!(layer.id().index(), i);
                assert_eq!(layer.name(), names[i]);
                if i + 1 < n {
                    assert_eq!(layer.next(), Some(layers[i + 1].id()));
                    assert_eq!(
                        chain.successor(layer).map(Layer::name),
                        Some(names[i + 1].as_str())
                    );
                } else {
                    assert!(layer.is_terminal());
                    assert!(chain.successor(layer).is_none());
                }
            }
        }
    }

    #[test]
    fn empty_declarations_build_the_default_chain() {
        let chain = LayerChain::build(&[], vec![user()]);
        let shape: Vec<(&str, LayerKind)> = chain.iter().map(|l| (l.name(), l.kind())).collect();

        assert_eq!(
            shape,
            vec![
                ("controller", LayerKind::Http),
                ("service", LayerKind::Generic),
                ("repository", LayerKind::Postgres),
            ]
        );
    }

    #[test]
    fn single_layer_chain_is_terminal() {
        let chain = LayerChain::build(&decls(&[("service", "")]), vec![user()]);
        let only = chain.outermost().unwrap();
        assert!(only.is_terminal());
        assert!(chain.successor(only).is_none());
    }

    #[test]
    fn all_layers_share_one_model_set() {
        let chain = LayerChain::build(
            &decls(&[("api", "http"), ("store", "postgres")]),
            vec![user()],
        );
        for layer in chain.iter() {
            assert!(Arc::ptr_eq(layer.models(), chain.models()));
        }
    }

    #[test]
    fn chain_kind_queries() {
        let chain = LayerChain::build(
            &decls(&[("chat", "telebot"), ("api", "http"), ("svc", ""), ("store", "postgres")]),
            Vec::<Model>::new(),
        );
        assert_eq!(
            chain.kinds(),
            vec![
                LayerKind::Telebot,
                LayerKind::Http,
                LayerKind::Generic,
                LayerKind::Postgres
            ]
        );
        assert_eq!(chain.first_of_kind(LayerKind::Http).map(Layer::name), Some("api"));
        assert!(!chain.is_empty());
    }

    #[test]
    fn layer_derived_names() {
        let chain = LayerChain::build(&decls(&[("controller", "http")]), vec![user()]);
        let layer = chain.outermost().unwrap();
        let model = &chain.models()[0];
        assert_eq!(layer.public_name(), "Controller");
        assert_eq!(layer.constructor_name(model), "NewUserController");
        assert_eq!(layer.instance_var(model), "userController");
    }

    // ========================================================================
    // Validation Tests
    // ========================================================================

    #[test]
    fn valid_spec_passes() {
        let spec = ProjectSpec {
            project_name: "shop-api".into(),
            models: vec![user()],
            ..Default::default()
        }
        .normalized();

        assert!(DomainValidator::validate_spec(&spec, true).is_ok());
    }

    #[test]
    fn project_name_must_be_module_friendly() {
        assert!(DomainValidator::validate_project_name("shop_api2").is_ok());
        assert!(DomainValidator::validate_project_name("Shop").is_err());
        assert!(DomainValidator::validate_project_name("my shop").is_err());
        assert!(DomainValidator::validate_project_name("").is_err());
    }

    #[test]
    fn reserved_and_duplicate_layers_are_rejected() {
        let spec = ProjectSpec {
            layers: decls(&[("models", "")]),
            ..Default::default()
        }
        .normalized();
        assert!(matches!(
            DomainValidator::validate_spec(&spec, false),
            Err(DomainError::InvalidLayerName { .. })
        ));

        let spec = ProjectSpec {
            layers: decls(&[("svc", ""), ("svc", "postgres")]),
            ..Default::default()
        }
        .normalized();
        assert_eq!(
            DomainValidator::validate_spec(&spec, false),
            Err(DomainError::DuplicateLayer { name: "svc".into() })
        );

        let spec = ProjectSpec {
            layers: decls(&[("postgres", "postgres")]),
            ..Default::default()
        }
        .normalized();
        assert!(DomainValidator::validate_spec(&spec, false).is_err());
    }

    #[test]
    fn strict_mode_rejects_unknown_tags() {
        let spec = ProjectSpec {
            layers: decls(&[("api", "htp")]),
            ..Default::default()
        }
        .normalized();

        assert!(DomainValidator::validate_spec(&spec, false).is_ok());
        assert_eq!(
            DomainValidator::validate_spec(&spec, true),
            Err(DomainError::UnknownLayerTag {
                layer: "api".into(),
                tag: "htp".into()
            })
        );
        assert_eq!(spec.unrecognized_layers().len(), 1);
    }

    #[test]
    fn model_rules() {
        assert!(DomainValidator::validate_model(&Model::new("user")).is_err());
        assert!(DomainValidator::validate_model(&Model::new("Type")).is_err());
        assert!(DomainValidator::validate_model(&Model::new("Order-Item")).is_err());
        assert!(DomainValidator::validate_model(&Model::new("Config")).is_err());

        let dup_field = Model::new("User")
            .with_field("name", FieldType::String)
            .with_field("Name", FieldType::String);
        assert!(matches!(
            DomainValidator::validate_model(&dup_field),
            Err(DomainError::DuplicateField { .. })
        ));

        let dup_method = Model::new("User").with_method("export").with_method("Export");
        assert!(matches!(
            DomainValidator::validate_model(&dup_method),
            Err(DomainError::DuplicateMethod { .. })
        ));

        let bad_method = Model::new("User").with_method("bulk-export");
        assert!(matches!(
            DomainValidator::validate_model(&bad_method),
            Err(DomainError::InvalidMethodTag { .. })
        ));
    }

    #[test]
    fn models_shadowing_imported_packages_are_rejected() {
        for name in ["Gin", "Gorm", "Telebot", "Models", "Config", "Json", "Strings"] {
            assert!(
                matches!(
                    DomainValidator::validate_model(&Model::new(name)),
                    Err(DomainError::InvalidModelName { .. })
                ),
                "{name} should be rejected"
            );
        }

        assert_eq!(
            DomainValidator::validate_model(&Model::new("Gin")),
            Err(DomainError::InvalidModelName {
                name: "Gin".into(),
                reason: "shadows an imported package".into(),
            })
        );
        assert!(DomainValidator::validate_model(&Model::new("Ginger")).is_ok());
    }

    #[test]
    fn safe_mode_rejects_absolute_paths() {
        let spec = ProjectSpec {
            path: "/tmp/out".into(),
            ..Default::default()
        }
        .normalized();
        assert!(matches!(
            DomainValidator::validate_spec(&spec, false),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));

        let spec = ProjectSpec {
            unsafe_output: true,
            ..spec
        };
        assert!(DomainValidator::validate_spec(&spec, false).is_ok());
    }

    #[test]
    fn safe_mode_rejects_parent_segments() {
        let spec = ProjectSpec {
            path: "shop/../../etc".into(),
            ..Default::default()
        }
        .normalized();
        assert!(DomainValidator::validate_spec(&spec, false).is_err());
    }

    #[test]
    fn duplicate_models_are_rejected() {
        let spec = ProjectSpec {
            models: vec![user(), user()],
            ..Default::default()
        }
        .normalized();
        assert_eq!(
            DomainValidator::validate_spec(&spec, false),
            Err(DomainError::DuplicateModel {
                name: "User".into()
            })
        );
    }
}
