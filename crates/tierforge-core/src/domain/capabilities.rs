//! Layer-kind capability registry.
//!
//! Each [`LayerKind`] is described exactly once by a [`LayerKindDef`]: which
//! declaration tags select it, which per-request context a transport method
//! receives, which technology handle its structs carry, and which options it
//! contributes to the generated `config.Config`.
//!
//! # Adding a New Layer Kind
//!
//! 1. Add a variant to `LayerKind` in `value_objects.rs`
//! 2. Add one `LayerKindDef` static here and list it in [`LAYER_REGISTRY`]
//! 3. Add a body strategy in `application::strategy`

use crate::domain::entities::source::GoImport;
use crate::domain::value_objects::LayerKind;

// ── Definitions ──────────────────────────────────────────────────────────────

/// The single argument a transport method receives.
#[derive(Debug, Clone)]
pub struct ContextParam {
    pub name: &'static str,
    pub ty: &'static str,
    pub import: GoImport,
}

/// A technology handle injected into every struct of a layer.
///
/// `name` is used for the struct field, the constructor parameter and the
/// variable the entry point creates.
#[derive(Debug, Clone)]
pub struct LayerDependency {
    pub name: &'static str,
    pub ty: &'static str,
    pub import: GoImport,
}

/// One member of the generated configuration struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigOption {
    pub field: &'static str,
    pub json_key: &'static str,
    pub default: &'static str,
}

#[derive(Debug, Clone)]
pub struct LayerKindDef {
    pub kind: LayerKind,

    /// Declaration tags (case-insensitive) that select this kind.
    pub tags: &'static [&'static str],

    pub description: &'static str,

    /// `Some` for transport kinds only.
    pub context: Option<ContextParam>,

    pub dependency: Option<LayerDependency>,

    /// Options contributed to `config.Config`, in declaration order.
    pub config: &'static [ConfigOption],
}

// ── Registry ─────────────────────────────────────────────────────────────────

pub static HTTP: LayerKindDef = LayerKindDef {
    kind: LayerKind::Http,
    tags: &["http", "gin"],
    description: "HTTP transport on gin; binds JSON, delegates, responds",
    context: Some(ContextParam {
        name: "ctx",
        ty: "*gin.Context",
        import: GoImport::GIN,
    }),
    dependency: None,
    config: &[
        ConfigOption {
            field: "HttpHost",
            json_key: "http_host",
            default: "0.0.0.0",
        },
        ConfigOption {
            field: "HttpPort",
            json_key: "http_port",
            default: "8080",
        },
    ],
};

pub static POSTGRES: LayerKindDef = LayerKindDef {
    kind: LayerKind::Postgres,
    tags: &["postgres", "postgresql", "gorm"],
    description: "Relational storage on gorm + postgres; terminal layer",
    context: None,
    dependency: Some(LayerDependency {
        name: "db",
        ty: "*gorm.DB",
        import: GoImport::GORM,
    }),
    config: &[
        ConfigOption {
            field: "PostgresHost",
            json_key: "postgres_host",
            default: "localhost",
        },
        ConfigOption {
            field: "PostgresPort",
            json_key: "postgres_port",
            default: "5432",
        },
        ConfigOption {
            field: "PostgresDb",
            json_key: "postgres_db",
            default: "postgres",
        },
        ConfigOption {
            field: "PostgresUser",
            json_key: "postgres_user",
            default: "postgres",
        },
        ConfigOption {
            field: "PostgresPassword",
            json_key: "postgres_password",
            default: "postgres",
        },
    ],
};

pub static TELEBOT: LayerKindDef = LayerKindDef {
    kind: LayerKind::Telebot,
    tags: &["telebot", "telegram"],
    description: "Chat-bot transport on telebot; parses command payloads",
    context: Some(ContextParam {
        name: "m",
        ty: "*telebot.Message",
        import: GoImport::TELEBOT,
    }),
    dependency: Some(LayerDependency {
        name: "bot",
        ty: "*telebot.Bot",
        import: GoImport::TELEBOT,
    }),
    config: &[ConfigOption {
        field: "TelebotToken",
        json_key: "telebot_token",
        default: "",
    }],
};

pub static GENERIC: LayerKindDef = LayerKindDef {
    kind: LayerKind::Generic,
    tags: &["", "generic", "custom"],
    description: "Passthrough layer; delegates every call to its successor",
    context: None,
    dependency: None,
    config: &[],
};

/// All layer kinds, in the order their config options are emitted.
pub static LAYER_REGISTRY: &[&LayerKindDef] = &[&HTTP, &POSTGRES, &TELEBOT, &GENERIC];

// ── Lookups ──────────────────────────────────────────────────────────────────

pub fn layer_def(kind: LayerKind) -> &'static LayerKindDef {
    match kind {
        LayerKind::Http => &HTTP,
        LayerKind::Postgres => &POSTGRES,
        LayerKind::Telebot => &TELEBOT,
        LayerKind::Generic => &GENERIC,
    }
}

pub fn kind_for_tag(tag: &str) -> Option<LayerKind> {
    let tag = tag.trim().to_ascii_lowercase();
    LAYER_REGISTRY
        .iter()
        .find(|def| def.tags.contains(&tag.as_str()))
        .map(|def| def.kind)
}

/// Config options contributed by the given kinds, registry order, each
/// group at most once.
pub fn config_options_for(kinds: &[LayerKind]) -> Vec<ConfigOption> {
    LAYER_REGISTRY
        .iter()
        .filter(|def| kinds.contains(&def.kind))
        .flat_map(|def| def.config.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_exactly_one_definition() {
        for def in LAYER_REGISTRY {
            assert_eq!(layer_def(def.kind).kind, def.kind);
        }
        assert_eq!(LAYER_REGISTRY.len(), 4);
    }

    #[test]
    fn tags_resolve_case_insensitively() {
        assert_eq!(kind_for_tag("HTTP"), Some(LayerKind::Http));
        assert_eq!(kind_for_tag("postgres"), Some(LayerKind::Postgres));
        assert_eq!(kind_for_tag("Telebot"), Some(LayerKind::Telebot));
        assert_eq!(kind_for_tag(""), Some(LayerKind::Generic));
        assert_eq!(kind_for_tag("htp"), None);
    }

    #[test]
    fn only_transport_kinds_declare_a_context() {
        for def in LAYER_REGISTRY {
            assert_eq!(def.context.is_some(), def.kind.is_transport());
        }
    }

    #[test]
    fn config_groups_follow_registry_order() {
        let opts = config_options_for(&[LayerKind::Postgres, LayerKind::Http]);
        let fields: Vec<_> = opts.iter().map(|o| o.field).collect();
        assert_eq!(
            fields,
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
    }

    #[test]
    fn bot_token_comes_from_telebot_only() {
        let opts = config_options_for(&[LayerKind::Postgres]);
        assert!(opts.iter().all(|o| o.field != "TelebotToken"));

        let opts = config_options_for(&[LayerKind::Telebot]);
        assert_eq!(opts.len(), 1);
        assert_eq!(opts[0].field, "TelebotToken");
    }
}
