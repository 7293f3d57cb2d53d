//! Naming and signature rules for a (model, method, layer kind) triple.
//!
//! Every generated file that mentions a model operation (interfaces,
//! implementations, routers, entry point, doc annotations) goes through these
//! functions. Nothing else computes a method name or signature.

use crate::domain::{
    capabilities::layer_def,
    entities::{
        model::Model,
        source::{GoImport, ImportSet, Param, Signature},
    },
    naming::to_snake_case,
    value_objects::{LayerKind, MethodType, ReturnShape},
};

/// `<Op><Model>`, e.g. `CreateUser`, `ExportUser`.
pub fn method_name(model: &Model, method: &MethodType) -> String {
    format!("{}{}", method.display_name(), model.name)
}

/// Name of the model-pointer argument, e.g. `userModel`.
pub fn model_param_name(model: &Model) -> String {
    format!("{}Model", model.private_name())
}

/// Transport kinds take their per-request context; everything else takes a
/// pointer to the model.
pub fn default_params(model: &Model, kind: LayerKind) -> Vec<Param> {
    match &layer_def(kind).context {
        Some(ctx) => vec![Param::new(ctx.name, ctx.ty)],
        None => vec![Param::new(
            model_param_name(model),
            format!("*{}", model.qualified()),
        )],
    }
}

/// Return list of the non-transport form of `method`.
///
/// | Method | Returns |
/// |--------|---------|
/// | Read | `[]models.M, error` |
/// | Delete | `error` |
/// | Create, Update, custom | `*models.M, error` |
pub fn default_returns(model: &Model, method: &MethodType) -> Vec<String> {
    match method.return_shape() {
        ReturnShape::Collection => vec![format!("[]{}", model.qualified()), "error".into()],
        ReturnShape::ErrorOnly => vec!["error".into()],
        ReturnShape::Pointer => vec![format!("*{}", model.qualified()), "error".into()],
    }
}

/// The signature used in both the layer interface and its implementation.
/// Transport methods declare no return values.
pub fn signature(model: &Model, method: &MethodType, kind: LayerKind) -> Signature {
    Signature {
        name: method_name(model, method),
        params: default_params(model, kind),
        returns: if kind.is_transport() {
            Vec::new()
        } else {
            default_returns(model, method)
        },
    }
}

/// Imports the signature types of `kind` refer to.
pub fn signature_imports(kind: LayerKind) -> ImportSet {
    match &layer_def(kind).context {
        Some(ctx) => ImportSet::new().with(ctx.import.clone()),
        None => ImportSet::new().with(GoImport::models()),
    }
}

/// Method receiver for the private struct of `model`.
///
/// First letter of the model name, unless that would shadow the transport
/// context argument.
pub fn receiver_name(model: &Model, kind: LayerKind) -> String {
    let candidate: String = model
        .name
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default();

    let clashes = layer_def(kind)
        .context
        .as_ref()
        .is_some_and(|ctx| ctx.name == candidate);

    if candidate.is_empty() || clashes {
        "recv".into()
    } else {
        candidate
    }
}

/// HTTP route of `method`: `/user` for canonical ops, `/user/export` else.
pub fn http_route(model: &Model, method: &MethodType) -> String {
    let suffix = method.route_suffix();
    if suffix.is_empty() {
        model.route()
    } else {
        format!("{}/{suffix}", model.route())
    }
}

/// Bot command of `method`: `/create_user`.
pub fn bot_command(model: &Model, method: &MethodType) -> String {
    format!("/{}_{}", to_snake_case(method.tag()), model.snake_name())
}
