//! Per-layer units: the interface file and one implementation per model.

use super::composite_return;
use super::projection::project_for_layer;
use crate::application::strategy::{StrategyContext, method_body};
use crate::domain::{
    GoFunc, GoInterface, Item, Layer, LayerChain, LayerKind, MethodType, Model, ReturnShape,
    Signature, SourceFile,
    vocabulary::{bot_command, http_route, method_name, signature, signature_imports},
};

/// `<layer>/<layer>.go`: one interface per model.
pub fn interface_unit(module: &str, layer: &Layer) -> SourceFile {
    let mut file = SourceFile::new(module, layer.name());
    let kind = layer.kind();

    for model in layer.models().iter() {
        if !model.methods.is_empty() {
            file.imports.extend(&signature_imports(kind));
        }
        file.push(Item::Interface(GoInterface {
            name: model.name.clone(),
            methods: model
                .methods
                .iter()
                .map(|m| signature(model, m, kind))
                .collect(),
        }));
    }

    file
}

/// `<layer>/<snake>.go`: private struct, constructor, methods.
pub fn model_unit(module: &str, chain: &LayerChain, layer: &Layer, model: &Model) -> SourceFile {
    let kind = layer.kind();
    let shape = project_for_layer(model, layer, chain.successor(layer));
    let cx = StrategyContext::new(chain, layer, model);

    let mut file = SourceFile::new(module, layer.name());
    file.imports.extend(&shape.imports);

    let pairs: Vec<(&str, &str)> = shape.assignments().collect();
    let body = composite_return(&shape.strukt.name, &pairs);
    let mut ctor = Signature::new(layer.constructor_name(model)).returns(model.name.clone());
    ctor.params = shape.params.clone();
    let ctor = GoFunc::new(ctor, body);

    file.push(Item::Struct(shape.strukt));
    file.push(Item::Func(ctor));

    let receiver_ty = format!("*{}", model.private_name());
    for method in &model.methods {
        let body = method_body(&cx, method);
        file.imports.extend(&signature_imports(kind));
        file.imports.extend(&body.imports);

        let func = GoFunc::new(signature(model, method, kind), body.code)
            .with_receiver(cx.receiver(), receiver_ty.as_str())
            .with_doc(annotations(model, method, kind));
        file.push(Item::Func(func));
    }

    file
}

/// Doc block above a transport method. Empty for inner layers.
pub fn annotations(model: &Model, method: &MethodType, kind: LayerKind) -> Vec<String> {
    let name = method_name(model, method);
    match kind {
        LayerKind::Http => {
            let success = match method.return_shape() {
                ReturnShape::Collection => format!("{{array}} {}", model.qualified()),
                ReturnShape::ErrorOnly => "{string} string".to_string(),
                ReturnShape::Pointer => format!("{{object}} {}", model.qualified()),
            };
            vec![
                format!("{name} godoc"),
                format!("@Summary {} {}", method.display_name(), model.name),
                format!("@Tags {}", model.name),
                "@Accept json".into(),
                "@Produce json".into(),
                format!(
                    "@Param request body {} true \"{}\"",
                    model.qualified(),
                    model.name
                ),
                format!("@Success 200 {success}"),
                format!(
                    "@Router {} [{}]",
                    http_route(model, method),
                    method.http_verb().annotation()
                ),
            ]
        }
        LayerKind::Telebot => vec![format!("{name} handles {}", bot_command(model, method))],
        LayerKind::Postgres | LayerKind::Generic => Vec::new(),
    }
}
