//! Aggregate routers for the outermost transport layers.
//!
//! `router` binds one gin route per (model, method) to the first http layer;
//! `telerouter` binds one bot command per (model, method) to the first
//! telebot layer.

use super::composite_return;
use crate::domain::{
    GoFunc, GoImport, GoStruct, Item, Layer, Model, Signature, SourceFile,
    vocabulary::{bot_command, http_route, method_name},
};

pub const HTTP_PACKAGE: &str = "router";
pub const BOT_PACKAGE: &str = "telerouter";

/// Constructor parameter for the handler of `model`: `userHandler`.
pub fn handler_param(model: &Model) -> String {
    format!("{}Handler", model.private_name())
}

/// Router struct holding one handler per model plus the config, and its
/// constructor. `extra` appends one more `(field, param, type)` member.
fn router_skeleton(
    module: &str,
    package: &str,
    type_name: &str,
    layer: &Layer,
    extra: Option<(&str, &str, &str)>,
) -> SourceFile {
    let mut file = SourceFile::new(module, package);
    file.import(GoImport::config());

    let models = layer.models();
    if !models.is_empty() {
        file.import(GoImport::project(layer.name()));
    }

    let mut strukt = GoStruct::new(type_name);
    let mut ctor = Signature::new(format!("New{type_name}"));
    let mut literal: Vec<(String, String)> = Vec::new();

    for model in models.iter() {
        let ty = format!("{}.{}", layer.name(), model.name);
        let param = handler_param(model);
        strukt = strukt.field(model.name.clone(), ty.clone());
        ctor = ctor.param(param.clone(), ty);
        literal.push((model.name.clone(), param));
    }

    strukt = strukt.field("Config", "*config.Config");
    ctor = ctor.param("cfg", "*config.Config");
    literal.push(("Config".into(), "cfg".into()));

    if let Some((field, param, ty)) = extra {
        strukt = strukt.field(field, ty);
        ctor = ctor.param(param, ty);
        literal.push((field.into(), param.into()));
    }

    ctor = ctor.returns(format!("*{type_name}"));
    file.push(Item::Struct(strukt));
    file.push(Item::Func(GoFunc::new(
        ctor,
        composite_return(type_name, &literal),
    )));
    file
}

/// `router/router.go` for the http `layer`.
pub fn http_router_unit(module: &str, layer: &Layer) -> SourceFile {
    let mut file = router_skeleton(module, HTTP_PACKAGE, "Router", layer, None);
    file.import(GoImport::GIN);

    let mut body = String::from("engine := gin.Default()\n");
    for model in layer.models().iter() {
        for method in &model.methods {
            body.push_str(&format!(
                "engine.{}(\"{}\", r.{}.{})\n",
                method.http_verb().as_str(),
                http_route(model, method),
                model.name,
                method_name(model, method),
            ));
        }
    }
    body.push_str("return engine.Run(r.Config.HttpHost + \":\" + r.Config.HttpPort)");

    let run = GoFunc::new(Signature::new("Run").returns("error"), body)
        .with_receiver("r", "*Router")
        .with_doc(vec!["Run registers every route and serves until failure.".into()]);
    file.push(Item::Func(run));
    file
}

/// `telerouter/telerouter.go` for the telebot `layer`.
pub fn bot_router_unit(module: &str, layer: &Layer) -> SourceFile {
    let mut file = router_skeleton(
        module,
        BOT_PACKAGE,
        "TeleRouter",
        layer,
        Some(("Bot", "bot", "*telebot.Bot")),
    );
    file.import(GoImport::TELEBOT);

    let mut body = String::new();
    for model in layer.models().iter() {
        for method in &model.methods {
            body.push_str(&format!(
                "r.Bot.Handle(\"{}\", r.{}.{})\n",
                bot_command(model, method),
                model.name,
                method_name(model, method),
            ));
        }
    }
    body.push_str("r.Bot.Start()");

    let run = GoFunc::new(Signature::new("Run"), body)
        .with_receiver("r", "*TeleRouter")
        .with_doc(vec!["Run registers every command and blocks polling for updates.".into()]);
    file.push(Item::Func(run));
    file
}
