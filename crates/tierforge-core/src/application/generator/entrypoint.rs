//! `main.go`: configuration, technology handles, layer wiring, routers.

use super::routers::{BOT_PACKAGE, HTTP_PACKAGE};
use crate::domain::{
    GoFunc, GoImport, Item, Layer, LayerChain, LayerKind, Signature, SourceFile,
    capabilities::layer_def,
};

const PANIC_ON_ERR: &str = "if err != nil {\n\tpanic(err.Error())\n}\n";

/// One `<model><Layer> := <layer>.New<Model><Layer>(...)` line per model.
fn constructions(chain: &LayerChain, layer: &Layer) -> String {
    let successor = chain.successor(layer);
    let dependency = layer_def(layer.kind()).dependency.as_ref();

    chain
        .models()
        .iter()
        .map(|model| {
            let mut args = vec!["cfg".to_string()];
            if let Some(next) = successor {
                args.push(next.instance_var(model));
            }
            if let Some(dep) = dependency {
                args.push(dep.name.to_string());
            }
            format!(
                "{} := {}.{}({})\n",
                layer.instance_var(model),
                layer.name(),
                layer.constructor_name(model),
                args.join(", ")
            )
        })
        .collect()
}

pub fn main_unit(module: &str, chain: &LayerChain) -> SourceFile {
    let mut file = SourceFile::new(module, "main");
    file.import(GoImport::config());

    let models = chain.models();
    let mut body = String::from("cfg, err := config.NewConfig()\n");
    body.push_str(PANIC_ON_ERR);

    if chain.has_kind(LayerKind::Postgres) {
        file.import(GoImport::FMT);
        file.import(GoImport::GORM);
        file.import(GoImport::GORM_POSTGRES);
        body.push_str(
            "\ndsn := fmt.Sprintf(\n\
             \t\"host=%s user=%s password=%s dbname=%s port=%s sslmode=disable\",\n\
             \tcfg.PostgresHost, cfg.PostgresUser, cfg.PostgresPassword, cfg.PostgresDb, cfg.PostgresPort,\n\
             )\n\
             db, err := gorm.Open(postgres.Open(dsn), &gorm.Config{})\n",
        );
        body.push_str(PANIC_ON_ERR);

        body.push_str("err = db.AutoMigrate(");
        if !models.is_empty() {
            file.import(GoImport::models());
            body.push('\n');
            for model in models.iter() {
                body.push_str(&format!("\t&{}{{}},\n", model.qualified()));
            }
        }
        body.push_str(")\n");
        body.push_str(PANIC_ON_ERR);
    }

    if chain.has_kind(LayerKind::Telebot) {
        file.import(GoImport::TELEBOT);
        file.import(GoImport::TIME);
        body.push_str(
            "\nbot, err := telebot.NewBot(telebot.Settings{\n\
             \tToken:  cfg.TelebotToken,\n\
             \tPoller: &telebot.LongPoller{Timeout: 10 * time.Second},\n\
             })\n",
        );
        body.push_str(PANIC_ON_ERR);
    }

    // innermost first, so every successor instance exists before use
    if !models.is_empty() {
        body.push('\n');
        for layer in chain.iter().rev() {
            file.import(GoImport::project(layer.name()));
            body.push_str(&constructions(chain, layer));
        }
    }

    let http = chain.first_of_kind(LayerKind::Http);
    let bot = chain.first_of_kind(LayerKind::Telebot);

    // the outermost instances have no consumer unless a router takes them
    if let Some(outer) = chain.outermost() {
        let routed = [http, bot]
            .iter()
            .flatten()
            .any(|l| l.id() == outer.id());
        if !routed {
            for model in models.iter() {
                body.push_str(&format!("_ = {}\n", outer.instance_var(model)));
            }
        }
    }

    let handlers = |layer: &Layer| -> Vec<String> {
        models.iter().map(|m| layer.instance_var(m)).collect()
    };

    if let Some(layer) = bot {
        file.import(GoImport::project(BOT_PACKAGE));
        let mut args = handlers(layer);
        args.extend(["cfg".to_string(), "bot".to_string()]);
        body.push_str(&format!(
            "\ntr := {BOT_PACKAGE}.NewTeleRouter({})\n",
            args.join(", ")
        ));
        // the bot polls in the background while the HTTP server blocks
        body.push_str(if http.is_some() { "go tr.Run()\n" } else { "tr.Run()\n" });
    }

    if let Some(layer) = http {
        file.import(GoImport::project(HTTP_PACKAGE));
        let mut args = handlers(layer);
        args.push("cfg".to_string());
        body.push_str(&format!(
            "\nr := {HTTP_PACKAGE}.NewRouter({})\nerr = r.Run()\n",
            args.join(", ")
        ));
        body.push_str(PANIC_ON_ERR);
    }

    let cfg_consumed = !models.is_empty()
        || chain.kinds().iter().any(|k| *k != LayerKind::Generic);
    if !cfg_consumed {
        body.push_str("_ = cfg\n");
    }

    let body = body.trim_end().to_string();
    file.push(Item::Func(GoFunc::new(Signature::new("main"), body)));
    file
}
