//! Artifacts shared by every layer: storage structs, configuration, module
//! file and infrastructure manifest.

use crate::domain::{
    GoFunc, GoImport, GoStruct, Item, LayerKind, Model, Signature, SourceFile,
    capabilities::config_options_for,
};

/// Name of the JSON document `config.NewConfig` reads.
pub const CONFIG_FILE: &str = "config.json";

/// Go version written to `go.mod`.
pub const GO_VERSION: &str = "1.21";

/// `models/<snake>.go`: the canonical struct, independent of any layer.
pub fn storage_unit(module: &str, model: &Model) -> SourceFile {
    let mut file = SourceFile::new(module, "models");
    if model.has_object_fields() {
        file.import(GoImport::JSON);
    }

    let strukt = model
        .fields
        .iter()
        .fold(GoStruct::new(model.name.clone()), |s, f| {
            s.tagged_field(f.go_name(), f.ty.go_type(), f.struct_tag())
        });
    file.push(Item::Struct(strukt));
    file
}

/// `config/config.go`: one string member per contributed option and a loader.
pub fn config_unit(module: &str, kinds: &[LayerKind]) -> SourceFile {
    let mut file = SourceFile::new(module, "config");
    file.import(GoImport::JSON);
    file.import(GoImport::OS);

    let strukt = config_options_for(kinds)
        .into_iter()
        .fold(GoStruct::new("Config"), |s, opt| {
            s.tagged_field(opt.field, "string", format!("json:\"{}\"", opt.json_key))
        });
    file.push(Item::Struct(strukt));

    let loader = Signature::new("NewConfig")
        .returns("*Config")
        .returns("error");
    let body = format!(
        "data, err := os.ReadFile(\"{CONFIG_FILE}\")\n\
         if err != nil {{\n\
         \treturn nil, err\n\
         }}\n\
         cfg := &Config{{}}\n\
         err = json.Unmarshal(data, cfg)\n\
         if err != nil {{\n\
         \treturn nil, err\n\
         }}\n\
         return cfg, nil"
    );
    let doc = format!("NewConfig loads {CONFIG_FILE} from the working directory.");
    file.push(Item::Func(GoFunc::new(loader, body).with_doc(vec![doc])));
    file
}

/// Default values for `config.json`, same order as the struct members.
pub fn config_defaults(kinds: &[LayerKind]) -> Vec<(String, String)> {
    config_options_for(kinds)
        .into_iter()
        .map(|opt| (opt.json_key.to_string(), opt.default.to_string()))
        .collect()
}

pub fn go_mod(module: &str) -> String {
    format!("module {module}\n\ngo {GO_VERSION}\n")
}

/// Local postgres matching the default configuration values.
pub fn compose_manifest() -> String {
    "version: \"3.8\"\n\
     \n\
     services:\n\
     \x20 postgres:\n\
     \x20   image: postgres:latest\n\
     \x20   restart: unless-stopped\n\
     \x20   environment:\n\
     \x20     POSTGRES_DB: postgres\n\
     \x20     POSTGRES_USER: postgres\n\
     \x20     POSTGRES_PASSWORD: postgres\n\
     \x20   ports:\n\
     \x20     - \"5432:5432\"\n\
     \x20   volumes:\n\
     \x20     - postgres_data:/var/lib/postgresql/data\n\
     \n\
     volumes:\n\
     \x20 postgres_data:\n"
        .to_string()
}
