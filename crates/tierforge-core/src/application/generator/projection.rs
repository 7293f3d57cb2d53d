use crate::domain::{
    GoImport, GoStruct, ImportSet, Layer, Model, Param, capabilities::layer_def,
};

/// Shape of the private struct backing `model` inside one layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructShape {
    pub strukt: GoStruct,
    /// Constructor parameters, one per struct field, same order.
    pub params: Vec<Param>,
    pub imports: ImportSet,
}

impl StructShape {
    /// `field: param` pairs for the composite literal in the constructor.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.strukt
            .fields
            .iter()
            .zip(&self.params)
            .map(|(f, p)| (f.name.as_str(), p.name.as_str()))
    }
}

/// Derive the struct for `model` in `layer`.
///
/// Always holds the configuration; holds the successor's interface when
/// there is a successor, and the layer kind's technology handle when it has
/// one. The canonical model is only read.
pub fn project_for_layer(model: &Model, layer: &Layer, successor: Option<&Layer>) -> StructShape {
    let mut strukt = GoStruct::new(model.private_name()).field("config", "*config.Config");
    let mut params = vec![Param::new("cfg", "*config.Config")];
    let mut imports = ImportSet::new().with(GoImport::config());

    if let Some(next) = successor {
        let ty = format!("{}.{}", next.name(), model.name);
        strukt = strukt.field(next.name(), ty.clone());
        params.push(Param::new(next.name(), ty));
        imports.insert(GoImport::project(next.name()));
    }

    if let Some(dep) = &layer_def(layer.kind()).dependency {
        strukt = strukt.field(dep.name, dep.ty);
        params.push(Param::new(dep.name, dep.ty));
        imports.insert(dep.import.clone());
    }

    StructShape {
        strukt,
        params,
        imports,
    }
}
