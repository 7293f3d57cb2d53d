//! Method-body strategies, one per [`LayerKind`].
//!
//! A strategy turns one (layer, model, method) triple into the literal Go
//! statements of the method body, plus the imports those statements need.
//! Selection is a `match` over the closed `LayerKind` enum; unknown tags were
//! already resolved to `LayerKind::Generic` when the chain was built.
//!
//! A strategy that needs a successor it cannot call (none exists, or the
//! successor is itself a transport layer) emits a `panic` placeholder. The
//! generated program still compiles.

mod generic;
mod http;
mod postgres;
mod telebot;

pub use generic::GenericStrategy;
pub use http::HttpStrategy;
pub use postgres::PostgresStrategy;
pub use telebot::TelebotStrategy;

use crate::domain::{
    GoImport, ImportSet, Layer, LayerChain, LayerKind, MethodType, Model,
    naming::quoted,
    vocabulary::{method_name, model_param_name, receiver_name},
};

// ── Output ───────────────────────────────────────────────────────────────────

/// Statements of one method body and the imports they reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBody {
    pub code: String,
    pub imports: ImportSet,
    /// `true` when the body calls into the successor layer.
    pub delegates: bool,
}

impl MethodBody {
    pub(crate) fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            imports: ImportSet::new(),
            delegates: false,
        }
    }

    pub(crate) fn import(mut self, import: GoImport) -> Self {
        self.imports.insert(import);
        self
    }

    pub(crate) fn delegating(mut self) -> Self {
        self.delegates = true;
        self
    }

    /// A body that aborts at runtime.
    pub fn placeholder(layer: &str, method: &str) -> Self {
        Self::new(format!(
            "panic({})",
            quoted(&format!("implement me: {layer}.{method}"))
        ))
    }

    pub fn is_placeholder(&self) -> bool {
        self.code.starts_with("panic(")
    }
}

// ── Context ──────────────────────────────────────────────────────────────────

/// Everything a strategy may look at for one (layer, model) pair.
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext<'a> {
    pub layer: &'a Layer,
    pub successor: Option<&'a Layer>,
    pub model: &'a Model,
}

impl<'a> StrategyContext<'a> {
    pub fn new(chain: &'a LayerChain, layer: &'a Layer, model: &'a Model) -> Self {
        Self {
            layer,
            successor: chain.successor(layer),
            model,
        }
    }

    /// The successor, if its methods take a model pointer.
    ///
    /// A transport successor exposes context-based handlers that cannot be
    /// called with a model.
    pub fn callable_successor(&self) -> Option<&'a Layer> {
        self.successor.filter(|next| !next.kind().is_transport())
    }

    pub fn receiver(&self) -> String {
        receiver_name(self.model, self.layer.kind())
    }

    pub fn method_name(&self, method: &MethodType) -> String {
        method_name(self.model, method)
    }

    pub fn model_param(&self) -> String {
        model_param_name(self.model)
    }

    /// `<recv>.<successor>.<Op><Model>(<arg>)`
    pub fn successor_call(&self, next: &Layer, method: &MethodType, arg: &str) -> String {
        format!(
            "{}.{}.{}({arg})",
            self.receiver(),
            next.name(),
            self.method_name(method)
        )
    }

    pub fn placeholder(&self, method: &MethodType) -> MethodBody {
        MethodBody::placeholder(self.layer.name(), &self.method_name(method))
    }
}

// ── Strategy ─────────────────────────────────────────────────────────────────

/// One body per canonical operation plus a catch-all for custom tags.
pub trait BodyStrategy: Sync {
    fn create(&self, cx: &StrategyContext<'_>) -> MethodBody;
    fn read(&self, cx: &StrategyContext<'_>) -> MethodBody;
    fn update(&self, cx: &StrategyContext<'_>) -> MethodBody;
    fn delete(&self, cx: &StrategyContext<'_>) -> MethodBody;
    fn custom(&self, cx: &StrategyContext<'_>, method: &MethodType) -> MethodBody;
}

pub fn strategy_for(kind: LayerKind) -> &'static dyn BodyStrategy {
    match kind {
        LayerKind::Http => &HttpStrategy,
        LayerKind::Postgres => &PostgresStrategy,
        LayerKind::Telebot => &TelebotStrategy,
        LayerKind::Generic => &GenericStrategy,
    }
}

/// Body of `method` for the context's layer.
pub fn method_body(cx: &StrategyContext<'_>, method: &MethodType) -> MethodBody {
    let strategy = strategy_for(cx.layer.kind());
    match method {
        MethodType::Create => strategy.create(cx),
        MethodType::Read => strategy.read(cx),
        MethodType::Update => strategy.update(cx),
        MethodType::Delete => strategy.delete(cx),
        MethodType::Custom(_) => strategy.custom(cx, method),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{chain, user};
    use super::*;

    #[test]
    fn dispatch_is_keyed_by_layer_kind() {
        let chain = chain(&[("api", "http"), ("svc", "nonsense"), ("store", "postgres")]);
        let model = user();
        let layers: Vec<_> = chain.iter().collect();

        let http = method_body(&StrategyContext::new(&chain, layers[0], &model), &MethodType::Create);
        assert!(http.code.contains("ShouldBindJSON"));

        // unknown tag resolved to the generic passthrough
        let generic =
            method_body(&StrategyContext::new(&chain, layers[1], &model), &MethodType::Create);
        assert_eq!(generic.code, "return u.store.CreateUser(userModel)");

        let pg = method_body(&StrategyContext::new(&chain, layers[2], &model), &MethodType::Create);
        assert!(pg.code.contains("u.db.Create(userModel)"));
    }

    #[test]
    fn transport_successor_is_not_callable() {
        let chain = chain(&[("svc", ""), ("api", "http")]);
        let model = user();
        let svc = chain.outermost().unwrap();
        let cx = StrategyContext::new(&chain, svc, &model);

        assert!(cx.successor.is_some());
        assert!(cx.callable_successor().is_none());
        assert!(method_body(&cx, &MethodType::Read).is_placeholder());
    }

    #[test]
    fn placeholder_names_the_unit() {
        let body = MethodBody::placeholder("service", "ReadUser");
        assert_eq!(body.code, "panic(\"implement me: service.ReadUser\")");
        assert!(body.is_placeholder());
        assert!(!body.delegates);
    }
}
