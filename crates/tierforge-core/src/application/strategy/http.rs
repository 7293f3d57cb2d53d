//! gin transport bodies: bind JSON → delegate → respond.

use super::{BodyStrategy, MethodBody, StrategyContext};
use crate::domain::{GoImport, MethodType, ReturnShape};

/// HTTP status written when the request body does not decode.
pub const STATUS_UNPROCESSABLE: u16 = 422;
/// HTTP status written when the successor returns an error.
pub const STATUS_SERVER_ERROR: u16 = 500;
pub const STATUS_OK: u16 = 200;

pub struct HttpStrategy;

impl HttpStrategy {
    /// Every operation shares one shape; only the successor method and
    /// whether it yields a value differ.
    fn exchange(cx: &StrategyContext<'_>, method: &MethodType) -> MethodBody {
        let Some(next) = cx.callable_successor() else {
            return cx.placeholder(method);
        };

        let call = cx.successor_call(next, method, "&req");
        let (invoke, success) = match method.return_shape() {
            ReturnShape::ErrorOnly => (
                format!("err = {call}"),
                format!("ctx.JSON({STATUS_OK}, gin.H{{\"data\": \"deleted\"}})"),
            ),
            ReturnShape::Collection | ReturnShape::Pointer => (
                format!("res, err := {call}"),
                format!("ctx.JSON({STATUS_OK}, gin.H{{\"data\": res}})"),
            ),
        };

        let code = format!(
            "var req {model}\n\
             err := ctx.ShouldBindJSON(&req)\n\
             if err != nil {{\n\
             \tctx.JSON({STATUS_UNPROCESSABLE}, gin.H{{\"error\": err.Error()}})\n\
             \treturn\n\
             }}\n\
             {invoke}\n\
             if err != nil {{\n\
             \tctx.JSON({STATUS_SERVER_ERROR}, gin.H{{\"error\": err.Error()}})\n\
             \treturn\n\
             }}\n\
             {success}",
            model = cx.model.qualified(),
        );

        MethodBody::new(code)
            .import(GoImport::GIN)
            .import(GoImport::models())
            .delegating()
    }
}

impl BodyStrategy for HttpStrategy {
    fn create(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::exchange(cx, &MethodType::Create)
    }

    fn read(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::exchange(cx, &MethodType::Read)
    }

    fn update(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::exchange(cx, &MethodType::Update)
    }

    fn delete(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::exchange(cx, &MethodType::Delete)
    }

    fn custom(&self, cx: &StrategyContext<'_>, method: &MethodType) -> MethodBody {
        Self::exchange(cx, method)
    }
}
