//! telebot bodies: parse command payload → delegate → reply.

use super::{BodyStrategy, MethodBody, StrategyContext};
use crate::domain::{GoImport, MethodType, ReturnShape, naming::quoted};

/// Reply sent after a successful delete.
pub const DELETE_ACK: &str = "Success";

pub struct TelebotStrategy;

impl TelebotStrategy {
    fn converse(cx: &StrategyContext<'_>, method: &MethodType) -> MethodBody {
        let Some(next) = cx.callable_successor() else {
            return cx.placeholder(method);
        };

        let recv = cx.receiver();
        let send = |what: &str| format!("{recv}.bot.Send(m.Sender, {what})");
        let fail = format!("if err != nil {{\n\t{}\n\treturn\n}}", send("err.Error()"));
        let usage = quoted(&format!(
            "Unable to {} {}",
            method.tag().to_lowercase(),
            cx.model.name.to_lowercase()
        ));

        let call = cx.successor_call(next, method, "&req");
        let reply = match method.return_shape() {
            ReturnShape::ErrorOnly => format!(
                "err = {call}\n{fail}\n{}",
                send(&quoted(DELETE_ACK))
            ),
            ReturnShape::Collection | ReturnShape::Pointer => format!(
                "res, err := {call}\n{fail}\npayload, err := json.Marshal(res)\n{fail}\n{}",
                send("string(payload)")
            ),
        };

        let code = format!(
            "args := strings.Fields(m.Text)\n\
             if len(args) < 2 {{\n\
             \t{no_args}\n\
             \treturn\n\
             }}\n\
             var req {model}\n\
             err := json.Unmarshal([]byte(strings.Join(args[1:], \" \")), &req)\n\
             {fail}\n\
             {reply}",
            no_args = send(&usage),
            model = cx.model.qualified(),
        );

        MethodBody::new(code)
            .import(GoImport::JSON)
            .import(GoImport::STRINGS)
            .import(GoImport::models())
            .delegating()
    }
}

impl BodyStrategy for TelebotStrategy {
    fn create(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::converse(cx, &MethodType::Create)
    }

    fn read(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::converse(cx, &MethodType::Read)
    }

    fn update(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::converse(cx, &MethodType::Update)
    }

    fn delete(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::converse(cx, &MethodType::Delete)
    }

    fn custom(&self, cx: &StrategyContext<'_>, method: &MethodType) -> MethodBody {
        Self::converse(cx, method)
    }
}
