//! Passthrough bodies for layers without a technology.

use super::{BodyStrategy, MethodBody, StrategyContext};
use crate::domain::MethodType;

pub struct GenericStrategy;

impl GenericStrategy {
    fn forward(cx: &StrategyContext<'_>, method: &MethodType) -> MethodBody {
        match cx.callable_successor() {
            Some(next) => {
                let call = cx.successor_call(next, method, &cx.model_param());
                MethodBody::new(format!("return {call}")).delegating()
            }
            None => cx.placeholder(method),
        }
    }
}

impl BodyStrategy for GenericStrategy {
    fn create(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::forward(cx, &MethodType::Create)
    }

    fn read(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::forward(cx, &MethodType::Read)
    }

    fn update(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::forward(cx, &MethodType::Update)
    }

    fn delete(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::forward(cx, &MethodType::Delete)
    }

    fn custom(&self, cx: &StrategyContext<'_>, method: &MethodType) -> MethodBody {
        Self::forward(cx, method)
    }
}
