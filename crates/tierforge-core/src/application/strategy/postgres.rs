//! gorm storage bodies. Terminal: never calls a successor.

use super::{BodyStrategy, MethodBody, StrategyContext};
use crate::domain::{GoImport, MethodType};

pub struct PostgresStrategy;

impl PostgresStrategy {
    /// `<recv>.db`
    fn db(cx: &StrategyContext<'_>) -> String {
        format!("{}.db", cx.receiver())
    }

    /// Persist with `op` and hand the pointer back with the store error.
    fn write_back(cx: &StrategyContext<'_>, op: &str) -> MethodBody {
        let arg = cx.model_param();
        MethodBody::new(format!(
            "result := {db}.{op}({arg})\nreturn {arg}, result.Error",
            db = Self::db(cx),
        ))
    }
}

impl BodyStrategy for PostgresStrategy {
    fn create(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::write_back(cx, "Create")
    }

    /// The model argument is used as an equality filter over its non-zero
    /// fields. An all-zero model filters on nothing and returns every row.
    fn read(&self, cx: &StrategyContext<'_>) -> MethodBody {
        let arg = cx.model_param();
        let list = format!("{arg}List");
        MethodBody::new(format!(
            "{list} := make([]{model}, 0)\n\
             result := {db}.Where({arg}).Find(&{list})\n\
             return {list}, result.Error",
            model = cx.model.qualified(),
            db = Self::db(cx),
        ))
        .import(GoImport::models())
    }

    fn update(&self, cx: &StrategyContext<'_>) -> MethodBody {
        Self::write_back(cx, "Save")
    }

    fn delete(&self, cx: &StrategyContext<'_>) -> MethodBody {
        MethodBody::new(format!(
            "result := {db}.Delete({arg})\nreturn result.Error",
            db = Self::db(cx),
            arg = cx.model_param(),
        ))
    }

    fn custom(&self, cx: &StrategyContext<'_>, method: &MethodType) -> MethodBody {
        cx.placeholder(method)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{chain, user};
    use super::super::method_body;
    use super::*;

    fn bodies(pairs: &[(&str, &str)]) -> Vec<(MethodType, MethodBody)> {
        let chain = chain(pairs);
        let model = user();
        let layer = chain.iter().find(|l| l.name() == "repository").unwrap();
        let cx = StrategyContext::new(&chain, layer, &model);
        model
            .methods
            .iter()
            .map(|m| (m.clone(), method_body(&cx, m)))
            .collect()
    }

    #[test]
    fn create_inserts_and_returns_pointer() {
        let all = bodies(&[("repository", "postgres")]);
        let (_, create) = &all[0];
        assert_eq!(
            create.code,
            "result := u.db.Create(userModel)\nreturn userModel, result.Error"
        );
    }

    #[test]
    fn never_references_a_successor() {
        // a postgres layer that is not innermost still stays terminal
        let all = bodies(&[("repository", "postgres"), ("cache", "")]);
        for (_, body) in &all {
            assert!(!body.code.contains("cache"));
            assert!(!body.delegates);
        }
    }

    #[test]
    fn read_always_builds_a_collection() {
        let all = bodies(&[("repository", "postgres")]);
        let (_, read) = &all[1];
        assert_eq!(
            read.code,
            "userModelList := make([]models.User, 0)\n\
             result := u.db.Where(userModel).Find(&userModelList)\n\
             return userModelList, result.Error"
        );
        assert!(read.imports.contains(&GoImport::models()));
    }

    #[test]
    fn read_filters_on_the_model_even_when_all_fields_are_zero() {
        // The body passes the argument straight to Where; an empty User{}
        // therefore produces an unfiltered query. Kept as-is on purpose.
        let all = bodies(&[("repository", "postgres")]);
        let (_, read) = &all[1];
        assert!(read.code.contains(".Where(userModel)"));
        assert!(!read.code.contains("if "));
    }

    #[test]
    fn update_saves_and_delete_returns_error_only() {
        let all = bodies(&[("repository", "postgres")]);
        assert_eq!(
            all[2].1.code,
            "result := u.db.Save(userModel)\nreturn userModel, result.Error"
        );
        assert_eq!(
            all[3].1.code,
            "result := u.db.Delete(userModel)\nreturn result.Error"
        );
    }

    #[test]
    fn custom_is_a_placeholder() {
        let all = bodies(&[("repository", "postgres")]);
        let (method, custom) = &all[4];
        assert_eq!(method, &MethodType::parse("export"));
        assert_eq!(
            custom.code,
            "panic(\"implement me: repository.ExportUser\")"
        );
    }
}
