#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Fixture runner
///
/// Runs the JSON cases through `loose_url` and collects every mismatching
/// field instead of stopping at the first one.
use super::fixture_loader::{
    EditSpec, FixtureFailure, FixtureResult, ModifyCase, ParseCase, load_modify_cases,
    load_parse_cases,
};
use loose_url::{ParsedUrl, Query, QueryEdit, QueryValue, modify_url_query, parse_url};
use serde_json::{Map, Value};

const PARSE_CASES: &str = include_str!("parse_cases.json");
const MODIFY_CASES: &str = include_str!("modify_cases.json");

fn value_to_json(value: &QueryValue) -> Value {
    match value {
        QueryValue::Null => Value::Null,
        QueryValue::String(value) => Value::String(value.clone()),
        QueryValue::List(items) => Value::Array(
            items
                .iter()
                .map(|item| item.clone().map_or(Value::Null, Value::String))
                .collect(),
        ),
    }
}

fn query_to_json(query: &Query) -> Map<String, Value> {
    query
        .iter()
        .map(|(key, value)| (key.to_string(), value_to_json(value)))
        .collect()
}

fn to_edit(edit: &EditSpec) -> QueryEdit {
    match edit {
        EditSpec::Action(action) if action == "clear" => QueryEdit::Clear,
        EditSpec::Action(_) => QueryEdit::Keep,
        EditSpec::Merge(entries) => {
            let mut patch = QueryEdit::merge();
            for (key, value) in entries {
                patch = match value {
                    Value::Null => patch.remove(key.as_str()),
                    Value::String(value) => patch.set(key.as_str(), value.as_str()),
                    Value::Array(items) => {
                        patch.set_list(key.as_str(), items.iter().filter_map(Value::as_str))
                    }
                    other => patch.set(key.as_str(), other.to_string()),
                };
            }
            patch.into()
        }
    }
}

struct Checker<'a> {
    case_num: usize,
    input: &'a str,
    result: &'a mut FixtureResult,
    passed: bool,
}

impl Checker<'_> {
    fn field(&mut self, field: &str, expected: Option<&str>, actual: &str) {
        let Some(expected) = expected else {
            return;
        };
        if expected != actual {
            self.fail(field, expected.to_string(), actual.to_string());
        }
    }

    fn query(&mut self, field: &str, expected: Option<&Map<String, Value>>, actual: &Query) {
        let Some(expected) = expected else {
            return;
        };
        let actual = query_to_json(actual);
        if *expected != actual {
            self.fail(
                field,
                Value::Object(expected.clone()).to_string(),
                Value::Object(actual).to_string(),
            );
        }
    }

    fn fail(&mut self, field: &str, expected: String, actual: String) {
        self.result.failures.push(FixtureFailure {
            case_num: self.case_num,
            input: self.input.to_string(),
            field: field.to_string(),
            expected,
            actual,
        });
        self.passed = false;
    }
}

pub fn run_parse_cases(cases: &[ParseCase]) -> FixtureResult {
    let mut result = FixtureResult::new();

    for (case_num, case) in cases.iter().enumerate() {
        let ParseCase::UrlCase {
            input,
            href,
            protocol,
            username,
            password,
            origin,
            host,
            hostname,
            port,
            pathname,
            search,
            query,
            hash,
            hash_pathname,
            hash_search,
            hash_query,
        } = case
        else {
            continue;
        };

        let url: ParsedUrl = parse_url(input);
        let mut checker = Checker {
            case_num,
            input,
            result: &mut result,
            passed: true,
        };

        checker.field("href", href.as_deref(), url.href());
        checker.field("protocol", protocol.as_deref(), url.protocol());
        checker.field("username", username.as_deref(), url.username());
        checker.field("password", password.as_deref(), url.password());
        checker.field("origin", origin.as_deref(), url.origin());
        checker.field("host", host.as_deref(), url.host());
        checker.field("hostname", hostname.as_deref(), url.hostname());
        checker.field("port", port.as_deref(), url.port());
        checker.field("pathname", pathname.as_deref(), url.pathname());
        checker.field("search", search.as_deref(), url.search());
        checker.query("query", query.as_ref(), url.query());
        checker.field("hash", hash.as_deref(), url.hash());
        checker.field("hashPathname", hash_pathname.as_deref(), url.hash_pathname());
        checker.field("hashSearch", hash_search.as_deref(), url.hash_search());
        checker.query("hashQuery", hash_query.as_ref(), url.hash_query());

        if checker.passed {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

pub fn run_modify_cases(cases: &[ModifyCase]) -> FixtureResult {
    let mut result = FixtureResult::new();

    for (case_num, case) in cases.iter().enumerate() {
        let ModifyCase::EditCase {
            input,
            query,
            hash_query,
            expected,
        } = case
        else {
            continue;
        };

        let actual = modify_url_query(input, to_edit(query), to_edit(hash_query));
        if actual == *expected {
            result.passed += 1;
        } else {
            result.failures.push(FixtureFailure {
                case_num,
                input: input.clone(),
                field: "href".to_string(),
                expected: expected.clone(),
                actual,
            });
            result.failed += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixtures() {
        let cases = load_parse_cases(PARSE_CASES).expect("parse_cases.json should load");
        let result = run_parse_cases(&cases);

        println!("\n{}", result.summary());
        result.print_failures();

        assert!(result.total() > 0, "no parse cases were run");
        assert_eq!(result.failed, 0, "{} parse case(s) failed", result.failed);
    }

    #[test]
    fn test_modify_fixtures() {
        let cases = load_modify_cases(MODIFY_CASES).expect("modify_cases.json should load");
        let result = run_modify_cases(&cases);

        println!("\n{}", result.summary());
        result.print_failures();

        assert!(result.total() > 0, "no modify cases were run");
        assert_eq!(result.failed, 0, "{} modify case(s) failed", result.failed);
    }

    #[test]
    fn test_comments_are_skipped() {
        let cases = load_parse_cases(r#"["just a note", {"input": "/a", "pathname": "/a"}]"#)
            .expect("inline cases should load");
        let result = run_parse_cases(&cases);
        assert_eq!(result.total(), 1);
        assert_eq!(result.passed, 1);
    }

    #[test]
    fn test_edit_spec_defaults_to_keep() {
        let cases = load_modify_cases(r#"[{"input": "/a?b=1#c", "expected": "/a?b=1#c"}]"#)
            .expect("inline cases should load");
        let ModifyCase::EditCase { query, hash_query, .. } = &cases[0] else {
            panic!("expected an edit case");
        };
        assert_eq!(to_edit(query), QueryEdit::Keep);
        assert_eq!(to_edit(hash_query), QueryEdit::Keep);
    }
}
