use sieve_query::{
    CompileError, CompileOptions, Compiler, JoinMode, Q, RegexpQuery, Target, compile_structural_pattern,
    compile_with_options,
};
use tests::{compile, compile_with, hir, init_tracing, leaf};

#[test]
fn literal_pattern() {
    init_tracing();
    let q = compile("foo");
    let regexp = leaf(&q);
    assert_eq!(regexp.regex, "(foo)");
    assert_eq!(regexp.hir, hir("(foo)"));
    assert!(regexp.case_sensitive);
    assert_eq!(regexp.target, Target::Content);
}

#[test]
fn hole_between_words() {
    let q = compile("foo :[args] bar");
    assert_eq!(leaf(&q).regex, r"(foo[\s]+)(.|\s)*?([\s]+bar)");
    assert_eq!(leaf(&q).hir, hir(r"(foo[\s]+)(.|\s)*?([\s]+bar)"));
}

#[test]
fn only_holes_matches_everything() {
    assert_eq!(compile(":[a]:[b]"), Q::Const(true));

    // The assembled regex still keeps a connector for each hole.
    let assembly = Compiler::default().assemble(":[a]:[b]");
    assert_eq!(assembly.as_str(), r"()(.|\s)*?()(.|\s)*?()");
    assert_eq!(assembly.connectors(), 2);
}

#[test]
fn empty_pattern_matches_everything() {
    assert_eq!(compile_structural_pattern("").unwrap(), Q::Const(true));
    assert_eq!(compile(":[[x]]"), Q::Const(true));
}

#[test]
fn metacharacters_are_escaped() {
    assert_eq!(leaf(&compile("a.b*c")).regex, r"(a\.b\*c)");
    assert_eq!(
        leaf(&compile("fmt.Printf(:[fmt], :[args])")).regex,
        r"(fmt\.Printf\()(.|\s)*?(,[\s]+)(.|\s)*?(\))"
    );
}

#[test]
fn whitespace_with_newline_collapses() {
    assert_eq!(leaf(&compile("x\n   y")).regex, r"(x[\s]+y)");
}

#[test]
fn backslash_before_space() {
    assert_eq!(leaf(&compile("a\\ :[x]")).regex, r"(a\\[\s]+)(.|\s)*?()");
}

#[test]
fn query_shape() {
    let q = compile("foo(:[x])");
    let Q::Or(conjunctions) = &q else {
        panic!("expected a disjunction, got {q}");
    };
    let [Q::And(leaves)] = conjunctions.as_slice() else {
        panic!("expected one conjunction, got {q}");
    };
    let [Q::Regexp(_)] = leaves.as_slice() else {
        panic!("expected one regex leaf, got {q}");
    };

    assert_eq!(
        q.to_string(),
        r#"(or (and regex:"(foo\\()(.|\\s)*?(\\))" case:yes))"#
    );
    assert!(matches!(q.simplify(), Q::Regexp(_)));
}

#[test]
fn ellipsis_option() {
    let options = CompileOptions {
        ellipsis_holes: true,
        ..Default::default()
    };
    assert_eq!(leaf(&compile_with("f(...)", options)).regex, r"(f\()(.|\s)*?(\))");
    assert_eq!(leaf(&compile("f(...)")).regex, r"(f\(\.\.\.\))");
}

#[test]
fn any_piece_option() {
    let options = CompileOptions {
        join: JoinMode::AnyPiece,
        ..Default::default()
    };
    let q = compile_with_options("foo :[x] bar", &options).unwrap();
    assert_eq!(leaf(&q).regex, r"((foo[\s]+))|(([\s]+bar))");
    assert_eq!(compile_with(":[x]", options), Q::Const(true));
}

#[test]
fn options_from_toml() {
    let options: CompileOptions =
        toml_edit::de::from_str("ellipsis-holes = true\njoin = \"any-piece\"\n").unwrap();
    assert_eq!(
        options,
        CompileOptions {
            ellipsis_holes: true,
            join: JoinMode::AnyPiece,
        }
    );

    let options: CompileOptions = toml_edit::de::from_str("").unwrap();
    assert_eq!(options, CompileOptions::default());

    assert!(toml_edit::de::from_str::<CompileOptions>("holes = 1").is_err());
}

#[test]
fn invalid_regex_is_reported() {
    let Err(err) = RegexpQuery::content("(unclosed") else {
        panic!("expected an error");
    };
    let CompileError::Syntax { ref regex, .. } = err;
    assert_eq!(regex, "(unclosed");
    assert!(err.to_string().contains("(unclosed"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn json_output() {
    let q = compile("a");
    let json = serde_json::to_value(&q).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "or",
            "value": [{
                "type": "and",
                "value": [{
                    "type": "regexp",
                    "value": {
                        "regex": "(a)",
                        "case_sensitive": true,
                        "target": "content",
                    },
                }],
            }],
        })
    );
    assert_eq!(
        serde_json::to_value(Q::Const(true)).unwrap(),
        serde_json::json!({ "type": "const", "value": true })
    );
}
