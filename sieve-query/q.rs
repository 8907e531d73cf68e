use regex_syntax::hir::Hir;

use crate::{CompileError, assemble::parse_regex};

/// A node in the boolean query algebra consumed by the index engine.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Q {
    Const(bool),
    And(Vec<Q>),
    Or(Vec<Q>),
    Not(Box<Q>),
    Regexp(RegexpQuery),
    /// Documents whose repository name contains the string.
    Repo(String),
}

/// What a [`RegexpQuery`] is matched against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Content,
    FileName,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RegexpQuery {
    /// The regex source, as parsed into `hir`.
    pub regex: String,
    #[serde(skip)]
    pub hir: Hir,
    pub case_sensitive: bool,
    pub target: Target,
}

impl RegexpQuery {
    /// Case-sensitive regex over file contents.
    pub fn content(regex: impl Into<String>) -> Result<Self, CompileError> {
        Self::new(regex.into(), Target::Content)
    }

    /// Case-sensitive regex over file paths, for callers narrowing a
    /// compiled pattern to certain files.
    pub fn file_name(regex: impl Into<String>) -> Result<Self, CompileError> {
        Self::new(regex.into(), Target::FileName)
    }

    fn new(regex: String, target: Target) -> Result<Self, CompileError> {
        let hir = parse_regex(&regex)?;
        Ok(Self {
            regex,
            hir,
            case_sensitive: true,
            target,
        })
    }
}

impl Q {
    #[inline]
    #[must_use]
    pub fn and(children: impl IntoIterator<Item = Q>) -> Self {
        Q::And(children.into_iter().collect())
    }

    #[inline]
    #[must_use]
    pub fn or(children: impl IntoIterator<Item = Q>) -> Self {
        Q::Or(children.into_iter().collect())
    }

    #[inline]
    #[must_use]
    pub fn not(inner: Q) -> Self {
        Q::Not(Box::new(inner))
    }

    #[inline]
    #[must_use]
    pub fn repo(name: impl Into<String>) -> Self {
        Q::Repo(name.into())
    }

    #[inline]
    #[must_use]
    pub fn is_const(&self, value: bool) -> bool {
        matches!(self, Q::Const(v) if *v == value)
    }

    /// All regex leaves, depth first.
    #[must_use]
    pub fn regexps(&self) -> Vec<&RegexpQuery> {
        fn visit<'a>(q: &'a Q, out: &mut Vec<&'a RegexpQuery>) {
            match q {
                Q::And(children) | Q::Or(children) => {
                    for child in children {
                        visit(child, out);
                    }
                }
                Q::Not(inner) => visit(inner, out),
                Q::Regexp(regexp) => out.push(regexp),
                Q::Const(_) | Q::Repo(_) => {}
            }
        }

        let mut out = Vec::new();
        visit(self, &mut out);
        out
    }

    /// Flatten nested conjunctions and disjunctions and fold constants.
    ///
    /// The result is equivalent to `self` for every document.
    #[must_use]
    pub fn simplify(self) -> Q {
        match self {
            Q::And(children) => {
                let mut flat = Vec::with_capacity(children.len());
                for child in children {
                    match child.simplify() {
                        Q::Const(true) => {}
                        Q::Const(false) => return Q::Const(false),
                        Q::And(nested) => flat.extend(nested),
                        other => flat.push(other),
                    }
                }
                collapse(flat, Q::And, true)
            }
            Q::Or(children) => {
                let mut flat = Vec::with_capacity(children.len());
                for child in children {
                    match child.simplify() {
                        Q::Const(false) => {}
                        Q::Const(true) => return Q::Const(true),
                        Q::Or(nested) => flat.extend(nested),
                        other => flat.push(other),
                    }
                }
                collapse(flat, Q::Or, false)
            }
            Q::Not(inner) => match inner.simplify() {
                Q::Const(value) => Q::Const(!value),
                Q::Not(inner) => *inner,
                other => Q::not(other),
            },
            leaf => leaf,
        }
    }
}

/// `identity` is the value of an empty conjunction/disjunction.
fn collapse(children: Vec<Q>, wrap: fn(Vec<Q>) -> Q, identity: bool) -> Q {
    match children.len() {
        0 => Q::Const(identity),
        1 => children
            .into_iter()
            .next()
            .unwrap_or(Q::Const(identity)),
        _ => wrap(children),
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Q::Const(value) => write!(f, "{value}"),
            Q::And(children) => write_list(f, "and", children),
            Q::Or(children) => write_list(f, "or", children),
            Q::Not(inner) => write!(f, "(not {inner})"),
            Q::Regexp(regexp) => write!(f, "{regexp}"),
            Q::Repo(name) => write!(f, "repo:{name:?}"),
        }
    }
}

fn write_list(f: &mut std::fmt::Formatter<'_>, op: &str, children: &[Q]) -> std::fmt::Result {
    write!(f, "({op}")?;
    for child in children {
        write!(f, " {child}")?;
    }
    f.write_str(")")
}

impl std::fmt::Display for RegexpQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.target {
            Target::Content => "regex",
            Target::FileName => "file_regex",
        };
        let case = if self.case_sensitive { "yes" } else { "no" };
        write!(f, "{prefix}:{:?} case:{case}", self.regex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(regex: &str) -> Q {
        Q::Regexp(RegexpQuery::content(regex).unwrap())
    }

    #[test]
    fn simplify_flattens() {
        let q = Q::or([Q::and([leaf("a"), Q::and([leaf("b"), Q::Const(true)])])]);
        assert_eq!(q.simplify(), Q::and([leaf("a"), leaf("b")]));
    }

    #[test]
    fn simplify_folds_constants() {
        assert_eq!(Q::and([]).simplify(), Q::Const(true));
        assert_eq!(Q::or([]).simplify(), Q::Const(false));
        assert_eq!(
            Q::and([leaf("a"), Q::Const(false)]).simplify(),
            Q::Const(false)
        );
        assert_eq!(Q::or([leaf("a"), Q::Const(true)]).simplify(), Q::Const(true));
        assert_eq!(Q::not(Q::Const(true)).simplify(), Q::Const(false));
        assert_eq!(Q::not(Q::not(leaf("a"))).simplify(), leaf("a"));
        assert_eq!(
            Q::or([Q::Const(false), Q::repo("x")]).simplify(),
            Q::repo("x")
        );
    }

    #[test]
    fn display() {
        let q = Q::or([Q::and([leaf("(foo)"), Q::not(Q::repo("r"))])]);
        assert_eq!(
            q.to_string(),
            r#"(or (and regex:"(foo)" case:yes (not repo:"r")))"#
        );
        let q = Q::Regexp(RegexpQuery::file_name(r"\.rs$").unwrap());
        assert_eq!(q.to_string(), r#"file_regex:"\\.rs$" case:yes"#);
    }

    #[test]
    fn regexps_in_order() {
        let q = Q::and([leaf("a"), Q::not(Q::or([leaf("b"), Q::repo("r")]))]);
        let regexps: Vec<&str> = q.regexps().iter().map(|r| r.regex.as_str()).collect();
        assert_eq!(regexps, ["a", "b"]);
    }
}
