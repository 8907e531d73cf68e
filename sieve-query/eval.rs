use crate::{MatchError, Q, RegexpQuery, Target};

/// A file as seen by the evaluator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Document<'a> {
    pub repo: &'a str,
    pub path: &'a str,
    pub content: &'a str,
}

impl<'a> Document<'a> {
    #[inline]
    #[must_use]
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            ..Default::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_path(self, path: &'a str) -> Self {
        Self { path, ..self }
    }

    #[inline]
    #[must_use]
    pub fn with_repo(self, repo: &'a str) -> Self {
        Self { repo, ..self }
    }
}

/// Evaluates a query tree against documents, with every regex leaf compiled
/// up front.
#[derive(Clone, Debug)]
pub struct Matcher {
    root: Node,
}

#[derive(Clone, Debug)]
enum Node {
    Const(bool),
    And(Vec<Node>),
    Or(Vec<Node>),
    Not(Box<Node>),
    Regex(regex::Regex, Target),
    Repo(String),
}

impl Matcher {
    pub fn new(q: &Q) -> Result<Self, MatchError> {
        Ok(Self {
            root: Node::build(q)?,
        })
    }

    #[must_use]
    pub fn is_match(&self, document: &Document) -> bool {
        self.root.is_match(document)
    }
}

impl Node {
    fn build(q: &Q) -> Result<Self, MatchError> {
        Ok(match q {
            Q::Const(value) => Node::Const(*value),
            Q::And(children) => Node::And(children.iter().map(Node::build).collect::<Result<_, _>>()?),
            Q::Or(children) => Node::Or(children.iter().map(Node::build).collect::<Result<_, _>>()?),
            Q::Not(inner) => Node::Not(Box::new(Node::build(inner)?)),
            Q::Regexp(regexp) => Node::Regex(build_regex(regexp)?, regexp.target),
            Q::Repo(name) => Node::Repo(name.clone()),
        })
    }

    fn is_match(&self, document: &Document) -> bool {
        match self {
            Node::Const(value) => *value,
            Node::And(children) => children.iter().all(|child| child.is_match(document)),
            Node::Or(children) => children.iter().any(|child| child.is_match(document)),
            Node::Not(inner) => !inner.is_match(document),
            Node::Regex(regex, Target::Content) => regex.is_match(document.content),
            Node::Regex(regex, Target::FileName) => regex.is_match(document.path),
            Node::Repo(name) => document.repo.contains(name.as_str()),
        }
    }
}

/// Build with the same flags the compiler parsed the regex with.
fn build_regex(regexp: &RegexpQuery) -> Result<regex::Regex, MatchError> {
    regex::RegexBuilder::new(&regexp.regex)
        .multi_line(true)
        .unicode(true)
        .case_insensitive(!regexp.case_sensitive)
        .build()
        .map_err(|error| MatchError::Regex {
            regex: regexp.regex.clone(),
            error,
        })
}
