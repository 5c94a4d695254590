//! AND combinator behavior

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use nntp_mail::search::{BodyTerm, HeaderTerm, SubjectTerm};
use nntp_mail::{AndTerm, SearchTerm};

use crate::{init_tracing, Article, Unreadable};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn article() -> Article {
    Article::new()
        .with_header("Subject", "Re: borrow checker question")
        .with_header("Newsgroups", "comp.lang.rust")
        .with_body("Try cloning the Arc.")
}

#[test]
fn test_matches_when_all_children_match() {
    init_tracing();
    let term = AndTerm::from_terms([
        SearchTerm::from(SubjectTerm::new("borrow")),
        SearchTerm::from(HeaderTerm::new("Newsgroups", "rust")),
        SearchTerm::from(BodyTerm::new("arc")),
    ]);
    assert!(term.matches(&article()).unwrap());
}

#[test]
fn test_false_child_skips_side_effecting_child() {
    init_tracing();
    let message = article();
    let term = AndTerm::from_terms(vec![
        SearchTerm::from(HeaderTerm::new("Newsgroups", "comp.lang.perl")),
        SearchTerm::from(BodyTerm::new("arc")),
    ]);

    assert!(!term.matches(&message).unwrap());
    assert_eq!(*message.reads.borrow(), ["newsgroups"]);
}

#[test]
fn test_children_evaluated_in_construction_order() {
    let message = article();
    let term = AndTerm::new(BodyTerm::new("arc"), SubjectTerm::new("borrow"));

    assert!(term.matches(&message).unwrap());
    assert_eq!(*message.reads.borrow(), ["body", "subject"]);
}

#[test]
fn test_error_propagates_and_stops() {
    let message = article().with_unreadable("Subject");
    let term = AndTerm::new(SubjectTerm::new("borrow"), BodyTerm::new("arc"));

    assert_eq!(
        term.matches(&message),
        Err(Unreadable("subject".to_string()))
    );
    assert_eq!(*message.reads.borrow(), ["subject"]);
}

#[test]
fn test_empty_conjunction_is_true() {
    let term = AndTerm::from_terms(Vec::new());
    assert!(term.matches(&Article::new()).unwrap());
    assert!(term.matches(&article()).unwrap());
}

#[test]
fn test_equality_order_sensitive_hash_order_insensitive() {
    let p1 = SearchTerm::from(SubjectTerm::new("borrow"));
    let p2 = SearchTerm::from(BodyTerm::new("arc"));
    assert_ne!(p1, p2);

    let forward = AndTerm::from_terms([p1.clone(), p2.clone()]);
    let backward = AndTerm::from_terms([p2.clone(), p1.clone()]);

    assert_ne!(forward, backward);
    assert_eq!(hash_of(&forward), hash_of(&backward));
    assert_eq!(forward, AndTerm::new(p1, p2));
}

#[test]
fn test_equal_terms_hash_equal() {
    let make = || {
        SearchTerm::from(AndTerm::new(
            SubjectTerm::new("borrow"),
            SearchTerm::from(HeaderTerm::new("Newsgroups", "rust")).or(BodyTerm::new("arc")),
        ))
    };
    assert_eq!(make(), make());
    assert_eq!(hash_of(&make()), hash_of(&make()));
}

#[test]
fn test_caller_mutation_does_not_reach_term() {
    let mut children = vec![
        SearchTerm::from(SubjectTerm::new("borrow")),
        SearchTerm::from(BodyTerm::new("arc")),
    ];
    let term = AndTerm::from_terms(children.iter().cloned());
    let before = term.terms();

    children[1] = SearchTerm::from(BodyTerm::new("nothing"));
    children.push(SearchTerm::from(SubjectTerm::new("extra")));

    assert_eq!(term.terms(), before);
    assert_eq!(term.len(), 2);
}

#[test]
fn test_accessor_mutation_does_not_reach_term() {
    let term = AndTerm::new(SubjectTerm::new("borrow"), BodyTerm::new("arc"));
    let mut copy = term.terms();
    copy.reverse();
    copy.pop();

    assert_eq!(term.len(), 2);
    assert_eq!(term.as_slice()[0], SearchTerm::from(SubjectTerm::new("borrow")));
}
