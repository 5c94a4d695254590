//! Nested term trees

use chrono::{TimeZone, Utc};
use nntp_mail::search::{Comparison, HeaderTerm, SentDateTerm, SubjectTerm};
use nntp_mail::{OrTerm, SearchTerm};

use crate::{Article, Unreadable};

fn announcement() -> Article {
    Article::new()
        .with_header("Subject", "[ANN] new release")
        .with_header("Newsgroups", "comp.lang.rust")
        .with_header("Newsgroups", "comp.lang.rust.announce")
        .with_header("Date", "Tue, 21 Jan 2025 09:30:00 +0100")
}

#[test]
fn test_nested_tree() {
    let since = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let term = SearchTerm::from(HeaderTerm::new("Newsgroups", "announce"))
        .and(SentDateTerm::new(Comparison::Ge, since))
        .and(!SearchTerm::from(SubjectTerm::new("[spam]")));

    assert!(term.matches(&announcement()).unwrap());
}

#[test]
fn test_date_in_other_timezone() {
    // 09:30 +0100 is 08:30 UTC
    let at = Utc.with_ymd_and_hms(2025, 1, 21, 8, 30, 0).unwrap();
    let term = SearchTerm::from(SentDateTerm::new(Comparison::Eq, at));
    assert!(term.matches(&announcement()).unwrap());
}

#[test]
fn test_or_stops_at_first_match() {
    let message = announcement();
    let term = OrTerm::new(SubjectTerm::new("ann"), HeaderTerm::new("Newsgroups", "x"));

    assert!(term.matches(&message).unwrap());
    assert_eq!(*message.reads.borrow(), ["subject"]);
}

#[test]
fn test_error_from_nested_child() {
    let message = announcement().with_unreadable("Date");
    let since = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let term = SearchTerm::from(SubjectTerm::new("ann"))
        .and(SearchTerm::from(SentDateTerm::new(Comparison::Ge, since)).or(SubjectTerm::new("x")));

    assert_eq!(term.matches(&message), Err(Unreadable("date".to_string())));
}
