//! Parse a Newsgroups header, fold it back and filter a few posts
//!
//! Run with: RUST_LOG=trace cargo run --example newsgroups

use std::convert::Infallible;

use nntp_mail::search::{HeaderTerm, Message, SubjectTerm};
use nntp_mail::{NewsAddress, SearchTerm};

struct Post {
    newsgroups: String,
    subject: String,
}

impl Message for Post {
    type Error = Infallible;

    fn header(&self, name: &str) -> Result<Vec<String>, Infallible> {
        let value = match name.to_ascii_lowercase().as_str() {
            "newsgroups" => self.newsgroups.clone(),
            "subject" => self.subject.clone(),
            _ => return Ok(Vec::new()),
        };
        Ok(vec![value])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let groups = NewsAddress::parse(
        "alt.binaries.boneless, alt.binaries.multimedia, alt.binaries.teevee, \
         alt.binaries.movies.divx, alt.binaries.hdtv.x264",
    )?;
    if let Some(header) = NewsAddress::join(&groups) {
        println!("Newsgroups: {header}");
    }

    let posts = [
        Post {
            newsgroups: "comp.lang.rust".to_string(),
            subject: "Announcing nntp-mail".to_string(),
        },
        Post {
            newsgroups: "alt.test".to_string(),
            subject: "test, please ignore".to_string(),
        },
    ];

    let filter = SearchTerm::from(HeaderTerm::new("Newsgroups", "rust"))
        .and(!SearchTerm::from(SubjectTerm::new("ignore")));

    for post in &posts {
        let Ok(matched) = filter.matches(post);
        println!("{:<24} {:<8} {}", post.newsgroups, matched, post.subject);
    }

    Ok(())
}
