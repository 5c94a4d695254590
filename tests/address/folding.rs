//! Folded newsgroup list serialization

use nntp_mail::{
    join_addresses, join_addresses_with, Address, FoldConfig, InternetAddress, MailError,
    NewsAddress,
};

fn groups(count: usize) -> Vec<NewsAddress> {
    (0..count)
        .map(|i| NewsAddress::new(format!("alt.binaries.multimedia.group{i:02}")))
        .collect()
}

/// Column each physical line reaches before its separator comma
fn line_widths(header: &str) -> Vec<usize> {
    header
        .split("\r\n")
        .enumerate()
        .map(|(index, line)| {
            let line = line.strip_suffix(',').unwrap_or(line);
            match line.strip_prefix('\t') {
                Some(rest) if index > 0 => 8 + rest.len(),
                _ => line.len(),
            }
        })
        .collect()
}

#[test]
fn test_empty_list_is_none() {
    assert_eq!(NewsAddress::join(&[]), None);
    assert_eq!(join_addresses(&[]).unwrap(), None);
}

#[test]
fn test_short_list_not_folded() {
    let list = [NewsAddress::new("comp.lang.rust"), NewsAddress::new("comp.lang.c")];
    assert_eq!(
        NewsAddress::join(&list).as_deref(),
        Some("comp.lang.rust,comp.lang.c")
    );
}

#[test]
fn test_host_not_serialized() {
    let list = [NewsAddress::with_host("comp.lang.rust", "news.example.com")];
    assert_eq!(NewsAddress::join(&list).as_deref(), Some("comp.lang.rust"));
}

#[test]
fn test_long_list_folded_with_crlf_tab() {
    let header = NewsAddress::join(&groups(10)).unwrap();

    assert!(header.contains("\r\n\t"));
    assert!(!header.contains("\r\n "));
    for width in line_widths(&header) {
        assert!(width <= 76, "line reaches column {width}: {header:?}");
    }
}

#[test]
fn test_fold_follows_comma() {
    let header = NewsAddress::join(&groups(10)).unwrap();
    for (index, _) in header.match_indices("\r\n\t") {
        assert_eq!(&header[index - 1..index], ",");
    }
}

#[test]
fn test_round_trip_through_parse() {
    for count in [1, 2, 5, 30] {
        let list = groups(count);
        let header = NewsAddress::join(&list).unwrap();
        let parsed = NewsAddress::parse(&header).unwrap();

        let names: Vec<&str> = parsed.iter().map(NewsAddress::newsgroup).collect();
        let expected: Vec<&str> = list.iter().map(NewsAddress::newsgroup).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn test_oversized_single_element_kept_whole() {
    let long = "a".repeat(100);
    let list = [NewsAddress::new("misc.test"), NewsAddress::new(&long)];
    assert_eq!(
        NewsAddress::join(&list),
        Some(format!("misc.test,\r\n\t{long}"))
    );
}

#[test]
fn test_custom_fold_width() {
    let config = FoldConfig {
        max_line_length: 20,
        continuation_column: 8,
    };
    let list = [
        NewsAddress::new("comp.lang.rust"),
        NewsAddress::new("alt.test"),
        NewsAddress::new("misc"),
    ];
    // 14 + ',' = 15, + 8 = 23 > 20 -> fold; 8 + 8 = 16, ',' 17, + 4 = 21 > 20 -> fold.
    assert_eq!(
        NewsAddress::join_with(&list, &config).as_deref(),
        Some("comp.lang.rust,\r\n\talt.test,\r\n\tmisc")
    );

    let generic: Vec<Address> = list.iter().cloned().map(Address::from).collect();
    assert_eq!(
        join_addresses_with(&generic, &config).unwrap(),
        NewsAddress::join_with(&list, &config)
    );
}

#[test]
fn test_mixed_kinds_rejected() {
    let list = vec![
        Address::from(NewsAddress::new("comp.lang.rust")),
        Address::from(NewsAddress::new("alt.test")),
        Address::from(InternetAddress::new("user@example.com")),
    ];
    let err = join_addresses(&list).unwrap_err();
    assert!(matches!(
        err,
        MailError::AddressKindMismatch {
            expected: "news",
            found: "rfc822"
        }
    ));
}
