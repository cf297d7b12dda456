//! Manifest parsing properties

use std::io::Cursor;

use proptest::prelude::*;
use questc::infrastructure::ManifestReader;

fn entry_name() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_/]{0,20}\\.quest"
}

/// A manifest line: an entry, a comment or a blank, with optional padding and CRLF
#[derive(Debug, Clone)]
enum Line {
    Entry(String),
    Comment(String),
    Blank,
}

fn line() -> impl Strategy<Value = (Line, String, bool)> {
    let kind = prop_oneof![
        4 => entry_name().prop_map(Line::Entry),
        1 => "[ -~]{0,20}".prop_map(Line::Comment),
        1 => Just(Line::Blank),
    ];
    (kind, "[ \t]{0,3}", any::<bool>())
}

fn render(lines: &[(Line, String, bool)]) -> String {
    let mut out = String::new();
    for (line, pad, crlf) in lines {
        match line {
            Line::Entry(name) => out.push_str(&format!("{pad}{name}{pad}")),
            Line::Comment(text) => out.push_str(&format!("{pad}#{text}")),
            Line::Blank => out.push_str(pad),
        }
        out.push_str(if *crlf { "\r\n" } else { "\n" });
    }
    out
}

proptest! {
    #[test]
    fn entries_keep_order_and_skip_noise(lines in prop::collection::vec(line(), 0..40)) {
        let text = render(&lines);
        let parsed: Vec<_> = ManifestReader::new(Cursor::new(text.into_bytes()))
            .collect::<Result<_, _>>()
            .unwrap();

        let expected: Vec<(String, usize)> = lines
            .iter()
            .enumerate()
            .filter_map(|(i, (line, _, _))| match line {
                Line::Entry(name) => Some((name.clone(), i + 1)),
                _ => None,
            })
            .collect();

        prop_assert_eq!(parsed.len(), expected.len());
        for (entry, (name, line_no)) in parsed.iter().zip(&expected) {
            prop_assert_eq!(entry.relative_path().to_str().unwrap(), name.as_str());
            prop_assert_eq!(entry.line(), *line_no);
        }
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        for entry in ManifestReader::new(Cursor::new(bytes)) {
            let entry = entry.unwrap();
            let path = entry.to_string();
            prop_assert!(!path.is_empty());
            prop_assert!(!path.starts_with('#'));
            prop_assert_eq!(path.trim(), path.as_str());
        }
    }
}
