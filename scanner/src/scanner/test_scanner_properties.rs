// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Properties that hold across all the impl blocks of [`Scanner`], checked over a handful
//! of texts rather than one operation at a time.

use test_case::test_case;
use unicode_segmentation::UnicodeSegmentation;

use crate::{Scanner, ScannerError, assert_eq2, is_delimiter, seg_index};

const TEXTS: [&str; 7] = [
    "Hello, world!",
    "{a}, bb[ccc]? d.",
    "x",
    "  leading and trailing  ",
    "café 😀🙏🏽 naïve!",
    "a.b,c d",
    "a\r\nb",
];

#[test]
fn test_current_character_matches_grapheme_iteration() {
    for text in TEXTS {
        for (position, grapheme) in text.graphemes(true).enumerate() {
            let scanner = Scanner::new_at(text, position).unwrap();
            assert_eq2!(scanner.current_character(), grapheme);
        }
    }
}

#[test]
fn test_advance_then_precede_is_identity() {
    for text in TEXTS {
        let scanner = Scanner::new(text).unwrap();
        for position in 0..scanner.last_index().as_usize() {
            let mut it = Scanner::new_at(text, position).unwrap();
            it.advance().unwrap();
            it.precede().unwrap();
            assert_eq2!(it.position(), seg_index(position));
        }
    }
}

#[test]
fn test_boundaries_fail_and_stay_put() {
    for text in TEXTS {
        let mut scanner = Scanner::new(text).unwrap();
        assert_eq2!(scanner.precede(), Err(ScannerError::PastBounds));
        assert_eq2!(scanner.position(), seg_index(0));

        scanner.jump_to_end_of_string();
        let last = scanner.position();
        assert_eq2!(scanner.advance(), Err(ScannerError::PastBounds));
        assert_eq2!(scanner.position(), last);
    }
}

#[test]
fn test_delimiter_is_its_own_word() {
    for text in TEXTS {
        for (position, grapheme) in text.graphemes(true).enumerate() {
            if is_delimiter(grapheme) {
                let scanner = Scanner::new_at(text, position).unwrap();
                assert_eq2!(scanner.current_word(), Ok(grapheme));
            }
        }
    }
}

#[test]
fn test_current_word_never_contains_a_delimiter_unless_it_is_one() {
    for text in TEXTS {
        for position in 0..text.graphemes(true).count() {
            let scanner = Scanner::new_at(text, position).unwrap();
            if scanner.at_delimiter() {
                continue;
            }
            let word = scanner.current_word().unwrap();
            assert!(!word.is_empty());
            assert!(word.graphemes(true).all(|g| !is_delimiter(g)));
            assert!(word.contains(scanner.current_character()));
        }
    }
}

#[test]
fn test_start_and_end_of_word_are_idempotent() {
    for text in TEXTS {
        for position in 0..text.graphemes(true).count() {
            let scanner = Scanner::new_at(text, position).unwrap();
            if scanner.at_delimiter() {
                continue;
            }

            let mut start = scanner.fork();
            start.jump_to_start_of_word().unwrap();
            let mut end = start.fork();
            end.jump_to_end_of_word().unwrap();
            let mut back = end.fork();
            back.jump_to_start_of_word().unwrap();

            assert_eq2!(back.position(), start.position());
            assert!(start.position() <= scanner.position());
            assert!(scanner.position() <= end.position());
        }
    }
}

#[test]
fn test_next_and_previous_word_are_never_the_current_word() {
    for text in TEXTS {
        for position in 0..text.graphemes(true).count() {
            let scanner = Scanner::new_at(text, position).unwrap();
            let Ok(range) = scanner.current_word_range() else {
                continue;
            };

            let mut next = scanner.fork();
            if next.jump_to_start_of_next_word().is_ok() {
                assert!(next.position() > *range.end());
            }

            let mut previous = scanner.fork();
            if previous.jump_to_start_of_previous_word().is_ok() {
                assert!(previous.position() < *range.start());
            }
        }
    }
}

#[test]
fn test_queries_do_not_move_the_cursor() {
    for text in TEXTS {
        for position in 0..text.graphemes(true).count() {
            let scanner = Scanner::new_at(text, position).unwrap();
            let before = scanner.clone();
            _ = scanner.current_word();
            _ = scanner.next_word();
            _ = scanner.previous_word();
            _ = scanner.relative_range(1, 1);
            _ = scanner.next_x_characters(3);
            assert_eq2!(scanner, before);
        }
    }
}

#[test]
fn test_characters_left_plus_position_is_last_index() {
    for text in TEXTS {
        let count = text.graphemes(true).count();
        for position in 0..count {
            let scanner = Scanner::new_at(text, position).unwrap();
            assert_eq2!(
                scanner.characters_left().as_usize() + position,
                count - 1
            );
        }
    }
}

#[test_case(0, "Hello", true, false, false)]
#[test_case(5, ",", false, true, false)]
#[test_case(12, "!", false, true, true)]
fn test_hello_world_table(
    position: usize,
    current_word: &str,
    at_start_of_word: bool,
    at_delimiter: bool,
    at_end_of_string: bool,
) {
    let scanner = Scanner::new_at("Hello, world!", position).unwrap();
    assert_eq2!(scanner.current_word(), Ok(current_word));
    assert_eq2!(scanner.at_start_of_word(), at_start_of_word);
    assert_eq2!(scanner.at_delimiter(), at_delimiter);
    assert_eq2!(scanner.at_end_of_string(), at_end_of_string);
}

#[test]
fn test_hello_world_ranges() {
    let mut scanner = Scanner::new("Hello, world!").unwrap();
    assert_eq2!(scanner.relative_range(0, 4), Ok("ello"));
    assert_eq2!(scanner.next_x_characters(4), "ello");
    assert_eq2!(scanner.next_x_characters(100), "ello, world!");
    assert_eq2!(scanner.advance_by(13), Err(ScannerError::PastBounds));
}

#[test]
fn test_hello_world_walk() {
    let mut scanner = Scanner::new("Hello, world!").unwrap();
    assert!(scanner.at_start_of_string());
    assert!(scanner.at_start_of_word());

    scanner.jump_to_end_of_word().unwrap();
    assert_eq2!(scanner.position(), seg_index(4));
    assert!(scanner.at_end_of_word());

    scanner.jump_to_start_of_next_word().unwrap();
    assert_eq2!(scanner.position(), seg_index(7));
    assert_eq2!(scanner.current_word(), Ok("world"));
    assert_eq2!(scanner.previous_word(), Ok("Hello"));
    assert_eq2!(scanner.next_word(), Err(ScannerError::WordDoesNotExist));

    scanner.jump_to_end_of_string();
    assert!(scanner.at_end_of_string());
    assert!(scanner.at_delimiter());
    assert_eq2!(scanner.characters_left().as_usize(), 0);

    scanner.jump_to_start_of_previous_word().unwrap();
    assert_eq2!(scanner.position(), seg_index(7));
}

#[test]
fn test_single_character_words() {
    // a0 ␣1 b2 ␣3 c4
    let mut scanner = Scanner::new("a b c").unwrap();
    assert!(scanner.at_start_of_word());
    assert!(scanner.at_end_of_word());

    let mut seen = vec![scanner.current_word().unwrap().to_string()];
    while scanner.jump_to_start_of_next_word().is_ok() {
        seen.push(scanner.current_word().unwrap().to_string());
    }
    assert_eq2!(seen, vec!["a", "b", "c"]);

    let mut scanner = Scanner::new_at("a b c", 4).unwrap();
    scanner.jump_to_start_of_previous_word().unwrap();
    assert_eq2!(scanner.position(), seg_index(2));
}

#[test]
fn test_crlf_is_one_position_in_ascii_text() {
    // a0 ␍␊1 b2
    let scanner = Scanner::new_at("a\r\nb", 1).unwrap();
    assert_eq2!(scanner.text_len().as_usize(), 3);
    assert_eq2!(scanner.current_character(), "\r\n");
    assert_eq2!(scanner.next_character(), Some("b"));
    assert_eq2!(scanner.current_word(), Ok("a\r\nb"));
}

#[test]
fn test_multi_byte_graphemes_are_one_position() {
    // c0 a1 f2 é3 ␣4 😀5 🙏🏽6 ␣7 n8 a9 ï10 v11 e12 !13
    let text = "café 😀🙏🏽 naïve!";
    let mut scanner = Scanner::new(text).unwrap();
    assert_eq2!(scanner.text_len().as_usize(), 14);

    scanner.jump_to_end_of_word().unwrap();
    assert_eq2!(scanner.position(), seg_index(3));
    assert_eq2!(scanner.current_character(), "é");
    assert_eq2!(scanner.current_word(), Ok("café"));

    scanner.jump_to_start_of_next_word().unwrap();
    assert_eq2!(scanner.position(), seg_index(5));
    assert_eq2!(scanner.current_word(), Ok("😀🙏🏽"));
    assert_eq2!(scanner.next_word(), Ok("naïve"));

    scanner.advance().unwrap();
    assert_eq2!(scanner.current_character(), "🙏🏽");
    assert_eq2!(scanner.relative_range(1, 2), Ok("🙏🏽 n"));
}
