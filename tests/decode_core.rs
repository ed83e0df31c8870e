#![allow(missing_docs)]

use bytes::Bytes;
use multipart_codec::{decode, BorrowedPart, Decoder, Kind, OwnedPart};

const TWO_PARTS: &[u8] = b"--B\r\nK: V\r\n\r\nhello\r\n--B\r\nK2: V2\r\n\r\nworld\r\n--B--\r\n";

fn header_pairs(part: &BorrowedPart<'_>) -> Vec<(Vec<u8>, Vec<u8>)> {
    part.headers()
        .iter()
        .map(|header| (header.name().to_vec(), header.value().to_vec()))
        .collect()
}

#[test]
fn decodes_simple_two_part_message() {
    let tree: BorrowedPart<'_> = decode(TWO_PARTS).expect("message should decode");

    assert_eq!(tree.kind(), Kind::List);
    assert!(tree.boundary().is_empty());
    assert!(tree.headers().is_empty());

    let children = tree.children();
    assert_eq!(children.len(), 2);

    assert_eq!(children[0].kind(), Kind::Content);
    assert_eq!(*children[0].boundary(), b"B");
    assert_eq!(*children[0].content(), b"hello");
    assert_eq!(header_pairs(&children[0]), vec![(b"K".to_vec(), b"V".to_vec())]);

    assert_eq!(*children[1].boundary(), b"B");
    assert_eq!(*children[1].content(), b"world");
    assert_eq!(header_pairs(&children[1]), vec![(b"K2".to_vec(), b"V2".to_vec())]);
}

#[test]
fn borrowed_content_points_into_input() {
    let tree: BorrowedPart<'_> = decode(TWO_PARTS).expect("message should decode");
    let content = *tree.children()[0].content();

    let input_range = TWO_PARTS.as_ptr_range();
    assert!(input_range.contains(&content.as_ptr()));
}

#[test]
fn owned_and_borrowed_decodes_agree() {
    let borrowed: BorrowedPart<'_> = decode(TWO_PARTS).expect("borrowed decode");
    let owned: OwnedPart = decode(TWO_PARTS).expect("owned decode");

    assert_eq!(borrowed.to_owned_part(), owned);
}

#[test]
fn owned_tree_outlives_input_buffer() {
    let owned: OwnedPart = {
        let buffer = TWO_PARTS.to_vec();
        decode(&buffer).expect("owned decode")
    };

    assert_eq!(owned.children()[1].content(), &Bytes::from_static(b"world"));
}

#[test]
fn single_part_message_decodes_to_leaf() {
    let input = b"--only\r\nContent-Type: text/plain\r\n\r\nbody\r\n--only--\r\n";
    let tree: BorrowedPart<'_> = decode(input).expect("message should decode");

    assert_eq!(tree.kind(), Kind::Content);
    assert_eq!(*tree.boundary(), b"only");
    assert_eq!(*tree.content(), b"body");
    assert_eq!(tree.header("content-type").copied(), Some(&b"text/plain"[..]));
}

#[test]
fn keeps_duplicate_headers_in_order() {
    let input = b"--B\r\nX: 1\r\nY: 2\r\nX: 3\r\n\r\ndata\r\n--B--\r\n";
    let tree: BorrowedPart<'_> = decode(input).expect("message should decode");

    assert_eq!(
        header_pairs(&tree),
        vec![
            (b"X".to_vec(), b"1".to_vec()),
            (b"Y".to_vec(), b"2".to_vec()),
            (b"X".to_vec(), b"3".to_vec()),
        ]
    );
    assert_eq!(tree.header("x").copied(), Some(&b"1"[..]));
}

#[test]
fn skips_exactly_one_space_after_colon() {
    let input = b"--B\r\nA:  two\r\nB:none\r\nC:\r\n\r\ndata\r\n--B--\r\n";
    let tree: BorrowedPart<'_> = decode(input).expect("message should decode");

    assert_eq!(
        header_pairs(&tree),
        vec![
            (b"A".to_vec(), b" two".to_vec()),
            (b"B".to_vec(), b"none".to_vec()),
            (b"C".to_vec(), b"".to_vec()),
        ]
    );
}

#[test]
fn keeps_line_breaks_that_are_not_delimiters() {
    let input = b"--B\r\nK: V\r\n\r\nline one\r\n-B not it\r\nline\rthree\r\n--B--\r\n";
    let tree: BorrowedPart<'_> = decode(input).expect("message should decode");

    assert_eq!(*tree.content(), b"line one\r\n-B not it\r\nline\rthree");
}

#[test]
fn decodes_empty_content() {
    let input = b"--B\r\nK: V\r\n\r\n\r\n--B--";
    let tree: BorrowedPart<'_> = decode(input).expect("message should decode");

    assert!(tree.content().is_empty());
}

#[test]
fn ignores_bytes_after_final_delimiter() {
    let input = b"--B\r\nK: V\r\n\r\nx\r\n--B--\r\nepilogue text";
    let tree: BorrowedPart<'_> = decode(input).expect("message should decode");

    assert_eq!(*tree.content(), b"x");
}

#[test]
fn decode_or_empty_reports_success() {
    let (tree, ok) = Decoder::new().decode_or_empty::<Bytes>(TWO_PARTS);

    assert!(ok);
    assert_eq!(tree.children().len(), 2);
}
