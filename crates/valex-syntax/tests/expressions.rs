//! Behavioural tests for the expression reader and literal extractors.
#![expect(clippy::expect_used, reason = "tests require descriptive panic messages")]

use rstest::rstest;
use valex_syntax::{ExprNode, NodeKind, SyntaxError, read, read_float, read_int, read_str};

#[test]
fn reads_a_realistic_check_list() {
    let nodes = read("Between(5, 9), Not(EQ(3), \"not three\"), OK").expect("list should parse");
    assert_eq!(nodes.len(), 3);

    let ExprNode::Call { name, args } = nodes.first().expect("first entry") else {
        panic!("first entry should be a call");
    };
    assert_eq!(name, "Between");
    let bounds: Vec<i64> = args
        .iter()
        .map(|arg| read_int(arg).expect("bound should be an int"))
        .collect();
    assert_eq!(bounds, vec![5, 9]);

    let ExprNode::Call { name, args } = nodes.get(1).expect("second entry") else {
        panic!("second entry should be a call");
    };
    assert_eq!(name, "Not");
    assert_eq!(args.first().map(ExprNode::kind), Some(NodeKind::Call));
    let reason = read_str(args.get(1).expect("description argument")).expect("string literal");
    assert_eq!(reason, "not three");

    assert_eq!(nodes.get(2), Some(&ExprNode::Ident("OK".into())));
}

#[rstest]
#[case("OK,,OK", 3)]
#[case(",OK", 0)]
#[case("OK, ,OK", 4)]
fn stray_commas_are_syntax_errors(#[case] text: &str, #[case] pos: usize) {
    assert_eq!(read(text), Err(SyntaxError::EmptyEntry { pos }));
}

#[rstest]
#[case("GT(")]
#[case("GT(5")]
#[case("Not(EQ(3), \"x\"")]
fn unterminated_calls_are_syntax_errors(#[case] text: &str) {
    assert_eq!(read(text), Err(SyntaxError::UnexpectedEnd));
}

#[test]
fn number_of_entries_matches_the_comma_count() {
    let nodes = read("A, B(1), C, D(\"x\")").expect("list should parse");
    assert_eq!(nodes.len(), 4);
}

#[test]
fn float_widening_is_one_directional() {
    let nodes = read("GT(3)").expect("call should parse");
    let ExprNode::Call { args, .. } = nodes.first().expect("one entry") else {
        panic!("entry should be a call");
    };
    let arg = args.first().expect("one argument");
    assert!(read_float(arg).is_ok(), "INT widens to float");
    assert!(read_int(arg).is_ok(), "INT reads as int");

    let nodes = read("GT(3.5)").expect("call should parse");
    let ExprNode::Call { args, .. } = nodes.first().expect("one entry") else {
        panic!("entry should be a call");
    };
    let arg = args.first().expect("one argument");
    assert!(read_float(arg).is_ok(), "FLOAT reads as float");
    assert!(read_int(arg).is_err(), "FLOAT does not narrow to int");
}

#[test]
fn reading_twice_yields_identical_trees() {
    let text = "And(NoDups, Length(LE(3)))";
    let first = read(text).expect("first read");
    let second = read(text).expect("second read");
    assert_eq!(first, second);
}
