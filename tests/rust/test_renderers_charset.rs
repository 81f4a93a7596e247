use super::*;
use rstest::rstest;

use super::Direction::*;
use crate::layout::types::Point;

#[test]
fn test_boxchars_unicode() {
    let bc = BoxChars::unicode();
    assert_eq!(bc.horizontal, '─');
    assert_eq!(bc.vertical, '│');
    assert_eq!(bc.top_left, '┌');
    assert_eq!(bc.bottom_right, '┘');
}

#[test]
fn test_boxchars_ascii() {
    let bc = BoxChars::ascii();
    assert_eq!(bc.horizontal, '-');
    assert_eq!(bc.vertical, '|');
    assert_eq!(bc.top_left, '+');
}

#[test]
fn test_for_charset() {
    assert_eq!(BoxChars::for_charset(CharSet::Unicode), BoxChars::unicode());
    assert_eq!(BoxChars::for_charset(CharSet::Ascii), BoxChars::ascii());
    assert_eq!(CharSet::default(), CharSet::Unicode);
}

#[rstest]
#[case(Down, Right, '└')]
#[case(Down, Left, '┘')]
#[case(Up, Right, '┌')]
#[case(Up, Left, '┐')]
#[case(Right, Down, '┐')]
#[case(Right, Up, '┘')]
#[case(Left, Down, '┌')]
#[case(Left, Up, '└')]
fn test_corner_table(#[case] incoming: Direction, #[case] outgoing: Direction, #[case] glyph: char) {
    assert_eq!(BoxChars::unicode().corner(incoming, outgoing), Some(glyph));
    assert_eq!(BoxChars::ascii().corner(incoming, outgoing), Some('+'));
}

#[rstest]
#[case(Up, Up)]
#[case(Down, Down)]
#[case(Left, Left)]
#[case(Right, Right)]
#[case(Up, Down)]
#[case(Down, Up)]
#[case(Left, Right)]
#[case(Right, Left)]
fn test_no_corner_for_straight_or_reversal(#[case] incoming: Direction, #[case] outgoing: Direction) {
    assert_eq!(BoxChars::unicode().corner(incoming, outgoing), None);
}

#[rstest]
#[case((3, 3), (1, 3), Left)]
#[case((3, 3), (7, 3), Right)]
#[case((3, 3), (3, 0), Up)]
#[case((3, 3), (3, 9), Down)]
fn test_direction_between(#[case] from: (usize, usize), #[case] to: (usize, usize), #[case] expected: Direction) {
    let from = Point::new(from.0, from.1);
    let to = Point::new(to.0, to.1);
    assert_eq!(Direction::between(from, to), expected);
}

#[test]
fn test_direction_prefers_horizontal() {
    let d = Direction::between(Point::new(5, 5), Point::new(2, 0));
    assert_eq!(d, Left);
}
