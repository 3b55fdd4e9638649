use memchr::memchr;
use memchr::memmem::Finder;

/// Iterate over the remainder of `input` following every occurrence of the pattern
/// the `finder` was built for, from left to right.
pub fn after_each<'a: 'b, 'b>(
    input: &'a str,
    finder: &'b Finder<'_>,
) -> impl Iterator<Item = &'a str> + 'b {
    let len = finder.needle().len();
    finder
        .find_iter(input.as_bytes())
        // patterns are ascii, so the end of a match is always a char boundary
        .filter_map(move |start| input.get(start + len..))
}

/// Split on the first `delim` that is preceded by at least one character.
pub fn split_non_empty(input: &str, delim: u8) -> Option<(&str, &str)> {
    debug_assert!(delim < 128); // only basic ascii
    let end = memchr(delim, input.as_bytes().get(1..)?)? + 1;
    Some((input.get(..end)?, input.get(end + 1..)?))
}

/// Every split point of `delim` that is preceded by at least one character, in order.
pub fn split_non_empty_all<'a: 'b, 'b>(
    input: &'a str,
    delim: &'b Finder<'_>,
) -> impl Iterator<Item = (&'a str, &'a str)> + 'b {
    let len = delim.needle().len();
    delim
        .find_iter(input.as_bytes())
        .filter(|&end| end > 0)
        .filter_map(move |end| Some((input.get(..end)?, input.get(end + len..)?)))
}

/// Split off the leading ascii digits of `input`.
pub fn take_digits(input: &str) -> (&str, &str) {
    let end = input
        .as_bytes()
        .iter()
        .position(|byte| !byte.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

pub fn non_empty(input: &str) -> Option<&str> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

#[test]
fn test_split_non_empty() {
    assert_eq!(
        Some(("kill", " extra")),
        split_non_empty("kill, extra", b',')
    );
    assert_eq!(Some((",x", "y")), split_non_empty(",x,y", b','));
    assert_eq!(None, split_non_empty(",", b','));
    assert_eq!(None, split_non_empty("", b','));
    assert_eq!(Some(("a", "")), split_non_empty("a,", b','));
}

#[test]
fn test_split_non_empty_all() {
    let finder = Finder::new(", ");
    let splits: Vec<_> = split_non_empty_all(", a, b", &finder).collect();
    assert_eq!(vec![(", a", "b")], splits);
    let splits: Vec<_> = split_non_empty_all("v1, map, x", &finder).collect();
    assert_eq!(vec![("v1", "map, x"), ("v1, map", "x")], splits);
}

#[test]
fn test_take_digits() {
    assert_eq!(("123", " events"), take_digits("123 events"));
    assert_eq!(("", "x12"), take_digits("x12"));
    assert_eq!(("42", ""), take_digits("42"));
}

#[test]
fn test_after_each() {
    let finder = Finder::new("event, ");
    let rests: Vec<_> = after_each("event, a event, b", &finder).collect();
    assert_eq!(vec!["a event, b", "b"], rests);
}
