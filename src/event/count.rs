use crate::parsing::{after_each, non_empty, split_non_empty, take_digits};
use memchr::memmem::Finder;
use once_cell::unsync::Lazy;
use std::num::ParseIntError;

thread_local! {
    static EVENT_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new("event, "));
    static MERGE_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new("merging events, "));
    static MIE_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new("mie, "));
    static CHECKED_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new("checked "));
}

/// `<type>,<rest>` where both the type and the rest are non-empty
fn typed_with_rest(rest: &str) -> Option<&str> {
    let (ty, rest) = split_non_empty(rest, b',')?;
    non_empty(rest).map(|_| ty)
}

/// `event, <type>, ...`
pub fn parse_event(line: &str) -> Option<&str> {
    EVENT_FINDER.with(|finder| after_each(line, finder).find_map(typed_with_rest))
}

/// `merging events, <type>`, the type runs to the end of the line
pub fn parse_merge(line: &str) -> Option<&str> {
    MERGE_FINDER.with(|finder| after_each(line, finder).find_map(non_empty))
}

/// `mie, <type>, ...`
pub fn parse_mie(line: &str) -> Option<&str> {
    MIE_FINDER.with(|finder| after_each(line, finder).find_map(typed_with_rest))
}

/// `checked <count> events`
pub fn parse_checked(line: &str) -> Result<Option<u64>, ParseIntError> {
    let digits = CHECKED_FINDER.with(|finder| {
        after_each(line, finder).find_map(|rest| {
            let (digits, rest) = take_digits(rest);
            (!digits.is_empty() && rest.starts_with(" events")).then(|| digits)
        })
    });
    digits.map(str::parse).transpose()
}
