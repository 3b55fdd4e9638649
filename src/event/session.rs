use crate::parsing::{after_each, non_empty, split_non_empty, split_non_empty_all};
use memchr::memmem::Finder;
use once_cell::unsync::Lazy;

thread_local! {
    static WIN_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new("game_message: "));
    static WINS_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new(" wins!"));
    static DEMOFILE_FINDER: Lazy<Finder<'static>> =
        Lazy::new(|| Finder::new("Opening demofile "));
    static BATTLE_FINDER: Lazy<Finder<'static>> =
        Lazy::new(|| Finder::new("Connecting to battle, "));
    static FIELD_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new(", "));
}

fn has_winner(rest: &str) -> bool {
    WINS_FINDER.with(|wins| split_non_empty_all(rest, wins).next().is_some())
}

/// `game_message: <winner> wins!`
pub fn parse_win(line: &str) -> bool {
    WIN_FINDER.with(|finder| after_each(line, finder).any(has_winner))
}

/// `Opening demofile <path>`
pub fn parse_demofile(line: &str) -> Option<&str> {
    DEMOFILE_FINDER.with(|finder| after_each(line, finder).find_map(non_empty))
}

/// `Connecting to battle, <version>, <map>, ...`
pub fn parse_battle(line: &str) -> Option<&str> {
    BATTLE_FINDER.with(|finder| {
        after_each(line, finder).find_map(|rest| {
            FIELD_FINDER.with(|fields| {
                // shortest version whose following map field is terminated
                split_non_empty_all(rest, fields)
                    .find_map(|(_version, rest)| split_non_empty(rest, b',').map(|(map, _)| map))
            })
        })
    })
}
