//! Maven-style artifact version ordering
//!
//! A version is split into a tree of items: integers, qualifiers and
//! sub-lists. `.` separates items in the same list; a `-` (or `_`) between a
//! number and a following number opens a sub-list, so `1-1` sorts below `1.1`.
//! Trailing null items (`0`, empty qualifier, `ga`, `final`) are dropped.
//!
//! Qualifier ranking, lowest first:
//!
//! | rank | qualifier   | aliases              |
//! |------|-------------|----------------------|
//! | 0    | `alpha`     | `a` before a digit   |
//! | 1    | `beta`      | `b` before a digit   |
//! | 2    | `milestone` | `m` before a digit   |
//! | 3    | `rc`        | `cr`                 |
//! | 4    | `snapshot`  |                      |
//! | 5    | (release)   | `""`, `ga`, `final`  |
//! | 6    | `sp`        |                      |
//!
//! Unknown qualifiers sort after all of these, alphabetically among themselves.
//!
//! Unlike Maven's `ComparableVersion`, which keeps `_` as a qualifier
//! character, `_` is a delimiter here and behaves exactly like `-`.

use std::cmp::Ordering;
use std::fmt;

const QUALIFIERS: [&str; 7] = ["alpha", "beta", "milestone", "rc", "snapshot", "", "sp"];

const ALIASES: [(&str, &str); 3] = [("ga", ""), ("final", ""), ("cr", "rc")];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    /// Decimal digits with leading zeros removed; empty means zero
    Integer(String),
    Qualifier(String),
    List(Vec<Item>),
}

/// Parsed artifact version
#[derive(Debug, Clone)]
pub struct ArtifactVersion {
    source: String,
    items: Item,
}

impl ArtifactVersion {
    pub fn new(version: &str) -> Self {
        ArtifactVersion {
            source: version.to_string(),
            items: parse_items(version),
        }
    }
}

impl fmt::Display for ArtifactVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for ArtifactVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ArtifactVersion {}

impl PartialOrd for ArtifactVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ArtifactVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.items.compare(Some(&other.items))
    }
}

/// Compare two version strings with artifact ordering
pub fn compare(a: &str, b: &str) -> Ordering {
    ArtifactVersion::new(a).cmp(&ArtifactVersion::new(b))
}

impl Item {
    fn integer(digits: &str) -> Self {
        Item::Integer(digits.trim_start_matches('0').to_string())
    }

    fn qualifier(value: &str, followed_by_digit: bool) -> Self {
        let value = if followed_by_digit && value.chars().count() == 1 {
            match value {
                "a" => "alpha",
                "b" => "beta",
                "m" => "milestone",
                other => other,
            }
        } else {
            value
        };

        let value = ALIASES
            .iter()
            .find(|(alias, _)| *alias == value)
            .map_or(value, |(_, target)| *target);

        Item::Qualifier(value.to_string())
    }

    fn is_null(&self) -> bool {
        match self {
            Item::Integer(digits) => digits.is_empty(),
            Item::Qualifier(value) => comparable_qualifier(value) == release_rank(),
            Item::List(items) => items.is_empty(),
        }
    }

    /// Compare against another item; `None` stands for a missing trailing item
    fn compare(&self, other: Option<&Item>) -> Ordering {
        match (self, other) {
            (Item::Integer(digits), None) => {
                if digits.is_empty() {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            }
            (Item::Integer(a), Some(Item::Integer(b))) => compare_digits(a, b),
            (Item::Integer(_), Some(_)) => Ordering::Greater,

            (Item::Qualifier(value), None) => comparable_qualifier(value).cmp(&release_rank()),
            (Item::Qualifier(_), Some(Item::Integer(_))) => Ordering::Less,
            (Item::Qualifier(a), Some(Item::Qualifier(b))) => {
                comparable_qualifier(a).cmp(&comparable_qualifier(b))
            }
            (Item::Qualifier(_), Some(Item::List(_))) => Ordering::Less,

            (Item::List(items), None) => items
                .first()
                .map_or(Ordering::Equal, |first| first.compare(None)),
            (Item::List(_), Some(Item::Integer(_))) => Ordering::Less,
            (Item::List(_), Some(Item::Qualifier(_))) => Ordering::Greater,
            (Item::List(left), Some(Item::List(right))) => {
                let mut left = left.iter();
                let mut right = right.iter();
                loop {
                    let result = match (left.next(), right.next()) {
                        (None, None) => return Ordering::Equal,
                        (Some(l), r) => l.compare(r),
                        (None, Some(r)) => r.compare(None).reverse(),
                    };
                    if result != Ordering::Equal {
                        return result;
                    }
                }
            }
        }
    }
}

/// Numeric comparison of zero-trimmed decimal strings of any length
fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn comparable_qualifier(qualifier: &str) -> String {
    match QUALIFIERS.iter().position(|q| *q == qualifier) {
        Some(rank) => rank.to_string(),
        None => format!("{}-{}", QUALIFIERS.len(), qualifier),
    }
}

fn release_rank() -> String {
    comparable_qualifier("")
}

fn parse_token(is_digit: bool, token: &[char]) -> Item {
    let token: String = token.iter().collect();
    if is_digit {
        Item::integer(&token)
    } else {
        Item::qualifier(&token, false)
    }
}

fn normalize(items: &mut Vec<Item>) {
    while items.last().is_some_and(Item::is_null) {
        items.pop();
    }
}

fn parse_items(version: &str) -> Item {
    let chars: Vec<char> = version.to_lowercase().chars().collect();

    // Innermost list last; each list only grows until a sub-list is opened
    let mut stack: Vec<Vec<Item>> = vec![Vec::new()];
    let mut is_digit = false;
    let mut start = 0;

    for (i, &c) in chars.iter().enumerate() {
        let Some(list) = stack.last_mut() else {
            break;
        };

        match c {
            '.' | '-' | '_' => {
                if i == start {
                    list.push(Item::Integer(String::new()));
                } else {
                    list.push(parse_token(is_digit, &chars[start..i]));
                }
                start = i + 1;

                if c != '.' && is_digit {
                    normalize(list);
                    // Only a number-to-number hyphen needs a sub-list: 1-1 vs 1.1
                    if chars.get(i + 1).is_some_and(char::is_ascii_digit) {
                        stack.push(Vec::new());
                    }
                }
            }
            c if c.is_ascii_digit() => {
                if !is_digit && i > start {
                    let token: String = chars[start..i].iter().collect();
                    list.push(Item::qualifier(&token, true));
                    start = i;
                }
                is_digit = true;
            }
            _ => {
                if is_digit && i > start {
                    list.push(parse_token(true, &chars[start..i]));
                    start = i;
                }
                is_digit = false;
            }
        }
    }

    if chars.len() > start {
        if let Some(list) = stack.last_mut() {
            list.push(parse_token(is_digit, &chars[start..]));
        }
    }

    let mut items = stack.pop().unwrap_or_default();
    normalize(&mut items);
    while let Some(mut parent) = stack.pop() {
        parent.push(Item::List(items));
        normalize(&mut parent);
        items = parent;
    }

    Item::List(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_order(lower: &str, higher: &str) {
        assert_eq!(compare(lower, higher), Ordering::Less, "{} < {}", lower, higher);
        assert_eq!(compare(higher, lower), Ordering::Greater, "{} > {}", higher, lower);
    }

    fn assert_same(a: &str, b: &str) {
        assert_eq!(compare(a, b), Ordering::Equal, "{} == {}", a, b);
    }

    #[test]
    fn test_numeric_ordering() {
        assert_order("1.0", "1.1");
        assert_order("1.3.0", "2");
        assert_order("3.0", "15.0");
        assert_order("0.9", "0.12");
        assert_order("1.9.5", "2.3.4");
    }

    #[test]
    fn test_trailing_zeros_are_ignored() {
        assert_same("1", "1.0");
        assert_same("1.0", "1.0.0");
        assert_same("1.0-ga", "1.0");
        assert_same("1.0.final", "1");
    }

    #[test]
    fn test_leading_zeros_are_ignored() {
        assert_same("1.01", "1.1");
        assert_same("007", "7");
    }

    #[test]
    fn test_large_numbers() {
        assert_order("1.99999999999999999999", "1.100000000000000000000");
    }

    #[test]
    fn test_qualifier_ranking() {
        let ordered = [
            "1.0-alpha",
            "1.0-beta",
            "1.0-milestone",
            "1.0-rc",
            "1.0-snapshot",
            "1.0",
            "1.0-sp",
            "1.0-abc",
            "1.0-xyz",
        ];
        for pair in ordered.windows(2) {
            assert_order(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_qualifier_aliases() {
        assert_same("1.0-cr", "1.0-rc");
        assert_same("1a1", "1-alpha-1");
        assert_same("1b2", "1-beta-2");
        assert_same("1m3", "1-milestone-3");
    }

    #[test]
    fn test_qualifier_case_is_folded() {
        assert_same("1.0-RC1", "1.0-rc1");
    }

    #[test]
    fn test_hyphen_opens_sub_list() {
        assert_order("1-1", "1.1");
        assert_order("1.0-1", "1.0.1");
        assert_order("1", "1-1");
    }

    #[test]
    fn test_number_beats_qualifier() {
        assert_order("1.0.alpha", "1.0.1");
        assert_order("1-sp", "1.1");
    }

    #[test]
    fn test_underscore_acts_like_hyphen() {
        assert_same("1.0_beta_2", "1.0-beta-2");
        assert_order("1_1", "1.1");
    }

    #[test]
    fn test_display_keeps_source() {
        assert_eq!(ArtifactVersion::new("1.0-RC1").to_string(), "1.0-RC1");
    }
}
