//! Ordering of authors and books.
//!
//! All sorting here is stable, entries that compare equal keep the order they were resolved in.

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{Error, ErrorKind};

/// The direction used to sort author names and the publish year of their books.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the order given by the API.
    #[default]
    Unspecified,
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unspecified),
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("'{other}' is not a valid sort order, use 'asc' or 'desc'"),
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unspecified => "unspecified",
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

impl SortOrder {
    /// Stable sort of `items` using `compare` for the ascending order.
    ///
    /// [`SortOrder::Desc`] reverses the comparison and [`SortOrder::Unspecified`] leaves `items`
    /// untouched.
    pub fn sort_by<T, F>(self, items: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Self::Unspecified => {}
            Self::Asc => items.sort_by(|a, b| compare(a, b)),
            Self::Desc => items.sort_by(|a, b| compare(b, a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values() {
        assert_eq!(SortOrder::Unspecified, "".parse().unwrap());
        assert_eq!(SortOrder::Asc, "asc".parse().unwrap());
        assert_eq!(SortOrder::Desc, "desc".parse().unwrap());
    }

    #[test]
    fn unknown_value_is_invalid_input() {
        let err = "upward".parse::<SortOrder>().unwrap_err();
        assert_eq!(ErrorKind::InvalidInput, err.kind());
        assert!(err.to_string().contains("upward"));

        // matching is case sensitive
        assert!("ASC".parse::<SortOrder>().is_err());
    }

    #[test]
    fn unspecified_keeps_input_order() {
        let mut names = vec!["Bravo", "Alpha", "Charlie"];
        SortOrder::Unspecified.sort_by(&mut names, Ord::cmp);
        assert_eq!(vec!["Bravo", "Alpha", "Charlie"], names);
    }

    #[test]
    fn desc_sorts_years_descending() {
        let mut years = vec![1990, 1975, 2001];
        SortOrder::Desc.sort_by(&mut years, Ord::cmp);
        assert_eq!(vec![2001, 1990, 1975], years);
    }

    #[test]
    fn sorting_is_stable_in_both_directions() {
        let input = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];

        let mut asc = input.clone();
        SortOrder::Asc.sort_by(&mut asc, |a, b| a.0.cmp(&b.0));
        assert_eq!(vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')], asc);

        let mut desc = input;
        SortOrder::Desc.sort_by(&mut desc, |a, b| a.0.cmp(&b.0));
        assert_eq!(vec![(1, 'a'), (1, 'c'), (0, 'b'), (0, 'd')], desc);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        for order in [SortOrder::Unspecified, SortOrder::Asc, SortOrder::Desc] {
            let mut once = vec!["b", "a", "c", "a"];
            order.sort_by(&mut once, Ord::cmp);
            let mut twice = once.clone();
            order.sort_by(&mut twice, Ord::cmp);
            assert_eq!(once, twice, "{order} is not idempotent");
        }
    }
}
