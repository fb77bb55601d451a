use chrono::{Datelike, NaiveDate};

/// Day of the year with January 1st as day 1, so December 31st is 365 or 366.
pub fn day_of_year(date: NaiveDate) -> usize {
    date.ordinal() as usize
}

/// Maps a calendar day onto a pool of `pool_size` words, which must not be zero.
/// Pools smaller than the year wrap around.
pub fn select_index(date: NaiveDate, pool_size: usize) -> usize {
    day_of_year(date) % pool_size
}
