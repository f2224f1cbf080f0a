use std::cmp::Ordering;

use prize_list_core::locale_compare;

use crate::normalize::Row;

/// Order rows by prize group, then title, both with locale-aware collation.
///
/// The sort is stable, so rows whose group and title are literally equal
/// keep their catalog order.
pub fn sort_rows(rows: &mut [Row]) {
    rows.sort_by(compare_rows);
}

fn compare_rows(a: &Row, b: &Row) -> Ordering {
    locale_compare(&a.prize_group, &b.prize_group).then_with(|| locale_compare(&a.title, &b.title))
}
