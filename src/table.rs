use std::cmp::Ordering;

use chrono::{DateTime, Utc};

/// A field value as seen by the sort comparator.
///
/// Columns are homogeneous: every record of a table yields the same variant
/// for a given key (or `None` when the field is missing).
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
}

impl SortValue {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            // mixed variants shouldn't happen for a well-formed record type;
            // fall back to a fixed variant order so the sort stays total
            _ => self.variant_rank().cmp(&other.variant_rank()),
        }
    }

    fn variant_rank(&self) -> u8 {
        match self {
            Self::Text(_) => 0,
            Self::Number(_) => 1,
            Self::Date(_) => 2,
        }
    }
}

/// A record type that can be displayed in a sortable table.
///
/// `Key` is a per-type enum of sortable fields, so an invalid sort key is a
/// compile error rather than a silent null-comparison at runtime.
pub trait TableRecord {
    type Key: Copy + Eq;

    /// The value to sort by for `key`, or `None` when the field is missing.
    fn sort_value(&self, key: Self::Key) -> Option<SortValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The active sort key and direction of one table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig<K> {
    pub key: K,
    pub direction: SortDirection,
}

/// Sort and pagination state for one logical table view.
///
/// The manager owns a snapshot of the record collection and derives the
/// sorted window for the current page on every access; it never mutates the
/// records themselves. One instance per table view, exclusively owned by the
/// component rendering it.
#[derive(Debug, Clone)]
pub struct TableManager<T: TableRecord> {
    records: Vec<T>,
    page_size: usize,
    sort: Option<SortConfig<T::Key>>,
    page: usize,
}

impl<T: TableRecord> TableManager<T> {
    /// An empty collection is fine; a page size of 0 is treated as 1.
    pub fn new(records: Vec<T>, page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
            sort: None,
            page: 1,
        }
    }

    /// Replace the collection with fresh data (e.g. after a save or delete).
    ///
    /// Sort configuration and page cursor are kept; a cursor past the end of
    /// a shrunken collection simply yields an empty page.
    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
    }

    /// Toggle sorting on `key`.
    ///
    /// A new key sorts ascending; repeated requests on the active key cycle
    /// ascending ↔ descending (sort is never cleared once set). The page
    /// cursor resets to 1 since item order, and therefore page membership,
    /// changed.
    pub fn request_sort(&mut self, key: T::Key) {
        let direction = match self.sort {
            Some(SortConfig {
                key: active,
                direction,
            }) if active == key => direction.flipped(),
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortConfig { key, direction });
        self.page = 1;
    }

    /// Set the 1-based page cursor. Page 0 clamps to 1; a page past the end
    /// is accepted and yields an empty slice.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn sort_config(&self) -> Option<SortConfig<T::Key>> {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sorted collection sliced to the current page.
    ///
    /// Recomputed on every access as a pure function of (records, sort
    /// config, page cursor, page size). Never panics: an out-of-range
    /// cursor yields fewer or zero elements.
    pub fn current_items(&self) -> Vec<&T> {
        let sorted = self.sorted();
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= sorted.len() {
            return Vec::new();
        }
        let end = (start + self.page_size).min(sorted.len());
        sorted[start..end].to_vec()
    }

    fn sorted(&self) -> Vec<&T> {
        let mut view: Vec<&T> = self.records.iter().collect();
        if let Some(SortConfig { key, direction }) = self.sort {
            // Vec::sort_by is stable: equal keys keep their relative order
            // from the input collection
            view.sort_by(|a, b| compare_by_key(*a, *b, key, direction));
        }
        view
    }
}

fn compare_by_key<T: TableRecord>(
    a: &T,
    b: &T,
    key: T::Key,
    direction: SortDirection,
) -> Ordering {
    match (a.sort_value(key), b.sort_value(key)) {
        (None, None) => Ordering::Equal,
        // missing values always sort last, in both directions
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(va), Some(vb)) => {
            let ord = va.compare(&vb);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        title: &'static str,
        views: Option<f64>,
        posted: Option<DateTime<Utc>>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum RowField {
        Title,
        Views,
        Posted,
    }

    impl TableRecord for Row {
        type Key = RowField;

        fn sort_value(&self, key: RowField) -> Option<SortValue> {
            match key {
                RowField::Title => Some(SortValue::Text(self.title.to_string())),
                RowField::Views => self.views.map(SortValue::Number),
                RowField::Posted => self.posted.map(SortValue::Date),
            }
        }
    }

    fn row(id: u32, title: &'static str) -> Row {
        Row {
            id,
            title,
            views: None,
            posted: None,
        }
    }

    fn ids(items: &[&Row]) -> Vec<u32> {
        items.iter().map(|r| r.id).collect()
    }

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn unsorted_view_keeps_original_order() {
        let table = TableManager::new(vec![row(1, "B"), row(2, "A"), row(3, "C")], 2);
        assert_eq!(table.sort_config(), None);
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.page_count(), 2);
        assert_eq!(ids(&table.current_items()), vec![1, 2]);
    }

    #[test]
    fn sort_then_page_walkthrough() {
        // the worked example: B/A/C, page size 2
        let mut table = TableManager::new(vec![row(1, "B"), row(2, "A"), row(3, "C")], 2);

        table.request_sort(RowField::Title);
        assert_eq!(
            table.sort_config(),
            Some(SortConfig {
                key: RowField::Title,
                direction: SortDirection::Ascending,
            })
        );
        assert_eq!(table.current_page(), 1);
        assert_eq!(ids(&table.current_items()), vec![2, 1]);

        table.set_page(2);
        assert_eq!(ids(&table.current_items()), vec![3]);
    }

    #[test]
    fn empty_collection_is_not_an_error() {
        let table = TableManager::new(Vec::<Row>::new(), 5);
        assert_eq!(table.page_count(), 0);
        assert_eq!(table.current_page(), 1);
        assert!(table.current_items().is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn toggle_cycles_two_state() {
        let mut table = TableManager::new(vec![row(1, "B"), row(2, "A")], 10);
        let mut directions = Vec::new();
        for _ in 0..4 {
            table.request_sort(RowField::Title);
            directions.push(table.sort_config().unwrap().direction);
        }
        // never clears back to unsorted
        assert_eq!(
            directions,
            vec![
                SortDirection::Ascending,
                SortDirection::Descending,
                SortDirection::Ascending,
                SortDirection::Descending,
            ]
        );
    }

    #[test]
    fn switching_key_starts_ascending() {
        let mut table = TableManager::new(vec![row(1, "B"), row(2, "A")], 10);
        table.request_sort(RowField::Title);
        table.request_sort(RowField::Title);
        assert_eq!(
            table.sort_config().unwrap().direction,
            SortDirection::Descending
        );
        table.request_sort(RowField::Views);
        let config = table.sort_config().unwrap();
        assert_eq!(config.key, RowField::Views);
        assert_eq!(config.direction, SortDirection::Ascending);
    }

    #[test]
    fn resort_resets_page_cursor() {
        let rows = (1..=9).map(|i| row(i, "x")).collect::<Vec<_>>();
        let mut table = TableManager::new(rows, 3);
        table.set_page(3);
        assert_eq!(table.current_page(), 3);
        table.request_sort(RowField::Title);
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn all_pages_form_a_permutation() {
        let rows = vec![
            row(4, "d"),
            row(2, "b"),
            row(5, "e"),
            row(1, "a"),
            row(3, "c"),
        ];
        let mut table = TableManager::new(rows, 2);
        table.request_sort(RowField::Title);

        let mut seen = Vec::new();
        for page in 1..=table.page_count() {
            table.set_page(page);
            seen.extend(ids(&table.current_items()));
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn page_lengths_are_bounded() {
        let rows = (1..=7).map(|i| row(i, "x")).collect::<Vec<_>>();
        let mut table = TableManager::new(rows, 3);
        assert_eq!(table.page_count(), 3);

        let mut lengths = Vec::new();
        for page in 1..=table.page_count() {
            table.set_page(page);
            lengths.push(table.current_items().len());
        }
        // full pages except possibly the last
        assert_eq!(lengths, vec![3, 3, 1]);
    }

    #[test]
    fn evenly_divisible_last_page_is_full() {
        let rows = (1..=6).map(|i| row(i, "x")).collect::<Vec<_>>();
        let mut table = TableManager::new(rows, 3);
        assert_eq!(table.page_count(), 2);
        table.set_page(2);
        assert_eq!(table.current_items().len(), 3);
    }

    #[test]
    fn equal_keys_keep_original_relative_order() {
        let rows = vec![
            row(1, "same"),
            row(2, "same"),
            row(3, "aaa"),
            row(4, "same"),
        ];
        let mut table = TableManager::new(rows, 10);

        table.request_sort(RowField::Title);
        assert_eq!(ids(&table.current_items()), vec![3, 1, 2, 4]);

        // descending reverses the key order but not the tie order
        table.request_sort(RowField::Title);
        assert_eq!(ids(&table.current_items()), vec![1, 2, 4, 3]);
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        let rows = vec![
            Row {
                id: 1,
                title: "a",
                views: None,
                posted: None,
            },
            Row {
                id: 2,
                title: "b",
                views: Some(10.0),
                posted: None,
            },
            Row {
                id: 3,
                title: "c",
                views: Some(3.0),
                posted: None,
            },
        ];
        let mut table = TableManager::new(rows, 10);

        table.request_sort(RowField::Views);
        assert_eq!(ids(&table.current_items()), vec![3, 2, 1]);

        table.request_sort(RowField::Views);
        assert_eq!(ids(&table.current_items()), vec![2, 3, 1]);
    }

    #[test]
    fn dates_sort_chronologically() {
        let rows = vec![
            Row {
                id: 1,
                title: "a",
                views: None,
                posted: Some(date(20)),
            },
            Row {
                id: 2,
                title: "b",
                views: None,
                posted: Some(date(5)),
            },
            Row {
                id: 3,
                title: "c",
                views: None,
                posted: None,
            },
        ];
        let mut table = TableManager::new(rows, 10);

        table.request_sort(RowField::Posted);
        assert_eq!(ids(&table.current_items()), vec![2, 1, 3]);

        table.request_sort(RowField::Posted);
        assert_eq!(ids(&table.current_items()), vec![1, 2, 3]);
    }

    #[test]
    fn out_of_range_page_yields_empty_slice() {
        let mut table = TableManager::new(vec![row(1, "a"), row(2, "b")], 2);
        table.set_page(99);
        assert!(table.current_items().is_empty());
    }

    #[test]
    fn page_zero_clamps_to_first() {
        let mut table = TableManager::new(vec![row(1, "a"), row(2, "b")], 1);
        table.set_page(0);
        assert_eq!(table.current_page(), 1);
        assert_eq!(ids(&table.current_items()), vec![1]);
    }

    #[test]
    fn page_size_zero_is_treated_as_one() {
        let table = TableManager::new(vec![row(1, "a"), row(2, "b")], 0);
        assert_eq!(table.page_size(), 1);
        assert_eq!(table.page_count(), 2);
        assert_eq!(ids(&table.current_items()), vec![1]);
    }

    #[test]
    fn set_records_preserves_sort_and_cursor() {
        let mut table = TableManager::new(vec![row(1, "b"), row(2, "a"), row(3, "c")], 1);
        table.request_sort(RowField::Title);
        table.set_page(2);
        assert_eq!(ids(&table.current_items()), vec![1]);

        table.set_records(vec![row(4, "z"), row(5, "y")]);
        let config = table.sort_config().unwrap();
        assert_eq!(config.key, RowField::Title);
        assert_eq!(config.direction, SortDirection::Ascending);
        assert_eq!(table.current_page(), 2);
        assert_eq!(ids(&table.current_items()), vec![4]);
    }

    #[test]
    fn shrunken_collection_leaves_cursor_past_the_end() {
        let mut table = TableManager::new((1..=6).map(|i| row(i, "x")).collect(), 2);
        table.set_page(3);
        assert_eq!(table.current_items().len(), 2);

        table.set_records(vec![row(1, "x"), row(2, "x")]);
        assert_eq!(table.current_page(), 3);
        assert!(table.current_items().is_empty());
        assert_eq!(table.page_count(), 1);
    }
}
