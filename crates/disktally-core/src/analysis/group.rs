/// Sort-then-group views over a record list.
///
/// The backing list is sorted in place by the key and split into maximal
/// runs of equal adjacent keys, so groups come out in key order. Each
/// [`Group`] borrows its run of the sorted list and is a single-pass
/// iterator: once consumed, it yields nothing more.
use crate::model::FileRecord;
use std::slice;

/// One maximal run of records sharing `key`.
#[derive(Debug)]
pub struct Group<'a, K> {
    key: K,
    records: slice::Iter<'a, FileRecord>,
}

impl<'a, K> Group<'a, K> {
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Records not yet consumed from this group.
    pub fn remaining(&self) -> usize {
        self.records.len()
    }

    /// Total bytes of the records not yet consumed.
    pub fn remaining_size(&self) -> u64 {
        self.records.as_slice().iter().map(FileRecord::size).sum()
    }
}

impl<'a, K> Iterator for Group<'a, K> {
    type Item = &'a FileRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl<K> ExactSizeIterator for Group<'_, K> {}

/// Stable-sort `records` by `key`, then emit one [`Group`] per run.
pub(crate) fn group_runs<'a, K, F>(records: &'a mut [FileRecord], key: F) -> Vec<Group<'a, K>>
where
    K: Ord + Clone,
    F: Fn(&FileRecord) -> &K,
{
    records.sort_by(|a, b| key(a).cmp(key(b)));
    let records: &'a [FileRecord] = records;

    records
        .chunk_by(|a, b| key(a) == key(b))
        .map(|run| Group {
            key: key(&run[0]).clone(),
            records: run.iter(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::analysis::RecordFilter;
    use crate::model::FileRecord;
    use chrono::{Local, TimeZone};

    fn sample() -> RecordFilter {
        let when = Local.with_ymd_and_hms(2023, 1, 2, 10, 0, 0).unwrap();
        RecordFilter::new(vec![
            FileRecord::new("a.txt", 100, when, "user1", 2),
            FileRecord::new("b.jpg", 200, when, "user2", 3),
            FileRecord::new("c.txt", 150, when, "user1", 1),
            FileRecord::new("d.png", 250, when, "user3", 2),
        ])
    }

    #[test]
    fn group_by_level_in_key_order() {
        let mut filter = sample();
        let groups = filter.group_by_level();
        let keys: Vec<usize> = groups.iter().map(|g| *g.key()).collect();
        assert_eq!(keys, [1, 2, 3]);
        let sizes: Vec<usize> = groups.iter().map(|g| g.remaining()).collect();
        assert_eq!(sizes, [1, 2, 1]);
    }

    #[test]
    fn group_by_extension_sorted_keys() {
        let mut filter = sample();
        let groups = filter.group_by_extension();
        let keys: Vec<&str> = groups.iter().map(|g| g.key().as_str()).collect();
        assert_eq!(keys, [".jpg", ".png", ".txt"]);
    }

    #[test]
    fn group_by_owner_collects_members() {
        let mut filter = sample();
        let mut groups = filter.group_by_owner();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key(), "user1");
        let members: Vec<String> = groups[0]
            .by_ref()
            .map(|r| r.path().display().to_string())
            .collect();
        // Stable sort keeps discovery order inside a run.
        assert_eq!(members, ["a.txt", "c.txt"]);
    }

    #[test]
    fn groups_are_single_pass() {
        let mut filter = sample();
        let mut groups = filter.group_by_extension();
        let txt = &mut groups[2];
        assert_eq!(txt.remaining_size(), 250);
        assert_eq!(txt.by_ref().count(), 2);
        assert_eq!(txt.by_ref().count(), 0);
        assert_eq!(txt.remaining_size(), 0);
    }

    #[test]
    fn groups_can_be_read_out_of_order() {
        let mut filter = sample();
        let mut groups = filter.group_by_level();
        assert_eq!(groups[2].by_ref().count(), 1);
        assert_eq!(groups[0].by_ref().count(), 1);
    }

    #[test]
    fn grouping_sorts_backing_list() {
        let mut filter = sample();
        let _ = filter.group_by_level();
        let levels: Vec<usize> = filter.records().iter().map(FileRecord::level).collect();
        assert_eq!(levels, [1, 2, 2, 3]);
    }

    #[test]
    fn empty_list_has_no_groups() {
        let mut filter = RecordFilter::new(Vec::new());
        assert!(filter.group_by_owner().is_empty());
    }
}
