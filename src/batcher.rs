//! Splits an ordered record list into sheet-sized groups.
//!
//! Group index and in-group position are derived from a record's absolute
//! index alone (`index / size`, `index % size`); no counter is carried
//! between groups.

use crate::record::LabelRecord;
use std::num::NonZeroUsize;

/// Labels per sheet.
pub const GROUP_SIZE: usize = 4;

/// Up to [`GROUP_SIZE`] consecutive records destined for one sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Group<'a> {
    pub index: usize,
    /// Absolute index of the first record.
    pub start: usize,
    pub records: &'a [LabelRecord],
}

impl<'a> Group<'a> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Absolute index, within the whole input, of the record at `position`.
    pub fn record_index(&self, position: usize) -> usize {
        self.start + position
    }

    /// Records paired with their position in the group.
    pub fn positions(&self) -> impl Iterator<Item = (usize, &'a LabelRecord)> + 'a {
        self.records.iter().enumerate()
    }
}

/// Groups of four. An empty input yields no groups.
pub fn batch(records: &[LabelRecord]) -> Vec<Group<'_>> {
    chunk(records, GROUP_SIZE)
}

pub fn batch_with_size(records: &[LabelRecord], group_size: NonZeroUsize) -> Vec<Group<'_>> {
    chunk(records, group_size.get())
}

fn chunk(records: &[LabelRecord], size: usize) -> Vec<Group<'_>> {
    records
        .chunks(size)
        .enumerate()
        .map(|(index, records)| Group { index, start: index * size, records })
        .collect()
}

/// `(group_index, position)` of the record at `index`.
pub fn locate(index: usize) -> (usize, usize) {
    (index / GROUP_SIZE, index % GROUP_SIZE)
}

/// Number of sheets `count` records need.
pub fn sheet_count(count: usize) -> usize {
    count.div_ceil(GROUP_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<LabelRecord> {
        LabelRecord::samples(n)
    }

    #[test]
    fn empty_input_gives_no_groups() {
        assert!(batch(&[]).is_empty());
        assert_eq!(sheet_count(0), 0);
    }

    #[test]
    fn group_counts_and_sizes() {
        for n in 0..=13 {
            let input = records(n);
            let groups = batch(&input);
            assert_eq!(groups.len(), n.div_ceil(4), "n = {n}");
            assert_eq!(groups.len(), sheet_count(n));
            if let Some((last, full)) = groups.split_last() {
                assert!(full.iter().all(|g| g.len() == 4));
                assert!((1..=4).contains(&last.len()));
            }
        }
    }

    #[test]
    fn concatenated_groups_reproduce_input() {
        let input = records(10);
        let flattened: Vec<LabelRecord> = batch(&input)
            .iter()
            .flat_map(|g| g.records.iter().cloned())
            .collect();
        assert_eq!(flattened, input);
    }

    #[test]
    fn ten_records_split_four_four_two() {
        let input = records(10);
        let sizes: Vec<usize> = batch(&input).iter().map(Group::len).collect();
        assert_eq!(sizes, vec![4, 4, 2]);
        let indices: Vec<usize> = batch(&input).iter().map(|g| g.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn locate_matches_group_positions() {
        let input = records(9);
        for group in batch(&input) {
            for (position, _) in group.positions() {
                let absolute = group.record_index(position);
                assert_eq!(locate(absolute), (group.index, position));
            }
        }
        assert_eq!(locate(6), (1, 2));
    }

    #[test]
    fn custom_group_size() {
        let input = records(5);
        let size = NonZeroUsize::new(2).unwrap();
        let groups = batch_with_size(&input, size);
        let sizes: Vec<usize> = groups.iter().map(Group::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(groups[2].record_index(0), 4);
    }

    #[test]
    fn batching_is_deterministic() {
        let input = records(7);
        assert_eq!(batch(&input), batch(&input));
    }
}
