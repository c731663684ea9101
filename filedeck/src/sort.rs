//! Display order derivation: hidden-file filtering, folders-first
//! partitioning and stable key sorting.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::actions::{SortKey, SortOrder, SortValue};
use crate::file::{FileData, FileId};

/// String comparison used for text sort keys.
pub trait SortCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering;
}

impl<F> SortCollator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, left: &str, right: &str) -> Ordering {
        self(left, right)
    }
}

/// Natural ordering: digit runs compare numerically, text compares
/// case-insensitively first with a case-sensitive tiebreak.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalCollator;

impl SortCollator for NaturalCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        compare_natural(left, right)
    }
}

/// Active sort: the registered action it came from and its key.
#[derive(Debug, Clone, Copy)]
pub struct SortState<'a> {
    pub action_id: &'a str,
    pub key: SortKey,
    pub order: SortOrder,
}

/// Visibility flags applied before sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_hidden_files: bool,
    pub show_folders_first: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_hidden_files: true,
            show_folders_first: true,
        }
    }
}

/// Result of [`compute_display_order`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOrder {
    pub file_ids: Vec<FileId>,
    pub hidden_file_ids: HashSet<FileId>,
}

/// Compute the ordered sequence of displayed file ids.
///
/// Each partition is sorted stably with undefined keys last. `Desc`
/// reverses each sorted partition rather than the comparator, so folders
/// stay ahead of files when `show_folders_first` is set. Without a sort
/// the host-supplied order is kept.
pub fn compute_display_order(
    files: &[FileData],
    sort: Option<SortState<'_>>,
    options: DisplayOptions,
    collator: Option<&dyn SortCollator>,
) -> DisplayOrder {
    let mut hidden_file_ids = HashSet::new();
    let mut folders = Vec::new();
    let mut others = Vec::new();

    for file in files {
        if file.is_hidden && !options.show_hidden_files {
            hidden_file_ids.insert(file.id.clone());
            continue;
        }
        if options.show_folders_first && file.is_dir {
            folders.push(file);
        } else {
            others.push(file);
        }
    }

    let mut file_ids = sort_partition(folders, sort, collator);
    file_ids.extend(sort_partition(others, sort, collator));

    DisplayOrder {
        file_ids,
        hidden_file_ids,
    }
}

fn sort_partition(
    files: Vec<&FileData>,
    sort: Option<SortState<'_>>,
    collator: Option<&dyn SortCollator>,
) -> Vec<FileId> {
    let Some(sort) = sort else {
        return files.into_iter().map(|file| file.id.clone()).collect();
    };

    let mut keyed: Vec<(Option<SortValue>, &FileData)> = files
        .into_iter()
        .map(|file| (sort.key.select(file), file))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| {
        compare_keys(left.as_ref(), right.as_ref(), collator)
    });

    let ids = keyed.into_iter().map(|(_, file)| file.id.clone());
    match sort.order {
        SortOrder::Asc => ids.collect(),
        SortOrder::Desc => {
            let mut ids: Vec<FileId> = ids.collect();
            ids.reverse();
            ids
        },
    }
}

fn compare_keys(
    left: Option<&SortValue>,
    right: Option<&SortValue>,
    collator: Option<&dyn SortCollator>,
) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => compare_values(left, right, collator),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_values(
    left: &SortValue,
    right: &SortValue,
    collator: Option<&dyn SortCollator>,
) -> Ordering {
    match (left, right) {
        (SortValue::Text(l), SortValue::Text(r)) => match collator {
            Some(collator) => collator.compare(l, r),
            None => l.cmp(r),
        },
        (SortValue::Number(l), SortValue::Number(r)) => l.cmp(r),
        (SortValue::Time(l), SortValue::Time(r)) => l.cmp(r),
        _ => value_rank(left).cmp(&value_rank(right)),
    }
}

fn value_rank(value: &SortValue) -> u8 {
    match value {
        SortValue::Number(_) => 0,
        SortValue::Time(_) => 1,
        SortValue::Text(_) => 2,
    }
}

fn compare_natural(left: &str, right: &str) -> Ordering {
    let left_segments = split_segments(left);
    let right_segments = split_segments(right);
    let mut left_iter = left_segments.iter();
    let mut right_iter = right_segments.iter();

    loop {
        let ord = match (left_iter.next(), right_iter.next()) {
            (Some(Segment::Digits(l)), Some(Segment::Digits(r))) => {
                compare_digit_segments(l, r)
            },
            (Some(Segment::Text(l)), Some(Segment::Text(r))) => {
                compare_text_segments(l, r)
            },
            (Some(Segment::Digits(_)), Some(Segment::Text(_))) => {
                Ordering::Less
            },
            (Some(Segment::Text(_)), Some(Segment::Digits(_))) => {
                Ordering::Greater
            },
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => break,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    left.cmp(right)
}

#[derive(Debug)]
enum Segment<'a> {
    Text(&'a str),
    Digits(&'a str),
}

fn split_segments(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut current_is_digit: Option<bool> = None;

    for (index, ch) in input.char_indices() {
        let is_digit = ch.is_ascii_digit();
        match current_is_digit {
            Some(kind) if kind != is_digit => {
                segments.push(segment(&input[start..index], kind));
                start = index;
                current_is_digit = Some(is_digit);
            },
            Some(_) => {},
            None => current_is_digit = Some(is_digit),
        }
    }

    if let Some(kind) = current_is_digit {
        segments.push(segment(&input[start..], kind));
    }

    segments
}

fn segment(text: &str, is_digit: bool) -> Segment<'_> {
    if is_digit {
        Segment::Digits(text)
    } else {
        Segment::Text(text)
    }
}

fn compare_text_segments(left: &str, right: &str) -> Ordering {
    match left.to_lowercase().cmp(&right.to_lowercase()) {
        Ordering::Equal => left.cmp(right),
        other => other,
    }
}

fn compare_digit_segments(left: &str, right: &str) -> Ordering {
    let left_trim = left.trim_start_matches('0');
    let right_trim = right.trim_start_matches('0');

    left_trim
        .len()
        .cmp(&right_trim.len())
        .then_with(|| left_trim.cmp(right_trim))
        .then_with(|| left.len().cmp(&right.len()))
}
