use crate::error::MergeError;
use crate::types::candidate::CandidateFile;
use std::cmp::Ordering;

/// Sort key for filenames following the `<group>-<index>[.ext]` convention of
/// distributed writers (e.g. `part-00-2.csv`). The group key is everything
/// before the last `-`; the index is the text between that `-` and the first
/// `.` after it (or the end of the name), read as a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    group: String,
    index: i64,
}

pub fn sort_key(file_name: &str) -> Result<SortKey, MergeError> {
    let Some((group, rest)) = file_name.rsplit_once('-') else {
        return Err(MergeError::Ordering {
            name: file_name.to_string(),
            reason: "filename has no '-' separating the part index".to_string(),
        });
    };

    let index_text = match rest.split_once('.') {
        Some((index_text, _)) => index_text,
        None => rest,
    };

    let index = index_text.parse().map_err(|_| MergeError::Ordering {
        name: file_name.to_string(),
        reason: format!("part index {index_text:?} is not an integer"),
    })?;

    Ok(SortKey {
        group: group.to_string(),
        index,
    })
}

/// Pure tri-state comparison of two filenames: ordinal on the group key,
/// numeric ascending on the index within equal groups.
pub fn compare_file_names(a: &str, b: &str) -> Result<Ordering, MergeError> {
    Ok(sort_key(a)?.cmp(&sort_key(b)?))
}

/// Orders candidates deterministically. The resulting sequence is the sole
/// determinant of output byte order.
pub fn sort_candidates(candidates: Vec<CandidateFile>) -> Result<Vec<CandidateFile>, MergeError> {
    let mut keyed = candidates
        .into_iter()
        .map(|candidate| Ok((sort_key(&candidate.name)?, candidate)))
        .collect::<Result<Vec<_>, MergeError>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    Ok(keyed.into_iter().map(|(_, candidate)| candidate).collect())
}
