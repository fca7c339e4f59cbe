//! Integrity checks on API results.
//!
//! A bad deserialization tends to show up as an empty ID list, a short game
//! info batch, or entries without a title. These checks turn each case into a
//! typed [`Error`] instead of letting it pass as a legitimate result.

use std::collections::HashSet;

use crate::error::Error;
use crate::types::{GameCategory, GameInfo};

/// Fails with [`Error::EmptyResult`] when no IDs came back for `category`.
pub fn check_game_ids(category: GameCategory, ids: &[i64]) -> Result<(), Error> {
    if ids.is_empty() {
        return Err(Error::EmptyResult { category });
    }
    Ok(())
}

/// Checks that `infos` holds exactly one titled entry per requested ID.
///
/// The returned IDs must form the same set as `requested`; a duplicated
/// entry that hides a missing one fails with [`Error::MissingId`].
pub fn check_game_infos(requested: &[i64], infos: &[GameInfo]) -> Result<(), Error> {
    if infos.len() != requested.len() {
        return Err(Error::CountMismatch {
            requested: requested.len(),
            received: infos.len(),
        });
    }

    let wanted: HashSet<i64> = requested.iter().copied().collect();
    for info in infos {
        if info.id <= 0 || !wanted.contains(&info.id) {
            return Err(Error::UnexpectedId { id: info.id });
        }
        if info.title.is_empty() {
            return Err(Error::MissingTitle { id: info.id });
        }
    }

    let returned: HashSet<i64> = infos.iter().map(|info| info.id).collect();
    if let Some(&id) = requested.iter().find(|id| !returned.contains(*id)) {
        return Err(Error::MissingId { id });
    }

    Ok(())
}
