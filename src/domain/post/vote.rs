// src/domain/post/vote.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use serde::{Deserialize, Serialize};

/// A single user's vote on a post, stored as `+1` / `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum VoteValue {
    Up,
    Down,
}

impl VoteValue {
    pub fn weight(self) -> i64 {
        match self {
            VoteValue::Up => 1,
            VoteValue::Down => -1,
        }
    }

    /// Parses the wire representation. `None` means "retract".
    pub fn from_wire(value: Option<i64>) -> DomainResult<Option<Self>> {
        match value {
            None => Ok(None),
            Some(1) => Ok(Some(VoteValue::Up)),
            Some(-1) => Ok(Some(VoteValue::Down)),
            Some(other) => Err(DomainError::validation(format!(
                "vote must be 1, -1 or null, got {other}"
            ))),
        }
    }
}

impl TryFrom<i8> for VoteValue {
    type Error = DomainError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        VoteValue::from_wire(Some(i64::from(value)))?
            .ok_or_else(|| DomainError::validation("vote cannot be empty"))
    }
}

impl From<VoteValue> for i8 {
    fn from(value: VoteValue) -> Self {
        match value {
            VoteValue::Up => 1,
            VoteValue::Down => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterRecord {
    pub user_id: UserId,
    pub vote: VoteValue,
}

/// What a vote request did to the voter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChange {
    Cast,
    Changed { from: VoteValue },
    Retracted { from: VoteValue },
    Unchanged,
}

impl VoteChange {
    pub fn is_noop(self) -> bool {
        matches!(self, VoteChange::Unchanged)
    }
}

/// Upserts or removes `user`'s record and returns the change together with
/// the delta the aggregate count must move by.
pub fn reconcile(
    voters: &mut Vec<VoterRecord>,
    user: &UserId,
    intent: Option<VoteValue>,
) -> (VoteChange, i64) {
    let existing = voters.iter().position(|record| &record.user_id == user);

    match (existing, intent) {
        (None, None) => (VoteChange::Unchanged, 0),
        (Some(idx), None) => {
            let removed = voters.remove(idx);
            (
                VoteChange::Retracted { from: removed.vote },
                -removed.vote.weight(),
            )
        }
        (None, Some(vote)) => {
            voters.push(VoterRecord {
                user_id: user.clone(),
                vote,
            });
            (VoteChange::Cast, vote.weight())
        }
        (Some(idx), Some(vote)) => {
            let previous = voters[idx].vote;
            if previous == vote {
                return (VoteChange::Unchanged, 0);
            }
            voters[idx].vote = vote;
            (
                VoteChange::Changed { from: previous },
                vote.weight() - previous.weight(),
            )
        }
    }
}

pub fn tally(voters: &[VoterRecord]) -> i64 {
    voters.iter().map(|record| record.vote.weight()).sum()
}
