//! Eligibility predicates over a member or record snapshot.
//!
//! Everything here is pure: the caller supplies the nudged-id set, the policy and the
//! reference time, so the outcome depends on nothing but the arguments.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serenity::all::UserId;

use crate::model::{
    discord::GuildMember,
    nudge::{NudgePolicy, RoleChannelRecord},
};

/// Human member without any role who has been in the guild at least `days`.
///
/// A member without a reported join time never qualifies.
fn is_roleless_human_for(member: &GuildMember, days: i64, now: DateTime<Utc>) -> bool {
    member.has_role_count(0)
        && !member.is_bot()
        && member
            .joined_days_ago(now)
            .is_some_and(|joined| joined >= days)
}

/// Whether a member should be added to this run's batch.
pub fn is_nudge_eligible(
    member: &GuildMember,
    nudged_ids: &HashSet<UserId>,
    policy: &NudgePolicy,
    now: DateTime<Utc>,
) -> bool {
    is_roleless_human_for(member, policy.nudge_after_days, now)
        && !nudged_ids.contains(&member.user.id)
}

/// Whether a member should be removed from the guild.
///
/// Only members already in the nudge log qualify, however long they have been roleless.
pub fn is_kick_eligible(
    member: &GuildMember,
    nudged_ids: &HashSet<UserId>,
    policy: &NudgePolicy,
    now: DateTime<Utc>,
) -> bool {
    is_roleless_human_for(member, policy.kick_after_days, now)
        && nudged_ids.contains(&member.user.id)
}

/// Whether a batch's role and channel are old enough to delete.
///
/// A record whose timestamp cannot be read is never eligible.
pub fn is_cleanup_eligible(
    record: &RoleChannelRecord,
    policy: &NudgePolicy,
    now: DateTime<Utc>,
) -> bool {
    record
        .age_in_days(now)
        .is_some_and(|age| age >= policy.cleanup_after_days)
}

/// Members to nudge this run, in listing order.
pub fn select_nudge_batch<'m>(
    members: &'m [GuildMember],
    nudged_ids: &HashSet<UserId>,
    policy: &NudgePolicy,
    now: DateTime<Utc>,
) -> Vec<&'m GuildMember> {
    members
        .iter()
        .filter(|member| is_nudge_eligible(member, nudged_ids, policy, now))
        .collect()
}

/// Members to kick this run, in listing order.
pub fn select_kick_targets<'m>(
    members: &'m [GuildMember],
    nudged_ids: &HashSet<UserId>,
    policy: &NudgePolicy,
    now: DateTime<Utc>,
) -> Vec<&'m GuildMember> {
    members
        .iter()
        .filter(|member| is_kick_eligible(member, nudged_ids, policy, now))
        .collect()
}
