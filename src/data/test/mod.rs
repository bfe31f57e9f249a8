use crate::{
    data::{NudgedMemberRepository, RoleChannelRepository},
    error::store::StoreError,
    model::nudge::{NudgeRecord, RoleChannelRecord},
};
use chrono::{Duration, TimeZone, Utc};
use serenity::all::{ChannelId, RoleId, UserId};
use tempfile::TempDir;
use test_utils::fixture;

mod nudged_member;
