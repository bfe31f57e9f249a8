use super::*;

fn record(member_id: u64, name: &str) -> NudgeRecord {
    NudgeRecord {
        member_id: UserId::new(member_id),
        member_name: name.to_string(),
        nudged_at_ms: 1_760_000_000_000,
        nudged_at_formatted: "10/09/2025 at 8:53 AM".to_string(),
    }
}

/// Tests reading a log seeded in the on-disk column layout.
///
/// Verifies that rows written by earlier runs are parsed positionally into records.
///
/// Expected: Ok with both rows in file order
#[test]
fn reads_seeded_rows() -> Result<(), StoreError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nudgedMembers.csv");
    let nudged_at = Utc.with_ymd_and_hms(2026, 10, 1, 15, 30, 0).unwrap();
    std::fs::write(
        &path,
        [
            fixture::nudge_row(111, "alice", nudged_at),
            fixture::nudge_row(222, "bob", nudged_at),
        ]
        .concat(),
    )
    .unwrap();

    let records = NudgedMemberRepository::new(&path).get_all()?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].member_id, UserId::new(111));
    assert_eq!(records[0].member_name, "alice");
    assert_eq!(records[0].nudged_at_ms, nudged_at.timestamp_millis());
    assert_eq!(records[0].nudged_at_formatted, "10/01/2026 at 3:30 PM");
    assert_eq!(records[1].member_id, UserId::new(222));

    Ok(())
}

/// Tests that appending keeps every prior row intact.
///
/// Expected: Ok with the original rows followed by the appended ones
#[test]
fn append_preserves_prior_records() -> Result<(), StoreError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nudgedMembers.csv");
    let repo = NudgedMemberRepository::new(&path);

    repo.append(&[record(1, "first"), record(2, "second")])?;
    let before = std::fs::read_to_string(&path).unwrap();

    repo.append(&[record(3, "third")])?;
    let after = std::fs::read_to_string(&path).unwrap();

    assert!(after.starts_with(&before));
    assert_eq!(
        repo.get_all()?,
        vec![record(1, "first"), record(2, "second"), record(3, "third")]
    );

    Ok(())
}

/// Tests write-then-read round trip, including names that need quoting.
///
/// Expected: Ok with identical records
#[test]
fn round_trips_records() -> Result<(), StoreError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nudgedMembers.csv");
    let repo = NudgedMemberRepository::new(&path);
    let records = vec![
        NudgeRecord {
            nudged_at_ms: (Utc::now() - Duration::days(1)).timestamp_millis(),
            ..record(175928847299117063, "comma, \"quoted\" name")
        },
        record(80351110224678912, "plain"),
    ];

    repo.append(&records)?;

    assert_eq!(repo.get_all()?, records);

    Ok(())
}

/// Tests collecting nudged member ids.
///
/// Expected: Ok with one id per distinct member
#[test]
fn collects_nudged_ids() -> Result<(), StoreError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nudgedMembers.csv");
    let repo = NudgedMemberRepository::new(&path);
    repo.append(&[record(1, "a"), record(2, "b")])?;

    let ids = repo.get_nudged_ids()?;

    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&UserId::new(1)));
    assert!(ids.contains(&UserId::new(2)));
    assert!(!ids.contains(&UserId::new(3)));

    Ok(())
}

/// Tests that an empty file is an empty log.
///
/// Expected: Ok(vec![])
#[test]
fn empty_file_has_no_records() -> Result<(), StoreError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nudgedMembers.csv");
    std::fs::write(&path, "").unwrap();

    assert!(NudgedMemberRepository::new(&path).get_all()?.is_empty());

    Ok(())
}

/// Tests that a missing log stops the run instead of reading as empty.
///
/// Expected: Err(StoreError::Io)
#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nudgedMembers.csv");

    let result = NudgedMemberRepository::new(&path).get_all();

    assert!(matches!(result, Err(StoreError::Io { .. })));
}

/// Tests that a corrupted row is reported instead of skipped.
///
/// Expected: Err(StoreError::Csv)
#[test]
fn malformed_row_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nudgedMembers.csv");
    std::fs::write(&path, "not-an-id,alice,1760000000000,10/09/2025 at 8:53 AM\n").unwrap();

    let result = NudgedMemberRepository::new(&path).get_all();

    assert!(matches!(result, Err(StoreError::Csv { .. })));
}

/// Tests that a row with more columns than a record is rejected.
///
/// Verifies that two rows fused onto one line are reported instead of being read as a
/// single record with the second member silently dropped.
///
/// Expected: Err(StoreError::ColumnCount) naming the offending line
#[test]
fn row_with_extra_columns_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nudgedMembers.csv");
    let nudged_at = Utc.with_ymd_and_hms(2026, 10, 1, 15, 30, 0).unwrap();
    std::fs::write(
        &path,
        [
            fixture::nudge_row(111, "alice", nudged_at),
            "222,bob,1760000000000,10/09/2025 at 8:53 AM333,carol,1760000000000,10/09/2025 at 8:53 AM\n"
                .to_string(),
        ]
        .concat(),
    )
    .unwrap();

    let result = NudgedMemberRepository::new(&path).get_all();

    match result {
        Err(StoreError::ColumnCount {
            line,
            expected,
            found,
            ..
        }) => {
            assert_eq!(line, 2);
            assert_eq!(expected, 4);
            assert_eq!(found, 7);
        }
        other => panic!("expected ColumnCount, got {:?}", other),
    }
}

/// Tests that a row with too few columns is rejected.
///
/// Expected: Err(StoreError::ColumnCount)
#[test]
fn row_with_missing_columns_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nudgedMembers.csv");
    std::fs::write(&path, "111,alice,1760000000000\n").unwrap();

    let result = NudgedMemberRepository::new(&path).get_all();

    assert!(matches!(result, Err(StoreError::ColumnCount { found: 3, .. })));
}

/// Tests appending to a log whose last row has no line break.
///
/// Verifies that the appended row starts on its own line so both members stay in the
/// nudged set.
///
/// Expected: Ok with 2 records
#[test]
fn append_after_missing_trailing_newline() -> Result<(), StoreError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nudgedMembers.csv");
    std::fs::write(&path, "111,alice,1760000000000,10/09/2025 at 8:53 AM").unwrap();
    let repo = NudgedMemberRepository::new(&path);

    repo.append(&[record(222, "bob")])?;

    let records = repo.get_all()?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], record(222, "bob"));
    let ids = repo.get_nudged_ids()?;
    assert!(ids.contains(&UserId::new(111)));
    assert!(ids.contains(&UserId::new(222)));

    Ok(())
}
