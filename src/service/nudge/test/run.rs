use super::*;

/// Tests a run over a guild with one eligible member among ineligible ones.
///
/// Verifies that only the roleless human who joined 5 days ago is nudged: one role and
/// one channel are created, the role is added to that member alone, the instructions
/// mention the role, and both record files gain exactly one entry.
///
/// Expected: Ok with one nudged member and no side effects for the others
#[tokio::test]
async fn nudges_only_eligible_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_members(vec![
            MemberFactory::new()
                .id(2001)
                .username("alice")
                .joined_at(Some(now() - Duration::days(5)))
                .build(),
            MemberFactory::new()
                .id(2002)
                .roles(vec![42])
                .joined_at(Some(now() - Duration::days(5)))
                .build(),
            MemberFactory::new()
                .id(2003)
                .bot(true)
                .joined_at(Some(now() - Duration::days(5)))
                .build(),
        ])
        .with_all_endpoints()
        .with_empty_record_files()
        .build()
        .await
        .unwrap();
    let config = config(&test, NudgePolicy::default());
    let discord = client(&config);

    let summary = NudgeService::new(&discord, &config).run(now()).await?;

    assert_eq!(
        summary,
        RunSummary {
            expired: 0,
            kicked: 0,
            nudged: 1
        }
    );

    let guild = test.guild_id;
    let roles = test.requests_to("POST", &format!("/guilds/{}/roles", guild)).await;
    assert_eq!(roles.len(), 1);
    let role_body: Value = roles[0].body_json().unwrap();
    assert_eq!(role_body["name"], "Slow Roller");

    let assignments = test
        .requests_under("PUT", &format!("/guilds/{}/members/", guild))
        .await;
    assert_eq!(assignments.len(), 1);
    assert_eq!(
        assignments[0].url.path(),
        format!("/guilds/{}/members/2001/roles/500", guild)
    );

    let channels = test.requests_to("POST", &format!("/guilds/{}/channels", guild)).await;
    assert_eq!(channels.len(), 1);
    let channel_body: Value = channels[0].body_json().unwrap();
    assert_eq!(channel_body["name"], "Slow Rollers");

    let messages = test.requests_to("POST", "/channels/600/messages").await;
    assert_eq!(messages.len(), 1);
    let message_body: Value = messages[0].body_json().unwrap();
    assert!(message_body["content"].as_str().unwrap().contains("<@&500>"));

    assert_eq!(
        test.read_nudge_log().unwrap(),
        fixture::nudge_row(2001, "alice", now())
    );
    assert_eq!(
        test.read_role_channel_log().unwrap(),
        fixture::role_channel_row(500, 600, now())
    );

    Ok(())
}

/// Tests the order of side effects for a batch.
///
/// Expected: role created, every member assigned in listing order, then channel, then
/// message
#[tokio::test]
async fn creates_batch_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_members(vec![
            MemberFactory::new().id(3001).joined_days_ago(6).build(),
            MemberFactory::new().id(3002).joined_days_ago(7).build(),
            MemberFactory::new().id(3003).joined_days_ago(8).build(),
        ])
        .with_all_endpoints()
        .with_empty_record_files()
        .build()
        .await
        .unwrap();
    let config = config(&test, NudgePolicy::default());
    let discord = client(&config);

    NudgeService::new(&discord, &config).run(Utc::now()).await?;

    let calls: Vec<String> = test
        .received()
        .await
        .iter()
        .filter(|request| request.method.as_str() != "GET")
        .map(|request| format!("{} {}", request.method, request.url.path()))
        .collect();
    let guild = test.guild_id;
    assert_eq!(
        calls,
        vec![
            format!("POST /guilds/{}/roles", guild),
            format!("PUT /guilds/{}/members/3001/roles/500", guild),
            format!("PUT /guilds/{}/members/3002/roles/500", guild),
            format!("PUT /guilds/{}/members/3003/roles/500", guild),
            format!("POST /guilds/{}/channels", guild),
            "POST /channels/600/messages".to_string(),
        ]
    );

    Ok(())
}

/// Tests that members already in the nudge log are not nudged again.
///
/// Expected: Ok with no writes to Discord and the log untouched
#[tokio::test]
async fn skips_already_nudged_members() -> Result<(), AppError> {
    let row = fixture::nudge_row(4001, "bob", now() - Duration::days(2));
    let test = TestBuilder::new()
        .with_members(vec![MemberFactory::new()
            .id(4001)
            .joined_at(Some(now() - Duration::days(9)))
            .build()])
        .with_all_endpoints()
        .with_nudge_rows(vec![row.clone()])
        .with_role_channel_rows(vec![])
        .build()
        .await
        .unwrap();
    let config = config(&test, NudgePolicy::default());
    let discord = client(&config);

    let summary = NudgeService::new(&discord, &config).run(now()).await?;

    assert_eq!(summary.nudged, 0);
    assert!(test
        .received()
        .await
        .iter()
        .all(|request| request.method.as_str() == "GET"));
    assert_eq!(test.read_nudge_log().unwrap(), row);

    Ok(())
}

/// Tests that prior nudge log rows survive a run that nudges new members.
///
/// Expected: the original row followed by the new one
#[tokio::test]
async fn appends_to_existing_nudge_log() -> Result<(), AppError> {
    let row = fixture::nudge_row(5001, "carol", now() - Duration::days(2));
    let test = TestBuilder::new()
        .with_members(vec![MemberFactory::new()
            .id(5002)
            .username("dave")
            .joined_at(Some(now() - Duration::days(4)))
            .build()])
        .with_all_endpoints()
        .with_nudge_rows(vec![row.clone()])
        .with_role_channel_rows(vec![])
        .build()
        .await
        .unwrap();
    let config = config(&test, NudgePolicy::default());
    let discord = client(&config);

    NudgeService::new(&discord, &config).run(now()).await?;

    assert_eq!(
        test.read_nudge_log().unwrap(),
        [row, fixture::nudge_row(5002, "dave", now())].concat()
    );

    Ok(())
}

/// Tests that a missing nudge log aborts the run before members are fetched.
///
/// Expected: Err(AppError::StoreErr(StoreError::Io)) and no member listing request
#[tokio::test]
async fn missing_nudge_log_aborts_run() {
    let test = TestBuilder::new()
        .with_members(vec![MemberFactory::new().joined_days_ago(5).build()])
        .with_all_endpoints()
        .with_role_channel_rows(vec![])
        .build()
        .await
        .unwrap();
    let config = config(&test, NudgePolicy::default());
    let discord = client(&config);

    let result = NudgeService::new(&discord, &config).run(now()).await;

    assert!(matches!(
        result,
        Err(AppError::StoreErr(StoreError::Io { .. }))
    ));
    assert!(test.received().await.is_empty());
}

/// Tests that a missing registry aborts the run before anything else happens.
///
/// Expected: Err(AppError::StoreErr(StoreError::Io)) and no request at all
#[tokio::test]
async fn missing_registry_aborts_run() {
    let test = TestBuilder::new()
        .with_members(vec![MemberFactory::new().joined_days_ago(5).build()])
        .with_all_endpoints()
        .with_nudge_rows(vec![])
        .build()
        .await
        .unwrap();
    let config = config(&test, NudgePolicy::default());
    let discord = client(&config);

    let result = NudgeService::new(&discord, &config).run(now()).await;

    assert!(matches!(
        result,
        Err(AppError::StoreErr(StoreError::Io { .. }))
    ));
    assert!(test.received().await.is_empty());
    assert!(!test.role_channel_log_path().exists());
}

/// Tests that a failed batch request leaves both record files untouched.
///
/// Expected: Err(AppError::DiscordApiErr) and empty record files
#[tokio::test]
async fn failed_channel_creation_writes_no_records() {
    let test = TestBuilder::new()
        .with_members(vec![MemberFactory::new().joined_days_ago(5).build()])
        .with_all_endpoints()
        .with_failure(
            "POST",
            format!("/guilds/{}/channels", test_utils::TEST_GUILD_ID),
            403,
        )
        .with_empty_record_files()
        .build()
        .await
        .unwrap();
    let config = config(&test, NudgePolicy::default());
    let discord = client(&config);

    let result = NudgeService::new(&discord, &config).run(now()).await;

    assert!(matches!(result, Err(AppError::DiscordApiErr(_))));
    assert_eq!(test.read_nudge_log().unwrap(), "");
    assert_eq!(test.read_role_channel_log().unwrap(), "");
}
