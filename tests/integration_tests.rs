use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use shared_toolbox::{
    combine, DomainEvent, IdProvider, Outcome, TimeProvider, ToolboxConfig, ZERO_ID,
};
use std::io::Write;
use tempfile::NamedTempFile;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
enum AccountEvent {
    Opened { id: Uuid, at: DateTime<Utc> },
}

impl DomainEvent for AccountEvent {}

fn open_account(
    name: &str,
    time: &dyn TimeProvider,
    ids: &dyn IdProvider,
) -> Outcome<Uuid, AccountEvent> {
    if name.trim().is_empty() {
        return Outcome::failure_msg("Missing name");
    }
    let id = ids.next();
    Outcome::success_with(id, [AccountEvent::Opened { id, at: time.now() }])
}

#[test]
fn test_config_file_wires_deterministic_providers() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[time]
mode = "fixed"
instant = "2025-01-01T12:00:00Z"

[identifiers]
mode = "fixed"
sequence = [
    "11111111-1111-1111-1111-111111111111",
    "22222222-2222-2222-2222-222222222222",
]
"#,
    )?;

    let config = ToolboxConfig::from_file(temp_file.path())?;
    let time = config.time_provider()?;
    let ids = config.id_provider()?;
    let instant = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();

    let combined = combine(
        ["ann", "bob", "cid"]
            .into_iter()
            .map(|name| open_account(name, time.as_ref(), ids.as_ref())),
    );

    assert!(combined.is_success());
    let opened: Vec<String> = combined
        .entity()
        .map(|opened_ids| opened_ids.iter().map(Uuid::to_string).collect())
        .unwrap_or_default();
    assert_eq!(
        opened,
        vec![
            "11111111-1111-1111-1111-111111111111",
            "22222222-2222-2222-2222-222222222222",
            "00000000-0000-0000-0000-000000000000",
        ]
    );
    assert_eq!(combined.events().len(), 3);
    assert!(combined
        .events()
        .iter()
        .all(|AccountEvent::Opened { at, .. }| *at == instant));

    Ok(())
}

#[test]
fn test_failed_step_discards_events() -> Result<()> {
    let config = ToolboxConfig::from_toml_str(
        r#"
[identifiers]
mode = "fixed"
sequence = ["11111111-1111-1111-1111-111111111111"]
"#,
    )?;
    let time = config.time_provider()?;
    let ids = config.id_provider()?;

    let combined: Outcome<Vec<Uuid>, AccountEvent> = ["ann", "  "]
        .into_iter()
        .map(|name| open_account(name, time.as_ref(), ids.as_ref()))
        .collect();

    assert!(combined.is_failure());
    assert_eq!(combined.errors(), &["Missing name".to_string()]);
    assert!(combined.events().is_empty());
    assert_eq!(ids.next(), ZERO_ID);

    Ok(())
}

#[test]
fn test_rendering_shows_flag_events_and_errors() {
    let id = Uuid::nil();
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let ok = Outcome::success_with(id, [AccountEvent::Opened { id, at }]);
    let rendered = ok.to_string();
    assert!(rendered.starts_with("Outcome{success=true, events={Opened"));
    assert!(rendered.ends_with("errors={}}"));

    let failed: Outcome<Uuid, AccountEvent> = Outcome::failure(["Missing name", "Invalid format"]);
    assert_eq!(
        failed.to_string(),
        r#"Outcome{success=false, events={}, errors={"Missing name", "Invalid format"}}"#
    );
}
