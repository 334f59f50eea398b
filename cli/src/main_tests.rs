use mockall::mock;
use std::io::Cursor;
use tempfile::TempDir;
use workpad_lib::{
    error::{ErrorResponse, WorkpadError},
    notify::{Toast, ToastKind},
    store::Dispatched,
    workpad::Asset,
};

use super::*;

mock! {
    Service {}
    impl WorkpadService for Service {
        fn update(&self, id: &str, workpad: &PersistedWorkpad) -> LibResult<()>;
    }
}

mock! {
    Toaster {}
    impl Notifier for Toaster {
        fn notify(&self, toast: Toast);
    }
}

mock! {
    Store {}
    impl Dispatcher for Store {
        fn dispatch(&self, action: Action) -> Dispatched;
    }
}

fn default_args() -> Args {
    Args {
        config: None,
        kibana_url: None,
        workpad: PathBuf::from("workpad.json"),
        assets: None,
        actions: None,
        dry_run: false,
        quiet: false,
        debug: false,
    }
}

fn gate(service: MockService) -> PersistGate {
    let mut notifier = MockToaster::new();
    notifier.expect_notify().return_const(());

    PersistGate::builder()
        .service(Arc::new(service))
        .notifier(Arc::new(notifier))
        .build()
        .unwrap()
}

fn persisted() -> PersistedWorkpad {
    PersistedWorkpad::from_parts(&Workpad::new("report"), &AssetMap::new())
}

#[test]
fn initializes_logger() {
    let args = default_args();
    initialize_logger(&args).unwrap();
}

#[test]
fn prints_args() {
    let args = Args {
        assets: Some(PathBuf::from("assets.json")),
        actions: Some(PathBuf::from("edits.jsonl")),
        ..default_args()
    };

    print_args(&args, &Config::default());
}

#[test]
fn loads_config_with_url_override() {
    let dir = TempDir::new().unwrap();
    let args = Args {
        config: Some(dir.path().join("config.yml")),
        kibana_url: Some("http://kibana:5601".to_string()),
        ..default_args()
    };

    let config = load_config(&args).unwrap();

    assert_eq!(config.kibana_url, "http://kibana:5601");
    assert!(dir.path().join("config.yml").exists());
}

#[test]
fn loads_workpad_and_assets() {
    let dir = TempDir::new().unwrap();
    let workpad = Workpad::new("report");
    let asset = Asset::new("dataurl", "data:image/png;base64,AAAA");
    let assets = AssetMap::from([(asset.id.clone(), asset)]);

    let workpad_path = dir.path().join("workpad.json");
    let assets_path = dir.path().join("assets.json");
    fs::write(&workpad_path, serde_json::to_string(&workpad).unwrap()).unwrap();
    fs::write(&assets_path, serde_json::to_string(&assets).unwrap()).unwrap();

    assert_eq!(load_workpad(&workpad_path).unwrap().id, workpad.id);
    assert_eq!(load_assets(&assets_path).unwrap(), assets);
}

#[test]
fn reports_missing_workpad() {
    let dir = TempDir::new().unwrap();
    let result = load_workpad(&dir.path().join("missing.json"));
    assert!(result.is_err());
}

#[test]
fn parses_actions_skipping_blank_lines_and_comments() {
    let log = r#"
# rename first
{"type":"SET_NAME","payload":"renamed"}

{"type":"ADD_PAGE"}
   # zoom is transient
{"type":"SET_ZOOM_SCALE","payload":2.0}
"#;

    let actions = parse_actions(Cursor::new(log)).unwrap();

    assert_eq!(actions.len(), 3);
    assert_eq!(actions[0], Action::SetName("renamed".to_string()));
    assert_eq!(actions[1], Action::AddPage);
    assert_eq!(actions[2], Action::SetZoomScale(2.0));
}

#[test]
fn reports_line_of_invalid_action() {
    let log = "{\"type\":\"ADD_PAGE\"}\n{\"type\":\"NOT_AN_ACTION\"}\n";

    let err = parse_actions(Cursor::new(log)).unwrap_err();

    assert!(err.to_string().contains("line 2"));
}

#[test]
fn creates_notifier_for_each_mode() {
    create_notifier(NotificationMode::Log).notify(Toast::new(
        ToastKind::Info,
        "log",
        "",
    ));
    create_notifier(NotificationMode::Silent).notify(Toast::new(
        ToastKind::Info,
        "silent",
        "",
    ));
}

#[test]
fn dry_run_service_writes_json_lines() {
    let service = DryRunService::new(Vec::new());
    let workpad = persisted();

    service.update(&workpad.id, &workpad).unwrap();
    service.update(&workpad.id, &workpad).unwrap();

    let written = String::from_utf8(service.into_inner()).unwrap();
    let lines = written.lines().collect_vec();
    assert_eq!(lines.len(), 2);
    let parsed: PersistedWorkpad = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(parsed, workpad);
}

#[test]
fn replay_collects_persist_handles() {
    let mut service = MockService::new();
    service.expect_update().times(1).returning(|_, _| Ok(()));
    let gate = gate(service);

    let mut store = MockStore::new();
    store
        .expect_dispatch()
        .withf(|action| *action == Action::SetName("renamed".to_string()))
        .times(1)
        .returning(move |_| Dispatched::Persisting(gate.persist(persisted())));
    store
        .expect_dispatch()
        .withf(|action| *action == Action::SetZoomScale(2.0))
        .times(1)
        .returning(|_| Dispatched::Applied);

    let handles = replay(
        &store,
        vec![
            Action::SetZoomScale(2.0),
            Action::SetName("renamed".to_string()),
        ],
    );

    assert_eq!(handles.len(), 1);
    assert_eq!(
        summarize(handles),
        Summary {
            saved: 1,
            failed: 0,
            aborted: 0,
        }
    );
}

#[test]
fn summarizes_failed_persists() {
    let mut service = MockService::new();
    service.expect_update().times(2).returning(|_, _| {
        Err(WorkpadError::Response(ErrorResponse {
            status: 400,
            message: "bad request".to_string(),
        }))
    });
    let gate = gate(service);

    let handles = vec![gate.persist(persisted()), gate.persist(persisted())];

    let summary = summarize(handles);

    assert_eq!(
        summary,
        Summary {
            saved: 0,
            failed: 2,
            aborted: 0,
        }
    );
    print_summary(&summary);
}

#[test]
fn replays_through_real_store_in_dry_run() {
    let workpad = Workpad::new("report");
    let gate = PersistGate::builder()
        .service(Arc::new(DryRunService::new(Vec::new())))
        .notifier(create_notifier(NotificationMode::Silent))
        .build()
        .unwrap();

    let mut store = Store::new(State::default(), StoreReducer::boxed());
    store.add_middleware(gate);

    assert!(
        !store
            .dispatch(Action::SetWorkpad(workpad))
            .is_persisting()
    );

    let handles = replay(
        &store,
        vec![
            Action::SetName("renamed".to_string()),
            Action::SetZoomScale(2.0),
            Action::AddPage,
        ],
    );

    assert_eq!(summarize(handles).saved, 2);
}
