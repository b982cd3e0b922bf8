use std::fs;

use capture_content::{ContentFactory, LayoutLoader};
use capture_core::{AgentConfig, Position};

#[test]
fn bundled_content_loads() {
    let factory = ContentFactory::bundled();
    let config = factory.load_config().unwrap();
    assert_eq!(config, AgentConfig::default());

    let layout = factory.load_layout("default_capture").unwrap();
    assert_eq!(layout.num_agents(), 4);
    assert_eq!(layout.width(), 28);
    assert!(!layout.food().is_empty());
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let factory = ContentFactory::new(dir.path());
    assert_eq!(factory.load_config().unwrap(), AgentConfig::default());
}

#[test]
fn layout_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.lay");
    fs::write(&path, "%%%%\n%1%\n%%%%\n").unwrap();

    let err = LayoutLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("broken.lay"));
}

#[test]
fn layout_files_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("layouts")).unwrap();
    fs::write(
        dir.path().join("layouts").join("tiny.lay"),
        "%%%%%%\n%1..2%\n%%%%%%\n",
    )
    .unwrap();

    let layout = ContentFactory::new(dir.path()).load_layout("tiny").unwrap();
    assert_eq!(layout.agent_starts(), &[Position::new(1, 1), Position::new(4, 1)]);
    assert_eq!(layout.food().len(), 2);
}
