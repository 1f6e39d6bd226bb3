//! Snapshot serialisation: observers read game state as JSON.

use serde_json::Value;

use tile_blast::engine::Session;
use tile_blast::types::{BoosterKind, GameConfig, Tile, TileColor};

#[test]
fn test_snapshot_json_fields() {
    let config = GameConfig {
        rows: 4,
        cols: 5,
        goal_score: 120,
        seed: 31,
        ..GameConfig::default()
    };
    let mut session = Session::new(config).unwrap();
    session.select_booster(BoosterKind::SwapTile).unwrap();
    session.tap(2, 3).unwrap();

    let json: Value = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["rows"], 4);
    assert_eq!(json["cols"], 5);
    assert_eq!(json["goal_score"], 120);
    assert_eq!(json["status"], "playing");
    assert_eq!(json["active_booster"], "swap_tile");
    assert_eq!(json["pending_swap"], serde_json::json!([2, 3]));
    assert_eq!(json["cells"].as_array().map(Vec::len), Some(20));

    let first = &json["cells"][0];
    assert_eq!(first["row"], 0);
    assert_eq!(first["col"], 0);
    assert!(first["id"].as_u64().is_some());
    let color = first["color"].as_str().unwrap();
    assert!(TileColor::from_str(color).is_some());
}

#[test]
fn test_tile_json_shape() {
    let tile = Tile::new(7, TileColor::Purple, 3, 1);
    let json = serde_json::to_string(&tile).unwrap();
    assert_eq!(json, r#"{"id":7,"color":"purple","row":3,"col":1}"#);
}

#[test]
fn test_config_json_shape() {
    let json: Value = serde_json::to_value(GameConfig::default()).unwrap();
    assert_eq!(json["rows"], 9);
    assert_eq!(json["moves"], 20);
    assert_eq!(json["shuffle_allowance"], 3);
    assert_eq!(json["bomb_radius"], 1);
}
