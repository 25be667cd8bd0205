use super::*;

fn record(id: u64) -> GameRecord {
    GameRecord::new(id, format!("Game {id}"), Category::Casual, "/games/images/logo.png")
}

#[test]
fn description_follows_category() {
    let r = GameRecord::new(1, "Snake", Category::Strategy, "/x.png");
    assert_eq!(r.description, Category::Strategy.description());
}

#[test]
fn fallback_name_uses_id() {
    assert_eq!(fallback_name(42), "游戏 42");
}

#[test]
fn push_keeps_ascending_order_with_gaps() {
    let mut catalog = Catalog::new();
    catalog.push(record(1)).unwrap();
    catalog.push(record(5)).unwrap();
    catalog.push(record(9)).unwrap();
    let ids: Vec<u64> = catalog.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 5, 9]);
    assert_eq!(catalog.get(5).map(|r| r.name.as_str()), Some("Game 5"));
    assert!(catalog.get(2).is_none());
}

#[test]
fn push_rejects_duplicate() {
    let mut catalog = Catalog::new();
    catalog.push(record(3)).unwrap();
    assert_eq!(catalog.push(record(3)), Err(CatalogError::DuplicateId(3)));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn push_rejects_out_of_order() {
    let mut catalog = Catalog::new();
    catalog.push(record(7)).unwrap();
    assert_eq!(
        catalog.push(record(2)),
        Err(CatalogError::OutOfOrder { id: 2, last: 7 })
    );
}

#[test]
fn serializes_as_plain_array_in_field_order() {
    let mut catalog = Catalog::new();
    catalog
        .push(GameRecord::new(1, "Tetris", Category::Puzzle, "/games/yxmb/1/logo.png"))
        .unwrap();
    let json = serde_json::to_string(&catalog).unwrap();
    assert!(json.starts_with("[{\"id\":1,\"name\":\"Tetris\",\"category\":\"益智\",\"image\":"));
    assert!(json.ends_with("\"description\":\"这款益智游戏能够锻炼你的思维能力，多种关卡等你来挑战！\"}]"));
}

#[test]
fn empty_catalog() {
    let catalog = Catalog::new();
    assert!(catalog.is_empty());
    assert_eq!(serde_json::to_string(&catalog).unwrap(), "[]");
}

#[test]
fn deserialize_accepts_ordered_array() {
    let json = r#"[
        {"id": 2, "name": "A", "category": "动作", "image": "/a.png", "description": "x"},
        {"id": 10, "name": "B", "category": "冒险", "image": "/b.png", "description": "y"}
    ]"#;
    let catalog: Catalog = serde_json::from_str(json).unwrap();
    let ids: Vec<u64> = catalog.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 10]);
}

#[test]
fn deserialize_rejects_duplicate_ids() {
    let json = r#"[
        {"id": 4, "name": "A", "category": "动作", "image": "/a.png", "description": "x"},
        {"id": 4, "name": "B", "category": "动作", "image": "/b.png", "description": "x"}
    ]"#;
    let err = serde_json::from_str::<Catalog>(json).unwrap_err();
    assert!(err.to_string().contains("Duplicate game id: 4"));
}

#[test]
fn deserialize_rejects_out_of_order_ids() {
    let json = r#"[
        {"id": 9, "name": "A", "category": "益智", "image": "/a.png", "description": "x"},
        {"id": 3, "name": "B", "category": "益智", "image": "/b.png", "description": "x"}
    ]"#;
    assert!(serde_json::from_str::<Catalog>(json).is_err());
}
