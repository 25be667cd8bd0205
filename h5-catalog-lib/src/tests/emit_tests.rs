use super::*;
use h5_catalog_core::{Category, GameRecord};
use tempfile::TempDir;

fn sample() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .push(GameRecord::new(1, "Snake", Category::Casual, "/games/yxmb/1/logo.png"))
        .unwrap();
    catalog
        .push(GameRecord::new(3, "游戏 3", Category::Action, "/games/images/logo.png"))
        .unwrap();
    catalog
}

#[test]
fn json_uses_two_space_indent() {
    let json = JsonWriter.render(&sample()).unwrap();
    assert!(json.starts_with("[\n  {\n    \"id\": 1,\n    \"name\": \"Snake\",\n"));
    assert!(json.contains("    \"category\": \"休闲\",\n"));
    assert!(json.ends_with("  }\n]"));
}

#[test]
fn json_parses_back_to_same_catalog() {
    let catalog = sample();
    let json = JsonWriter.render(&catalog).unwrap();
    let parsed: Catalog = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, catalog);
}

#[test]
fn ts_wraps_identical_json() {
    let catalog = sample();
    let json = JsonWriter.render(&catalog).unwrap();
    let ts = TsConstWriter::new("gamesData").render(&catalog).unwrap();
    assert_eq!(
        ts,
        format!("// 游戏数据常量\nexport const gamesData = {};\n", json)
    );
}

#[test]
fn empty_catalog_renders_empty_array() {
    let ts = TsConstWriter::new("games").render(&Catalog::new()).unwrap();
    assert_eq!(ts, "// 游戏数据常量\nexport const games = [];\n");
}

#[test]
fn render_all_keeps_target_order() {
    let tmp = TempDir::new().unwrap();
    let ts = TsConstWriter::new("gamesData");
    let targets: Vec<(&dyn CatalogWriter, PathBuf)> = vec![
        (&JsonWriter as &dyn CatalogWriter, tmp.path().join("a.json")),
        (&ts as &dyn CatalogWriter, tmp.path().join("b.ts")),
    ];
    let outputs = render_all(&sample(), &targets).unwrap();
    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[0].label, "JSON");
    assert_eq!(outputs[1].label, "TypeScript");
    assert_eq!(outputs[1].path, tmp.path().join("b.ts"));
}

#[test]
fn write_file_creates_parents_and_overwrites() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("src/common/constants/games.ts");
    write_file(&path, "first").unwrap();
    write_file(&path, "second").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
}

#[test]
fn write_file_reports_path_on_failure() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, "file").unwrap();
    let path = blocker.join("out.json");
    match write_file(&path, "x") {
        Err(GenerateError::Write { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected write error, got {:?}", other),
    }
}
