use std::cell::RefCell;
use std::fs;
use std::path::Path;

use h5_catalog_lib::settings::GamesSettings;
use h5_catalog_lib::*;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A small project tree in the default layout.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let games = "public/games/yxmb";
    write(
        tmp.path(),
        &format!("{games}/1/index.html"),
        "<html><title> My Game </title><h1>Other</h1></html>",
    );
    write(tmp.path(), &format!("{games}/1/logo.png"), "");
    write(tmp.path(), &format!("{games}/1/images/cover.jpg"), "");
    write(
        tmp.path(),
        &format!("{games}/2/index.html"),
        "<body><h2>Brick Breaker</h2></body>",
    );
    write(tmp.path(), &format!("{games}/2/images/other.png"), "");
    write(tmp.path(), &format!("{games}/2/images/cover.jpg"), "");
    fs::create_dir_all(tmp.path().join(format!("{games}/3"))).unwrap();
    fs::create_dir_all(tmp.path().join(format!("{games}/abc"))).unwrap();
    write(tmp.path(), &format!("{games}/abc/index.html"), "<title>Nope</title>");
    tmp
}

#[derive(Default)]
struct RecordingProgress {
    found: RefCell<Option<usize>>,
    games: RefCell<Vec<(usize, usize, u64, String)>>,
    written: RefCell<Vec<String>>,
}

impl GenerateProgress for RecordingProgress {
    fn on_found(&self, total: usize) {
        *self.found.borrow_mut() = Some(total);
    }

    fn on_game(&self, current: usize, total: usize, id: u64, name: &str) {
        self.games
            .borrow_mut()
            .push((current, total, id, name.to_string()));
    }

    fn on_written(&self, label: &str, _path: &Path) {
        self.written.borrow_mut().push(label.to_string());
    }
}

#[test]
fn generates_catalog_and_both_outputs() {
    let tmp = project();
    let settings = GamesSettings::default();
    let mut categories = FixedCategories::new(vec![Category::Action, Category::Puzzle]);
    let progress = RecordingProgress::default();

    let summary = generate(tmp.path(), &settings, &mut categories, &progress).unwrap();

    let records = summary.catalog.records();
    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    assert_eq!(records[0].name, "My Game");
    assert_eq!(records[0].image, "/games/yxmb/1/logo.png");
    assert_eq!(records[0].category, Category::Action);
    assert_eq!(records[0].description, Category::Action.description());

    assert_eq!(records[1].name, "Brick Breaker");
    assert_eq!(records[1].image, "/games/yxmb/2/images/cover.jpg");
    assert_eq!(records[1].category, Category::Puzzle);

    assert_eq!(records[2].name, "游戏 3");
    assert_eq!(records[2].image, "/games/images/logo.png");

    let json_path = tmp.path().join("public/games/games_data.json");
    let ts_path = tmp.path().join("src/common/constants/games.ts");
    assert_eq!(summary.outputs, vec![json_path.clone(), ts_path.clone()]);

    let json = fs::read_to_string(&json_path).unwrap();
    let parsed: Catalog = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, summary.catalog);

    let ts = fs::read_to_string(&ts_path).unwrap();
    assert_eq!(ts, format!("// 游戏数据常量\nexport const gamesData = {};\n", json));

    assert_eq!(*progress.found.borrow(), Some(3));
    assert_eq!(
        progress.games.borrow()[2],
        (3, 3, 3, "游戏 3".to_string())
    );
    assert_eq!(*progress.written.borrow(), vec!["JSON", "TypeScript"]);
}

#[test]
fn reruns_differ_only_in_category() {
    let tmp = project();
    let settings = GamesSettings::default();

    let first = generate(
        tmp.path(),
        &settings,
        &mut RandomCategories::seeded(1),
        &SilentProgress,
    )
    .unwrap();
    let second = generate(
        tmp.path(),
        &settings,
        &mut RandomCategories::seeded(2),
        &SilentProgress,
    )
    .unwrap();

    let key = |c: &Catalog| -> Vec<(u64, String, String)> {
        c.iter()
            .map(|r| (r.id, r.name.clone(), r.image.clone()))
            .collect()
    };
    assert_eq!(key(&first.catalog), key(&second.catalog));
    for r in first.catalog.iter().chain(second.catalog.iter()) {
        assert_eq!(r.description, r.category.description());
    }
}

#[test]
fn same_seed_reproduces_catalog() {
    let tmp = project();
    let settings = GamesSettings::default();
    let a = build_catalog(
        &tmp.path().join("public/games/yxmb"),
        &settings,
        &mut RandomCategories::seeded(99),
        &SilentProgress,
    )
    .unwrap();
    let b = build_catalog(
        &tmp.path().join("public/games/yxmb"),
        &settings,
        &mut RandomCategories::seeded(99),
        &SilentProgress,
    )
    .unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_games_root_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let settings = GamesSettings::default();
    let err = generate(
        tmp.path(),
        &settings,
        &mut FixedCategories::new(vec![Category::Casual]),
        &SilentProgress,
    )
    .unwrap_err();

    assert!(matches!(err, GenerateError::RootUnreadable { .. }));
    assert!(!tmp.path().join("public/games/games_data.json").exists());
    assert!(!tmp.path().join("src").exists());
}

#[test]
fn custom_settings_change_paths() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "static/mini/5/icon.gif", "");
    let settings = GamesSettings {
        root: "static/mini".into(),
        public_segment: "mini".to_string(),
        json_output: "out/catalog.json".into(),
        ts_output: "gen/catalog.ts".into(),
        ts_const_name: "catalog".to_string(),
        default_image: "/placeholder.png".to_string(),
        dir_names: DirNameMode::Strict,
    };

    let summary = generate(
        tmp.path(),
        &settings,
        &mut FixedCategories::new(vec![Category::Strategy]),
        &SilentProgress,
    )
    .unwrap();

    assert_eq!(summary.catalog.records()[0].image, "/games/mini/5/icon.gif");
    let ts = fs::read_to_string(tmp.path().join("gen/catalog.ts")).unwrap();
    assert!(ts.starts_with("// 游戏数据常量\nexport const catalog = [\n"));
    assert!(tmp.path().join("out/catalog.json").exists());
}

#[test]
fn lenient_mode_picks_up_prefixed_dirs() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("games/1")).unwrap();
    fs::create_dir_all(tmp.path().join("games/12abc")).unwrap();
    let settings = GamesSettings {
        dir_names: DirNameMode::Lenient,
        ..GamesSettings::default()
    };

    let catalog = build_catalog(
        &tmp.path().join("games"),
        &settings,
        &mut FixedCategories::new(Vec::new()),
        &SilentProgress,
    )
    .unwrap();

    let ids: Vec<u64> = catalog.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 12]);
    assert_eq!(catalog.records()[1].image, "/games/images/logo.png");
    assert_eq!(catalog.records()[1].name, "游戏 12");
}

#[test]
fn unreadable_game_dir_degrades_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let dir = GameDir {
        id: 9,
        name: "9".to_string(),
        path: tmp.path().join("missing/9"),
    };
    let locator = ImageLocator::new("/games/yxmb", "/games/images/logo.png");
    let mut categories = FixedCategories::new(vec![Category::Adventure]);

    let record = build_record(&dir, &locator, &mut categories);

    assert_eq!(record.id, 9);
    assert_eq!(record.name, "游戏 9");
    assert_eq!(record.image, "/games/images/logo.png");
    assert_eq!(record.category, Category::Adventure);
    assert_eq!(record.description, Category::Adventure.description());
}
