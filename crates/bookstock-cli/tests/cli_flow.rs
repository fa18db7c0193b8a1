use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bookstock"))
}

/// Isolated XDG home with its own store path.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("config")).expect("create config dir");
        std::fs::create_dir_all(dir.path().join("data")).expect("create data dir");
        Self { dir }
    }

    fn store(&self) -> PathBuf {
        self.dir.path().join("shop").join("inventory.db")
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn data_home(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    /// Command with XDG env applied but no `--store`.
    fn bare(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .stdin(Stdio::null());
        cmd
    }

    /// Command pointed at this sandbox's store.
    fn cmd(&self) -> Command {
        let mut cmd = self.bare();
        cmd.arg("--store").arg(self.store());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.cmd().args(args).output().expect("run bookstock")
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.run(args);
        assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("parse json output")
    }

    fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.config_home().join("bookstock").join("config.toml");
        std::fs::create_dir_all(path.parent().expect("config parent")).expect("create dir");
        std::fs::write(&path, contents).expect("write config");
        path
    }
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: stdout={}, stderr={}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn add_cien_anos(sandbox: &Sandbox) -> Output {
    sandbox.run(&[
        "add",
        "--id",
        "1",
        "--title",
        "Cien años de soledad",
        "--author",
        "Gabriel García Márquez",
        "--quantity",
        "10",
        "--price",
        "25.50",
        "--genre",
        "Ficción",
    ])
}

fn ids(value: &serde_json::Value) -> Vec<i64> {
    value
        .as_array()
        .expect("json array")
        .iter()
        .map(|book| book["id"].as_i64().expect("numeric id"))
        .collect()
}

#[test]
fn test_cli_add_show_list_stats() {
    let sandbox = Sandbox::new();

    let add = add_cien_anos(&sandbox);
    assert_success(&add);
    let out = stdout(&add);
    assert!(out.contains("status=ok"));
    assert!(out.contains("id=1"));
    assert!(sandbox.store().exists());

    let book = sandbox.json(&["show", "1", "--json"]);
    assert_eq!(book["title"], "Cien años de soledad");
    assert_eq!(book["author"], "Gabriel García Márquez");
    assert_eq!(book["quantity"], 10);
    assert_eq!(book["price"], 25.5);
    assert_eq!(book["genre"], "Ficción");

    let listed = sandbox.json(&["list", "--genre", "Ficción", "--json"]);
    assert_eq!(ids(&listed), vec![1]);

    let stats = sandbox.json(&["stats", "--json"]);
    assert_eq!(stats["total_titles"], 1);
    assert_eq!(stats["total_units"], 10);
    let value = stats["total_value"].as_f64().expect("total value");
    assert!((value - 255.0).abs() < 1e-9);
}

#[test]
fn test_cli_show_text() {
    let sandbox = Sandbox::new();
    assert_success(&add_cien_anos(&sandbox));

    let show = sandbox.run(&["show", "1"]);
    assert_success(&show);
    let out = stdout(&show);
    assert!(out.contains("title=Cien años de soledad"));
    assert!(out.contains("price=$25.50"));
    assert!(out.contains("stock_value=$255.00"));
}

#[test]
fn test_cli_duplicate_id_exits_with_duplicate_code() {
    let sandbox = Sandbox::new();
    assert_success(&add_cien_anos(&sandbox));

    let again = add_cien_anos(&sandbox);
    assert_eq!(again.status.code(), Some(5));
    assert!(stderr(&again).contains("A book with ID 1 already exists"));

    let listed = sandbox.json(&["list", "--json"]);
    assert_eq!(ids(&listed), vec![1]);
}

#[test]
fn test_cli_missing_book_exits_not_found() {
    let sandbox = Sandbox::new();

    let remove = sandbox.run(&["remove", "999"]);
    assert_eq!(remove.status.code(), Some(3));
    assert!(stderr(&remove).contains("No book exists with ID 999"));

    let show = sandbox.run(&["show", "999"]);
    assert_eq!(show.status.code(), Some(3));
}

#[test]
fn test_cli_negative_price_is_rejected() {
    let sandbox = Sandbox::new();
    assert_success(&add_cien_anos(&sandbox));

    let update = sandbox.run(&["set-price", "1", "-5"]);
    assert_eq!(update.status.code(), Some(4));
    assert!(stderr(&update).contains("Price must be a non-negative number (got \"-5\")"));

    let book = sandbox.json(&["show", "1", "--json"]);
    assert_eq!(book["price"], 25.5);
}

#[test]
fn test_cli_invalid_fields_on_add() {
    let sandbox = Sandbox::new();

    let add = sandbox.run(&[
        "add", "--id", "2", "--title", "   ", "--author", "Nadie", "--quantity", "1",
        "--price", "1",
    ]);
    assert_eq!(add.status.code(), Some(4));
    assert!(stderr(&add).contains("Title must not be empty"));

    let add = sandbox.run(&[
        "add", "--id", "2", "--title", "Algo", "--author", "Nadie", "--quantity", "-1",
        "--price", "1",
    ]);
    assert_eq!(add.status.code(), Some(4));

    let listed = sandbox.json(&["list", "--json"]);
    assert!(ids(&listed).is_empty());
}

#[test]
fn test_cli_set_quantity_and_remove() {
    let sandbox = Sandbox::new();
    assert_success(&add_cien_anos(&sandbox));

    let update = sandbox.run(&["set-quantity", "1", "3"]);
    assert_success(&update);
    assert!(stdout(&update).contains("quantity=3"));

    let remove = sandbox.run(&["remove", "1"]);
    assert_success(&remove);
    assert!(stdout(&remove).contains("title=Cien años de soledad"));

    let show = sandbox.run(&["show", "1"]);
    assert_eq!(show.status.code(), Some(3));
}

#[test]
fn test_cli_seed_is_idempotent() {
    let sandbox = Sandbox::new();

    let first = sandbox.run(&["seed"]);
    assert_success(&first);
    assert!(stdout(&first).contains("Loaded 8 sample books"));

    let second = sandbox.run(&["seed"]);
    assert_success(&second);
    let out = stdout(&second);
    assert!(out.contains("Loaded 0 sample books"));
    assert!(out.contains("Kept existing IDs: 1, 2, 3, 4, 5, 6, 7, 8"));

    let listed = sandbox.json(&["list", "--json"]);
    assert_eq!(ids(&listed), vec![1, 2, 3, 4, 5, 6, 7, 8]);

    let stats = sandbox.json(&["stats", "--json"]);
    assert_eq!(stats["total_units"], 87);
    let value = stats["total_value"].as_f64().expect("total value");
    assert!((value - 3221.43).abs() < 1e-6);
    assert_eq!(
        stats["genre_counts"].as_array().map(Vec::len),
        Some(8),
        "one entry per genre"
    );
}

#[test]
fn test_cli_search_is_case_insensitive_genre_is_not() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.run(&["seed"]));

    let found = sandbox.json(&["search", "ORWELL", "--json"]);
    assert_eq!(ids(&found), vec![3]);

    let by_id = sandbox.json(&["search", "5", "--json"]);
    assert_eq!(ids(&by_id), vec![5]);

    let none = sandbox.json(&["search", "zzz", "--json"]);
    assert!(ids(&none).is_empty());

    let exact = sandbox.json(&["list", "--genre", "Ficción", "--json"]);
    assert_eq!(ids(&exact), vec![1]);
    let lower = sandbox.json(&["list", "--genre", "ficción", "--json"]);
    assert!(ids(&lower).is_empty());
}

#[test]
fn test_cli_shelves_json() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.run(&["seed"]));

    let shelves = sandbox.json(&["shelves", "--json"]);
    let shelves = shelves.as_array().expect("shelves array");
    assert_eq!(shelves.len(), 8);
    let genres: Vec<&str> = shelves
        .iter()
        .map(|s| s["genre"].as_str().expect("genre"))
        .collect();
    let mut sorted = genres.clone();
    sorted.sort();
    assert_eq!(genres, sorted);
}

#[test]
fn test_cli_menu_session_over_pipe() {
    let sandbox = Sandbox::new();

    let mut child = sandbox
        .cmd()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn menu");
    {
        let stdin = child.stdin.as_mut().expect("menu stdin");
        stdin
            .write_all(
                "1\n4\nEl principito\nAntoine de Saint-Exupéry\n20\n25.90\nInfantil\n\
                 2\n999\n\
                 42\n\
                 8\n\
                 9\n"
                    .as_bytes(),
            )
            .expect("write script");
    }
    let output = child.wait_with_output().expect("menu output");
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.contains("1. Add a new book"));
    assert!(out.contains("Added \"El principito\" (ID 4)"));
    assert!(out.contains("No book exists with ID 999"));
    assert!(out.contains("Please enter a number from 1 to 9"));
    assert!(out.contains("titles=1"));
    assert!(out.contains("Goodbye!"));

    let listed = sandbox.json(&["list", "--json"]);
    assert_eq!(ids(&listed), vec![4]);
}

#[test]
fn test_cli_menu_ends_on_closed_stdin() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["menu"]);
    assert_success(&output);
    assert!(stdout(&output).contains("Goodbye!"));
}

#[test]
fn test_cli_config_store_path_and_currency() {
    let sandbox = Sandbox::new();
    let store = sandbox.dir.path().join("from-config.db");
    sandbox.write_config(&format!(
        "[store]\npath = \"{}\"\n\n[ui]\ncurrency = \"€\"\n",
        store.display()
    ));

    let add = sandbox
        .bare()
        .args([
            "add", "--id", "7", "--title", "Emma", "--author", "Jane Austen", "--quantity",
            "2", "--price", "9.5",
        ])
        .output()
        .expect("run add");
    assert_success(&add);
    assert!(stdout(&add).contains("price=€9.50"));
    assert!(store.exists());
}

#[test]
fn test_cli_default_store_under_xdg_data() {
    let sandbox = Sandbox::new();
    let seed = sandbox.bare().arg("seed").output().expect("run seed");
    assert_success(&seed);
    assert!(sandbox
        .data_home()
        .join("bookstock")
        .join("inventory.db")
        .exists());
}

#[test]
fn test_cli_explicit_config_flag() {
    let sandbox = Sandbox::new();
    let config = sandbox.dir.path().join("custom.toml");
    std::fs::write(&config, "[ui]\ncurrency = \"£\"\n").expect("write config");
    assert_success(&add_cien_anos(&sandbox));

    let show = sandbox
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["show", "1"])
        .output()
        .expect("run show");
    assert_success(&show);
    assert!(stdout(&show).contains("price=£25.50"));
}

#[test]
fn test_cli_malformed_config_fails() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[store\npath = 1\n");

    let output = sandbox.run(&["list"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to parse config"));
}

#[test]
fn test_cli_unusable_store_exits_storage_code() {
    let sandbox = Sandbox::new();
    let blocker = sandbox.dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").expect("write blocker");
    let store: &Path = &blocker.join("inventory.db");

    let output = sandbox
        .bare()
        .arg("--store")
        .arg(store)
        .arg("stats")
        .output()
        .expect("run stats");
    assert_eq!(output.status.code(), Some(6));
}

#[test]
fn test_cli_log_level_writes_to_stderr_only() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--log-level", "debug", "list", "--json"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("clean json");
    assert!(value.as_array().expect("array").is_empty());
}

#[test]
fn test_cli_completions() {
    let output = Command::new(bin())
        .args(["completions", "bash"])
        .output()
        .expect("run completions");
    assert_success(&output);
    assert!(stdout(&output).contains("bookstock"));
}
