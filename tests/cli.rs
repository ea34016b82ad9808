// tests/cli.rs

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_entity-maker"))
}

fn run_in(dir: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut cmd = bin();
    cmd.current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().expect("spawn entity-maker");
    {
        // the child may exit before reading (e.g. argument errors)
        let mut pipe = child.stdin.take().expect("stdin");
        let _ = pipe.write_all(stdin.unwrap_or("").as_bytes());
    }
    child.wait_with_output().expect("wait entity-maker")
}

fn stdout_ok(out: &Output) -> String {
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn names_default_to_pascal_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["names"], Some("user_name\r\n\r\nORDER_LINE_ID\n"));
    assert_eq!(stdout_ok(&out), "UserName\nOrderLineId\n");
}

#[test]
fn names_camel_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("names.txt");
    fs::write(&input, "first_name\nlast_name\n").unwrap();

    let out = run_in(
        dir.path(),
        &["names", "--case", "camel", "--input", input.to_str().unwrap()],
        None,
    );
    assert_eq!(stdout_ok(&out), "firstName\nlastName\n");
}

#[test]
fn defs_render_csharp_properties_and_skip_bad_rows() {
    let dir = tempfile::tempdir().unwrap();
    let text = "User Name,user_name,varchar,y\nCount,cnt,int,n\nPhoto,photo,blob,n\nshort,row\n";
    let out = run_in(dir.path(), &["defs"], Some(text));
    let expected = "\
/// <summary>
/// Gets or sets the User Name.
/// </summary>
public string UserName { get; set; } = string.Empty;

/// <summary>
/// Gets or sets the Count.
/// </summary>
public int? Cnt { get; set; } = null;
";
    assert_eq!(stdout_ok(&out), expected);
}

#[test]
fn defs_as_is_keeps_physical_names() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(
        dir.path(),
        &["--plan", "compact", "defs", "--as-is"],
        Some("Born,birth_date,date,y\n"),
    );
    assert_eq!(
        stdout_ok(&out),
        "/// Born\npublic DateTime birth_date { get; set; } = DateTime.MinValue;\n"
    );
}

#[test]
fn config_file_selects_rust_pack() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("entitymaker.toml"), "lang = \"rust\"\nplan = \"compact\"\nsnake_to_pascal = false\n").unwrap();

    let out = run_in(dir.path(), &["defs"], Some("Count,cnt,int,n\n"));
    assert_eq!(stdout_ok(&out), "/// Count\npub cnt: Option<i32>,\n");
}

#[test]
fn json_output_lists_source_code() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["--json", "names", "--case", "upper"], Some("a_b\n"));
    let v: serde_json::Value = serde_json::from_str(&stdout_ok(&out)).unwrap();
    assert_eq!(v, serde_json::json!([{ "source_code": "A_B" }]));
}

#[test]
fn blank_input_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["defs"], Some("  \n\n"));
    assert_eq!(stdout_ok(&out), "");
}

#[test]
fn all_rows_skipped_is_silent_success() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["defs"], Some("Photo,photo,blob,n\n"));
    assert_eq!(stdout_ok(&out), "");
    assert!(out.stderr.is_empty());
}

#[test]
fn value_normalizes_dates_and_stays_silent_on_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["value", "2024/1/5 9:30"], None);
    assert_eq!(stdout_ok(&out), "2024/01/05 09:30:00\n");

    let out = run_in(dir.path(), &["value", "--kind", "date", "not a date"], None);
    assert_eq!(stdout_ok(&out), "");
}

#[test]
fn unknown_case_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["names", "--case", "kebab"], Some("a\n"));
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown case 'kebab'"));
}

#[test]
fn unknown_language_pack_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["--lang", "cobol", "defs"], Some("Id,id,int,y\n"));
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("language pack 'cobol' not available"));
}

fn definition_workbook(path: &Path) {
    let mut wb = rust_xlsxwriter::Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Definition").unwrap();
    for (c, h) in ["No", "Logical", "Physical", "Type", "Required"].iter().enumerate() {
        ws.write_string(0, c as u16, *h).unwrap();
    }
    let rows: [[&str; 4]; 4] = [
        ["User Name", "user_name", "varchar", "y"],
        ["Count", "cnt", "int", "n"],
        ["", "orphan", "int", "y"],
        ["After Gap", "after_gap", "text", "y"],
    ];
    for (r, row) in rows.iter().enumerate() {
        let r = r as u32 + 1;
        ws.write_number(r, 0, r as f64).unwrap();
        for (c, v) in row.iter().enumerate().filter(|(_, v)| !v.is_empty()) {
            ws.write_string(r, c as u16 + 1, *v).unwrap();
        }
    }
    wb.save(path).unwrap();
}

#[test]
fn sheet_renders_rows_up_to_the_first_incomplete_one() {
    let dir = tempfile::tempdir().unwrap();
    let book = dir.path().join("entities.xlsx");
    definition_workbook(&book);

    let out = run_in(dir.path(), &["sheet", book.to_str().unwrap()], None);
    let expected = "\
/// <summary>
/// Gets or sets the User Name.
/// </summary>
public string UserName { get; set; } = string.Empty;

/// <summary>
/// Gets or sets the Count.
/// </summary>
public int? Cnt { get; set; } = null;
";
    let stdout = stdout_ok(&out);
    assert_eq!(stdout, expected);
    assert!(!stdout.contains("AfterGap"));
}

#[test]
fn sheet_with_unknown_worksheet_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let book = dir.path().join("entities.xlsx");
    definition_workbook(&book);

    let out = run_in(dir.path(), &["sheet", book.to_str().unwrap(), "--worksheet", "Missing"], None);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("worksheet 'Missing' not found"));
}

#[test]
fn rust_pack_snake_cases_pascal_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(
        dir.path(),
        &["--lang", "rust", "--plan", "compact", "defs"],
        Some("User Name,user_name,varchar,y\nOrder Line,ORDER_LINE_ID,int,n\n"),
    );
    assert_eq!(
        stdout_ok(&out),
        "/// User Name\npub user_name: String,\n\n/// Order Line\npub order_line_id: Option<i32>,\n"
    );
}

#[test]
fn missing_spreadsheet_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["sheet", "nope.xlsx"], None);
    assert!(!out.status.success());
}
