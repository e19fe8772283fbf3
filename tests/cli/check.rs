use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

fn project_with_locales(vi: &str, en: &str) -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("messages/vi.json", vi)?;
    test.write_file("messages/en.json", en)?;
    Ok(test)
}

#[test]
fn test_full_report() -> Result<()> {
    let test = project_with_locales(
        r#"{"a": {"b": "x"}, "shared": "s"}"#,
        r#"{"a": {"c": "y"}, "shared": "s"}"#,
    )?;
    test.write_file(
        "src/app.tsx",
        "t('a.b')\nt(`a.c`)\nt(dynamicVar)\nt('greeting.${name}')\nt('shared') + t('nowhere')\n",
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Loading messages/vi.json...
    Loading messages/en.json...
    ------------------------------
    COMPARISON: vi.json vs en.json
    ------------------------------

    Keys present in VI but MISSING in EN (1):
      - a.b

    Keys present in EN but MISSING in VI (1):
      - a.c

    ------------------------------
    CODEBASE SCAN: Checking usage in src/
    ------------------------------
    Found 4 translation calls in code.

    Keys used in code but MISSING IN BOTH files (1):
      - MISSING IN BOTH: 'nowhere' at src/app.tsx:5

    Keys used in code but MISSING IN VI (1):
      - MISSING IN VI: 'a.c' at src/app.tsx:2

    Keys used in code but MISSING IN EN (1):
      - MISSING IN EN: 'a.b' at src/app.tsx:1

    ✘ 2 locale keys out of sync, 3 code usages missing a translation

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_clean_project() -> Result<()> {
    let test = project_with_locales(
        r#"{"Home": {"title": "Trang chủ", "items": ["một", "hai"]}}"#,
        r#"{"Home": {"title": "Home", "items": ["one", "two"]}}"#,
    )?;
    test.write_file(
        "src/app/[locale]/page.tsx",
        "export default function Page() {\n  return <h1>{t(\"Home.title\")}</h1>;\n}\n",
    )?;
    test.write_file("src/components/list.jsx", "const first = t('Home.items.0');\n")?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Loading messages/vi.json...
    Loading messages/en.json...
    ------------------------------
    COMPARISON: vi.json vs en.json
    ------------------------------

    ✓ No keys missing in EN (compared to VI).

    ✓ No keys missing in VI (compared to EN).

    ------------------------------
    CODEBASE SCAN: Checking usage in src/
    ------------------------------
    Found 2 translation calls in code.

    ✓ Locales are in sync and every key used in code is defined

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_disjoint_locales() -> Result<()> {
    let test = project_with_locales(r#"{"vi": {"one": "1"}}"#, r#"{"en": ["a", "b"]}"#)?;
    test.write_file("src/.keep.ts", "")?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Keys present in VI but MISSING in EN (1):\n  - vi.one\n"));
    assert!(stdout.contains("Keys present in EN but MISSING in VI (2):\n  - en.0\n  - en.1\n"));

    Ok(())
}

#[test]
fn test_missing_and_malformed_locales_are_not_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", "{ \"Home\": ")?;
    test.write_file("src/app.ts", "t('Home.title')\n")?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stdout.contains("Loading messages/vi.json...\nerror: File not found: messages/vi.json\n"));
    assert!(stdout.contains("Loading messages/en.json...\nerror: Invalid JSON in messages/en.json: "));
    assert!(stdout.contains("Found 1 translation call in code."));
    assert!(stdout.contains("  - MISSING IN BOTH: 'Home.title' at src/app.ts:1"));

    Ok(())
}

#[test]
fn test_unreadable_source_file_is_skipped() -> Result<()> {
    let test = project_with_locales("{}", "{}")?;
    test.write_file("src/a.ts", "t('first')\n")?;
    std::fs::write(test.root().join("src/b.ts"), [0xff, 0xfe, 0x00])?;
    test.write_file("src/c.ts", "t('last')\n")?;

    let output = test.check_command().output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert_eq!(stdout.matches("error: Failed to read src/b.ts").count(), 1);
    assert!(stdout.contains("Found 2 translation calls in code."));
    assert!(stdout.contains("'first' at src/a.ts:1"));
    assert!(stdout.contains("'last' at src/c.ts:1"));

    Ok(())
}

#[test]
fn test_config_file_paths_functions_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".localeauditrc.json",
        r#"{
              "localeAPath": "locales/de.json",
              "localeBPath": "locales/fr.json",
              "sourceDir": "app",
              "translationFunctions": ["t", "$t", "i18n.translate"],
              "ignores": ["app/generated"]
          }"#,
    )?;
    test.write_file("locales/de.json", r#"{"nav": {"home": "Start"}}"#)?;
    test.write_file("locales/fr.json", r#"{"nav": {"home": "Accueil"}}"#)?;
    test.write_file("app/header.tsx", "<a>{$t('nav.home')}</a>\n")?;
    test.write_file(
        "app/menu.ts",
        "i18n.translate('nav.home')\ni18n.translate('nav.about')\n",
    )?;
    test.write_file("app/generated/keys.ts", "t('nav.generated')\n")?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Loading locales/de.json...
    Loading locales/fr.json...
    ------------------------------
    COMPARISON: de.json vs fr.json
    ------------------------------

    ✓ No keys missing in FR (compared to DE).

    ✓ No keys missing in DE (compared to FR).

    ------------------------------
    CODEBASE SCAN: Checking usage in app/
    ------------------------------
    Found 3 translation calls in code.

    Keys used in code but MISSING IN BOTH files (1):
      - MISSING IN BOTH: 'nav.about' at app/menu.ts:2

    ✘ 0 locale keys out of sync, 1 code usage missing a translation

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_same_stem_locales_are_told_apart() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("v1/en.json", r#"{"only_a": "x"}"#)?;
    test.write_file("v2/en.json", r#"{"only_b": "y"}"#)?;
    test.write_file("src/app.ts", "t('only_a')\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--locale-a", "v1/en.json", "--locale-b", "v2/en.json"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Loading v1/en.json...
    Loading v2/en.json...
    ------------------------------
    COMPARISON: v1/en.json vs v2/en.json
    ------------------------------

    Keys present in v1/en.json but MISSING in v2/en.json (1):
      - only_a

    Keys present in v2/en.json but MISSING in v1/en.json (1):
      - only_b

    ------------------------------
    CODEBASE SCAN: Checking usage in src/
    ------------------------------
    Found 1 translation call in code.

    Keys used in code but MISSING IN v2/en.json (1):
      - MISSING IN v2/en.json: 'only_a' at src/app.ts:1

    ✘ 2 locale keys out of sync, 1 code usage missing a translation

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_cli_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/a.json", r#"{"x": "1"}"#)?;
    test.write_file("i18n/b.json", r#"{"x": "1", "y": "2"}"#)?;
    test.write_file("web/src/index.js", "t('y')\n")?;

    let mut cmd = test.check_command();
    cmd.args([
        "--locale-a",
        "i18n/a.json",
        "--locale-b",
        "i18n/b.json",
        "--source-dir",
        "web/src",
        "--base-dir",
        "web",
        "-v",
    ]);
    let output = cmd.output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stdout.contains("Keys present in B but MISSING in A (1):\n  - y\n"));
    assert!(stdout.contains("Scanned 1 source file."));
    assert!(stdout.contains("  - MISSING IN A: 'y' at src/index.js:1"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".localeauditrc.json", r#"{ "translationFunctions": [] }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: 'translationFunctions' must name at least one function
    ");

    Ok(())
}

#[test]
fn test_invalid_ignore_glob_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".localeauditrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.check_command().output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("Error: Invalid glob pattern in 'ignores': \"[invalid\""));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("init"));

    Ok(())
}
