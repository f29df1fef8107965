use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_site(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let content = root.join("content");
    fs::create_dir_all(&content)?;

    fs::write(
        root.join("papyr.yml"),
        r#"
site:
  title: "Test Blog"
  author: "Tester"
  description: "Desc"
  url: "https://example.com"
paths:
  content: "content"
default_locale: "en"
"#,
    )?;

    fs::write(
        content.join("rust-ownership.md"),
        r#"---
title: Rust Ownership
date: 2025-01-15
description: Memory safety without garbage collection
tags: [rust, memory]
category: Systems/Rust
featured: true
---

Ownership is the core idea of the borrow checker.
"#,
    )?;

    fs::write(
        content.join("rust-async-streams.md"),
        r#"---
title: Rust Async Streams
date: 2025-02-20
description: Streams and backpressure in async programming
tags: [rust, tokio]
category: Systems/Rust
---

Streams model values over time. Backpressure keeps memory bounded.
"#,
    )?;

    fs::write(
        content.join("typescript-patterns.md"),
        r#"---
title: Advanced TypeScript Patterns
date: 2025-03-01
description: Deep dive into TypeScript generics
tags: [typescript, patterns]
category: Frontend/TypeScript
---

Conditional types and mapped types unlock expressive APIs.
"#,
    )?;

    fs::write(
        content.join("hola-mundo.md"),
        r#"---
title: Hola Mundo
date: 2025-02-10
locale: es
tags: [intro]
category: Meta
---

Artículo de ejemplo con texto breve.
"#,
    )?;

    fs::write(
        content.join("golang-notes.md"),
        r#"---
title: Go Error Handling Notes
date: 2025-01-05
description: Error handling beyond panics
tags: [go]
category: Systems/Go
---

Error values are explicit. Panics signal bugs only.
"#,
    )?;

    fs::write(
        content.join("draft-note.md"),
        r#"---
title: Secret Draft
date: 2025-04-01
published: false
tags: [draft]
---

Not ready yet.
"#,
    )?;

    Ok(())
}

fn run_json(dir: &Path, args: &[&str]) -> Result<Value, Box<dyn std::error::Error>> {
    #[allow(deprecated)]
    let assert = Command::cargo_bin("papyr")?
        .current_dir(dir)
        .args(args)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    Ok(serde_json::from_str(&stdout)?)
}

#[test]
fn init_scaffolds_site() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("papyr initialized"));

    assert!(dir.path().join("papyr.yml").exists());
    assert!(dir.path().join("content/welcome.md").exists());

    // Re-running keeps the existing config.
    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("papyr.yml already exists"));

    // The scaffolded article loads through the normal pipeline.
    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to papyr"))
        .stdout(predicate::str::contains("welcome-to-papyr"));

    // An explicit target directory is created as needed.
    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .args(["init", "blog"])
        .assert()
        .success();
    assert!(dir.path().join("blog/papyr.yml").exists());

    Ok(())
}

#[test]
fn list_json_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    let value = run_json(dir.path(), &["list", "--json"])?;
    assert_eq!(value["kind"], "article.list");

    let data = &value["data"];
    assert_eq!(data["total"], 5);

    let articles = data["articles"].as_array().expect("articles array");
    assert_eq!(articles.len(), 5);
    assert_eq!(articles[0]["slug"], "advanced-typescript-patterns");
    assert_eq!(articles[0]["date"], "2025-03-01");
    assert_eq!(articles[0]["locale"], "en");
    assert_eq!(articles[4]["slug"], "go-error-handling-notes");

    let hola = articles
        .iter()
        .find(|a| a["slug"] == "hola-mundo")
        .expect("hola entry");
    assert_eq!(hola["locale"], "es");

    Ok(())
}

#[test]
fn list_all_includes_unpublished() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    let value = run_json(dir.path(), &["list", "--all", "--json"])?;
    let data = &value["data"];
    assert_eq!(data["total"], 6);
    assert_eq!(data["articles"][0]["slug"], "secret-draft");

    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .args(["list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Secret Draft (draft)"));

    Ok(())
}

#[test]
fn list_featured_and_locale_filters() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    let value = run_json(dir.path(), &["list", "--featured", "--json"])?;
    let data = &value["data"];
    assert_eq!(data["total"], 1);
    assert_eq!(data["articles"][0]["slug"], "rust-ownership");
    assert_eq!(data["articles"][0]["featured"], true);

    let value = run_json(dir.path(), &["list", "--locale", "es", "--json"])?;
    let data = &value["data"];
    assert_eq!(data["total"], 1);
    assert_eq!(data["articles"][0]["slug"], "hola-mundo");

    let value = run_json(dir.path(), &["list", "--locale", "en", "--json"])?;
    assert_eq!(value["data"]["total"], 4);

    Ok(())
}

#[test]
fn list_text_notes_overflow() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .args(["list", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-01 Advanced TypeScript Patterns"))
        .stdout(predicate::str::contains("... and 3 more articles"));

    Ok(())
}

#[test]
fn show_json_includes_body_and_derived_fields() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    let value = run_json(dir.path(), &["show", "rust-ownership"])?;
    assert_eq!(value["kind"], "article.full");

    let data = &value["data"];
    assert_eq!(data["slug"], "rust-ownership");
    assert_eq!(data["title"], "Rust Ownership");
    assert_eq!(data["date"], "2025-01-15");
    assert_eq!(data["category"], "Systems/Rust");
    assert_eq!(data["published"], true);
    assert_eq!(data["featured"], true);
    assert_eq!(data["locale"], "en");
    assert_eq!(data["reading_time"], 1);
    assert!(data["body"]
        .as_str()
        .expect("body string")
        .contains("borrow checker"));
    assert!(data["excerpt"]
        .as_str()
        .expect("excerpt string")
        .contains("core idea"));

    Ok(())
}

#[test]
fn show_markdown_and_raw_formats() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .args(["show", "rust-ownership", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Rust Ownership"))
        .stdout(predicate::str::contains("published: true"))
        .stdout(predicate::str::contains("Ownership is the core idea"));

    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .args(["show", "rust-ownership", "--format", "raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ownership is the core idea"))
        .stdout(predicate::str::contains("title:").not());

    Ok(())
}

#[test]
fn show_accepts_title_case_input() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    let value = run_json(dir.path(), &["show", "Rust Ownership"])?;
    assert_eq!(value["data"]["slug"], "rust-ownership");

    Ok(())
}

#[test]
fn show_unknown_slug_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .args(["show", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    Ok(())
}

#[test]
fn tags_text_alphabetical() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("go\nintro\nmemory\npatterns\nrust\ntokio\ntypescript\n");

    Ok(())
}

#[test]
fn tags_counts_and_cloud_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    let value = run_json(dir.path(), &["tags", "--counts", "--json"])?;
    assert_eq!(value["kind"], "tag.counts");

    let data = &value["data"];
    assert_eq!(data["total"], 7);

    let tags = data["tags"].as_array().expect("tags array");
    assert_eq!(tags[0]["name"], "rust");
    assert_eq!(tags[0]["count"], 2);
    assert_eq!(tags[0]["articles"].as_array().expect("articles").len(), 2);
    assert_eq!(tags[1]["name"], "go");

    let value = run_json(dir.path(), &["tags", "--cloud", "--json"])?;
    assert_eq!(value["kind"], "tag.cloud");

    let tags = value["data"]["tags"].as_array().expect("tags array");
    assert_eq!(tags[0]["name"], "go");
    assert_eq!(tags[0]["weight"], 0.0);
    assert_eq!(tags[0]["size"], "xs");

    let rust = tags
        .iter()
        .find(|t| t["name"] == "rust")
        .expect("rust entry");
    assert_eq!(rust["weight"], 1.0);
    assert_eq!(rust["size"], "2xl");

    Ok(())
}

#[test]
fn tags_related_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    let value = run_json(dir.path(), &["tags", "--related", "rust", "--json"])?;
    assert_eq!(value["kind"], "tag.related");
    assert_eq!(value["data"]["target"], "rust");
    assert_eq!(value["data"]["related"], serde_json::json!(["memory", "tokio"]));

    Ok(())
}

#[test]
fn categories_text_and_counts_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout("Frontend/TypeScript\nMeta\nSystems/Go\nSystems/Rust\n");

    let value = run_json(dir.path(), &["categories", "--counts", "--json"])?;
    assert_eq!(value["kind"], "category.counts");

    let data = &value["data"];
    assert_eq!(data["total"], 4);

    let categories = data["categories"].as_array().expect("categories array");
    assert_eq!(categories[0]["name"], "Systems/Rust");
    assert_eq!(categories[0]["count"], 2);
    assert_eq!(categories[1]["name"], "Frontend/TypeScript");

    Ok(())
}

#[test]
fn categories_hierarchy_and_tree_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    let value = run_json(dir.path(), &["categories", "--hierarchy", "--json"])?;
    assert_eq!(value["kind"], "category.hierarchy");

    let groups = value["data"]["groups"].as_array().expect("groups array");
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0]["parent"], "Frontend");
    assert_eq!(groups[0]["children"][0]["name"], "TypeScript");
    assert_eq!(groups[1]["parent"], "Systems");
    assert_eq!(groups[1]["children"][0]["name"], "Rust");
    assert_eq!(groups[1]["children"][0]["count"], 2);
    assert_eq!(groups[1]["children"][1]["name"], "Go");
    assert_eq!(groups[2]["parent"], "root");
    assert_eq!(groups[2]["children"][0]["name"], "Meta");

    let value = run_json(dir.path(), &["categories", "--tree", "--json"])?;
    assert_eq!(value["kind"], "category.tree");

    let tree = value["data"]["tree"].as_array().expect("tree array");
    assert_eq!(tree.len(), 3);
    assert_eq!(tree[0]["name"], "Frontend");
    assert_eq!(tree[1]["name"], "Meta");
    assert_eq!(tree[1]["count"], 1);
    assert_eq!(tree[2]["name"], "Systems");
    assert_eq!(tree[2]["count"], 0);
    assert_eq!(tree[2]["children"][0]["name"], "Go");
    assert_eq!(tree[2]["children"][1]["name"], "Rust");
    assert_eq!(tree[2]["children"][1]["count"], 2);
    assert_eq!(tree[2]["children"][1]["path"], "Systems/Rust");

    Ok(())
}

#[test]
fn categories_breadcrumb_and_related() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    let value = run_json(
        dir.path(),
        &["categories", "--breadcrumb", "Systems/Rust", "--json"],
    )?;
    assert_eq!(value["kind"], "category.breadcrumb");
    assert_eq!(value["data"]["category"], "Systems/Rust");

    let segments = value["data"]["segments"].as_array().expect("segments");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["name"], "Systems");
    assert_eq!(segments[0]["path"], "Systems");
    assert_eq!(segments[1]["name"], "Rust");
    assert_eq!(segments[1]["path"], "Systems/Rust");

    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .args(["categories", "--breadcrumb", "Systems/Rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Systems > Rust"));

    let value = run_json(
        dir.path(),
        &["categories", "--related", "Systems/Rust", "--json"],
    )?;
    assert_eq!(value["kind"], "category.related");
    assert_eq!(value["data"]["related"], serde_json::json!(["Systems/Go"]));

    #[allow(deprecated)]
    Command::cargo_bin("papyr")?
        .current_dir(dir.path())
        .args(["categories", "--related", "Meta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories related to 'Meta'"));

    Ok(())
}
