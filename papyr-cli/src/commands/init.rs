//! Init command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../../papyr.yml.example");

/// Initialize a new papyr site
pub fn init_site(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    write_config(root)?;
    scaffold_content(root)?;

    println!("✓ papyr initialized in {:?}", root);
    println!("  - Edit papyr.yml to customize site metadata");
    println!("  - Write articles in content/");
    Ok(())
}

fn write_config(root: &Path) -> Result<()> {
    let config_path = root.join("papyr.yml");
    if config_path.exists() {
        println!("papyr.yml already exists at {:?}", config_path);
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("Created {:?}", config_path);
    Ok(())
}

fn scaffold_content(root: &Path) -> Result<()> {
    let content = root.join("content");
    fs::create_dir_all(&content).with_context(|| format!("Failed to create {:?}", content))?;

    // Starter article
    let sample = content.join("welcome.md");
    if !sample.exists() {
        fs::write(&sample, sample_article())?;
        println!("Created {:?}", sample);
    }

    Ok(())
}

fn sample_article() -> String {
    r#"---
title: Welcome to papyr
date: 2025-01-01
description: Quick start guide
tags: [papyr, intro]
category: Meta
---

# Welcome

This is your new papyr content directory. Edit `papyr.yml` to update site
metadata, then try:

```bash
papyr list
papyr search "welcome"
```

Every markdown file with `title` and `date` frontmatter becomes an article.
Set `published: false` to keep a draft out of listings and search.
"#
    .to_string()
}
