use anyhow::{Context, Result};
use console::style;
use gitconf::config::{GitConfig, GitSnapshot};

pub fn handle_show(config: &mut GitConfig, json: bool) -> Result<()> {
    let snapshot = config.snapshot()?;

    if json {
        let text =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize git config")?;
        println!("{text}");
    } else {
        print!("{}", render(&snapshot));
    }

    Ok(())
}

fn render(snapshot: &GitSnapshot) -> String {
    let unset = style("<unset>").dim().to_string();
    let manual = snapshot
        .manual
        .as_ref()
        .map(|value| match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        })
        .unwrap_or_else(|| unset.clone());
    let published = if snapshot.published.is_empty() {
        style("<none>").dim().to_string()
    } else {
        snapshot.published.join(", ")
    };

    let rows = [
        ("commit", style(&snapshot.commit).yellow().to_string()),
        ("branch", style(&snapshot.current).cyan().bold().to_string()),
        ("manual", manual),
        ("published", published),
        (
            "upstream",
            snapshot
                .remote
                .upstream()
                .map(str::to_string)
                .unwrap_or_else(|| unset.clone()),
        ),
        (
            "tools",
            snapshot
                .remote
                .tools()
                .map(str::to_string)
                .unwrap_or_else(|| unset.clone()),
        ),
    ];

    rows.iter()
        .map(|(label, value)| format!("{:>10}  {value}\n", style(label).bold()))
        .collect()
}
