//! Team keyword commands.

use serde_json::json;

use crate::cli::output;
use crate::core::config::Config;
use crate::error::Result;

/// Print the canonical keyword for each label.
pub fn normalize(config: &Config, labels: &[String], json: bool) -> Result<()> {
    let results: Vec<(&str, Option<&str>)> = labels
        .iter()
        .map(|label| (label.as_str(), config.teams.normalize(Some(label.as_str()))))
        .collect();

    if json {
        let items: Vec<_> = results
            .iter()
            .map(|(label, keyword)| json!({ "label": label, "keyword": keyword }))
            .collect();
        output::data(&serde_json::to_string_pretty(&items)?);
    } else if let [(_, keyword)] = results.as_slice() {
        output::data(keyword.unwrap_or("-"));
    } else {
        for (label, keyword) in results {
            output::data(&format!("{}\t{}", label, keyword.unwrap_or("-")));
        }
    }

    Ok(())
}

/// List the keyword table in priority order.
pub fn list(config: &Config, json: bool) -> Result<()> {
    let groups = config.teams.groups();

    if json {
        output::data(&serde_json::to_string_pretty(&json!({
            "teams": groups,
            "count": groups.len(),
        }))?);
    } else if groups.is_empty() {
        output::dimmed("no team keywords");
    } else {
        output::header(&format!("{} team keywords", groups.len()));
        output::rule();
        for group in groups {
            output::kv(&group.keyword, group.aliases.join(", "));
        }
    }

    Ok(())
}
