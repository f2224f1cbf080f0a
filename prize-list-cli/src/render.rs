//! Terminal rendering of the grouped, filtered list.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use prize_list_lib::{AppState, DeepLink, Row, StorePlatform};

const MAX_TITLE_WIDTH: usize = 48;

/// Render every visible row, grouped by tier, followed by a count line.
pub(crate) fn render_list(state: &AppState, link: Option<&DeepLink>, descriptions: bool) {
    let target_slug = link.map(|l| l.slug.as_str());
    let title_width = state
        .visible_rows()
        .map(|r| r.title.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_TITLE_WIDTH);

    for view in state.groups() {
        log::info!("");
        log::info!(
            "{} {}",
            view.group.key.if_supports_color(Stdout, |t| t.bold()),
            format!("({})", view.rows.len()).if_supports_color(Stdout, |t| t.dimmed()),
        );
        if view.rows.is_empty() {
            log::info!(
                "  {}",
                "(no matching items)".if_supports_color(Stdout, |t| t.dimmed())
            );
            continue;
        }
        for row in view.rows {
            render_row(row, title_width, target_slug == Some(row.slug.as_str()), descriptions);
        }
    }

    log::info!("");
    log::info!(
        "Showing {} of {} items",
        state.visible_count().if_supports_color(Stdout, |t| t.bold()),
        state.rows().len()
    );
    if let Some(link) = link {
        let anchor = &state.rows()[link.anchor];
        log::info!(
            "Jumped to {} (anchored at {})",
            format!("#{}", link.slug).if_supports_color(Stdout, |t| t.cyan()),
            anchor.title
        );
    }
}

fn render_row(row: &Row, title_width: usize, is_target: bool, descriptions: bool) {
    let marker = if is_target { "→" } else { " " };
    let title = fit_title(&row.title, title_width);
    let platforms = platform_badges(row);
    let url = row.url.as_deref().unwrap_or("");

    if row.claimed {
        log::info!(
            "{} {} {:>8} {} {}",
            marker,
            title.if_supports_color(Stdout, |t| t.strikethrough()),
            format!("${:.2}", row.price),
            platforms,
            "(claimed)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    } else {
        let title = if is_target {
            title.if_supports_color(Stdout, |t| t.bold()).to_string()
        } else {
            title
        };
        log::info!(
            "{} {} {:>8} {} {}",
            marker,
            title,
            format!("${:.2}", row.price),
            platforms,
            url.if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    if !row.content_warning_text.is_empty() {
        log::info!(
            "    {}",
            row.content_warning_text
                .if_supports_color(Stdout, |t| t.red())
        );
    }
    if descriptions
        && let Some(description) = row
            .truncated_description
            .as_ref()
            .or(row.description.as_ref())
    {
        log::info!(
            "    {}",
            description.if_supports_color(Stdout, |t| t.dimmed())
        );
    }
}

/// Pad or cut a title to exactly `width` characters.
fn fit_title(title: &str, width: usize) -> String {
    if title.chars().count() > width {
        let cut: String = title.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    } else {
        format!("{:<width$}", title, width = width)
    }
}

/// Fixed-width `[L M W]` column; unknown platform names are ignored.
fn platform_badges(row: &Row) -> String {
    let declared: Vec<StorePlatform> = row.store_platforms().collect();
    let badges: Vec<String> = StorePlatform::all()
        .iter()
        .map(|p| {
            if declared.contains(p) {
                p.display_name()[..1].to_uppercase()
            } else {
                "-".to_string()
            }
        })
        .collect();
    format!("[{}]", badges.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_title_pads_short_titles() {
        assert_eq!(fit_title("Abc", 6), "Abc   ");
    }

    #[test]
    fn fit_title_cuts_long_titles() {
        assert_eq!(fit_title("Abcdefgh", 5), "Abcd…");
        assert_eq!(fit_title("Abcdefgh", 5).chars().count(), 5);
    }
}
