//! Plain-text rendering of the current view state.

use briefing_core::ViewState;
use chrono::NaiveDate;
use shared::{CategoryFilter, Language, NewsItem};

pub fn render(state: &ViewState, today: NaiveDate) -> String {
    let language = state.language;
    let t = language.translations();
    let mut lines = Vec::new();

    let badge = match language {
        Language::En => "EN",
        Language::Zh => "中",
    };
    lines.push(format!(
        "{} | {} | {} | [{badge}] | r: {}",
        t.app_name,
        t.tagline,
        language.short_date(today),
        t.refresh
    ));
    lines.push(String::new());

    if let Some(error) = &state.error {
        lines.push(format!("! {error}"));
        lines.push(String::new());
    }

    if state.loading {
        lines.push(format!("== {} == {}", t.daily_brief, t.scanning));
    } else if let Some(data) = &state.data {
        let summary = &data.daily_summary;
        lines.push(format!("== {} ==", t.daily_brief));
        lines.push(summary.headline.clone());
        lines.push(summary.overview.clone());
        for (idx, trend) in summary.display_trends() {
            lines.push(format!("  {} {idx:02}: {trend}", t.trend));
        }
    }
    lines.push(String::new());

    let filtered = state.filtered_news();
    let count = if state.loading {
        t.scanning.to_string()
    } else {
        format!("{} {}", filtered.len(), t.reports)
    };
    lines.push(format!("== {} == ({count})", t.latest_intel));
    lines.push(category_bar(state.selected_category, language));

    if !state.loading {
        for item in &filtered {
            lines.push(String::new());
            render_card(&mut lines, item, language);
        }
        if filtered.is_empty() && state.error.is_none() {
            lines.push(String::new());
            lines.push(t.no_reports.to_string());
        }
    }

    lines.join("\n")
}

fn category_bar(selected: CategoryFilter, language: Language) -> String {
    CategoryFilter::ALL
        .iter()
        .map(|filter| {
            let label = filter.label(language);
            if *filter == selected {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_card(lines: &mut Vec<String>, item: &NewsItem, language: Language) {
    let t = language.translations();
    lines.push(format!("[{}] {}", item.category.label(language), item.timestamp));
    lines.push(format!("  {}: {}", t.source, item.source));
    lines.push(format!("  {}", item.title));
    if !item.summary.is_empty() {
        lines.push(format!("  {}", item.summary));
    }
    let key_points = item.display_key_points();
    if !key_points.is_empty() {
        lines.push(format!("  {}:", t.core_insights));
        for point in key_points {
            lines.push(format!("    - {point}"));
        }
    }
    if !item.technical_trend.is_empty() {
        lines.push(format!("  {}: {}", t.trend, item.technical_trend));
    }
    if !item.url.is_empty() {
        lines.push(format!("  {}", item.url));
    }
    lines.push(format!("  {}", item.thumbnail_or_placeholder()));
}
