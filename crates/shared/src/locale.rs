use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Zh,
}

#[derive(Debug, Error)]
#[error("unsupported language code '{0}' (expected 'en' or 'zh')")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }

    /// Long date as shown to the model, e.g. "Wednesday, October 14, 2026".
    pub fn long_date(self, date: NaiveDate) -> String {
        match self {
            Language::En => date.format("%A, %B %-d, %Y").to_string(),
            Language::Zh => format!(
                "{}年{}月{}日{}",
                date.year(),
                date.month(),
                date.day(),
                zh_weekday(date.weekday())
            ),
        }
    }

    /// Compact date for the header badge, e.g. "Wed, Oct 14".
    pub fn short_date(self, date: NaiveDate) -> String {
        match self {
            Language::En => date.format("%a, %b %-d").to_string(),
            Language::Zh => {
                let weekday = zh_weekday(date.weekday()).replace("星期", "周");
                format!("{}月{}日{}", date.month(), date.day(), weekday)
            }
        }
    }
}

fn zh_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Language::En),
            "zh" | "zh-cn" | "chinese" => Ok(Language::Zh),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// UI strings for one display language.
#[derive(Debug)]
pub struct Translations {
    pub app_name: &'static str,
    pub tagline: &'static str,
    pub refresh: &'static str,
    pub daily_brief: &'static str,
    pub trend: &'static str,
    pub latest_intel: &'static str,
    pub reports: &'static str,
    pub scanning: &'static str,
    pub no_reports: &'static str,
    pub core_insights: &'static str,
    pub source: &'static str,
    pub loading_error: &'static str,
    pub missing_key: &'static str,
    pub fallback_headline: &'static str,
    pub fallback_overview: &'static str,
    pub fallback_trend: &'static str,
}

static EN: Translations = Translations {
    app_name: "RoboPulse",
    tagline: "AI & ROBOTICS INTELLIGENCE",
    refresh: "Refresh",
    daily_brief: "Daily Briefing",
    trend: "Trend",
    latest_intel: "Latest Intelligence",
    reports: "Reports",
    scanning: "Scanning...",
    no_reports: "No reports found for this category today.",
    core_insights: "Core Insights",
    source: "Source",
    loading_error: "Failed to load news.",
    missing_key: "API Key is missing. Please set the API_KEY environment variable",
    fallback_headline: "Failed to Fetch Live News",
    fallback_overview: "Please check your network connection or API Key settings.",
    fallback_trend: "Connection Error",
};

static ZH: Translations = Translations {
    app_name: "RoboPulse",
    tagline: "AI 与 机器人情报",
    refresh: "刷新",
    daily_brief: "每日简报",
    trend: "趋势",
    latest_intel: "最新情报",
    reports: "篇",
    scanning: "扫描中...",
    no_reports: "今日该分类暂无报告。",
    core_insights: "核心观点",
    source: "来源",
    loading_error: "加载新闻失败。",
    missing_key: "缺少 API Key。请设置 API_KEY 环境变量",
    fallback_headline: "获取实时新闻失败",
    fallback_overview: "请检查您的网络连接或 API Key 设置。",
    fallback_trend: "连接错误",
};
