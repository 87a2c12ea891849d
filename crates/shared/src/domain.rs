use serde::{Deserialize, Deserializer, Serialize};

use crate::locale::Language;

const MAX_DISPLAY_KEY_POINTS: usize = 3;
const MAX_DISPLAY_TRENDS: usize = 3;

/// Category of a news card. The wire strings are the canonical English
/// vocabulary and never change with the display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Tech Giant")]
    TechGiant,
    #[serde(rename = "Humanoid Robot")]
    HumanoidRobot,
    #[serde(rename = "Embodied AI")]
    EmbodiedAi,
    #[serde(rename = "Research")]
    Research,
}

impl Category {
    pub fn canonical(self) -> &'static str {
        match self {
            Category::TechGiant => "Tech Giant",
            Category::HumanoidRobot => "Humanoid Robot",
            Category::EmbodiedAi => "Embodied AI",
            Category::Research => "Research",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::En => self.canonical(),
            Language::Zh => match self {
                Category::TechGiant => "科技巨头",
                Category::HumanoidRobot => "人形机器人",
                Category::EmbodiedAi => "具身智能",
                Category::Research => "前沿研究",
            },
        }
    }

    fn placeholder_seed(self) -> &'static str {
        match self {
            Category::HumanoidRobot => "robot",
            Category::TechGiant => "tech",
            Category::EmbodiedAi | Category::Research => "ai",
        }
    }
}

/// Filter selection for the news feed: every [`Category`] plus the `All`
/// wildcard. Never stored on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    TechGiant,
    HumanoidRobot,
    EmbodiedAi,
    Research,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::TechGiant,
        CategoryFilter::HumanoidRobot,
        CategoryFilter::EmbodiedAi,
        CategoryFilter::Research,
    ];

    /// The concrete category this filter selects, `None` for the wildcard.
    pub fn category(self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::TechGiant => Some(Category::TechGiant),
            CategoryFilter::HumanoidRobot => Some(Category::HumanoidRobot),
            CategoryFilter::EmbodiedAi => Some(Category::EmbodiedAi),
            CategoryFilter::Research => Some(Category::Research),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        self.category().map_or(true, |selected| selected == category)
    }

    pub fn label(self, language: Language) -> &'static str {
        match (self.category(), language) {
            (Some(category), _) => category.label(language),
            (None, Language::En) => "All",
            (None, Language::Zh) => "全部",
        }
    }
}

/// Reads a field that the model may send as `null`, treating it like an
/// omitted key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

/// Ids arrive as strings, but models sometimes emit bare numbers.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<WireId>::deserialize(deserializer)? {
        Some(WireId::Text(id)) => id,
        Some(WireId::Unsigned(id)) => id.to_string(),
        Some(WireId::Signed(id)) => id.to_string(),
        Some(WireId::Float(id)) => id.to_string(),
        None => String::new(),
    })
}

/// A single news card. Only `category` is strictly decoded; the remaining
/// fields read `null` or omission as empty because the upstream model is
/// best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_points: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technical_trend: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Free-text label such as "14:30 Today", not a machine timestamp.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
}

impl NewsItem {
    pub fn display_key_points(&self) -> &[String] {
        let end = self.key_points.len().min(MAX_DISPLAY_KEY_POINTS);
        &self.key_points[..end]
    }

    pub fn thumbnail_or_placeholder(&self) -> String {
        match self.thumbnail_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => format!(
                "https://picsum.photos/seed/{}{}/400/225",
                self.category.placeholder_seed(),
                self.id
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_trends: Vec<String>,
}

impl DailySummary {
    /// Up to three trends paired with their 1-based display index.
    pub fn display_trends(&self) -> impl Iterator<Item = (usize, &str)> {
        self.top_trends
            .iter()
            .take(MAX_DISPLAY_TRENDS)
            .enumerate()
            .map(|(idx, trend)| (idx + 1, trend.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub daily_summary: DailySummary,
    pub news_items: Vec<NewsItem>,
}

impl NewsResponse {
    /// Locally built briefing substituted when the provider path fails.
    /// Always carries zero items.
    pub fn fallback(language: Language) -> Self {
        let t = language.translations();
        Self {
            daily_summary: DailySummary {
                headline: t.fallback_headline.to_string(),
                overview: t.fallback_overview.to_string(),
                top_trends: vec![t.fallback_trend.to_string()],
            },
            news_items: Vec::new(),
        }
    }

    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&NewsItem> {
        self.news_items
            .iter()
            .filter(|item| filter.matches(item.category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: Category) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: format!("title {id}"),
            source: "source".into(),
            category,
            summary: String::new(),
            key_points: Vec::new(),
            technical_trend: String::new(),
            url: String::new(),
            thumbnail_url: None,
            timestamp: "now".into(),
        }
    }

    #[test]
    fn category_wire_strings_are_canonical() {
        for category in [
            Category::TechGiant,
            Category::HumanoidRobot,
            Category::EmbodiedAi,
            Category::Research,
        ] {
            let encoded = serde_json::to_string(&category).expect("encode");
            assert_eq!(encoded, format!("\"{}\"", category.canonical()));
        }
        let decoded: Category = serde_json::from_str("\"Embodied AI\"").expect("decode");
        assert_eq!(decoded, Category::EmbodiedAi);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(serde_json::from_str::<Category>("\"Quantum\"").is_err());
        assert!(serde_json::from_str::<Category>("\"research\"").is_err());
    }

    #[test]
    fn filter_preserves_order_for_concrete_category() {
        let response = NewsResponse {
            daily_summary: DailySummary::default(),
            news_items: vec![
                item("1", Category::Research),
                item("2", Category::TechGiant),
                item("3", Category::Research),
                item("4", Category::HumanoidRobot),
            ],
        };

        let ids: Vec<_> = response
            .filtered(CategoryFilter::Research)
            .into_iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(response.filtered(CategoryFilter::All).len(), 4);
        assert!(response.filtered(CategoryFilter::EmbodiedAi).is_empty());
    }

    #[test]
    fn key_points_and_trends_are_truncated_to_three() {
        let mut news = item("7", Category::Research);
        news.key_points = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        assert_eq!(news.display_key_points(), ["a", "b", "c"]);

        let summary = DailySummary {
            headline: "h".into(),
            overview: "o".into(),
            top_trends: vec!["t1".into(), "t2".into(), "t3".into(), "t4".into()],
        };
        let trends: Vec<_> = summary.display_trends().collect();
        assert_eq!(trends, vec![(1, "t1"), (2, "t2"), (3, "t3")]);
    }

    #[test]
    fn placeholder_thumbnail_uses_category_seed() {
        let mut news = item("42", Category::HumanoidRobot);
        assert_eq!(
            news.thumbnail_or_placeholder(),
            "https://picsum.photos/seed/robot42/400/225"
        );
        news.thumbnail_url = Some("  ".into());
        assert!(news.thumbnail_or_placeholder().contains("robot42"));
        news.thumbnail_url = Some("https://img.example/x.png".into());
        assert_eq!(news.thumbnail_or_placeholder(), "https://img.example/x.png");
    }

    #[test]
    fn fallback_is_localized_and_empty() {
        let en = NewsResponse::fallback(Language::En);
        assert_eq!(en.daily_summary.headline, "Failed to Fetch Live News");
        assert!(en.news_items.is_empty());

        let zh = NewsResponse::fallback(Language::Zh);
        assert_eq!(zh.daily_summary.headline, "获取实时新闻失败");
        assert_eq!(zh.daily_summary.top_trends, vec!["连接错误".to_string()]);
    }

    #[test]
    fn filter_labels_follow_language() {
        assert_eq!(CategoryFilter::All.label(Language::En), "All");
        assert_eq!(CategoryFilter::All.label(Language::Zh), "全部");
        assert_eq!(CategoryFilter::Research.label(Language::Zh), "前沿研究");
    }
}
