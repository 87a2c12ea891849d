//! Instruction text sent to the provider.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use shared::Language;

const MISSION: &str = r#"Act as a specialized "AI & Robotics Intelligence Analyst".

YOUR MISSION:
Search for and summarize the **LATEST BREAKING NEWS** from the **LAST 24 HOURS ONLY**.

SEARCH TARGETS:
1. **YouTube & Interviews (Tech Giants)**: Latest interviews/talks released **today/yesterday** from: Jensen Huang, Sam Altman, Elon Musk, Demis Hassabis, Andrej Karpathy.
2. **Humanoid Robotics**: New demos or announcements **last 24h** from: Tesla Optimus, Figure AI, Unitree, 1X, Agility Robotics, Boston Dynamics.
3. **Research & Papers (Hugging Face / Arxiv)**:
   - Search **Hugging Face Daily Papers** for the most popular papers trending **TODAY**.
   - Focus on: **Agents, Humanoid Robotics, RL (Reinforcement Learning), VLA (Vision-Language-Action), LLM, and VLN**.
   - Summarize the *core innovation* and technical novelty.
4. **Open Source (GitHub)**:
   - Search **GitHub Trending** for repositories related to **AI Agents** or **Robotics** that are trending **today**.

STRICT CONSTRAINTS:
1. **TIME**: CONTENT MUST BE FROM THE LAST 24 HOURS. If a paper was published a month ago but is trending *today*, you may include it, but note that it is "Trending Today".
2. **ACCURACY**: Extract the **EXACT** publish time if possible.
3. **FORMAT**: Return ONLY valid JSON."#;

const JSON_SHAPE: &str = r#"JSON STRUCTURE:
{
  "dailySummary": {
    "headline": "Headline covering the biggest event of the last 24h",
    "overview": "Brief high-level summary of today's key movements in AI/Robotics.",
    "topTrends": ["Trend 1", "Trend 2", "Trend 3"]
  },
  "newsItems": [
    {
      "id": "unique_id_1",
      "title": "Title of the video/article/paper",
      "source": "e.g., 'Hugging Face Daily Papers', 'GitHub Trending', 'YouTube - NVIDIA'",
      "category": "One of: 'Tech Giant', 'Humanoid Robot', 'Embodied AI', 'Research'",
      "summary": "Core summary. For Papers/Code: Explain the problem solved and the specific method used (e.g., 'Used PPO with...').",
      "keyPoints": ["Key Insight 1", "Key Insight 2", "Key Insight 3"],
      "technicalTrend": "Specific tech detail (e.g., 'VLA Model Architecture', 'Sim-to-Real')",
      "url": "The SPECIFIC URL found in search",
      "thumbnailUrl": "Optional image URL for the item, omit if unknown",
      "timestamp": "Exact time (e.g., '14:30 Today', '3 hours ago')"
    }
  ]
}"#;

const EXECUTION: &str = r#"EXECUTION:
- Use the 'googleSearch' tool to find real-time data.
- Verify the dates.
- If you find fewer than 6 items from the *last 24 hours*, that is okay, but prioritize quality and recency over quantity. Try to find at least 4-5 high-quality items."#;

fn language_directive(language: Language) -> &'static str {
    match language {
        Language::Zh => "Output JSON content in Simplified Chinese (titles, summaries, keyPoints, trends). However, the 'category' field values MUST remain in English (e.g., 'Tech Giant').",
        Language::En => "Output JSON content in English.",
    }
}

/// Builds the full instruction for `language` as of `now`.
pub fn build_prompt(language: Language, now: DateTime<Local>) -> String {
    let today = language.long_date(now.date_naive());
    let instant = now
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    format!(
        "Current Date/Time: {today} ({instant}).\n\n{MISSION}\n\n{JSON_SHAPE}\n\n{}\n\n{EXECUTION}\n",
        language_directive(language)
    )
}
