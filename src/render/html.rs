// HTML page rendering: probability bar, verdict block, highlighted sentences.

use crate::models::{AnalysisResult, SentenceSegment, Verdict};
use crate::services::detection::derive_verdict;

const HUMAN_COLOR: &str = "#a7f3d0";
const HUMAN_TEXT_COLOR: &str = "#065f46";
const AI_COLOR: &str = "#fecaca";
const AI_TEXT_COLOR: &str = "#991b1b";
const HUMAN_BAR_COLOR: &str = "#10b981";
const AI_BAR_COLOR: &str = "#ef4444";

/// Escape text for use in element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_probability_bar(ai_probability: f64) -> String {
    let ai_percent = ai_probability * 100.0;
    let human_percent = (1.0 - ai_probability) * 100.0;

    format!(
        r#"<div class="bar-labels">
  <span style="color: {hb};">人類撰寫</span>
  <span style="color: {ab};">AI 生成</span>
</div>
<div class="bar">
  <div class="bar-human" style="width: {hp}%; background-color: {hb};"><span>{hp:.1}%</span></div>
  <div class="bar-ai" style="width: {ap}%; background-color: {ab};"><span>{ap:.1}%</span></div>
</div>
"#,
        hb = HUMAN_BAR_COLOR,
        ab = AI_BAR_COLOR,
        hp = human_percent,
        ap = ai_percent,
    )
}

pub fn render_verdict(result: &AnalysisResult) -> String {
    let verdict = derive_verdict(result.ai_probability);
    let (bg, border) = match verdict {
        Verdict::HumanLeaning => (HUMAN_COLOR, HUMAN_TEXT_COLOR),
        Verdict::AiLeaning => (AI_COLOR, AI_TEXT_COLOR),
    };
    format!(
        "<div class=\"verdict\" style=\"background-color: {}; border-left: 5px solid {};\"><h3>{}</h3><p>{}</p></div>\n",
        bg,
        border,
        verdict.headline(),
        escape_html(&result.analysis_summary)
    )
}

fn render_span(segment: &SentenceSegment) -> String {
    let (class, bg, fg) = if segment.is_ai {
        ("seg-ai", AI_COLOR, AI_TEXT_COLOR)
    } else {
        ("seg-human", HUMAN_COLOR, HUMAN_TEXT_COLOR)
    };
    format!(
        "<span class=\"seg {}\" style=\"background-color: {}; color: {};\">{}</span>",
        class,
        bg,
        fg,
        escape_html(&segment.text)
    )
}

/// One span per segment, in order.
pub fn render_highlighted_text(breakdown: &[SentenceSegment]) -> String {
    let spans: Vec<String> = breakdown.iter().map(render_span).collect();
    format!(
        "<div class=\"highlight\">{}</div>\n<div class=\"legend\">\n  <span style=\"color: {};\"><span class=\"dot\" style=\"background-color: {};\"></span> - 人類撰寫傾向</span>\n  <span style=\"color: {};\"><span class=\"dot\" style=\"background-color: {};\"></span> - AI 生成傾向</span>\n</div>\n",
        spans.join("\n"),
        HUMAN_TEXT_COLOR,
        HUMAN_COLOR,
        AI_TEXT_COLOR,
        AI_COLOR
    )
}

const STYLE: &str = r#"body { font-family: sans-serif; max-width: 760px; margin: 2em auto; }
.bar-labels { display: flex; justify-content: space-between; font-weight: bold; font-size: 0.9em; margin-bottom: 5px; }
.bar { height: 30px; border-radius: 15px; overflow: hidden; display: flex; }
.bar span { color: white; padding: 0 10px; line-height: 30px; }
.bar-ai { text-align: right; }
.verdict { padding: 15px; border-radius: 10px; }
.highlight { border: 1px solid #e5e7eb; padding: 20px; border-radius: 10px; }
.seg { padding: 0.2em 0.5em; margin-right: 0.4em; border-radius: 0.375rem; line-height: 2.5; display: inline-block; }
.legend { display: flex; gap: 20px; font-size: 0.9em; margin-top: 15px; }
.dot { display: inline-block; width: 10px; height: 10px; border-radius: 50%; }
"#;

/// Standalone page for a single analysis.
pub fn render_page(result: &AnalysisResult, file_name: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"zh-Hant\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>AI/人類文章偵測模擬器</title>\n<style>\n");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str("<h1>AI 偵測模擬器 (本機運算)</h1>\n");
    if let Some(name) = file_name {
        out.push_str(&format!("<p class=\"file\">{}</p>\n", escape_html(name)));
    }

    out.push_str("<h2>分析結果與機率分佈</h2>\n");
    out.push_str(&render_probability_bar(result.ai_probability));

    out.push_str("<h2>模型裁決</h2>\n");
    out.push_str(&render_verdict(result));

    out.push_str("<h2>文本結構分析（逐句高亮）</h2>\n");
    out.push_str(&render_highlighted_text(&result.analysis_breakdown));

    out.push_str("<hr>\n<p class=\"disclaimer\">免責聲明：偵測結果僅用於 UI 測試，不具絕對證據效力。</p>\n");
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::detection::analyze;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"a\" & 'b'</b>"), "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_bar_percentages() {
        let bar = render_probability_bar(0.25);
        assert!(bar.contains("75.0%"));
        assert!(bar.contains("25.0%"));
    }

    #[test]
    fn test_page_escapes_segment_text() {
        let result = analyze("<script>alert(1)</script>。");
        let page = render_page(&result, Some("x.txt"));
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_spans_keep_order() {
        let result = analyze("第一句。第二句！第三句？");
        let html = render_highlighted_text(&result.analysis_breakdown);
        let a = html.find("第一句。").unwrap();
        let b = html.find("第二句！").unwrap();
        let c = html.find("第三句？").unwrap();
        assert!(a < b && b < c);
        assert_eq!(html.matches("class=\"seg ").count(), 3);
    }

    #[test]
    fn test_verdict_headline() {
        let human = analyze("今天天氣很好。");
        assert!(render_verdict(&human).contains("人類撰寫機率較高"));
        let ai = analyze(&format!("{}。", "字".repeat(44)));
        assert!(render_verdict(&ai).contains("AI 生成機率較高"));
    }
}
