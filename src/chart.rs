//! カテゴリ別件数のテキストグラフ

use xtm_template_common::CategoryAggregate;

const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

/// 件数の多い順（同数はカテゴリ名順）に棒グラフを描く
pub fn render_chart(aggregate: &CategoryAggregate) -> String {
    let mut out = String::from("📊 カテゴリ別テンプレート数\n\n");

    let total = aggregate.total();
    if total == 0 {
        out.push_str("テンプレートがありません\n");
        return out;
    }

    let mut counts = aggregate.counts();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let max_count = counts.first().map(|(_, c)| *c).unwrap_or(1);
    let label_width = counts
        .iter()
        .map(|(c, _)| c.chars().count())
        .max()
        .unwrap_or(0);

    for (category, count) in &counts {
        // 1件以上なら最低1マス
        let bar_len = ((count * BAR_WIDTH) / max_count).max(1);
        let percent = *count as f64 * 100.0 / total as f64;
        let padding = label_width - category.chars().count();
        out.push_str(&format!(
            "{}{}  {} {} ({:.1}%)\n",
            category,
            " ".repeat(padding),
            BAR_CHAR.to_string().repeat(bar_len),
            count,
            percent
        ));
    }

    out.push_str(&format!("\n合計: {}件\n", total));
    out
}
