//! 端末向けの整形（純粋関数。I/O は呼び出し側）

use crate::usecase::{Comparison, TypeAnalysis};
use common::domain::Pokemon;
use std::fmt::Write as _;

/// 種族値の上限（バーの満タン）
const STAT_MAX: u32 = 255;
const BAR_WIDTH: u32 = 20;
/// 散布点のうちテキスト表示する件数
const TOP_POINTS: usize = 5;
/// 比較表のバー幅（2 体のうちの最大値で満タン）
const COMPARE_BAR_WIDTH: u32 = 10;

pub const NO_DATA_MESSAGE: &str = "No data: the Pokémon listing could not be loaded.";

/// value / max を width 文字のバーにする（max が 0 なら空バー）
fn scaled_bar(value: u32, max: u32, width: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * width + max / 2) / max
    };
    let mut bar = "#".repeat(filled as usize);
    bar.push_str(&".".repeat((width - filled) as usize));
    bar
}

fn stat_bar(value: u32) -> String {
    scaled_bar(value, STAT_MAX, BAR_WIDTH)
}

/// 図鑑カード
pub fn render_card(p: &Pokemon) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} - {}", p.id, p.name);
    let types: Vec<String> = p.types.iter().map(|t| t.to_uppercase()).collect();
    let _ = writeln!(out, "Type: {}", types.join(" / "));
    let _ = writeln!(out, "{}", p.description);
    let _ = writeln!(out, "Height: {:.1} m | Weight: {:.1} kg", p.height_m, p.weight_kg);
    if let Some(url) = &p.image_url {
        let _ = writeln!(out, "Artwork: {}", url);
    }
    let _ = writeln!(out, "Base stats:");
    for (kind, value) in p.stats.iter() {
        let _ = writeln!(out, "  {:<16}{:>4} {}", kind.label(), value, stat_bar(value));
    }
    let _ = writeln!(out, "  {:<16}{:>4}", "Total", p.stats.total());
    out
}

/// 2 体比較の表（差は左 - 右）。バーは 2 体の最大値を満タンとする
pub fn render_comparison(c: &Comparison) -> String {
    let mut out = String::new();
    let left_w = c.left.name.chars().count().max(4);
    let right_w = c.right.name.chars().count().max(4);
    let bars_w = (COMPARE_BAR_WIDTH * 2 + 1) as usize;
    let max = c.stats.max_value();
    let _ = writeln!(
        out,
        "{:<16}{:>lw$}  {:>rw$}  {:<bw$}  {:>5}",
        "Stat",
        c.left.name,
        c.right.name,
        "",
        "Diff",
        lw = left_w,
        rw = right_w,
        bw = bars_w
    );
    for row in &c.stats.rows {
        let bars = format!(
            "{}|{}",
            scaled_bar(row.left, max, COMPARE_BAR_WIDTH),
            scaled_bar(row.right, max, COMPARE_BAR_WIDTH)
        );
        let _ = writeln!(
            out,
            "{:<16}{:>lw$}  {:>rw$}  {:<bw$}  {:>+5}",
            row.label(),
            row.left,
            row.right,
            bars,
            row.diff(),
            lw = left_w,
            rw = right_w,
            bw = bars_w
        );
    }
    let total_diff = i64::from(c.left.stats.total()) - i64::from(c.right.stats.total());
    let _ = writeln!(
        out,
        "{:<16}{:>lw$}  {:>rw$}  {:<bw$}  {:>+5}",
        "Total",
        c.left.stats.total(),
        c.right.stats.total(),
        "",
        total_diff,
        lw = left_w,
        rw = right_w,
        bw = bars_w
    );
    out
}

/// タイプ集計（分布・平均・攻撃/防御の上位）
pub fn render_type_analysis(a: &TypeAnalysis) -> String {
    if a.is_empty() {
        return format!("{}\n", NO_DATA_MESSAGE);
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Primary types (first {}, {} loaded)",
        a.limit, a.rows
    );
    for t in &a.distribution {
        let _ = writeln!(out, "  {:<12}{:>4}", t.type_name, t.count);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Average {} by primary type", a.stat.label().to_lowercase());
    for t in &a.averages {
        let _ = writeln!(out, "  {:<12}{:>7.1}", t.type_name, t.mean);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Top attack + defense");
    let mut points: Vec<_> = a.points.iter().collect();
    points.sort_by(|x, y| (y.attack + y.defense).cmp(&(x.attack + x.defense)));
    for p in points.into_iter().take(TOP_POINTS) {
        let _ = writeln!(
            out,
            "  {:<12}{:<10}{:>4} / {:<4}",
            p.name, p.primary_type, p.attack, p.defense
        );
    }
    out
}
