//! テスト用の PokeAPI レスポンス生成

use serde_json::json;

pub const BASE: &str = "http://stub/api/v2";
pub const SPECIES_BASE: &str = "http://stub/api/v2/pokemon-species";

/// stats は id から決まる値（hp = id, attack = id + 1, ...）で埋める
pub fn pokemon_json(id: u32, name: &str, types: &[&str], height: u32, weight: u32) -> String {
    let types: Vec<_> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({"slot": i + 1, "type": {"name": t, "url": "u"}}))
        .collect();
    let stat_names = ["hp", "attack", "defense", "special-attack", "special-defense", "speed"];
    let stats: Vec<_> = stat_names
        .iter()
        .enumerate()
        .map(|(i, s)| json!({"base_stat": id + i as u32, "effort": 0, "stat": {"name": s, "url": "u"}}))
        .collect();
    json!({
        "id": id,
        "name": name,
        "height": height,
        "weight": weight,
        "species": {"name": name, "url": format!("{}/{}/", SPECIES_BASE, id)},
        "sprites": {"other": {"official-artwork": {"front_default": format!("https://img/{}.png", id)}}},
        "types": types,
        "stats": stats
    })
    .to_string()
}

pub fn species_json(entries: &[(&str, &str)]) -> String {
    let entries: Vec<_> = entries
        .iter()
        .map(|(text, lang)| json!({"flavor_text": text, "language": {"name": lang, "url": "u"}}))
        .collect();
    json!({ "flavor_text_entries": entries }).to_string()
}

pub fn listing_json(names: &[&str]) -> String {
    let results: Vec<_> = names
        .iter()
        .map(|n| json!({"name": n, "url": format!("{}/pokemon/{}/", BASE, n)}))
        .collect();
    json!({ "count": names.len(), "next": null, "previous": null, "results": results }).to_string()
}
