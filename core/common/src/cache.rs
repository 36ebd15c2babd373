//! プロセス存続期間のメモ化キャッシュ
//!
//! 追記のみ。無効化・削除・サイズ上限・TTL は持たない。
//! Fetcher / Loader に Arc で注入し、テストでは毎回空のものを渡す。

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;

/// キー -> 値 の追記専用メモ
#[derive(Debug)]
pub struct MemoCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// ヒットしたら値の複製を返す
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    /// 既存キーは上書きしない（最初に記録した結果を保つ）
    pub fn insert(&self, key: K, value: V) {
        if let Ok(mut map) = self.entries.lock() {
            map.entry(key).or_insert(value);
        }
    }

    /// キャッシュにあればそれを、なければ compute の結果を記録して返す
    ///
    /// compute 中はロックを持たない（compute が別キーでキャッシュを使えるように）。
    pub fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(v) = self.get(&key) {
            return v;
        }
        let value = compute();
        self.insert(key, value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_get_or_insert_with_computes_once() {
        let cache: MemoCache<String, u32> = MemoCache::new();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            7
        };
        assert_eq!(cache.get_or_insert_with("a".to_string(), compute), 7);
        assert_eq!(cache.get_or_insert_with("a".to_string(), || 99), 7);
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_does_not_overwrite() {
        let cache: MemoCache<u32, &str> = MemoCache::new();
        cache.insert(1, "first");
        cache.insert(1, "second");
        assert_eq!(cache.get(&1), Some("first"));
    }

    #[test]
    fn test_empty() {
        let cache: MemoCache<u32, u32> = MemoCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), None);
    }

    #[test]
    fn test_reentrant_compute() {
        let cache: MemoCache<u32, u32> = MemoCache::new();
        let v = cache.get_or_insert_with(1, || cache.get_or_insert_with(2, || 2) + 1);
        assert_eq!(v, 3);
        assert_eq!(cache.len(), 2);
    }
}
