//! クライアント台帳
//!
//! 「何を描画済みか」を持つ唯一の状態。セッション開始時に一度だけ作られる。

use std::collections::HashSet;

use crate::connectivity::ConnectivityTracker;

#[derive(Debug, Clone, Default)]
pub struct ClientLedger {
    image_counter: u64,
    image_list: Vec<String>,
    known: HashSet<String>,
    connectivity: ConnectivityTracker,
}

impl ClientLedger {
    /// カウンタ0・空リスト・両チャネル切断で開始
    pub fn new() -> Self {
        Self::default()
    }

    /// 最後に適用したサーバーカウンタ
    pub fn image_counter(&self) -> u64 {
        self.image_counter
    }

    /// 到着順の画像名
    pub fn image_list(&self) -> &[String] {
        &self.image_list
    }

    pub fn connectivity(&self) -> &ConnectivityTracker {
        &self.connectivity
    }

    pub(crate) fn connectivity_mut(&mut self) -> &mut ConnectivityTracker {
        &mut self.connectivity
    }

    /// 画像名を末尾に追加（既知なら false）
    pub(crate) fn append(&mut self, name: &str) -> bool {
        if !self.known.insert(name.to_string()) {
            return false;
        }
        self.image_list.push(name.to_string());
        true
    }

    /// カウンタを進める。減少は無視する
    pub(crate) fn advance_counter(&mut self, counter: u64) {
        self.image_counter = self.image_counter.max(counter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger() {
        let ledger = ClientLedger::new();
        assert_eq!(ledger.image_counter(), 0);
        assert!(ledger.image_list().is_empty());
        assert!(!ledger.connectivity().network().is_connected());
    }

    #[test]
    fn test_append_keeps_order_and_rejects_duplicates() {
        let mut ledger = ClientLedger::new();
        assert!(ledger.append("a.jpg"));
        assert!(ledger.append("b.jpg"));
        assert!(!ledger.append("a.jpg"));

        assert_eq!(ledger.image_list(), &["a.jpg".to_string(), "b.jpg".to_string()]);
    }

    #[test]
    fn test_counter_never_decreases() {
        let mut ledger = ClientLedger::new();
        ledger.advance_counter(5);
        ledger.advance_counter(3);
        assert_eq!(ledger.image_counter(), 5);
    }
}
