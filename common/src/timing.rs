//! タイマー定数
//!
//! ポーリング間隔以外はすべて表示側（Render Adapter）が使う

use std::time::Duration;

/// 成功後の次回ポーリングまで
pub const SHORT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 失敗後の次回ポーリングまで
pub const LONG_POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// 通知トーストの表示時間
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// ストレージ消去からリロードまでの猶予
pub const RELOAD_GRACE_DELAY: Duration = Duration::from_millis(100);

/// メニュー項目クリック後にメニューを閉じるまで
pub const MENU_CLOSE_DELAY: Duration = Duration::from_millis(1);

/// リンク書き換えを遅延実行するまで
pub const LINK_REWRITE_DELAY: Duration = Duration::from_millis(2);

/// 追加直後のサムネイルを表示状態にするまで
pub const THUMBNAIL_REVEAL_DELAY: Duration = Duration::from_millis(10);

/// 自動スクロール開始まで
pub const AUTO_SCROLL_DELAY: Duration = Duration::from_millis(250);

/// REBOOT応答後にダイアログを閉じるまで
pub const REBOOT_DISMISS_DELAY: Duration = Duration::from_secs(30);

/// SHUTDOWN応答後にダイアログを閉じるまで
pub const SHUTDOWN_DISMISS_DELAY: Duration = Duration::from_secs(55);
